//! Hero profile photo: load/error handling and the initials placeholder.

use crate::dom::{Dom, NodeId};

pub const PHOTO_CLASS: &str = "profile-photo";
pub const PHOTO_CONTAINER_CLASS: &str = "profile-photo-container";
pub const PLACEHOLDER_CLASS: &str = "profile-placeholder";

const PLACEHOLDER_STYLES: [(&str, &str); 9] = [
    ("width", "100%"),
    ("height", "100%"),
    ("display", "flex"),
    ("flex-direction", "column"),
    ("align-items", "center"),
    ("justify-content", "center"),
    ("background", "linear-gradient(135deg, var(--accent-primary), var(--accent-hover))"),
    ("color", "white"),
    ("font-weight", "bold"),
];

#[derive(Debug, Clone)]
pub struct ProfilePhoto {
    image: Option<NodeId>,
    container: Option<NodeId>,
    initials: String,
}

impl ProfilePhoto {
    pub fn new(dom: &impl Dom, initials: impl Into<String>) -> Self {
        let image = dom.elements_by_class(PHOTO_CLASS).into_iter().next();
        let container = dom.elements_by_class(PHOTO_CONTAINER_CLASS).into_iter().next();
        if image.is_none() || container.is_none() {
            tracing::info!("Profile photo elements not found");
        }
        Self {
            image,
            container,
            initials: initials.into(),
        }
    }

    /// The container, if both it and the image were found
    pub fn container(&self) -> Option<NodeId> {
        self.image.and(self.container)
    }

    pub fn image(&self) -> Option<NodeId> {
        self.image
    }

    pub fn handle_loaded(&self, dom: &mut impl Dom) {
        if let Some(container) = self.container() {
            dom.add_class(container, "loaded");
            tracing::info!("Profile photo loaded successfully");
        }
    }

    /// Swap the image for a placeholder showing the owner's initials
    pub fn handle_failed(&self, dom: &mut impl Dom) -> Option<NodeId> {
        let container = self.container()?;
        let src = self
            .image
            .and_then(|img| dom.attribute(img, "src"))
            .unwrap_or_default();
        tracing::error!(%src, "Profile photo failed to load");

        if dom
            .children(container)
            .iter()
            .any(|c| dom.has_class(*c, PLACEHOLDER_CLASS))
        {
            return None;
        }

        let placeholder = dom.create_element("div");
        dom.add_class(placeholder, PLACEHOLDER_CLASS);
        for (property, value) in PLACEHOLDER_STYLES {
            dom.set_style(placeholder, property, value);
        }
        dom.set_style(placeholder, "font-size", "2rem");

        let icon_box = dom.create_element("div");
        dom.add_class(icon_box, "placeholder-icon");
        dom.set_style(icon_box, "font-size", "3rem");
        dom.set_style(icon_box, "margin-bottom", "0.5rem");
        dom.set_style(icon_box, "opacity", "0.8");
        let icon = dom.create_element("i");
        dom.set_attribute(icon, "class", "fas fa-user");
        dom.append_child(icon_box, icon);
        dom.append_child(placeholder, icon_box);

        let text = dom.create_element("div");
        dom.add_class(text, "placeholder-text");
        dom.set_text_content(text, &self.initials);
        dom.append_child(placeholder, text);

        for child in dom.children(container) {
            if dom.has_class(child, PHOTO_CLASS) {
                dom.remove(child);
            }
        }
        dom.append_child(container, placeholder);

        tracing::info!("Profile placeholder created");
        Some(placeholder)
    }
}
