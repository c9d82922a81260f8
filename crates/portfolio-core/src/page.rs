//! Builds the portfolio document from [`SiteContent`].
//!
//! The element ids and classes produced here are the contract the
//! controllers look up. Layout is assigned explicitly: sections stack from
//! the top of the document and their cards are laid out inside them.

use crate::config::{SiteContent, SkillContent};
use crate::contact::{CONTACT_FORM_ID, DOWNLOAD_RESUME_ID, FORM_CONTROL_CLASS};
use crate::dom::{Dom, MemoryDom, NodeId};
use crate::navigation::{BACK_TO_TOP_ID, NAV_LINK_CLASS, NAV_MENU_ID, NAV_TOGGLE_ID};
use crate::particles::PARTICLES_ID;
use crate::profile_photo::{PHOTO_CLASS, PHOTO_CONTAINER_CLASS};
use crate::theme::THEME_TOGGLE_ID;
use crate::typewriter::TYPEWRITER_ID;
use crate::visibility::{PERCENTAGE_ATTRIBUTE, SKILL_ITEM_CLASS, SKILL_PROGRESS_CLASS};

pub const HEADER_HEIGHT: f64 = 80.0;
/// Space above the first card of a section (title and padding)
pub const SECTION_PADDING: f64 = 120.0;
pub const CARD_HEIGHT: f64 = 200.0;
pub const CARD_GAP: f64 = 20.0;
pub const SKILL_ROW_HEIGHT: f64 = 60.0;
pub const FOOTER_HEIGHT: f64 = 100.0;

/// Populate `<body>` with the whole page
pub fn build_page(dom: &mut MemoryDom, content: &SiteContent) {
    let body = dom.body();

    build_header(dom, body, content);

    let main = dom.append_new(body, "main");
    let mut top = 0.0;
    for section in &content.sections {
        let node = dom.append_new(main, "section");
        dom.set_attribute(node, "id", &section.id);
        dom.set_layout(node, top, section.height);

        match section.id.as_str() {
            "home" => build_hero(dom, node, top, content),
            _ => {
                dom.add_class(node, "section");
                let title = dom.append_new(node, "h2");
                dom.add_class(title, "section-title");
                dom.set_text_content(title, &section.title);
            }
        }

        for (i, card) in section.cards.iter().enumerate() {
            let el = dom.append_new(node, "div");
            dom.add_class(el, &card.class);
            dom.set_layout(el, top + SECTION_PADDING + i as f64 * (CARD_HEIGHT + CARD_GAP), CARD_HEIGHT);
            let h = dom.append_new(el, "h3");
            dom.set_text_content(h, &card.title);
            let p = dom.append_new(el, "p");
            dom.set_text_content(p, &card.body);
        }

        match section.id.as_str() {
            "skills" => build_skills(dom, node, top, &content.skills),
            "contact" => build_contact(dom, node, top, content),
            _ => {}
        }

        top += section.height;
    }

    let footer = dom.append_new(body, "footer");
    dom.add_class(footer, "footer");
    dom.set_layout(footer, top, FOOTER_HEIGHT);
    let copyright = dom.append_new(footer, "p");
    dom.set_text_content(copyright, &format!("© {}", content.owner));

    let back = dom.append_new(body, "button");
    dom.set_attribute(back, "id", BACK_TO_TOP_ID);
    dom.add_class(back, "back-to-top");
    icon(dom, back, "fas fa-arrow-up");

    tracing::debug!(
        sections = content.sections.len(),
        height = dom.document_height(),
        "Page built"
    );
}

fn icon(dom: &mut MemoryDom, parent: NodeId, class: &str) -> NodeId {
    let i = dom.append_new(parent, "i");
    dom.set_attribute(i, "class", class);
    i
}

fn build_header(dom: &mut MemoryDom, body: NodeId, content: &SiteContent) {
    let header = dom.append_new(body, "header");
    dom.add_class(header, "header");
    dom.set_layout(header, 0.0, HEADER_HEIGHT);

    let nav = dom.append_new(header, "nav");
    dom.add_class(nav, "nav");

    let logo = dom.append_new(nav, "a");
    dom.add_class(logo, "nav-logo");
    dom.set_attribute(logo, "href", "#home");
    dom.set_text_content(logo, &content.initials());

    let menu = dom.append_new(nav, "ul");
    dom.set_attribute(menu, "id", NAV_MENU_ID);
    dom.add_class(menu, "nav-menu");
    for section in &content.sections {
        let item = dom.append_new(menu, "li");
        let link = dom.append_new(item, "a");
        dom.add_class(link, NAV_LINK_CLASS);
        dom.set_attribute(link, "href", &format!("#{}", section.id));
        dom.set_text_content(link, &section.title);
    }

    let actions = dom.append_new(nav, "div");
    dom.add_class(actions, "nav-actions");

    let theme = dom.append_new(actions, "button");
    dom.set_attribute(theme, "id", THEME_TOGGLE_ID);
    dom.add_class(theme, "theme-toggle");
    icon(dom, theme, "fas fa-moon");

    let toggle = dom.append_new(actions, "button");
    dom.set_attribute(toggle, "id", NAV_TOGGLE_ID);
    dom.add_class(toggle, "nav-toggle");
    for _ in 0..3 {
        dom.append_new(toggle, "span");
    }
}

fn build_hero(dom: &mut MemoryDom, section: NodeId, top: f64, content: &SiteContent) {
    dom.add_class(section, "hero");

    let particles = dom.append_new(section, "div");
    dom.set_attribute(particles, "id", PARTICLES_ID);
    dom.add_class(particles, "particles");

    let inner = dom.append_new(section, "div");
    dom.add_class(inner, "hero-content");

    let container = dom.append_new(inner, "div");
    dom.add_class(container, PHOTO_CONTAINER_CLASS);
    dom.set_layout(container, top + SECTION_PADDING, 300.0);
    let img = dom.append_new(container, "img");
    dom.add_class(img, PHOTO_CLASS);
    dom.set_attribute(img, "alt", &content.owner);
    if let Some(src) = &content.photo {
        dom.set_attribute(img, "src", src);
    }

    let name = dom.append_new(inner, "h1");
    dom.add_class(name, "hero-title");
    dom.set_text_content(name, &content.owner);

    let subtitle = dom.append_new(inner, "p");
    dom.add_class(subtitle, "hero-subtitle");
    let lead = dom.append_new(subtitle, "span");
    dom.set_text_content(lead, "I'm a ");
    let typed = dom.append_new(subtitle, "span");
    dom.set_attribute(typed, "id", TYPEWRITER_ID);
    dom.add_class(typed, "typewriter");

    let tagline = dom.append_new(inner, "p");
    dom.add_class(tagline, "hero-tagline");
    dom.set_text_content(tagline, &content.tagline);

    let actions = dom.append_new(inner, "div");
    dom.add_class(actions, "hero-actions");
    for (href, label, variant) in [
        ("#projects", "View My Work", "btn--primary"),
        ("#contact", "Get In Touch", "btn--outline"),
    ] {
        let a = dom.append_new(actions, "a");
        dom.set_attribute(a, "class", &format!("btn {}", variant));
        dom.set_attribute(a, "href", href);
        dom.set_text_content(a, label);
    }
    let download = dom.append_new(actions, "button");
    dom.set_attribute(download, "id", DOWNLOAD_RESUME_ID);
    dom.set_attribute(download, "class", "btn btn--outline");
    dom.set_text_content(download, "Download Resume");
}

fn build_skills(dom: &mut MemoryDom, section: NodeId, top: f64, skills: &[SkillContent]) {
    let grid = dom.append_new(section, "div");
    dom.add_class(grid, "skills-grid");

    for (i, skill) in skills.iter().enumerate() {
        let item = dom.append_new(grid, "div");
        dom.add_class(item, SKILL_ITEM_CLASS);
        dom.set_layout(item, top + SECTION_PADDING + i as f64 * SKILL_ROW_HEIGHT, SKILL_ROW_HEIGHT - 20.0);

        let heading = dom.append_new(item, "div");
        dom.add_class(heading, "skill-header");
        let name = dom.append_new(heading, "span");
        dom.add_class(name, "skill-name");
        dom.set_text_content(name, &skill.name);
        let pct = dom.append_new(heading, "span");
        dom.add_class(pct, "skill-percent");
        dom.set_text_content(pct, &format!("{}%", skill.percentage));

        let bar = dom.append_new(item, "div");
        dom.add_class(bar, "skill-bar");
        let progress = dom.append_new(bar, "div");
        dom.add_class(progress, SKILL_PROGRESS_CLASS);
        dom.set_attribute(progress, PERCENTAGE_ATTRIBUTE, &skill.percentage.to_string());
    }
}

fn build_contact(dom: &mut MemoryDom, section: NodeId, top: f64, content: &SiteContent) {
    let form = dom.append_new(section, "form");
    dom.set_attribute(form, "id", CONTACT_FORM_ID);
    dom.add_class(form, "contact-form");
    dom.set_layout(form, top + SECTION_PADDING, 600.0);

    for field in &content.fields {
        let group = dom.append_new(form, "div");
        dom.add_class(group, "form-group");

        let label = dom.append_new(group, "label");
        dom.add_class(label, "form-label");
        dom.set_attribute(label, "for", &field.name);
        dom.set_text_content(label, &field.label);

        let tag = if field.kind.input_type().is_some() { "input" } else { "textarea" };
        let input = dom.append_new(group, tag);
        dom.add_class(input, FORM_CONTROL_CLASS);
        dom.set_attribute(input, "id", &field.name);
        dom.set_attribute(input, "name", &field.name);
        dom.set_attribute(input, "value", "");
        if let Some(kind) = field.kind.input_type() {
            dom.set_attribute(input, "type", kind);
        }
        if field.required {
            dom.set_attribute(input, "required", "");
        }
    }

    let submit = dom.append_new(form, "button");
    dom.set_attribute(submit, "type", "submit");
    dom.set_attribute(submit, "class", "btn btn--primary");
    dom.set_text_content(submit, "Send Message");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built() -> (MemoryDom, SiteContent) {
        let content = SiteContent::default();
        let mut dom = MemoryDom::default();
        build_page(&mut dom, &content);
        (dom, content)
    }

    #[test]
    fn every_section_has_a_nav_link() {
        let (dom, content) = built();
        let links = dom.elements_by_class(NAV_LINK_CLASS);
        assert_eq!(links.len(), content.sections.len());
        for section in &content.sections {
            assert!(dom.element_by_id(&section.id).is_some());
        }
    }

    #[test]
    fn sections_stack_without_gaps() {
        let (dom, content) = built();
        let mut expected = 0.0;
        for section in &content.sections {
            let node = dom.element_by_id(&section.id).unwrap();
            assert_eq!(dom.offset_top(node), expected);
            expected += section.height;
        }
        assert_eq!(dom.document_height(), expected + FOOTER_HEIGHT);
    }

    #[test]
    fn controller_contract_elements_exist() {
        let (dom, _) = built();
        for id in [
            THEME_TOGGLE_ID,
            NAV_TOGGLE_ID,
            NAV_MENU_ID,
            TYPEWRITER_ID,
            PARTICLES_ID,
            CONTACT_FORM_ID,
            BACK_TO_TOP_ID,
            DOWNLOAD_RESUME_ID,
        ] {
            assert!(dom.element_by_id(id).is_some(), "missing #{}", id);
        }
        assert_eq!(dom.elements_by_class(PHOTO_CLASS).len(), 1);
        assert_eq!(dom.children(dom.element_by_id(NAV_TOGGLE_ID).unwrap()).len(), 3);
    }

    #[test]
    fn skill_bars_carry_percentages() {
        let (dom, content) = built();
        let bars = dom.elements_by_class(SKILL_PROGRESS_CLASS);
        assert_eq!(bars.len(), content.skills.len());
        assert_eq!(
            dom.attribute(bars[0], PERCENTAGE_ATTRIBUTE),
            Some(content.skills[0].percentage.to_string())
        );
    }

    #[test]
    fn form_fields_follow_content() {
        let (dom, content) = built();
        let controls = dom.elements_by_class(FORM_CONTROL_CLASS);
        assert_eq!(controls.len(), content.fields.len());
        let message = dom.element_by_id("message").unwrap();
        assert_eq!(dom.tag_name(message).as_deref(), Some("textarea"));
        assert!(dom.attribute(message, "required").is_some());
        let email = dom.element_by_id("email").unwrap();
        assert_eq!(dom.attribute(email, "type").as_deref(), Some("email"));
    }
}
