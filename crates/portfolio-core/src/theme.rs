//! Light/dark theme switching.
//!
//! The theme is written to `data-theme` on both `<html>` and `<body>` and
//! persisted through a [`PreferenceStore`]. Header translucency depends on
//! the theme, so it is recomputed here too.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::PortfolioConfig;
use crate::dom::{Dom, NodeId};
use crate::error::PortfolioError;
use crate::preferences::PreferenceStore;

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_TOGGLE_ID: &str = "themeToggle";

const SUN_ICON: &str = "fas fa-sun";
const MOON_ICON: &str = "fas fa-moon";
const SUN_COLOR: &str = "#FFD700";
const BODY_TRANSITION: &str = "all 0.3s ease";

/// Visual variant of the whole page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Header background for the given scroll state
    pub fn header_background(&self, scrolled: bool) -> &'static str {
        match (self, scrolled) {
            (Theme::Dark, true) => "rgba(0, 0, 0, 0.8)",
            (Theme::Dark, false) => "rgba(0, 0, 0, 0.5)",
            (Theme::Light, true) => "rgba(255, 255, 255, 0.95)",
            (Theme::Light, false) => "rgba(255, 255, 255, 0.9)",
        }
    }

    /// Notification surface: (background, text, border)
    pub fn notification_palette(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Theme::Dark => (
                "rgba(15, 12, 41, 0.95)",
                "#ffffff",
                "rgba(255, 255, 255, 0.1)",
            ),
            Theme::Light => ("white", "#1e293b", "rgba(0, 0, 0, 0.1)"),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PortfolioError::InvalidTheme(other.to_string())),
        }
    }
}

/// Applies and persists the theme.
///
/// Holds only element handles and settings; the current theme lives in
/// [`crate::AppState`] and is passed in.
#[derive(Debug, Clone)]
pub struct ThemeController {
    storage_key: String,
    default_theme: Theme,
    scrolled_threshold: f64,
    toggle: Option<NodeId>,
    icon: Option<NodeId>,
    header: Option<NodeId>,
}

impl ThemeController {
    /// Resolve the toggle button, its icon and the header
    pub fn new(dom: &impl Dom, config: &PortfolioConfig) -> Self {
        let toggle = dom.element_by_id(THEME_TOGGLE_ID);
        if toggle.is_none() {
            tracing::error!("Theme toggle button not found");
        }
        let icon = toggle.and_then(|t| dom.find_descendant_by_tag(t, "i"));
        let header = dom.elements_by_class("header").into_iter().next();

        Self {
            storage_key: config.storage_key.clone(),
            default_theme: config.default_theme,
            scrolled_threshold: config.layout.header_scrolled_threshold,
            toggle,
            icon,
            header,
        }
    }

    pub fn toggle_button(&self) -> Option<NodeId> {
        self.toggle
    }

    /// Read the stored preference and apply it without a transition
    pub fn initialize(&self, dom: &mut impl Dom, prefs: &dyn PreferenceStore) -> Theme {
        let theme = match prefs.get(&self.storage_key) {
            Some(stored) => stored.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                self.default_theme
            }),
            None => self.default_theme,
        };
        self.apply(dom, theme);
        tracing::info!("Initial theme set to: {}", theme);
        theme
    }

    /// Flip `current`, apply and persist it. Returns the new theme.
    ///
    /// A failed write is logged; the in-memory theme still changes.
    pub fn toggle(
        &self,
        current: &mut Theme,
        dom: &mut impl Dom,
        prefs: &mut dyn PreferenceStore,
    ) -> Theme {
        let next = current.toggled();
        tracing::info!("Switching from {} to {}", current, next);

        *current = next;
        self.apply(dom, next);
        if let Err(e) = prefs.set(&self.storage_key, next.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        next
    }

    /// Write the theme attribute, swap the toggle icon and force a reflow
    pub fn apply(&self, dom: &mut impl Dom, theme: Theme) {
        let html = dom.document_element();
        let body = dom.body();

        for node in [body, html] {
            dom.remove_attribute(node, THEME_ATTRIBUTE);
            dom.set_attribute(node, THEME_ATTRIBUTE, theme.as_str());
        }

        if let Some(icon) = self.icon {
            match theme {
                Theme::Dark => {
                    dom.set_attribute(icon, "class", SUN_ICON);
                    dom.set_style(icon, "color", SUN_COLOR);
                }
                Theme::Light => {
                    dom.set_attribute(icon, "class", MOON_ICON);
                    dom.remove_style(icon, "color");
                }
            }
        }

        // Reading layout flushes pending style changes
        let _ = dom.offset_height(body);
    }

    /// Enable the body transition (run one frame after `apply`)
    pub fn begin_transition(&self, dom: &mut impl Dom) {
        let body = dom.body();
        dom.set_style(body, "transition", BODY_TRANSITION);
        let _ = dom.offset_height(body);
    }

    pub fn end_transition(&self, dom: &mut impl Dom) {
        let body = dom.body();
        dom.remove_style(body, "transition");
    }

    /// Recompute header translucency for the scroll position and theme
    pub fn update_header(&self, dom: &mut impl Dom, theme: Theme) {
        let Some(header) = self.header else {
            return;
        };
        let scrolled = dom.scroll_y() > self.scrolled_threshold;
        dom.set_style(header, "background", theme.header_background(scrolled));
    }
}
