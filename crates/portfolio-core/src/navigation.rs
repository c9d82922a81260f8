//! Section navigation, smooth scrolling and the mobile menu.
//!
//! - The active `.nav-link` follows the scroll position: the last section
//!   whose box contains `scroll_y + scroll_offset` wins.
//! - Link and in-page anchor clicks animate the window scroll with an
//!   ease-in-out cubic curve.
//! - The mobile menu is a two-state machine closed by its toggle, an outside
//!   click, Escape, or the viewport growing past the breakpoint.

use std::time::Duration;

use crate::config::LayoutConfig;
use crate::dom::{Dom, NodeId};

pub const NAV_LINK_CLASS: &str = "nav-link";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const BACK_TO_TOP_ID: &str = "backToTop";

const ACTIVE: &str = "active";

/// Hamburger span styles when the menu is open, top to bottom
const OPEN_SPAN_STYLES: [(&str, &str); 3] = [
    ("transform", "rotate(45deg) translate(5px, 5px)"),
    ("opacity", "0"),
    ("transform", "rotate(-45deg) translate(7px, -6px)"),
];

/// Which section is highlighted in the navigation bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Option<String>,
}

/// Navigation links and in-page anchors
#[derive(Debug, Clone)]
pub struct Navigation {
    links: Vec<NodeId>,
    anchors: Vec<NodeId>,
    scroll_offset: f64,
    header_height: f64,
}

impl Navigation {
    pub fn new(dom: &impl Dom, layout: &LayoutConfig) -> Self {
        let links = dom.elements_by_class(NAV_LINK_CLASS);
        if links.is_empty() {
            tracing::warn!("No navigation links found");
        }

        let anchors = dom
            .elements_by_tag("a")
            .into_iter()
            .filter(|a| !dom.has_class(*a, NAV_LINK_CLASS))
            .filter(|a| fragment(dom, *a).is_some())
            .collect();

        Self {
            links,
            anchors,
            scroll_offset: layout.scroll_offset,
            header_height: layout.header_height,
        }
    }

    pub fn links(&self) -> &[NodeId] {
        &self.links
    }

    pub fn is_link(&self, node: NodeId) -> bool {
        self.links.contains(&node)
    }

    pub fn is_anchor(&self, node: NodeId) -> bool {
        self.anchors.contains(&node)
    }

    /// Section containing the effective scroll position, last match wins
    pub fn active_section(&self, dom: &impl Dom) -> Option<String> {
        let position = dom.scroll_y() + self.scroll_offset;
        let mut current = None;

        for section in dom.elements_by_tag("section") {
            let Some(id) = dom.attribute(section, "id") else {
                continue;
            };
            let top = dom.offset_top(section);
            let bottom = top + dom.offset_height(section);
            if position >= top && position < bottom {
                current = Some(id);
            }
        }

        current
    }

    /// Recompute the active section and mark exactly its link
    pub fn update_active_link(&self, dom: &mut impl Dom, state: &mut NavigationState) {
        let section = self.active_section(dom);
        let link = section
            .as_deref()
            .and_then(|id| self.links.iter().copied().find(|l| fragment(dom, *l) == Some(id.to_string())));
        self.mark_active(dom, link);
        state.active = section;
    }

    /// Resolve the section a link or anchor points at
    pub fn resolve_target(&self, dom: &impl Dom, link: NodeId) -> Option<(String, NodeId)> {
        let id = fragment(dom, link)?;
        match dom.element_by_id(&id) {
            Some(target) => Some((id, target)),
            None => {
                tracing::error!("Target section not found: #{}", id);
                None
            }
        }
    }

    /// Make `link` the sole active link
    pub fn activate(&self, dom: &mut impl Dom, link: NodeId, section: &str, state: &mut NavigationState) {
        self.mark_active(dom, Some(link));
        state.active = Some(section.to_string());
    }

    /// Scroll position that puts `target` just below the fixed header
    pub fn scroll_target(&self, dom: &impl Dom, target: NodeId) -> f64 {
        dom.offset_top(target) - self.header_height
    }

    fn mark_active(&self, dom: &mut impl Dom, active: Option<NodeId>) {
        for link in &self.links {
            dom.remove_class(*link, ACTIVE);
        }
        if let Some(link) = active {
            dom.add_class(link, ACTIVE);
        }
    }
}

/// Fragment id of an `href="#id"` attribute
fn fragment(dom: &impl Dom, node: NodeId) -> Option<String> {
    let href = dom.attribute(node, "href")?;
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then(|| id.to_string())
}

/// Classic ease-in-out cubic on `[0, 1]`
pub fn ease_in_out_cubic(progress: f64) -> f64 {
    if progress < 0.5 {
        4.0 * progress * progress * progress
    } else {
        1.0 - (-2.0 * progress + 2.0).powi(3) / 2.0
    }
}

/// One animated window scroll
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    start_y: f64,
    target_y: f64,
    started_at: Duration,
    duration: Duration,
    generation: u64,
}

impl SmoothScroll {
    pub fn new(start_y: f64, target_y: f64, started_at: Duration, duration: Duration, generation: u64) -> Self {
        Self {
            start_y,
            target_y,
            started_at,
            duration,
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn target(&self) -> f64 {
        self.target_y
    }

    /// Eased position at `now` and whether the animation has finished
    pub fn position_at(&self, now: Duration) -> (f64, bool) {
        let elapsed = now.saturating_sub(self.started_at).as_secs_f64();
        let total = self.duration.as_secs_f64();
        let progress = if total <= 0.0 {
            1.0
        } else {
            (elapsed / total).min(1.0)
        };
        if progress >= 1.0 {
            return (self.target_y, true);
        }
        let y = self.start_y + (self.target_y - self.start_y) * ease_in_out_cubic(progress);
        (y, false)
    }
}

/// Slide-out menu for narrow viewports.
///
/// `open` lives in [`crate::AppState`]; transitions return whether the
/// state actually changed so the caller can announce it.
#[derive(Debug, Clone)]
pub struct MobileMenu {
    toggle: Option<NodeId>,
    menu: Option<NodeId>,
    breakpoint: f64,
}

impl MobileMenu {
    pub fn new(dom: &impl Dom, layout: &LayoutConfig) -> Self {
        let toggle = dom.element_by_id(NAV_TOGGLE_ID);
        let menu = dom.element_by_id(NAV_MENU_ID);
        if toggle.is_none() || menu.is_none() {
            tracing::warn!("Mobile navigation elements not found");
        }
        Self {
            toggle,
            menu,
            breakpoint: layout.mobile_breakpoint,
        }
    }

    pub fn toggle_button(&self) -> Option<NodeId> {
        self.toggle
    }

    pub fn menu(&self) -> Option<NodeId> {
        self.menu
    }

    /// Flip the menu. Returns the new state, or `None` when the menu is absent.
    pub fn toggle(&self, dom: &mut impl Dom, open: &mut bool) -> Option<bool> {
        let (toggle, menu) = (self.toggle?, self.menu?);
        *open = !*open;

        if *open {
            dom.add_class(toggle, ACTIVE);
            dom.add_class(menu, ACTIVE);
            for (span, (property, value)) in hamburger_spans(dom, toggle).into_iter().zip(OPEN_SPAN_STYLES) {
                dom.set_style(span, property, value);
            }
        } else {
            self.reset(dom, toggle, menu);
        }

        tracing::info!("Mobile menu {}", if *open { "opened" } else { "closed" });
        Some(*open)
    }

    /// Close the menu and reset the hamburger. Returns true if it was open.
    pub fn close(&self, dom: &mut impl Dom, open: &mut bool) -> bool {
        let (Some(toggle), Some(menu)) = (self.toggle, self.menu) else {
            return false;
        };
        let was_open = *open;
        *open = false;
        self.reset(dom, toggle, menu);
        was_open
    }

    /// Close when a click lands outside both the toggle and the menu
    pub fn handle_document_click(&self, dom: &mut impl Dom, open: &mut bool, target: NodeId) -> bool {
        let (Some(toggle), Some(menu)) = (self.toggle, self.menu) else {
            return false;
        };
        if dom.contains(toggle, target) || dom.contains(menu, target) {
            return false;
        }
        self.close(dom, open)
    }

    /// Close on Escape; every other key is ignored
    pub fn handle_key(&self, dom: &mut impl Dom, open: &mut bool, key: &str) -> bool {
        key == "Escape" && self.handle_escape(dom, open)
    }

    pub fn handle_escape(&self, dom: &mut impl Dom, open: &mut bool) -> bool {
        *open && self.close(dom, open)
    }

    /// Close when the viewport is wider than the breakpoint
    pub fn handle_resize(&self, dom: &mut impl Dom, open: &mut bool) -> bool {
        if dom.viewport_width() > self.breakpoint {
            self.close(dom, open)
        } else {
            false
        }
    }

    fn reset(&self, dom: &mut impl Dom, toggle: NodeId, menu: NodeId) {
        dom.remove_class(toggle, ACTIVE);
        dom.remove_class(menu, ACTIVE);
        for span in hamburger_spans(dom, toggle) {
            dom.remove_style(span, "transform");
            dom.remove_style(span, "opacity");
        }
    }
}

fn hamburger_spans(dom: &impl Dom, toggle: NodeId) -> Vec<NodeId> {
    dom.children(toggle)
        .into_iter()
        .filter(|c| dom.tag_name(*c).as_deref() == Some("span"))
        .collect()
}

/// Floating button shown once the page is scrolled far enough
#[derive(Debug, Clone)]
pub struct BackToTop {
    button: Option<NodeId>,
    threshold: f64,
}

impl BackToTop {
    pub fn new(dom: &impl Dom, layout: &LayoutConfig) -> Self {
        Self {
            button: dom.element_by_id(BACK_TO_TOP_ID),
            threshold: layout.back_to_top_threshold,
        }
    }

    pub fn button(&self) -> Option<NodeId> {
        self.button
    }

    pub fn update(&self, dom: &mut impl Dom) {
        let Some(button) = self.button else {
            return;
        };
        if dom.scroll_y() > self.threshold {
            dom.add_class(button, "visible");
        } else {
            dom.remove_class(button, "visible");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;

    /// Three stacked 1000px sections with matching nav links and a menu
    fn page() -> MemoryDom {
        let mut dom = MemoryDom::new(1024.0, 700.0);
        let body = dom.body();

        let toggle = dom.append_new(body, "button");
        dom.set_attribute(toggle, "id", NAV_TOGGLE_ID);
        for _ in 0..3 {
            dom.append_new(toggle, "span");
        }
        let menu = dom.append_new(body, "ul");
        dom.set_attribute(menu, "id", NAV_MENU_ID);

        for (i, id) in ["home", "about", "projects"].iter().enumerate() {
            let item = dom.append_new(menu, "li");
            let link = dom.append_new(item, "a");
            dom.add_class(link, NAV_LINK_CLASS);
            dom.set_attribute(link, "href", &format!("#{}", id));

            let section = dom.append_new(body, "section");
            dom.set_attribute(section, "id", id);
            dom.set_layout(section, i as f64 * 1000.0, 1000.0);
        }

        let anchor = dom.append_new(body, "a");
        dom.set_attribute(anchor, "href", "#projects");
        let button = dom.append_new(body, "button");
        dom.set_attribute(button, "id", BACK_TO_TOP_ID);
        dom
    }

    fn link_for(dom: &MemoryDom, id: &str) -> NodeId {
        dom.elements_by_class(NAV_LINK_CLASS)
            .into_iter()
            .find(|l| dom.attribute(*l, "href") == Some(format!("#{}", id)))
            .unwrap()
    }

    fn active_links(dom: &MemoryDom) -> Vec<NodeId> {
        dom.elements_by_class(NAV_LINK_CLASS)
            .into_iter()
            .filter(|l| dom.has_class(*l, ACTIVE))
            .collect()
    }

    #[test]
    fn active_section_uses_offset_position() {
        let mut dom = page();
        let nav = Navigation::new(&dom, &LayoutConfig::default());

        assert_eq!(nav.active_section(&dom).as_deref(), Some("home"));

        // 880 + 120 = 1000 is the first pixel of "about"
        dom.scroll_to(880.0);
        assert_eq!(nav.active_section(&dom).as_deref(), Some("about"));

        dom.scroll_to(879.0);
        assert_eq!(nav.active_section(&dom).as_deref(), Some("home"));
    }

    #[test]
    fn update_marks_single_link() {
        let mut dom = page();
        let nav = Navigation::new(&dom, &LayoutConfig::default());
        let mut state = NavigationState::default();

        dom.scroll_to(2100.0);
        nav.update_active_link(&mut dom, &mut state);

        assert_eq!(state.active.as_deref(), Some("projects"));
        assert_eq!(active_links(&dom), vec![link_for(&dom, "projects")]);
    }

    #[test]
    fn no_section_clears_all_links() {
        let mut dom = page();
        let body = dom.body();
        let footer = dom.append_new(body, "footer");
        dom.set_layout(footer, 3000.0, 2000.0);
        let nav = Navigation::new(&dom, &LayoutConfig::default());
        let mut state = NavigationState::default();

        nav.update_active_link(&mut dom, &mut state);
        assert_eq!(active_links(&dom).len(), 1);

        dom.scroll_to(4000.0);
        nav.update_active_link(&mut dom, &mut state);
        assert!(active_links(&dom).is_empty());
        assert_eq!(state.active, None);
    }

    #[test]
    fn resolve_target_and_scroll_position() {
        let dom = page();
        let nav = Navigation::new(&dom, &LayoutConfig::default());
        let link = link_for(&dom, "projects");

        let (id, target) = nav.resolve_target(&dom, link).unwrap();
        assert_eq!(id, "projects");
        assert_eq!(nav.scroll_target(&dom, target), 1920.0);
    }

    #[test]
    fn resolve_missing_target_is_none() {
        let mut dom = page();
        let nav = Navigation::new(&dom, &LayoutConfig::default());
        let link = link_for(&dom, "about");
        dom.set_attribute(link, "href", "#nowhere");
        assert!(nav.resolve_target(&dom, link).is_none());
    }

    #[test]
    fn anchors_exclude_nav_links() {
        let dom = page();
        let nav = Navigation::new(&dom, &LayoutConfig::default());
        assert_eq!(nav.links().len(), 3);
        assert!(!nav.is_anchor(link_for(&dom, "home")));
        let anchor = dom
            .elements_by_tag("a")
            .into_iter()
            .find(|a| !dom.has_class(*a, NAV_LINK_CLASS))
            .unwrap();
        assert!(nav.is_anchor(anchor));
    }

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
    }

    #[test]
    fn smooth_scroll_reaches_target() {
        let scroll = SmoothScroll::new(0.0, 1000.0, Duration::from_millis(100), Duration::from_millis(800), 1);

        assert_eq!(scroll.position_at(Duration::from_millis(100)), (0.0, false));
        assert_eq!(scroll.position_at(Duration::from_millis(500)), (500.0, false));
        assert_eq!(scroll.position_at(Duration::from_millis(900)), (1000.0, true));
        assert_eq!(scroll.position_at(Duration::from_secs(10)), (1000.0, true));
    }

    #[test]
    fn zero_duration_scroll_jumps() {
        let scroll = SmoothScroll::new(300.0, 0.0, Duration::ZERO, Duration::ZERO, 1);
        assert_eq!(scroll.position_at(Duration::ZERO), (0.0, true));
    }

    #[test]
    fn menu_toggle_animates_hamburger() {
        let mut dom = page();
        let menu = MobileMenu::new(&dom, &LayoutConfig::default());
        let toggle = menu.toggle_button().unwrap();
        let spans = dom.children(toggle);
        let mut open = false;

        assert_eq!(menu.toggle(&mut dom, &mut open), Some(true));
        assert!(dom.has_class(menu.menu().unwrap(), ACTIVE));
        assert_eq!(dom.style(spans[1], "opacity").as_deref(), Some("0"));
        assert_eq!(
            dom.style(spans[0], "transform").as_deref(),
            Some("rotate(45deg) translate(5px, 5px)")
        );

        assert_eq!(menu.toggle(&mut dom, &mut open), Some(false));
        assert!(!dom.has_class(toggle, ACTIVE));
        for span in spans {
            assert_eq!(dom.style(span, "transform"), None);
            assert_eq!(dom.style(span, "opacity"), None);
        }
    }

    #[test]
    fn outside_click_closes_inside_click_does_not() {
        let mut dom = page();
        let menu = MobileMenu::new(&dom, &LayoutConfig::default());
        let mut open = false;
        menu.toggle(&mut dom, &mut open);

        let inside = link_for(&dom, "about");
        assert!(!menu.handle_document_click(&mut dom, &mut open, inside));
        assert!(open);

        let span = dom.children(menu.toggle_button().unwrap())[0];
        assert!(!menu.handle_document_click(&mut dom, &mut open, span));
        assert!(open);

        let body = dom.body();
        assert!(menu.handle_document_click(&mut dom, &mut open, body));
        assert!(!open);
        assert!(!dom.has_class(menu.menu().unwrap(), ACTIVE));
    }

    #[test]
    fn escape_only_closes_open_menu() {
        let mut dom = page();
        let menu = MobileMenu::new(&dom, &LayoutConfig::default());
        let mut open = false;

        assert!(!menu.handle_escape(&mut dom, &mut open));
        menu.toggle(&mut dom, &mut open);
        assert!(!menu.handle_key(&mut dom, &mut open, "Enter"));
        assert!(open);
        assert!(menu.handle_key(&mut dom, &mut open, "Escape"));
        assert!(!open);
    }

    #[test]
    fn resize_past_breakpoint_closes() {
        let mut dom = page();
        let menu = MobileMenu::new(&dom, &LayoutConfig::default());
        let mut open = false;

        dom.set_viewport(600.0, 700.0);
        menu.toggle(&mut dom, &mut open);
        assert!(!menu.handle_resize(&mut dom, &mut open));
        assert!(open);

        dom.set_viewport(769.0, 700.0);
        assert!(menu.handle_resize(&mut dom, &mut open));
        assert!(!open);
    }

    #[test]
    fn missing_menu_is_inert() {
        let mut dom = MemoryDom::default();
        let menu = MobileMenu::new(&dom, &LayoutConfig::default());
        let mut open = false;
        assert_eq!(menu.toggle(&mut dom, &mut open), None);
        assert!(!open);
    }

    #[test]
    fn back_to_top_visibility() {
        let mut dom = page();
        let back = BackToTop::new(&dom, &LayoutConfig::default());
        let button = back.button().unwrap();

        dom.scroll_to(501.0);
        back.update(&mut dom);
        assert!(dom.has_class(button, "visible"));

        dom.scroll_to(500.0);
        back.update(&mut dom);
        assert!(!dom.has_class(button, "visible"));
    }
}
