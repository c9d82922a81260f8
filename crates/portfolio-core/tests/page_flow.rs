//! End-to-end page flows driven through events and virtual time

use std::time::Duration;

use portfolio_core::page::build_page;
use portfolio_core::theme::THEME_ATTRIBUTE;
use portfolio_core::{
    Dom, Event, FilePreferences, Key, MemoryDom, MemoryPreferences, NotificationKind, Portfolio,
    PortfolioConfig, PreferenceStore, SiteContent, Theme,
};

// ============================================================================
// Helpers
// ============================================================================

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn portfolio_with(prefs: Box<dyn PreferenceStore>) -> Portfolio<MemoryDom> {
    started(SiteContent::default(), prefs)
}

fn started(content: SiteContent, prefs: Box<dyn PreferenceStore>) -> Portfolio<MemoryDom> {
    let _ = tracing_subscriber::fmt::try_init();

    let mut dom = MemoryDom::new(1280.0, 800.0);
    build_page(&mut dom, &content);
    let mut p = Portfolio::new(dom, prefs, PortfolioConfig::default(), content)
        .unwrap()
        .with_seed(7);
    p.start();
    p
}

fn portfolio() -> Portfolio<MemoryDom> {
    portfolio_with(Box::new(MemoryPreferences::new()))
}

/// Scroll after letting every throttle window lapse
fn scroll(p: &mut Portfolio<MemoryDom>, y: f64) {
    p.advance(ms(200));
    p.dispatch(Event::Scroll(y));
}

fn visible_message(p: &Portfolio<MemoryDom>) -> Option<String> {
    let id = p.notifier().visible()?;
    p.notifier().message(p.dom(), id)
}

fn link_to(p: &Portfolio<MemoryDom>, id: &str) -> portfolio_core::NodeId {
    let href = format!("#{}", id);
    p.navigation()
        .links()
        .iter()
        .copied()
        .find(|l| p.dom().attribute(*l, "href").as_deref() == Some(href.as_str()))
        .unwrap()
}

fn active_links(p: &Portfolio<MemoryDom>) -> Vec<portfolio_core::NodeId> {
    p.navigation()
        .links()
        .iter()
        .copied()
        .filter(|l| p.dom().has_class(*l, "active"))
        .collect()
}

fn fill_form(p: &mut Portfolio<MemoryDom>, values: &[(&str, &str)]) {
    for (name, value) in values {
        let field = p.contact().field(p.dom(), name).unwrap();
        p.dispatch(Event::FieldInput {
            field,
            value: value.to_string(),
        });
    }
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn test_theme_toggle_persists_and_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = portfolio_with(Box::new(FilePreferences::open(dir.path())));
    assert_eq!(first.state().theme, Theme::Light);
    let toggle = first.dom().element_by_id("themeToggle").unwrap();
    first.click(toggle);
    assert_eq!(first.state().theme, Theme::Dark);

    let second = portfolio_with(Box::new(FilePreferences::open(dir.path())));
    assert_eq!(second.state().theme, Theme::Dark);
    let html = second.dom().document_element();
    assert_eq!(second.dom().attribute(html, THEME_ATTRIBUTE).as_deref(), Some("dark"));
}

#[test]
fn test_theme_notification_uses_new_palette() {
    let mut p = portfolio();
    p.toggle_theme();

    let id = p.notifier().visible().unwrap();
    let node = p.notifier().element(id).unwrap();
    assert_eq!(
        p.dom().style(node, "background").as_deref(),
        Some("rgba(15, 12, 41, 0.95)")
    );

    // Auto-dismissed after 2s, removed 300ms later
    p.advance(ms(2000));
    assert!(p.notifier().is_dismissing(id));
    p.advance(ms(300));
    assert!(!p.dom().exists(node));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_nav_click_activates_link_and_scrolls() {
    let mut p = portfolio();
    let link = link_to(&p, "projects");
    let projects = p.dom().element_by_id("projects").unwrap();
    let target = p.dom().offset_top(projects) - 80.0;

    p.click(link);

    assert_eq!(active_links(&p), vec![link]);
    assert_eq!(p.state().navigation.active.as_deref(), Some("projects"));
    assert_eq!(p.state().scroll.as_ref().map(|s| s.target()), Some(target));
    assert_eq!(visible_message(&p).as_deref(), Some("Navigated to PROJECTS section"));

    p.advance(ms(400));
    let midway = p.dom().scroll_y();
    assert!(midway > 0.0 && midway < target);

    p.advance(ms(500));
    assert_eq!(p.dom().scroll_y(), target);
    assert!(p.state().scroll.is_none());
}

#[test]
fn test_nav_click_to_missing_section_is_noop() {
    let content = SiteContent::default();
    let mut dom = MemoryDom::new(1280.0, 800.0);
    build_page(&mut dom, &content);
    let orphan = dom
        .elements_by_class("nav-link")
        .into_iter()
        .find(|l| dom.attribute(*l, "href").as_deref() == Some("#about"))
        .unwrap();
    dom.set_attribute(orphan, "href", "#gone");

    let mut p = Portfolio::new(dom, Box::new(MemoryPreferences::new()), PortfolioConfig::default(), content).unwrap();
    p.start();
    let before = active_links(&p);

    assert!(!p.navigate(orphan));
    assert_eq!(active_links(&p), before);
    assert!(p.state().scroll.is_none());
    assert!(p.notifier().visible().is_none());
}

#[test]
fn test_scrolling_moves_active_link() {
    let mut p = portfolio();
    let about = p.dom().element_by_id("about").unwrap();
    let about_top = p.dom().offset_top(about);

    scroll(&mut p, about_top - 120.0);
    assert_eq!(p.state().navigation.active.as_deref(), Some("about"));
    assert_eq!(active_links(&p), vec![link_to(&p, "about")]);
}

#[test]
fn test_anchor_and_back_to_top() {
    let mut p = portfolio();
    let back = p.dom().element_by_id("backToTop").unwrap();

    // "View My Work" points at #projects
    let anchor = p
        .dom()
        .elements_by_tag("a")
        .into_iter()
        .find(|a| !p.dom().has_class(*a, "nav-link") && p.dom().attribute(*a, "href").as_deref() == Some("#projects"))
        .unwrap();
    p.click(anchor);
    p.advance(ms(1100));

    let projects = p.dom().element_by_id("projects").unwrap();
    assert_eq!(p.dom().scroll_y(), p.dom().offset_top(projects) - 80.0);
    assert!(p.dom().has_class(back, "visible"));

    p.click(back);
    p.advance(ms(1100));
    assert_eq!(p.dom().scroll_y(), 0.0);
    assert!(!p.dom().has_class(back, "visible"));
}

#[test]
fn test_header_turns_opaque_when_scrolled() {
    let mut p = portfolio();
    let header = p.dom().elements_by_class("header")[0];
    assert_eq!(
        p.dom().style(header, "background").as_deref(),
        Some("rgba(255, 255, 255, 0.9)")
    );

    scroll(&mut p, 60.0);
    assert_eq!(
        p.dom().style(header, "background").as_deref(),
        Some("rgba(255, 255, 255, 0.95)")
    );
}

// ============================================================================
// Mobile menu
// ============================================================================

#[test]
fn test_menu_outside_click_and_resize_close() {
    let mut p = portfolio();
    p.dispatch(Event::Resize { width: 600.0, height: 800.0 });
    p.advance(ms(300));

    let toggle = p.menu().toggle_button().unwrap();
    let spans = p.dom().children(toggle);

    p.click(toggle);
    assert!(p.state().menu_open);
    assert_eq!(visible_message(&p).as_deref(), Some("Mobile menu opened"));

    let body = p.dom().body();
    p.click(body);
    assert!(!p.state().menu_open);
    for span in &spans {
        assert_eq!(p.dom().style(*span, "transform"), None);
        assert_eq!(p.dom().style(*span, "opacity"), None);
    }

    p.click(toggle);
    assert!(p.state().menu_open);
    p.dispatch(Event::Resize { width: 1024.0, height: 800.0 });
    assert!(p.state().menu_open, "closing waits for the resize debounce");
    p.advance(ms(250));
    assert!(!p.state().menu_open);
    assert!(!p.dom().has_class(toggle, "active"));
}

#[test]
fn test_escape_closes_menu() {
    let mut p = portfolio();
    p.dispatch(Event::NavToggleClicked);
    assert!(p.state().menu_open);

    p.dispatch(Event::KeyDown(Key::from_name("Tab")));
    assert!(p.state().menu_open);
    p.dispatch(Event::KeyDown(Key::Escape));
    assert!(!p.state().menu_open);
}

#[test]
fn test_nav_link_closes_open_menu() {
    let mut p = portfolio();
    p.dispatch(Event::NavToggleClicked);
    let link = link_to(&p, "contact");
    p.click(link);
    assert!(!p.state().menu_open);
}

// ============================================================================
// Visibility and skills
// ============================================================================

#[test]
fn test_skills_animate_once() {
    let mut p = portfolio();
    let skills = p.dom().element_by_id("skills").unwrap();
    let top = p.dom().offset_top(skills);

    scroll(&mut p, top - 200.0);
    assert!(p.state().skills_animated);
    assert!(p.dom().has_class(skills, "visible"));
    assert_eq!(visible_message(&p).as_deref(), Some("Skills animated!"));

    p.advance(ms(1000));
    let items = p.skills().items().to_vec();
    assert!(!items.is_empty());
    for item in &items {
        assert!(p.dom().has_class(*item, "animate"));
    }

    // Let the notification expire, then scroll away and back
    p.advance(ms(2500));
    assert!(p.notifier().visible().is_none());
    scroll(&mut p, 0.0);
    scroll(&mut p, top - 200.0);
    assert!(p.notifier().visible().is_none());
    assert!(!p.animate_skills());
    assert!(p.notifier().visible().is_none());
}

#[test]
fn test_destroy_stops_entrance_animations() {
    let mut p = portfolio();
    let education = p.dom().element_by_id("education").unwrap();
    let top = p.dom().offset_top(education);

    p.dispatch(Event::Unload);
    scroll(&mut p, top - 100.0);
    assert!(!p.dom().has_class(education, "visible"));

    // Timers are left alone
    let typed = p.dom().element_by_id("typewriter").unwrap();
    let before = p.dom().text_content(typed);
    p.advance(ms(100));
    assert_ne!(p.dom().text_content(typed), before);
}

#[test]
fn test_photo_keeps_animating_in_after_destroy() {
    // Hero last, so the photo starts below the fold
    let mut content = SiteContent::default();
    content.sections.rotate_left(1);
    let mut p = started(content, Box::new(MemoryPreferences::new()));

    let container = p.dom().elements_by_class("profile-photo-container")[0];
    let home = p.dom().element_by_id("home").unwrap();
    let home_top = p.dom().offset_top(home);
    assert!(!p.dom().has_class(container, "animate-in"));

    p.dispatch(Event::Unload);
    scroll(&mut p, home_top);

    assert!(p.dom().has_class(container, "animate-in"));
    assert!(!p.dom().has_class(home, "visible"), "section observer is disconnected");
}

#[test]
fn test_growing_viewport_reveals_uncovered_sections() {
    let mut p = portfolio();
    let about = p.dom().element_by_id("about").unwrap();
    assert!(!p.dom().has_class(about, "visible"));

    p.dispatch(Event::Resize { width: 1280.0, height: 2000.0 });
    p.advance(ms(300));

    assert!(p.dom().has_class(about, "visible"));
}

// ============================================================================
// Contact form
// ============================================================================

#[test]
fn test_empty_submit_never_loads() {
    let mut p = portfolio();
    let submit = p.contact().submit_button().unwrap();

    p.click(submit);

    assert!(!p.state().submitting);
    assert!(p.dom().attribute(submit, "disabled").is_none());
    assert_eq!(
        visible_message(&p).as_deref(),
        Some("Please fill in all required fields correctly.")
    );
    assert_eq!(p.dom().elements_by_class("field-error").len(), 4);
}

#[test]
fn test_valid_submit_cycles_button_and_resets() {
    let mut p = portfolio();
    let submit = p.contact().submit_button().unwrap();
    fill_form(
        &mut p,
        &[
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("subject", "Engines"),
            ("message", "Let us talk about analytical engines."),
        ],
    );

    p.dispatch(Event::FormSubmitted);
    assert!(p.state().submitting);
    assert!(p.dom().attribute(submit, "disabled").is_some());
    assert_eq!(p.dom().text_content(submit), "Sending Message...");

    p.advance(ms(1999));
    assert!(p.state().submitting);

    p.advance(ms(1));
    assert!(!p.state().submitting);
    assert!(p.dom().attribute(submit, "disabled").is_none());
    assert_eq!(p.dom().text_content(submit), "Send Message");
    assert!(p.dom().elements_by_class("field-error").is_empty());
    for field in p.contact().fields(p.dom()) {
        assert_eq!(p.dom().attribute(field, "value").as_deref(), Some(""));
    }
    assert_eq!(
        visible_message(&p).as_deref(),
        Some("Thank you for your message! I will get back to you soon.")
    );
}

#[test]
fn test_blur_validates_and_input_clears() {
    let mut p = portfolio();
    fill_form(&mut p, &[("email", "not-an-email")]);
    let email = p.contact().field(p.dom(), "email").unwrap();

    p.dispatch(Event::FieldBlur(email));
    assert_eq!(
        p.contact().field_error(p.dom(), email).as_deref(),
        Some("Please enter a valid email address")
    );

    fill_form(&mut p, &[("email", "a@b.co")]);
    assert_eq!(p.contact().field_error(p.dom(), email), None);
    p.dispatch(Event::FieldBlur(email));
    assert_eq!(p.contact().field_error(p.dom(), email), None);
}

// ============================================================================
// Notifications and photo
// ============================================================================

#[test]
fn test_notification_close_racing_auto_dismiss() {
    let mut p = portfolio();
    let id = p.show_notification("hello", NotificationKind::Warning, ms(500));
    let close = p.notifier().close_button(id).unwrap();
    let node = p.notifier().element(id).unwrap();

    p.advance(ms(400));
    p.click(close);
    assert!(p.notifier().is_dismissing(id));
    p.click(node);

    // Auto-dismiss fires at 500ms on an already dismissing toast
    p.advance(ms(500));
    assert!(!p.dom().exists(node));
    assert!(p.notifier().attached().is_empty());
}

#[test]
fn test_resume_download_notifies() {
    let mut p = portfolio();
    let download = p.dom().element_by_id("downloadResume").unwrap();
    p.click(download);
    assert_eq!(
        visible_message(&p).as_deref(),
        Some("Resume download would be implemented here!")
    );
}

#[test]
fn test_photo_load_and_failure() {
    let mut p = portfolio();
    let container = p.dom().elements_by_class("profile-photo-container")[0];
    assert!(p.dom().has_class(container, "animate-in"));

    p.dispatch(Event::PhotoLoaded);
    assert!(p.dom().has_class(container, "loaded"));

    p.dispatch(Event::PhotoFailed);
    assert!(p.dom().elements_by_class("profile-photo").is_empty());
    assert_eq!(p.dom().elements_by_class("profile-placeholder").len(), 1);
}
