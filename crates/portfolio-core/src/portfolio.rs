//! The page orchestrator.
//!
//! [`Portfolio`] owns the document, the scheduler and every controller.
//! Mutable page state lives in [`AppState`] and is lent to the controllers
//! per call. Host input arrives as [`Event`] values through
//! [`Portfolio::dispatch`]; timed work is queued as [`Task`] values and run
//! by [`Portfolio::advance`].

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{PortfolioConfig, SiteContent};
use crate::contact::{ContactForm, ContactSubmission, SubmitOutcome, ValidationRules};
use crate::dom::{Dom, NodeId};
use crate::error::PortfolioResult;
use crate::navigation::{BackToTop, MobileMenu, Navigation, NavigationState, SmoothScroll};
use crate::notification::{NotificationId, NotificationKind, Notifier};
use crate::particles::ParticleField;
use crate::preferences::PreferenceStore;
use crate::profile_photo::ProfilePhoto;
use crate::scheduler::{Debounce, Scheduler, Throttle};
use crate::theme::{Theme, ThemeController};
use crate::typewriter::{Typewriter, TypewriterState};
use crate::visibility::{entrance_targets, SkillsAnimator, VisibilityObserver};

const THEME_NOTICE: Duration = Duration::from_millis(2000);
const NAVIGATION_NOTICE: Duration = Duration::from_millis(1500);
const MENU_NOTICE: Duration = Duration::from_millis(1000);
const SKILLS_NOTICE: Duration = Duration::from_millis(2000);

/// Keyboard key relevant to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

impl Key {
    /// Map a key name as reported by the host (`"Escape"`, `"a"`, ...)
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Key::Escape => "Escape",
            Key::Other(name) => name,
        }
    }
}

/// User or host input
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ThemeToggleClicked,
    NavLinkClicked(NodeId),
    NavToggleClicked,
    /// Any click, seen before the specific handler (capture phase)
    DocumentClicked(NodeId),
    KeyDown(Key),
    Scroll(f64),
    Resize { width: f64, height: f64 },
    FieldInput { field: NodeId, value: String },
    FieldBlur(NodeId),
    FormSubmitted,
    BackToTopClicked,
    AnchorClicked(NodeId),
    ResumeDownloadClicked,
    NotificationClosed(NotificationId),
    NotificationClicked(NotificationId),
    PhotoLoaded,
    PhotoFailed,
    VisibilityChanged { hidden: bool },
    Unload,
}

/// Deferred work queued on the scheduler
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    NotificationSlideIn(NotificationId),
    NotificationDismiss(NotificationId),
    NotificationRemove(NotificationId),
    SkillFill(usize),
    TypewriterStep,
    /// Theme transition settled; refresh theme-dependent visuals
    ThemeSettled,
    RegenerateParticles,
    BodyTransitionStart,
    BodyTransitionEnd,
    /// One frame of the smooth scroll with this generation
    ScrollFrame(u64),
    ResizeSettled,
    SubmitComplete(ContactSubmission),
}

/// Mutable page state shared by the controllers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub theme: Theme,
    pub navigation: NavigationState,
    pub menu_open: bool,
    pub typewriter: TypewriterState,
    pub skills_animated: bool,
    pub scroll: Option<SmoothScroll>,
    pub scroll_generation: u64,
    pub submitting: bool,
    pub page_hidden: bool,
}

/// The whole interactive page over a [`Dom`]
pub struct Portfolio<D: Dom> {
    dom: D,
    prefs: Box<dyn PreferenceStore>,
    config: PortfolioConfig,
    content: SiteContent,
    scheduler: Scheduler<Task>,
    state: AppState,
    notifier: Notifier,
    theme: ThemeController,
    navigation: Navigation,
    menu: MobileMenu,
    back_to_top: BackToTop,
    typewriter: Typewriter,
    particles: ParticleField,
    observer: VisibilityObserver,
    photo_observer: VisibilityObserver,
    skills: SkillsAnimator,
    contact: ContactForm,
    photo: ProfilePhoto,
    nav_throttle: Throttle,
    header_throttle: Throttle,
    back_to_top_throttle: Throttle,
    resize: Debounce,
    rng: StdRng,
}

impl<D: Dom> Portfolio<D> {
    /// Resolve every controller against an already built document
    pub fn new(
        dom: D,
        prefs: Box<dyn PreferenceStore>,
        config: PortfolioConfig,
        content: SiteContent,
    ) -> PortfolioResult<Self> {
        config.validate()?;
        let rules = ValidationRules::from_config(&config.validation)?;
        let timing = &config.timing;

        Ok(Self {
            notifier: Notifier::new(timing.frame, timing.notification_slide),
            theme: ThemeController::new(&dom, &config),
            navigation: Navigation::new(&dom, &config.layout),
            menu: MobileMenu::new(&dom, &config.layout),
            back_to_top: BackToTop::new(&dom, &config.layout),
            typewriter: Typewriter::new(&dom, content.roles.clone(), timing),
            particles: ParticleField::new(&dom, &config.particles),
            observer: VisibilityObserver::new(config.observer.root_margin, config.observer.threshold),
            photo_observer: VisibilityObserver::new(0.0, config.observer.photo_threshold),
            skills: SkillsAnimator::new(&dom, timing.skill_stagger),
            contact: ContactForm::new(&dom, rules),
            photo: ProfilePhoto::new(&dom, content.initials()),
            nav_throttle: Throttle::new(timing.nav_throttle),
            header_throttle: Throttle::new(timing.header_throttle),
            back_to_top_throttle: Throttle::new(timing.back_to_top_throttle),
            resize: Debounce::new(timing.resize_debounce),
            rng: StdRng::from_os_rng(),
            scheduler: Scheduler::new(),
            state: AppState::default(),
            dom,
            prefs,
            config,
            content,
        })
    }

    /// Use a fixed particle seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Initialize every component, in page setup order
    pub fn start(&mut self) {
        tracing::info!("Initializing portfolio for {}", self.content.owner);

        self.state.theme = self.theme.initialize(&mut self.dom, &*self.prefs);

        self.navigation
            .update_active_link(&mut self.dom, &mut self.state.navigation);

        if self.typewriter.is_active() {
            self.run_typewriter();
        } else {
            tracing::warn!("Typewriter disabled");
        }

        self.particles.generate(&mut self.dom, &mut self.rng);

        self.theme.update_header(&mut self.dom, self.state.theme);
        self.back_to_top.update(&mut self.dom);

        for target in entrance_targets(&self.dom) {
            self.dom.add_class(target, "fade-in");
            self.observer.observe(target);
        }
        tracing::debug!("Observing {} elements", self.observer.observed_count());

        self.handle_resize();

        if let Some(container) = self.photo.container() {
            self.photo_observer.observe(container);
            if self.content.photo.is_none() {
                self.photo.handle_failed(&mut self.dom);
            }
        }

        self.check_visibility();

        tracing::info!("Portfolio initialized");
    }

    /// Handle one input event
    pub fn dispatch(&mut self, event: Event) {
        tracing::trace!(?event, "dispatch");
        match event {
            Event::ThemeToggleClicked => {
                self.toggle_theme();
            }
            Event::NavLinkClicked(link) => {
                self.navigate(link);
            }
            Event::NavToggleClicked => self.toggle_menu(),
            Event::DocumentClicked(target) => {
                self.menu
                    .handle_document_click(&mut self.dom, &mut self.state.menu_open, target);
            }
            Event::KeyDown(key) => {
                self.menu
                    .handle_key(&mut self.dom, &mut self.state.menu_open, key.as_str());
            }
            Event::Scroll(y) => {
                self.dom.scroll_to(y);
                self.on_scrolled();
            }
            Event::Resize { width, height } => {
                self.dom.set_viewport(width, height);
                self.resize.trigger(&mut self.scheduler, Task::ResizeSettled);
            }
            Event::FieldInput { field, value } => {
                if self.contact.is_field(&self.dom, field) {
                    self.contact.input(&mut self.dom, field, &value);
                }
            }
            Event::FieldBlur(field) => {
                if self.contact.is_field(&self.dom, field) {
                    self.contact.validate_field(&mut self.dom, field);
                }
            }
            Event::FormSubmitted => self.submit_contact(),
            Event::BackToTopClicked => {
                self.start_scroll(0.0, self.config.timing.scroll);
            }
            Event::AnchorClicked(anchor) => {
                if let Some((_, target)) = self.navigation.resolve_target(&self.dom, anchor) {
                    let y = self.navigation.scroll_target(&self.dom, target);
                    self.start_scroll(y, self.config.timing.scroll);
                }
            }
            Event::ResumeDownloadClicked => {
                self.notify("Resume download would be implemented here!", NotificationKind::Info);
            }
            Event::NotificationClosed(id) | Event::NotificationClicked(id) => {
                self.notifier.dismiss(&mut self.dom, &mut self.scheduler, id);
            }
            Event::PhotoLoaded => self.photo.handle_loaded(&mut self.dom),
            Event::PhotoFailed => {
                self.photo.handle_failed(&mut self.dom);
            }
            Event::VisibilityChanged { hidden } => {
                self.state.page_hidden = hidden;
                if hidden {
                    tracing::info!("Page hidden");
                } else {
                    tracing::info!("Page visible");
                }
            }
            Event::Unload => self.destroy(),
        }
    }

    /// Translate a click on `target` into the events it triggers.
    ///
    /// The document-level event comes first, then the handler of the
    /// innermost interactive element containing `target`, if any.
    pub fn click(&mut self, target: NodeId) {
        self.dispatch(Event::DocumentClicked(target));
        if let Some(event) = self.click_event(target) {
            self.dispatch(event);
        }
    }

    fn click_event(&self, target: NodeId) -> Option<Event> {
        let notifications = self.notifier.attached();
        let submit = self.contact.submit_button();
        let mut current = Some(target);

        while let Some(node) = current {
            if Some(node) == self.theme.toggle_button() {
                return Some(Event::ThemeToggleClicked);
            }
            if Some(node) == self.menu.toggle_button() {
                return Some(Event::NavToggleClicked);
            }
            if self.navigation.is_link(node) {
                return Some(Event::NavLinkClicked(node));
            }
            if self.navigation.is_anchor(node) {
                return Some(Event::AnchorClicked(node));
            }
            if Some(node) == self.back_to_top.button() {
                return Some(Event::BackToTopClicked);
            }
            if Some(node) == self.contact.download_button() {
                return Some(Event::ResumeDownloadClicked);
            }
            if Some(node) == submit {
                return Some(Event::FormSubmitted);
            }
            for (id, element) in &notifications {
                if Some(node) == self.notifier.close_button(*id) {
                    return Some(Event::NotificationClosed(*id));
                }
                if node == *element {
                    return Some(Event::NotificationClicked(*id));
                }
            }
            current = self.dom.parent(node);
        }
        None
    }

    /// Advance virtual time by `dt`, running every task that falls due
    pub fn advance(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task);
        }
        self.scheduler.advance_to(until);
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::NotificationSlideIn(id) => self.notifier.slide_in(&mut self.dom, id),
            Task::NotificationDismiss(id) => {
                self.notifier.dismiss(&mut self.dom, &mut self.scheduler, id);
            }
            Task::NotificationRemove(id) => self.notifier.remove(&mut self.dom, id),
            Task::SkillFill(index) => self.skills.fill(&mut self.dom, index),
            Task::TypewriterStep => self.run_typewriter(),
            Task::ThemeSettled => {
                self.scheduler
                    .schedule_after(self.config.timing.particle_refresh, Task::RegenerateParticles);
                self.theme.update_header(&mut self.dom, self.state.theme);
            }
            Task::RegenerateParticles => {
                self.particles.generate(&mut self.dom, &mut self.rng);
            }
            Task::BodyTransitionStart => {
                self.theme.begin_transition(&mut self.dom);
                self.scheduler
                    .schedule_after(self.config.timing.body_transition, Task::BodyTransitionEnd);
            }
            Task::BodyTransitionEnd => self.theme.end_transition(&mut self.dom),
            Task::ScrollFrame(generation) => self.scroll_frame(generation),
            Task::ResizeSettled => {
                self.resize.fired();
                self.handle_resize();
            }
            Task::SubmitComplete(submission) => self.complete_contact(submission),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Public operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Flip the theme, persist it and announce it
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self
            .theme
            .toggle(&mut self.state.theme, &mut self.dom, &mut *self.prefs);

        let timing = &self.config.timing;
        self.scheduler.schedule_after(timing.frame, Task::BodyTransitionStart);
        self.scheduler.schedule_after(timing.theme_settle, Task::ThemeSettled);

        self.show_notification(
            &format!("Switched to {} theme!", theme),
            NotificationKind::Success,
            THEME_NOTICE,
        );
        theme
    }

    /// Fill the skill bars. Returns false if they were already animated.
    pub fn animate_skills(&mut self) -> bool {
        if !self
            .skills
            .start(&mut self.state.skills_animated, &mut self.scheduler)
        {
            return false;
        }
        self.show_notification("Skills animated!", NotificationKind::Success, SKILLS_NOTICE);
        true
    }

    pub fn show_notification(
        &mut self,
        message: &str,
        kind: NotificationKind,
        duration: Duration,
    ) -> NotificationId {
        self.notifier.show(
            &mut self.dom,
            &mut self.scheduler,
            self.state.theme,
            message,
            kind,
            duration,
        )
    }

    /// Show a notification for the default duration
    pub fn notify(&mut self, message: &str, kind: NotificationKind) -> NotificationId {
        let duration = self.config.timing.notification_duration;
        self.show_notification(message, kind, duration)
    }

    /// Activate `link` and scroll to its section. Returns false if the
    /// target section does not exist.
    pub fn navigate(&mut self, link: NodeId) -> bool {
        let Some((id, target)) = self.navigation.resolve_target(&self.dom, link) else {
            return false;
        };
        let y = self.navigation.scroll_target(&self.dom, target);
        tracing::info!("Navigating to section: #{}, position: {}", id, y);

        self.navigation
            .activate(&mut self.dom, link, &id, &mut self.state.navigation);
        self.menu.close(&mut self.dom, &mut self.state.menu_open);
        self.start_scroll(y, self.config.timing.nav_scroll);

        self.show_notification(
            &format!("Navigated to {} section", id.to_uppercase()),
            NotificationKind::Info,
            NAVIGATION_NOTICE,
        );
        true
    }

    /// Stop observing sections and cards; timers and the photo observer
    /// keep running until the page goes away
    pub fn destroy(&mut self) {
        self.observer.disconnect();
        tracing::info!("Portfolio cleaned up");
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn skills(&self) -> &SkillsAnimator {
        &self.skills
    }

    /// Virtual time since the page started
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Delay until the next scheduled task, for hosts that sleep between frames
    pub fn time_until_next(&self) -> Option<Duration> {
        self.scheduler.time_until_next()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Internals
    // ═══════════════════════════════════════════════════════════════════════

    fn run_typewriter(&mut self) {
        if let Some(delay) = self
            .typewriter
            .step(&mut self.dom, &mut self.state.typewriter)
        {
            self.scheduler.schedule_after(delay, Task::TypewriterStep);
        }
    }

    fn toggle_menu(&mut self) {
        let Some(open) = self.menu.toggle(&mut self.dom, &mut self.state.menu_open) else {
            return;
        };
        let message = if open { "Mobile menu opened" } else { "Mobile menu closed" };
        self.show_notification(message, NotificationKind::Info, MENU_NOTICE);
    }

    /// Close the menu on wide viewports, regenerate particles, refresh the
    /// active link and reveal whatever the new viewport uncovers
    fn handle_resize(&mut self) {
        self.menu
            .handle_resize(&mut self.dom, &mut self.state.menu_open);
        self.particles.generate(&mut self.dom, &mut self.rng);
        self.navigation
            .update_active_link(&mut self.dom, &mut self.state.navigation);
        self.check_visibility();
    }

    /// Scroll-driven updates, each rate-limited on its own
    fn on_scrolled(&mut self) {
        let now = self.scheduler.now();
        if self.nav_throttle.try_acquire(now) {
            self.navigation
                .update_active_link(&mut self.dom, &mut self.state.navigation);
        }
        if self.header_throttle.try_acquire(now) {
            self.theme.update_header(&mut self.dom, self.state.theme);
        }
        if self.back_to_top_throttle.try_acquire(now) {
            self.back_to_top.update(&mut self.dom);
        }
        self.check_visibility();
    }

    fn check_visibility(&mut self) {
        for node in self.observer.take_intersecting(&self.dom) {
            if self.skills.is_skills_section(node) {
                self.animate_skills();
            }
            self.dom.add_class(node, "fade-in");
            self.dom.add_class(node, "visible");
        }
        for node in self.photo_observer.take_intersecting(&self.dom) {
            self.dom.add_class(node, "animate-in");
        }
    }

    /// Begin a smooth scroll, superseding any running one
    fn start_scroll(&mut self, target: f64, duration: Duration) {
        self.state.scroll_generation += 1;
        let generation = self.state.scroll_generation;
        self.state.scroll = Some(SmoothScroll::new(
            self.dom.scroll_y(),
            target,
            self.scheduler.now(),
            duration,
            generation,
        ));
        self.scheduler
            .schedule_after(self.config.timing.frame, Task::ScrollFrame(generation));
    }

    fn scroll_frame(&mut self, generation: u64) {
        let (y, done) = match &self.state.scroll {
            Some(scroll) if scroll.generation() == generation => {
                scroll.position_at(self.scheduler.now())
            }
            _ => return,
        };

        self.dom.scroll_to(y);
        self.on_scrolled();

        if done {
            self.state.scroll = None;
        } else {
            self.scheduler
                .schedule_after(self.config.timing.frame, Task::ScrollFrame(generation));
        }
    }

    fn submit_contact(&mut self) {
        match self.contact.submit(&mut self.dom, &mut self.state.submitting) {
            SubmitOutcome::Invalid => {
                self.notify(
                    "Please fill in all required fields correctly.",
                    NotificationKind::Error,
                );
            }
            SubmitOutcome::Busy => {
                tracing::debug!("Submission already in progress");
            }
            SubmitOutcome::Started(submission) => {
                self.scheduler.schedule_after(
                    self.config.timing.submit_delay,
                    Task::SubmitComplete(submission),
                );
            }
        }
    }

    fn complete_contact(&mut self, submission: ContactSubmission) {
        self.contact
            .complete_submission(&mut self.dom, &mut self.state.submitting);
        self.notify(
            "Thank you for your message! I will get back to you soon.",
            NotificationKind::Success,
        );

        match serde_json::to_string(&submission) {
            Ok(json) => tracing::info!(submission = %json, "Contact form submitted"),
            Err(e) => tracing::warn!("Failed to serialize submission: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::page::build_page;
    use crate::preferences::MemoryPreferences;

    fn portfolio() -> Portfolio<MemoryDom> {
        let content = SiteContent::default();
        let mut dom = MemoryDom::new(1280.0, 800.0);
        build_page(&mut dom, &content);
        let mut p = Portfolio::new(
            dom,
            Box::new(MemoryPreferences::new()),
            PortfolioConfig::default(),
            content,
        )
        .unwrap()
        .with_seed(42);
        p.start();
        p
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("a").as_str(), "a");
    }

    #[test]
    fn start_types_first_character() {
        let p = portfolio();
        let typed = p.dom().element_by_id("typewriter").unwrap();
        assert_eq!(p.dom().text_content(typed), "S");
        assert_eq!(p.state().typewriter.cursor, 1);
    }

    #[test]
    fn start_marks_home_and_hero_visible() {
        let p = portfolio();
        assert_eq!(p.state().navigation.active.as_deref(), Some("home"));
        let home = p.dom().element_by_id("home").unwrap();
        assert!(p.dom().has_class(home, "visible"));
        let skills = p.dom().element_by_id("skills").unwrap();
        assert!(p.dom().has_class(skills, "fade-in"));
        assert!(!p.dom().has_class(skills, "visible"));
    }

    #[test]
    fn theme_toggle_runs_follow_up_tasks() {
        let mut p = portfolio();
        let particles = p.dom().element_by_id("particles").unwrap();
        let before = p.dom().children(particles);

        assert_eq!(p.toggle_theme(), Theme::Dark);
        let id = p.notifier().visible().unwrap();
        assert_eq!(p.notifier().message(p.dom(), id).as_deref(), Some("Switched to dark theme!"));

        p.advance(ms(16));
        let body = p.dom().body();
        assert_eq!(p.dom().style(body, "transition").as_deref(), Some("all 0.3s ease"));

        // Settle at 100ms, particles at 400ms
        p.advance(ms(300));
        assert!(p.dom().exists(before[0]));
        p.advance(ms(100));
        assert!(!p.dom().exists(before[0]));
        assert_eq!(p.dom().children(particles).len(), 50);
        assert_eq!(p.dom().style(body, "transition"), None);
    }

    #[test]
    fn click_routes_to_innermost_handler() {
        let mut p = portfolio();
        let toggle = p.menu().toggle_button().unwrap();
        let span = p.dom().children(toggle)[0];

        p.click(span);
        assert!(p.state().menu_open);

        let body = p.dom().body();
        p.click(body);
        assert!(!p.state().menu_open);
    }

    #[test]
    fn newer_scroll_supersedes_older() {
        let mut p = portfolio();
        let links = p.navigation().links().to_vec();
        let contact = *links.last().unwrap();
        let about = links[1];

        p.click(contact);
        p.advance(ms(100));
        p.click(about);
        p.advance(ms(2000));

        let about_top = p.dom().offset_top(p.dom().element_by_id("about").unwrap());
        assert_eq!(p.dom().scroll_y(), about_top - 80.0);
        assert!(p.state().scroll.is_none());
    }

    #[test]
    fn resize_is_debounced() {
        let mut p = portfolio();
        let particles = p.dom().element_by_id("particles").unwrap();
        let first = p.dom().children(particles)[0];

        p.dispatch(Event::Resize { width: 1000.0, height: 800.0 });
        p.advance(ms(200));
        p.dispatch(Event::Resize { width: 900.0, height: 800.0 });
        p.advance(ms(200));
        assert!(p.dom().exists(first));

        p.advance(ms(50));
        assert!(!p.dom().exists(first));
    }

    #[test]
    fn missing_photo_shows_placeholder() {
        let content = SiteContent {
            photo: None,
            ..SiteContent::default()
        };
        let mut dom = MemoryDom::default();
        build_page(&mut dom, &content);
        let mut p = Portfolio::new(
            dom,
            Box::new(MemoryPreferences::new()),
            PortfolioConfig::default(),
            content,
        )
        .unwrap();
        p.start();

        let placeholder = p.dom().elements_by_class("profile-placeholder");
        assert_eq!(placeholder.len(), 1);
        let text = p.dom().find_descendant_by_class(placeholder[0], "placeholder-text").unwrap();
        assert_eq!(p.dom().text_content(text), "HT");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = PortfolioConfig::default();
        config.validation.email_pattern = "(".to_string();
        let result = Portfolio::new(
            MemoryDom::default(),
            Box::new(MemoryPreferences::new()),
            config,
            SiteContent::default(),
        );
        assert!(result.is_err());
    }
}
