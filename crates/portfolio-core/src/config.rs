//! Configuration and page content.
//!
//! [`PortfolioConfig`] carries every tunable constant (timings, layout
//! offsets, particle ranges, observer margins, validation rules). All fields
//! default to the values the page ships with, so a config file only needs
//! the keys it overrides.
//!
//! [`SiteContent`] describes what the page shows: owner, typewriter roles,
//! sections, skills and contact fields.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::theme::Theme;

/// Permissive RFC 5322-style address pattern
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

/// Durations are written as integer milliseconds in config files
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Preference key holding the theme
    pub storage_key: String,
    /// Theme used when nothing (or garbage) is stored
    pub default_theme: Theme,
    pub timing: TimingConfig,
    pub layout: LayoutConfig,
    pub particles: ParticleConfig,
    pub observer: ObserverConfig,
    pub validation: ValidationConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            storage_key: "harsh-portfolio-theme".to_string(),
            default_theme: Theme::Light,
            timing: TimingConfig::default(),
            layout: LayoutConfig::default(),
            particles: ParticleConfig::default(),
            observer: ObserverConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl PortfolioConfig {
    /// Load a JSON config file; absent keys take their defaults
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no controller can work with
    pub fn validate(&self) -> PortfolioResult<()> {
        let p = &self.particles;
        if p.min_size > p.max_size {
            return Err(PortfolioError::Config(format!(
                "particle size range is inverted ({} > {})",
                p.min_size, p.max_size
            )));
        }
        if p.min_duration_secs > p.max_duration_secs {
            return Err(PortfolioError::Config(format!(
                "particle duration range is inverted ({} > {})",
                p.min_duration_secs, p.max_duration_secs
            )));
        }

        let o = &self.observer;
        for (name, value) in [
            ("root_margin", o.root_margin),
            ("threshold", o.threshold),
            ("photo_threshold", o.photo_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PortfolioError::Config(format!(
                    "observer {} must be within 0..=1, got {}",
                    name, value
                )));
            }
        }
        if o.root_margin * 2.0 >= 1.0 {
            return Err(PortfolioError::Config(
                "observer root_margin leaves no visible region".to_string(),
            ));
        }

        // A zero delay would reschedule a task at the instant it ran
        let t = &self.timing;
        for (name, value) in [
            ("frame", t.frame),
            ("type_delay", t.type_delay),
            ("delete_delay", t.delete_delay),
        ] {
            if value.is_zero() {
                return Err(PortfolioError::Config(format!("timing {} must be positive", name)));
            }
        }

        if self.storage_key.is_empty() {
            return Err(PortfolioError::Config("storage_key is empty".to_string()));
        }

        regex::Regex::new(&self.validation.email_pattern)?;
        Ok(())
    }
}

/// Every timer and rate limit used by the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    #[serde(with = "duration_ms")]
    pub type_delay: Duration,
    #[serde(with = "duration_ms")]
    pub full_pause: Duration,
    #[serde(with = "duration_ms")]
    pub delete_delay: Duration,
    #[serde(with = "duration_ms")]
    pub empty_pause: Duration,
    /// Delay after a theme toggle before dependent visuals are refreshed
    #[serde(with = "duration_ms")]
    pub theme_settle: Duration,
    /// Extra delay before particles are regenerated for a new theme
    #[serde(with = "duration_ms")]
    pub particle_refresh: Duration,
    #[serde(with = "duration_ms")]
    pub body_transition: Duration,
    #[serde(with = "duration_ms")]
    pub resize_debounce: Duration,
    #[serde(with = "duration_ms")]
    pub nav_throttle: Duration,
    #[serde(with = "duration_ms")]
    pub header_throttle: Duration,
    #[serde(with = "duration_ms")]
    pub back_to_top_throttle: Duration,
    /// One animation frame
    #[serde(with = "duration_ms")]
    pub frame: Duration,
    #[serde(with = "duration_ms")]
    pub notification_duration: Duration,
    #[serde(with = "duration_ms")]
    pub notification_slide: Duration,
    #[serde(with = "duration_ms")]
    pub submit_delay: Duration,
    #[serde(with = "duration_ms")]
    pub skill_stagger: Duration,
    /// Smooth scroll duration for navigation links
    #[serde(with = "duration_ms")]
    pub nav_scroll: Duration,
    /// Smooth scroll duration for everything else
    #[serde(with = "duration_ms")]
    pub scroll: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            full_pause: Duration::from_millis(2000),
            delete_delay: Duration::from_millis(50),
            empty_pause: Duration::from_millis(500),
            theme_settle: Duration::from_millis(100),
            particle_refresh: Duration::from_millis(300),
            body_transition: Duration::from_millis(300),
            resize_debounce: Duration::from_millis(250),
            nav_throttle: Duration::from_millis(100),
            header_throttle: Duration::from_millis(16),
            back_to_top_throttle: Duration::from_millis(100),
            frame: Duration::from_millis(16),
            notification_duration: Duration::from_millis(5000),
            notification_slide: Duration::from_millis(300),
            submit_delay: Duration::from_millis(2000),
            skill_stagger: Duration::from_millis(200),
            nav_scroll: Duration::from_millis(800),
            scroll: Duration::from_millis(1000),
        }
    }
}

/// Pixel offsets and breakpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Added to the scroll offset when picking the active section
    pub scroll_offset: f64,
    /// Fixed header height subtracted from scroll targets
    pub header_height: f64,
    /// Viewports wider than this close the mobile menu
    pub mobile_breakpoint: f64,
    pub header_scrolled_threshold: f64,
    pub back_to_top_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scroll_offset: 120.0,
            header_height: 80.0,
            mobile_breakpoint: 768.0,
            header_scrolled_threshold: 50.0,
            back_to_top_threshold: 500.0,
        }
    }
}

/// Particle field generation ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub min_size: f64,
    pub max_size: f64,
    pub max_delay_secs: f64,
    pub min_duration_secs: f64,
    pub max_duration_secs: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            min_size: 2.0,
            max_size: 6.0,
            max_delay_secs: 6.0,
            min_duration_secs: 4.0,
            max_duration_secs: 8.0,
        }
    }
}

/// Viewport intersection parameters, as fractions of the viewport/element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Shrinks the trigger region at top and bottom
    pub root_margin: f64,
    /// Portion of an element that must be inside the region
    pub threshold: f64,
    /// Threshold for the profile photo entrance
    pub photo_threshold: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            root_margin: 0.1,
            threshold: 0.1,
            photo_threshold: 0.3,
        }
    }
}

/// Contact form rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub email_pattern: String,
    /// Minimum trimmed length by field name
    pub min_lengths: BTreeMap<String, usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let min_lengths = [("name", 2), ("subject", 3), ("message", 10)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Self {
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            min_lengths,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Page content
// ═══════════════════════════════════════════════════════════════════════════

/// Everything the page displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub owner: String,
    pub tagline: String,
    /// Strings cycled by the typewriter
    pub roles: Vec<String>,
    /// Profile photo location; `None` renders the placeholder directly
    pub photo: Option<String>,
    pub sections: Vec<SectionContent>,
    pub skills: Vec<SkillContent>,
    pub fields: Vec<FieldContent>,
}

impl SiteContent {
    /// Load page content from a JSON file; absent keys take the defaults
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let content: Self = serde_json::from_str(&raw)?;
        if content.sections.is_empty() {
            return Err(PortfolioError::Config("content has no sections".to_string()));
        }
        Ok(content)
    }

    /// Uppercase initials of the first two words of the owner's name
    pub fn initials(&self) -> String {
        self.owner
            .split_whitespace()
            .take(2)
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn section(&self, id: &str) -> Option<&SectionContent> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// A navigable page section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionContent {
    pub id: String,
    pub title: String,
    /// Laid-out height in logical pixels
    pub height: f64,
    #[serde(default)]
    pub cards: Vec<CardContent>,
}

/// A card inside a section (experience, project, education, certification)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardContent {
    /// Element class, e.g. `project-card`
    pub class: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillContent {
    pub name: String,
    pub percentage: u8,
}

/// Input flavour of a contact field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
}

impl FieldKind {
    /// Value of the `type` attribute (textareas carry none)
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Textarea => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldContent {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

fn card(class: &str, title: &str, body: &str) -> CardContent {
    CardContent {
        class: class.to_string(),
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn section(id: &str, title: &str, height: f64, cards: Vec<CardContent>) -> SectionContent {
    SectionContent {
        id: id.to_string(),
        title: title.to_string(),
        height,
        cards,
    }
}

fn field(name: &str, label: &str, kind: FieldKind) -> FieldContent {
    FieldContent {
        name: name.to_string(),
        label: label.to_string(),
        kind,
        required: true,
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            owner: "Harsh Tyagi".to_string(),
            tagline: "Software Engineer | Railway Systems Expert".to_string(),
            roles: vec![
                "Software Engineer".to_string(),
                "Full Stack Developer".to_string(),
                "Railway Systems Engineer".to_string(),
            ],
            photo: Some("assets/profile.jpg".to_string()),
            sections: vec![
                section("home", "Home", 800.0, vec![]),
                section("about", "About", 600.0, vec![]),
                section(
                    "experience",
                    "Experience",
                    900.0,
                    vec![
                        card(
                            "experience-card",
                            "Software Engineer",
                            "Signalling and interlocking software for railway networks.",
                        ),
                        card(
                            "experience-card",
                            "Full Stack Developer",
                            "Internal dashboards and data pipelines.",
                        ),
                    ],
                ),
                section(
                    "projects",
                    "Projects",
                    900.0,
                    vec![
                        card(
                            "project-card",
                            "Train Tracker",
                            "Live positions of trains on an interactive map.",
                        ),
                        card(
                            "project-card",
                            "Timetable Planner",
                            "Constraint-based timetable generation.",
                        ),
                        card(
                            "project-card",
                            "Portfolio",
                            "This site, with themes and animations.",
                        ),
                    ],
                ),
                section("skills", "Skills", 700.0, vec![]),
                section(
                    "education",
                    "Education",
                    800.0,
                    vec![
                        card(
                            "education-card",
                            "B.Tech Computer Science",
                            "Graduated with honours.",
                        ),
                        card(
                            "certification-item",
                            "Cloud Practitioner",
                            "Cloud fundamentals certification.",
                        ),
                        card(
                            "certification-item",
                            "Scrum Master",
                            "Agile delivery certification.",
                        ),
                    ],
                ),
                section("contact", "Contact", 900.0, vec![]),
            ],
            skills: [
                ("Rust", 85),
                ("JavaScript", 90),
                ("Python", 80),
                ("SQL", 75),
                ("Railway Signalling", 88),
            ]
            .into_iter()
            .map(|(name, percentage)| SkillContent {
                name: name.to_string(),
                percentage,
            })
            .collect(),
            fields: vec![
                field("name", "Name", FieldKind::Text),
                field("email", "Email", FieldKind::Email),
                field("subject", "Subject", FieldKind::Text),
                field("message", "Message", FieldKind::Textarea),
            ],
        }
    }
}
