//! Portfolio Core Library
//!
//! Behavior of a single-page personal portfolio, expressed as plain state
//! machines over an abstract document.
//!
//! ## Overview
//!
//! Every interactive piece of the page lives here:
//!
//! - **Theme**: light/dark switching persisted in a preference store
//! - **Navigation**: scroll-driven active link, smooth scrolling, mobile menu
//! - **Typewriter**: role strings typed and erased on a timer loop
//! - **Particles**: decorative background regenerated on theme change and resize
//! - **Visibility**: one-shot entrance animations and the skills progress bars
//! - **Contact form**: inline validation and a simulated submission
//! - **Notifications**: a single transient toast at a time
//!
//! Nothing here talks to a real browser. Controllers operate on the [`Dom`]
//! trait and schedule work on a virtual-time [`Scheduler`], so the whole page
//! can be driven deterministically from tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{page, MemoryDom, MemoryPreferences, Portfolio, PortfolioConfig, SiteContent};
//! use std::time::Duration;
//!
//! let content = SiteContent::default();
//! let mut dom = MemoryDom::new(1280.0, 800.0);
//! page::build_page(&mut dom, &content);
//!
//! let mut portfolio = Portfolio::new(
//!     dom,
//!     Box::new(MemoryPreferences::new()),
//!     PortfolioConfig::default(),
//!     content,
//! )?;
//! portfolio.start();
//! portfolio.toggle_theme();
//! portfolio.advance(Duration::from_millis(500));
//! ```

pub mod config;
pub mod contact;
pub mod dom;
pub mod error;
pub mod navigation;
pub mod notification;
pub mod page;
pub mod particles;
pub mod portfolio;
pub mod preferences;
pub mod profile_photo;
pub mod scheduler;
pub mod theme;
pub mod typewriter;
pub mod visibility;

// Re-exports
pub use config::{PortfolioConfig, SiteContent};
pub use contact::{ContactForm, ContactSubmission, SubmitOutcome, ValidationRules};
pub use dom::{Dom, MemoryDom, NodeId};
pub use error::{PortfolioError, PortfolioResult};
pub use navigation::{BackToTop, MobileMenu, Navigation, NavigationState, SmoothScroll};
pub use notification::{NotificationId, NotificationKind, Notifier};
pub use particles::ParticleField;
pub use portfolio::{AppState, Event, Key, Portfolio, Task};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use profile_photo::ProfilePhoto;
pub use scheduler::{Debounce, Scheduler, Throttle, TimerId};
pub use theme::{Theme, ThemeController};
pub use typewriter::{Typewriter, TypewriterState};
pub use visibility::{SkillsAnimator, VisibilityObserver};
