//! Portfolio context provider.
//!
//! Provides the page model and its controllers to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! use_context_provider(|| portfolio);
//!
//! // In child components
//! let portfolio = use_portfolio();
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use portfolio_core::{
    page, FilePreferences, MemoryDom, Portfolio, PortfolioResult, PortfolioConfig, SiteContent,
};

/// The running page: a [`MemoryDom`] owned by the orchestrator
pub type SharedPortfolio = Signal<Portfolio<MemoryDom>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the configuration and content resolved at launch
pub fn get_settings() -> (PortfolioConfig, SiteContent) {
    crate::get_settings()
}

/// Build the page model and wire it to preferences in the data directory.
///
/// The returned portfolio is not started yet.
pub fn create_portfolio(width: f64, height: f64) -> PortfolioResult<Portfolio<MemoryDom>> {
    let (config, content) = get_settings();

    let mut dom = MemoryDom::new(width, height);
    page::build_page(&mut dom, &content);

    let prefs = FilePreferences::open(get_data_dir());
    tracing::info!("Preferences at {:?}", prefs.path());

    Portfolio::new(dom, Box::new(prefs), config, content)
}

/// Hook to access the portfolio from context.
///
/// # Example
///
/// ```ignore
/// let mut portfolio = use_portfolio();
///
/// // Read the model
/// let theme = portfolio.read().state().theme;
///
/// // Feed an event
/// portfolio.write().dispatch(Event::ThemeToggleClicked);
/// ```
pub fn use_portfolio() -> SharedPortfolio {
    use_context::<SharedPortfolio>()
}
