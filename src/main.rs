#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{PortfolioConfig, SiteContent};
use tracing_subscriber::EnvFilter;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Configuration and content resolved before launch
static SETTINGS: OnceLock<(PortfolioConfig, SiteContent)> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    })
}

/// Get the configuration and page content (defaults if launch did not set them)
pub fn get_settings() -> (PortfolioConfig, SiteContent) {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Personal portfolio page as a desktop app
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Single-page personal portfolio")]
struct Args {
    /// Data directory holding the stored preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON file overriding timings, layout and validation rules
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file replacing the page content
    #[arg(long)]
    content: Option<PathBuf>,
}

fn load_settings(args: &Args) -> anyhow::Result<(PortfolioConfig, SiteContent)> {
    let config = match &args.config {
        Some(path) => PortfolioConfig::load(path)?,
        None => PortfolioConfig::default(),
    };
    let content = match &args.content {
        Some(path) => SiteContent::load(path)?,
        None => SiteContent::default(),
    };
    Ok((config, content))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let data_dir = args.data_dir.clone().unwrap_or_else(get_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());

    let (config, content) = load_settings(&args)?;
    let title = format!("{} - Portfolio", content.owner);
    let _ = SETTINGS.set((config, content));

    tracing::info!("Starting portfolio with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
