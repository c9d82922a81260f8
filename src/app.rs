use std::time::{Duration, Instant};

use dioxus::prelude::*;
use portfolio_core::{Dom, Event};

use crate::components::PageView;
use crate::context::{create_portfolio, SharedPortfolio};
use crate::theme::{theme_variables, GLOBAL_STYLES};

const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

/// Shortest sleep between two frames
const FRAME: Duration = Duration::from_millis(16);

/// Longest sleep while nothing is scheduled; bounds resize detection latency
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Root application component.
///
/// Builds the page model once, then hands it to [`PortfolioRoot`].
#[component]
pub fn App() -> Element {
    let portfolio: Option<SharedPortfolio> = use_hook(|| {
        let window = dioxus::desktop::window();
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());

        match create_portfolio(size.width, size.height) {
            Ok(mut portfolio) => {
                portfolio.start();
                tracing::info!("Portfolio started");
                Some(Signal::new(portfolio))
            }
            Err(e) => {
                tracing::error!("Failed to build portfolio: {}", e);
                None
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        style { {theme_variables()} }
        style { {GLOBAL_STYLES} }
        if let Some(portfolio) = portfolio {
            PortfolioRoot { portfolio }
        } else {
            div { class: "startup-error",
                "The portfolio could not be loaded. See the log for details."
            }
        }
    }
}

/// Provides the portfolio context and drives its clock.
#[component]
fn PortfolioRoot(portfolio: SharedPortfolio) -> Element {
    use_context_provider(|| portfolio);

    use_future(move || drive_frames(portfolio));

    use_drop(move || {
        if let Ok(mut p) = portfolio.try_write() {
            p.dispatch(Event::Unload);
        }
    });

    rsx! {
        PageView {}
    }
}

/// Advance virtual time with real elapsed time and forward window changes.
///
/// Sleeps until the next scheduled task (bounded by [`FRAME`] and
/// [`IDLE_POLL`]) so an idle page does not re-render every frame.
async fn drive_frames(mut portfolio: SharedPortfolio) {
    let mut last = Instant::now();

    loop {
        let wait = portfolio
            .peek()
            .time_until_next()
            .unwrap_or(IDLE_POLL)
            .clamp(FRAME, IDLE_POLL);
        tokio::time::sleep(wait).await;

        let window = dioxus::desktop::window();
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let hidden = window.is_minimized();

        let (resized, was_hidden) = {
            let p = portfolio.peek();
            let dom = p.dom();
            let resized = (size.width - dom.viewport_width()).abs() >= 1.0
                || (size.height - dom.viewport_height()).abs() >= 1.0;
            (resized, p.state().page_hidden)
        };

        let now = Instant::now();
        let elapsed = now - last;
        last = now;

        let mut p = portfolio.write();
        if resized {
            tracing::debug!(width = size.width, height = size.height, "window resized");
            p.dispatch(Event::Resize {
                width: size.width,
                height: size.height,
            });
        }
        if hidden != was_hidden {
            p.dispatch(Event::VisibilityChanged { hidden });
        }
        p.advance(elapsed);
    }
}
