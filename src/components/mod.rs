//! UI components for the portfolio page.
//!
//! The page itself lives in the core's `MemoryDom`; these components only
//! mirror it and forward input back as events.

mod dom_node;
mod page_view;

pub use page_view::PageView;
