//! Palette and global stylesheet.

pub mod colors;
mod styles;

pub use styles::{theme_variables, GLOBAL_STYLES};
