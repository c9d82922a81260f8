//! Color constants for both page themes.
//!
//! Accent colors match the ones the core writes into inline styles
//! (validation borders, notification accents).

// === ACCENT ===
pub const TEAL: &str = "#1FB8CD";
pub const TEAL_GLOW: &str = "rgba(31, 184, 205, 0.35)";
pub const SUN: &str = "#FFD700";

// === SEMANTIC ===
pub const DANGER: &str = "#ef4444";
pub const WARNING: &str = "#f59e0b";
pub const INFO: &str = "#3b82f6";

// === LIGHT ===
pub const LIGHT_BACKGROUND: &str = "#fcfcf9";
pub const LIGHT_SURFACE: &str = "#ffffff";
pub const LIGHT_TEXT: &str = "#1e293b";
pub const LIGHT_TEXT_MUTED: &str = "#64748b";
pub const LIGHT_BORDER: &str = "rgba(0, 0, 0, 0.1)";

// === DARK ===
pub const DARK_BACKGROUND: &str = "#0f0c29";
pub const DARK_SURFACE: &str = "#1b1740";
pub const DARK_TEXT: &str = "#f5f5f5";
pub const DARK_TEXT_MUTED: &str = "rgba(245, 245, 245, 0.65)";
pub const DARK_BORDER: &str = "rgba(255, 255, 255, 0.1)";
