//! TUI (Text User Interface) support for lmpmap
//!
//! Shared theme used by the player and the CLI output.

pub mod theme;

pub use theme::{current_theme, Theme};
