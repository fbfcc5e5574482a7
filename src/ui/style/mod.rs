//! Visual styling for the terminal UI.
//!
//! Themes are plain colour schemes. A small set ships with the binary and
//! can be selected by name or alias.

mod theme;

pub use theme::{BUILTIN_THEMES, Theme, ThemeDefinition, by_name, default_theme, names};
