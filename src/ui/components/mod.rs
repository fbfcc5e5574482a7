//! UI building blocks shared across rendering and state modules.

/// Search prompt with the loading indicator.
pub mod prompt;
/// Table rendering and row construction.
pub mod tables;

pub use prompt::{ProgressState, PromptContext, render_prompt};
pub use tables::render_table;
