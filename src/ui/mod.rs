//! Interactive terminal UI for browsing advocates.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, state
//! management, and the widgets and themes the terminal application draws with.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use config::UiConfig;
pub use outcome::BrowseOutcome;
pub use runtime::run;
pub use state::App;
