//! Core crate for browsing the advocate directory from the terminal.
//!
//! Records are fetched once by a [`store::RecordSource`], owned by a
//! [`store::Directory`] and narrowed by a case-insensitive substring search.
//! The [`ui`] module renders them as a table; embedders can also drive the
//! store and table model directly.

pub mod app_dirs;
pub mod columns;
pub mod logging;
pub mod records;
pub mod search;
pub mod store;
pub mod table;
pub mod ui;

pub use records::Record;
pub use store::{Directory, FetchError, RecordSource};
pub use ui::{BrowseOutcome, SearchUi, UiConfig, run};
