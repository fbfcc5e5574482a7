//! Loading and owning the advocate list.
//!
//! A [`RecordSource`] performs the single read, [`loader::spawn`] runs it off
//! the UI thread, and [`Directory`] holds the resulting full list together
//! with the display list derived from the current search.

mod directory;
mod error;
pub mod loader;
mod source;

pub use directory::{Directory, Phase};
pub use error::FetchError;
pub use loader::{FetchResult, PendingFetch};
pub use source::{
    DEFAULT_ENDPOINT, FileSource, HttpSource, RecordSource, SeedSource, decode_payload,
};
