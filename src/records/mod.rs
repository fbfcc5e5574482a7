//! Advocate records and the built-in seed list.

mod record;
pub mod seed;

pub use record::Record;
