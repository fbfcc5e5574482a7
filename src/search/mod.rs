//! Client-side filtering of the advocate list.
//!
//! Matching is a plain case-insensitive substring scan over the name, city,
//! degree, specialty and experience fields of each record. The result is
//! always a stable subsequence of the input.

mod filter;

pub use filter::{SearchTerm, filter, filter_indices};
