use serde::Serialize;

use crate::records::Record;

/// Result of an interactive browsing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BrowseOutcome {
    /// `true` when the user confirmed with Enter, `false` when they quit.
    pub accepted: bool,
    /// Search text at the moment the session ended.
    pub query: String,
    /// The highlighted advocate, only present for accepted sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Record>,
}
