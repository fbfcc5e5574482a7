use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a record fetch can fail.
///
/// None of these are fatal: the directory keeps whatever it showed before and
/// surfaces the message in the status line.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} responded with HTTP {status}")]
    Status { endpoint: String, status: u16 },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("response is not a {{ data: [...] }} advocate list: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("fetch worker exited without a result")]
    WorkerGone,
}
