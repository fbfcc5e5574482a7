//! `tracing` subscriber setup.
//!
//! The interactive browser owns the terminal, so its events go to a log file.
//! Non-interactive runs write to stderr. `RUST_LOG` overrides the configured
//! level in both cases.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Level used when neither the configuration nor `RUST_LOG` sets one.
pub const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "advocates.log";

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// The configured file, or `advocates.log` in the data directory.
    pub fn file_or_default(file: Option<PathBuf>) -> Result<Self> {
        match file {
            Some(path) => Ok(Self::File(path)),
            None => Ok(Self::File(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))),
        }
    }
}

/// Build the event filter: `RUST_LOG` when set and valid, else `level`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber. Calling this twice is an error.
pub fn initialize(level: &str, target: &LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(level));
    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
