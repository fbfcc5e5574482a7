use std::path::PathBuf;
use std::time::Duration;

use advocates::logging;
use advocates::store::DEFAULT_ENDPOINT;
use advocates::table::{DEFAULT_TIMESTAMP_FORMAT, TimestampStyle};
use advocates::ui::style;
use anyhow::{Result, bail, ensure};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

use super::resolved::{ResolvedConfig, SourceKind};
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    source: SourceSection,
    ui: UiSection,
    logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SourceSection {
    endpoint: Option<String>,
    file: Option<PathBuf>,
    seed: Option<bool>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    input_title: Option<String>,
    initial_query: Option<String>,
    theme: Option<String>,
    timestamp_format: Option<String>,
    utc_timestamps: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
    level: Option<String>,
    file: Option<PathBuf>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values. A source
    /// flag on the command line replaces whichever source the files chose.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(endpoint) = cli.endpoint.clone() {
            self.source.endpoint = Some(endpoint);
            self.source.file = None;
            self.source.seed = Some(false);
        }
        if let Some(file) = cli.file.clone() {
            self.source.file = Some(file);
            self.source.seed = Some(false);
        }
        if cli.seed {
            self.source.seed = Some(true);
        }
        if let Some(timeout) = cli.timeout {
            self.source.timeout_secs = Some(timeout);
        }

        if let Some(title) = cli.title.clone() {
            self.ui.input_title = Some(title);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if let Some(level) = cli.log_level.clone() {
            self.logging.level = Some(level);
        }
    }

    /// Validate the raw values and fill in defaults.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let source = resolve_source(self.source)?;

        if let Some(theme) = &self.ui.theme
            && style::by_name(theme).is_none()
        {
            bail!(
                "unknown theme '{theme}' (available: {})",
                style::names().join(", ")
            );
        }

        let pattern = self
            .ui
            .timestamp_format
            .unwrap_or_else(|| DEFAULT_TIMESTAMP_FORMAT.to_string());
        ensure!(
            !StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)),
            "invalid timestamp_format '{pattern}'"
        );
        let timestamps = if self.ui.utc_timestamps.unwrap_or(false) {
            TimestampStyle::utc(pattern)
        } else {
            TimestampStyle::local(pattern)
        };

        let log_level = self
            .logging
            .level
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| logging::DEFAULT_LEVEL.to_string());

        Ok(ResolvedConfig {
            source,
            input_title: self.ui.input_title,
            initial_query: self.ui.initial_query.unwrap_or_default(),
            theme: self.ui.theme,
            timestamps,
            log_level,
            log_file: self.logging.file,
        })
    }
}

/// Pick the record source: seed, then file, then endpoint.
fn resolve_source(section: SourceSection) -> Result<SourceKind> {
    if section.seed.unwrap_or(false) {
        return Ok(SourceKind::Seed);
    }
    if let Some(path) = section.file {
        return Ok(SourceKind::File(path));
    }

    let url = section
        .endpoint
        .map(|endpoint| endpoint.trim().to_string())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    ensure!(
        url.starts_with("http://") || url.starts_with("https://"),
        "endpoint must be an http(s) URL, got '{url}'"
    );
    let timeout = match section.timeout_secs {
        Some(0) => bail!("timeout_secs must be greater than zero"),
        Some(secs) => Some(Duration::from_secs(secs)),
        None => None,
    };
    Ok(SourceKind::Endpoint { url, timeout })
}
