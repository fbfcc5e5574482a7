use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use advocates::store::{FileSource, HttpSource, RecordSource, SeedSource};
use advocates::table::TimestampStyle;
use anyhow::{Context, Result};

/// Where advocate records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Seed,
    File(PathBuf),
    Endpoint {
        url: String,
        timeout: Option<Duration>,
    },
}

impl SourceKind {
    /// Instantiate the record source described by this value.
    pub fn build(&self) -> Result<Arc<dyn RecordSource>> {
        let source: Arc<dyn RecordSource> = match self {
            Self::Seed => Arc::new(SeedSource),
            Self::File(path) => Arc::new(FileSource::new(path.clone())),
            Self::Endpoint { url, timeout } => Arc::new(
                HttpSource::new(url.clone(), *timeout)
                    .with_context(|| format!("failed to prepare client for {url}"))?,
            ),
        };
        Ok(source)
    }

    fn describe(&self) -> String {
        match self {
            Self::Seed => "built-in sample advocates".to_string(),
            Self::File(path) => format!("file {}", path.display()),
            Self::Endpoint { url, timeout } => match timeout {
                Some(timeout) => format!("{url} (timeout {}s)", timeout.as_secs()),
                None => format!("{url} (no timeout)"),
            },
        }
    }
}

pub struct ResolvedConfig {
    pub source: SourceKind,
    pub input_title: Option<String>,
    pub initial_query: String,
    pub theme: Option<String>,
    pub timestamps: TimestampStyle,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Effective configuration:".to_string(),
            format!("  Source: {}", self.source.describe()),
            format!(
                "  UI theme: {}",
                self.theme.as_deref().unwrap_or("(use the library default)")
            ),
            format!(
                "  Timestamps: {} ({})",
                self.timestamps.pattern(),
                if self.timestamps.is_utc() { "UTC" } else { "local" }
            ),
            format!("  Log level: {}", self.log_level),
        ];
        if let Some(file) = &self.log_file {
            lines.push(format!("  Log file: {}", file.display()));
        }
        if let Some(title) = &self.input_title {
            lines.push(format!("  Prompt title: {title}"));
        }
        if !self.initial_query.is_empty() {
            lines.push(format!("  Initial query: {}", self.initial_query));
        }
        lines
    }

    pub fn print_summary(&self) {
        for line in self.summary_lines() {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(source: SourceKind) -> ResolvedConfig {
        ResolvedConfig {
            source,
            input_title: Some("Title".into()),
            initial_query: "foo".into(),
            theme: None,
            timestamps: TimestampStyle::utc("%Y"),
            log_level: "info".into(),
            log_file: None,
        }
    }

    #[test]
    fn summary_lists_source_and_overrides() {
        let lines = config(SourceKind::Endpoint {
            url: "http://localhost:3000/api/advocates".into(),
            timeout: Some(Duration::from_secs(2)),
        })
        .summary_lines();
        assert!(lines.contains(&"  Source: http://localhost:3000/api/advocates (timeout 2s)".to_string()));
        assert!(lines.contains(&"  Timestamps: %Y (UTC)".to_string()));
        assert!(lines.contains(&"  Prompt title: Title".to_string()));
        assert!(lines.contains(&"  Initial query: foo".to_string()));
    }

    #[test]
    fn seed_source_builds_and_describes_itself() {
        let source = SourceKind::Seed.build().unwrap();
        assert!(!source.fetch().unwrap().is_empty());
    }
}
