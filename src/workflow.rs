use advocates::columns::COLUMNS;
use advocates::store::{Directory, RecordSource};
use advocates::table::{TableModel, TimestampStyle};
use advocates::ui::{BrowseOutcome, SearchUi};
use anyhow::{Context, Result};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive browser.
pub(crate) struct SearchWorkflow {
    search_ui: SearchUi,
}

impl SearchWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let search_ui = SearchUiFactory::build(config)?;
        Ok(Self { search_ui })
    }

    pub(crate) fn run(self) -> Result<BrowseOutcome> {
        self.search_ui.run()
    }
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
    search_ui: SearchUi,
}

impl SearchUiFactory {
    fn build(config: ResolvedConfig) -> Result<SearchUi> {
        let ResolvedConfig {
            source,
            input_title,
            initial_query,
            theme,
            timestamps,
            ..
        } = config;

        let factory = Self {
            search_ui: SearchUi::new(source.build()?),
        }
        .with_input_title(input_title)
        .with_initial_query(initial_query)
        .with_theme(theme)
        .with_timestamps(timestamps);

        Ok(factory.search_ui)
    }

    fn with_input_title(mut self, title: Option<String>) -> Self {
        if let Some(title) = title {
            self.search_ui = self.search_ui.with_input_title(title);
        }
        self
    }

    fn with_initial_query(mut self, query: String) -> Self {
        self.search_ui = self.search_ui.with_initial_query(query);
        self
    }

    fn with_theme(mut self, theme: Option<String>) -> Self {
        if let Some(theme) = theme {
            self.search_ui = self.search_ui.with_theme_name(&theme);
        }
        self
    }

    fn with_timestamps(mut self, timestamps: TimestampStyle) -> Self {
        self.search_ui = self.search_ui.with_timestamps(timestamps);
        self
    }
}

/// Result of a non-interactive run: the filtered directory and its table.
pub(crate) struct Listing {
    pub(crate) directory: Directory,
    pub(crate) model: TableModel,
}

/// Fetch once, apply the initial query and build the table without a
/// terminal UI. A failed fetch is an error here since there is no status line
/// to report it on.
pub(crate) fn list(config: &ResolvedConfig) -> Result<Listing> {
    let source = config.source.build()?;
    list_from(source.as_ref(), &config.initial_query, &config.timestamps)
}

fn list_from(
    source: &dyn RecordSource,
    query: &str,
    timestamps: &TimestampStyle,
) -> Result<Listing> {
    let records = source
        .fetch()
        .with_context(|| format!("failed to load advocates from {}", source.describe()))?;

    let mut directory = Directory::new();
    directory.set_search(query);
    directory.replace(records);
    info!(
        shown = directory.display_len(),
        total = directory.full().len(),
        "listing advocates"
    );

    let model = TableModel::build(COLUMNS, directory.display(), timestamps);
    Ok(Listing { directory, model })
}
