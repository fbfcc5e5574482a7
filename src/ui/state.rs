use std::sync::Arc;

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;
use tracing::debug;

use super::config::UiConfig;
use super::input::SearchInput;
use super::outcome::BrowseOutcome;
use super::style::Theme;
use crate::columns::COLUMNS;
use crate::records::Record;
use crate::store::{Directory, PendingFetch, RecordSource, loader};
use crate::table::{TableModel, TimestampStyle};

/// Interactive state for one browsing session.
///
/// `App` is the only place that mutates the [`Directory`]: key handlers and
/// fetch completions both go through it on the UI thread.
pub struct App {
    pub directory: Directory,
    pub search_input: SearchInput,
    pub table_state: TableState,
    pub theme: Theme,
    pub(crate) ui: UiConfig,
    pub(crate) timestamps: TimestampStyle,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) model: TableModel,
    source: Option<Arc<dyn RecordSource>>,
    pending: Option<PendingFetch>,
}

impl App {
    pub fn new(directory: Directory) -> Self {
        let search_input = SearchInput::new(directory.search());
        let mut app = Self {
            directory,
            search_input,
            table_state: TableState::default(),
            theme: Theme::default(),
            ui: UiConfig::default(),
            timestamps: TimestampStyle::default(),
            throbber_state: ThrobberState::default(),
            model: TableModel::default(),
            source: None,
            pending: None,
        };
        app.refresh_view();
        app
    }

    /// Create an app that loads its records from `source`.
    pub fn with_source(source: Arc<dyn RecordSource>) -> Self {
        let mut app = Self::new(Directory::new());
        app.source = Some(source);
        app
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_ui_config(&mut self, ui: UiConfig) {
        self.ui = ui;
    }

    pub fn set_timestamps(&mut self, timestamps: TimestampStyle) {
        self.timestamps = timestamps;
        self.refresh_view();
    }

    pub fn set_initial_query(&mut self, query: &str) {
        self.search_input = SearchInput::new(query);
        self.directory.set_search(query);
        self.refresh_view();
    }

    /// Kick off a fetch from the configured source. Any fetch still in flight
    /// is abandoned.
    pub fn start_fetch(&mut self) {
        if let Some(source) = &self.source {
            self.pending = Some(loader::spawn(Arc::clone(source)));
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a finished fetch, if any. Returns `true` when the view changed.
    pub fn pump_fetch(&mut self) -> bool {
        let Some(result) = self.pending.as_ref().and_then(PendingFetch::poll) else {
            return false;
        };
        if let Some(pending) = self.pending.take() {
            debug!(
                source = pending.origin(),
                elapsed_ms = pending.elapsed().as_millis() as u64,
                "fetch finished"
            );
        }
        self.directory.apply_fetch(result);
        self.refresh_view();
        true
    }

    /// Recompute the display list after the search text changed.
    pub(crate) fn apply_search_input(&mut self) {
        self.directory.set_search(self.search_input.text());
        self.table_state.select(None);
        self.refresh_view();
    }

    /// Clear the search and show every record again.
    pub fn reset(&mut self) {
        self.search_input.clear();
        self.directory.reset();
        self.table_state.select(None);
        self.refresh_view();
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.directory.display_len()
    }

    #[must_use]
    pub fn current_selection(&self) -> Option<Record> {
        self.table_state
            .selected()
            .and_then(|position| self.directory.displayed(position))
            .cloned()
    }

    pub(crate) fn outcome(&self, accepted: bool) -> BrowseOutcome {
        BrowseOutcome {
            accepted,
            query: self.search_input.text().to_string(),
            selection: if accepted {
                self.current_selection()
            } else {
                None
            },
        }
    }

    pub(crate) fn refresh_view(&mut self) {
        self.model = TableModel::build(COLUMNS, self.directory.display(), &self.timestamps);
        self.ensure_selection();
    }

    pub(crate) fn ensure_selection(&mut self) {
        let len = self.filtered_len();
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            None => self.table_state.select(Some(0)),
            Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }
}
