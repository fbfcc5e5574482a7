use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use super::App;
use super::config::UiConfig;
use super::outcome::BrowseOutcome;
use super::style::{self, Theme};
use crate::store::RecordSource;
use crate::table::TimestampStyle;

/// A small builder for configuring the interactive advocate browser before
/// running it.
pub struct SearchUi {
    source: Arc<dyn RecordSource>,
    input_title: Option<String>,
    initial_query: Option<String>,
    ui_config: Option<UiConfig>,
    theme: Option<Theme>,
    timestamps: Option<TimestampStyle>,
}

impl SearchUi {
    /// Create a browser that loads its records from `source`.
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            input_title: None,
            initial_query: None,
            ui_config: None,
            theme: None,
            timestamps: None,
        }
    }

    pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
        self.input_title = Some(title.into());
        self
    }

    pub fn with_ui_config(mut self, config: UiConfig) -> Self {
        self.ui_config = Some(config);
        self
    }

    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = Some(query.into());
        self
    }

    /// Select a built-in theme. Unknown names keep the default theme.
    pub fn with_theme_name(mut self, name: &str) -> Self {
        match style::by_name(name) {
            Some(theme) => self.theme = Some(theme),
            None => warn!(theme = name, "unknown theme; using default"),
        }
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_timestamps(mut self, timestamps: TimestampStyle) -> Self {
        self.timestamps = Some(timestamps);
        self
    }

    /// Build the [`App`] with every customization applied, without starting
    /// the terminal.
    #[must_use]
    pub fn into_app(self) -> App {
        let mut app = App::with_source(self.source);
        let mut ui = self.ui_config.unwrap_or_default();
        if let Some(title) = self.input_title {
            ui.input_title = title;
        }
        app.set_ui_config(ui);
        if let Some(theme) = self.theme {
            app.set_theme(theme);
        }
        if let Some(timestamps) = self.timestamps {
            app.set_timestamps(timestamps);
        }
        if let Some(query) = self.initial_query {
            app.set_initial_query(&query);
        }
        app
    }

    /// Run the interactive browser with the configured options.
    pub fn run(self) -> Result<BrowseOutcome> {
        self.into_app().run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SeedSource;

    #[test]
    fn builder_applies_customizations() {
        let app = SearchUi::new(Arc::new(SeedSource))
            .with_input_title("Find")
            .with_initial_query("austin")
            .with_theme_name("Solarized-Dark")
            .into_app();
        assert_eq!(app.ui.input_title, "Find");
        assert_eq!(app.search_input.text(), "austin");
        assert_eq!(app.directory.search(), "austin");
        assert_eq!(Some(app.theme), style::by_name("solarized"));
    }

    #[test]
    fn unknown_theme_keeps_default() {
        let app = SearchUi::new(Arc::new(SeedSource))
            .with_theme_name("no-such-theme")
            .into_app();
        assert_eq!(app.theme, Theme::default());
    }

    #[test]
    fn explicit_title_wins_over_ui_config() {
        let app = SearchUi::new(Arc::new(SeedSource))
            .with_input_title("Who")
            .with_ui_config(UiConfig::default().with_input_title("Ignored"))
            .into_app();
        assert_eq!(app.ui.input_title, "Who");
    }
}
