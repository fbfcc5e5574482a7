/// Text used by the UI when rendering the prompt, table and status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub input_title: String,
    pub table_title: String,
    pub count_label: String,
    pub empty_message: String,
    pub loading_message: String,
    pub hint: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            input_title: "Search".to_string(),
            table_title: "Advocates".to_string(),
            count_label: "advocates".to_string(),
            empty_message: "No advocates match".to_string(),
            loading_message: "Loading advocates...".to_string(),
            hint: "Ctrl-R reset  F5 reload  Enter select  Esc quit".to_string(),
        }
    }
}

impl UiConfig {
    #[must_use]
    pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
        self.input_title = title.into();
        self
    }

    /// Status text such as `3 of 15 advocates`.
    #[must_use]
    pub fn count_text(&self, shown: usize, total: usize) -> String {
        if shown == total {
            format!("{total} {}", self.count_label)
        } else {
            format!("{shown} of {total} {}", self.count_label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_text_mentions_total_only_when_filtered() {
        let ui = UiConfig::default();
        assert_eq!(ui.count_text(15, 15), "15 advocates");
        assert_eq!(ui.count_text(2, 15), "2 of 15 advocates");
    }
}
