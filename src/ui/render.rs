use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::App;
use super::components::{ProgressState, PromptContext, render_prompt, render_table};

const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;

impl App {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let loading = self.is_loading();
        let progress_text = if loading {
            self.ui.loading_message.clone()
        } else {
            self.ui
                .count_text(self.filtered_len(), self.directory.full().len())
        };
        render_prompt(
            frame,
            PromptContext {
                search_input: &self.search_input,
                title: &self.ui.input_title,
                area: layout[0],
                theme: &self.theme,
            },
            ProgressState {
                text: &progress_text,
                loading,
                throbber_state: &self.throbber_state,
            },
        );

        let results_area = layout[1];
        render_table(
            frame,
            results_area,
            &mut self.table_state,
            &self.model,
            &self.theme,
        );
        if self.model.is_empty() {
            self.render_placeholder(frame, results_area, loading);
        }

        self.render_status(frame, layout[2]);
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect, loading: bool) {
        if area.height <= HEADER_AND_DIVIDER_HEIGHT {
            return;
        }
        let message_area = Rect {
            y: area.y + HEADER_AND_DIVIDER_HEIGHT,
            height: area.height - HEADER_AND_DIVIDER_HEIGHT,
            ..area
        };
        let message = if loading {
            &self.ui.loading_message
        } else {
            &self.ui.empty_message
        };
        let placeholder = Paragraph::new(message.as_str())
            .alignment(Alignment::Center)
            .style(self.theme.empty_style());
        frame.render_widget(Clear, message_area);
        frame.render_widget(placeholder, message_area);
    }

    /// Bottom line: the fetch error banner when the last load failed,
    /// otherwise the table title and key hints.
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match self.directory.last_error() {
            Some(error) => Line::from(Span::styled(
                format!("Failed to load advocates: {error}"),
                self.theme.error_style(),
            )),
            None => {
                let title = &self.ui.table_title;
                let gap = if title.is_empty() { "" } else { "  " };
                Line::from(vec![
                    Span::styled(title.as_str(), self.theme.prompt_style()),
                    Span::raw(gap),
                    Span::styled(self.ui.hint.as_str(), self.theme.empty_style()),
                ])
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::records::seed;
    use crate::store::{Directory, FetchError, FetchResult, RecordSource};

    fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()))
                    .collect::<String>()
            })
            .collect()
    }

    fn draw(app: &mut App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(180, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        screen(&terminal)
    }

    struct Unreachable;

    impl RecordSource for Unreachable {
        fn fetch(&self) -> FetchResult {
            Err(FetchError::Status {
                endpoint: "http://localhost:1/api/advocates".into(),
                status: 502,
            })
        }

        fn describe(&self) -> String {
            "unreachable".into()
        }
    }

    #[test]
    fn loaded_view_shows_prompt_rows_and_count() {
        let mut app = App::new(Directory::with_records(seed::advocates()));
        let lines = draw(&mut app);
        assert!(lines[0].contains("Search > "));
        assert!(lines[0].contains("15 advocates"));
        assert!(lines[1].contains("First Name"));
        assert!(lines.iter().any(|line| line.contains("John")));
        assert!(lines[29].contains("Ctrl-R reset"));
    }

    #[test]
    fn filtered_view_updates_count_and_placeholder() {
        let mut app = App::new(Directory::with_records(seed::advocates()));
        for c in "zzz".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }
        let lines = draw(&mut app);
        assert!(lines[0].contains("Search > zzz"));
        assert!(lines[0].contains("0 of 15 advocates"));
        assert!(lines.iter().any(|line| line.contains("No advocates match")));
    }

    #[test]
    fn fetch_error_is_shown_in_status_line() {
        let mut app = App::with_source(Arc::new(Unreachable));
        app.start_fetch();
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.is_loading() && Instant::now() < deadline {
            app.pump_fetch();
            std::thread::sleep(Duration::from_millis(5));
        }

        let lines = draw(&mut app);
        assert!(lines[29].contains("Failed to load advocates"));
        assert!(lines[29].contains("502"));
        assert!(lines.iter().any(|line| line.contains("No advocates match")));
    }
}
