use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::App;
use super::outcome::BrowseOutcome;

const PAGE_STEP: usize = 10;

impl App {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Ok(Some(self.outcome(false))),
            KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome(false))),
            KeyCode::Enter => return Ok(Some(self.outcome(true))),
            KeyCode::Char('r') if ctrl => {
                debug!("search reset");
                self.reset();
            }
            KeyCode::F(5) => {
                debug!("reload requested");
                self.start_fetch();
            }
            KeyCode::Up => self.move_selection_up(1),
            KeyCode::Down => self.move_selection_down(1),
            KeyCode::PageUp => self.move_selection_up(PAGE_STEP),
            KeyCode::PageDown => self.move_selection_down(PAGE_STEP),
            _ => {
                if self.search_input.input(key) {
                    self.apply_search_input();
                }
            }
        }
        Ok(None)
    }

    fn move_selection_up(&mut self, step: usize) {
        if let Some(selected) = self.table_state.selected() {
            self.table_state.select(Some(selected.saturating_sub(step)));
        }
    }

    fn move_selection_down(&mut self, step: usize) {
        let len = self.filtered_len();
        if let Some(selected) = self.table_state.selected()
            && len > 0
        {
            self.table_state
                .select(Some(selected.saturating_add(step).min(len - 1)));
        }
    }
}
