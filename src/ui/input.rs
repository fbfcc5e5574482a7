use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Single-line search box backed by a [`TextArea`].
///
/// Only line-editing keys reach the text area, so the content never grows a
/// second line.
#[derive(Debug, Clone)]
pub struct SearchInput {
    textarea: TextArea<'static>,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl SearchInput {
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        let mut textarea = TextArea::new(vec![initial.into()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea.lines().first().map_or("", String::as_str)
    }

    /// Cursor column, counted in characters.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.textarea.cursor().1
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Apply an editing key. Returns `true` when the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                let changed = !self.text().is_empty();
                self.clear();
                changed
            }
            KeyCode::Char('w' | 'a' | 'e' | 'h' | 'k') if ctrl => self.textarea.input(key),
            KeyCode::Char(_) if ctrl || alt => false,
            KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End => self.textarea.input(key),
            _ => false,
        }
    }

    pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        frame.render_widget(&self.textarea, area);
    }
}
