use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
    pub search_input: &'a SearchInput,
    pub title: &'a str,
    pub area: Rect,
    pub theme: &'a Theme,
}

/// Status shown at the right edge of the prompt row.
pub struct ProgressState<'a> {
    pub text: &'a str,
    pub loading: bool,
    pub throbber_state: &'a ThrobberState,
}

/// Render `title > input` with the progress label right-aligned.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_>, progress: ProgressState<'_>) {
    let PromptContext {
        search_input,
        title,
        area,
        theme,
    } = prompt;

    let progress_line = progress_line(&progress, theme);
    let progress_width = saturating_u16(progress_line.width()).saturating_add(1);
    let prompt_width = if title.is_empty() {
        0
    } else {
        saturating_u16(UnicodeWidthStr::width(title)).saturating_add(3)
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(prompt_width),
            Constraint::Min(1),
            Constraint::Length(progress_width),
        ])
        .split(area);

    if prompt_width > 0 {
        let prompt = Paragraph::new(format!("{title} > ")).style(theme.prompt_style());
        frame.render_widget(prompt, columns[0]);
    }

    search_input.render_textarea(frame, columns[1]);

    if progress_width > 1 {
        let progress = Paragraph::new(progress_line).right_aligned();
        frame.render_widget(progress, columns[2]);
    }
}

fn saturating_u16(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

fn progress_line<'a>(progress: &ProgressState<'a>, theme: &Theme) -> Line<'a> {
    let muted = theme.empty_style();
    let mut line = Line::default();
    if progress.text.is_empty() {
        return line;
    }
    if progress.loading {
        let spinner = Throbber::default().style(muted).throbber_style(muted);
        line.spans.push(spinner.to_symbol_span(progress.throbber_state));
    }
    line.spans.push(Span::styled(progress.text, muted));
    line
}
