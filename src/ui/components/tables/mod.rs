pub mod rows;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use self::rows::{build_rows, natural_widths};
use crate::columns::ColumnKey;
use crate::table::TableModel;
use crate::ui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const MIN_COLUMN_WIDTH: u16 = 4;
const MAX_SCALAR_WIDTH: u16 = 24;

/// Render the advocate table: a header row, a separator, then one row per
/// displayed record.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut TableState,
    model: &TableModel,
    theme: &Theme,
) {
    let header_cells = model
        .headers
        .iter()
        .map(|header| Cell::from(*header))
        .collect::<Vec<_>>();
    let header = Row::new(header_cells)
        .style(theme.header_style())
        .height(1)
        .bottom_margin(1);

    let table = Table::new(build_rows(model, theme.chip_style()), column_widths(model))
        .header(header)
        .column_spacing(TABLE_COLUMN_SPACING)
        .highlight_spacing(HighlightSpacing::Always)
        .row_highlight_style(theme.row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(table, area, table_state);

    render_header_separator(frame, area, theme, 1);
}

/// Width constraints per column. List columns absorb the spare width; scalar
/// columns take their natural width up to a cap.
#[must_use]
pub fn column_widths(model: &TableModel) -> Vec<Constraint> {
    natural_widths(model)
        .into_iter()
        .zip(&model.keys)
        .map(|(natural, key)| match key {
            ColumnKey::Specialties => Constraint::Fill(1),
            _ => Constraint::Max(natural.clamp(MIN_COLUMN_WIDTH, MAX_SCALAR_WIDTH)),
        })
        .collect()
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
    if header_height >= area.height {
        return;
    }
    let sep_y = area.y + header_height;
    let width = area.width as usize;
    if width == 0 {
        return;
    }

    let sep_rect = Rect {
        x: area.x,
        y: sep_y,
        width: area.width,
        height: 1,
    };
    let base_style = Style::new().bg(theme.header_bg());
    if width <= 2 {
        let para = Paragraph::new(" ".repeat(width)).style(base_style);
        frame.render_widget(para, sep_rect);
        return;
    }

    let middle_style = Style::new().bg(theme.header_bg()).fg(theme.header_fg());
    let spans = vec![
        Span::styled(" ", base_style),
        Span::styled("─".repeat(width - 2), middle_style),
        Span::styled(" ", base_style),
    ];
    frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::columns::COLUMNS;
    use crate::records::Record;
    use crate::table::TimestampStyle;

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

    #[test]
    fn specialties_column_fills_remaining_width() {
        let records = vec![Record::new("Jane", "Doe", "Austin", "MD")];
        let model = TableModel::build(COLUMNS, &records, &TimestampStyle::default());
        let widths = column_widths(&model);
        assert_eq!(widths[4], Constraint::Fill(1));
        assert_eq!(widths[3], Constraint::Max("Degree".len() as u16));
    }

    #[test]
    fn renders_headers_and_each_chip_on_its_own_line() {
        let records = vec![
            Record::new("Jane", "Doe", "Austin", "MD")
                .with_specialties(["Cardiology", "Oncology"])
                .with_years(10),
        ];
        let model = TableModel::build(COLUMNS, &records, &TimestampStyle::default());
        let mut terminal = Terminal::new(TestBackend::new(160, 8)).unwrap();
        let mut state = TableState::default();
        state.select(Some(0));
        terminal
            .draw(|frame| render_table(frame, frame.area(), &mut state, &model, &Theme::default()))
            .unwrap();

        let lines = screen(&terminal);
        assert!(lines[0].contains("First Name"));
        assert!(lines[0].contains("Specialties"));
        assert!(lines[1].contains("─"));
        assert!(lines[2].contains("Jane"));
        assert!(lines[2].contains("Cardiology"));
        assert!(lines[3].contains("Oncology"));
        assert!(!lines[3].contains("Jane"));
    }
}
