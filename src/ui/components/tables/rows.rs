use ratatui::style::Style;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Cell, Row};
use unicode_width::UnicodeWidthStr;

use crate::table::{RenderedCell, RenderedRow, TableModel};

/// Convert one rendered row into a ratatui row. List cells put each chip on
/// its own line, and the row grows to fit the tallest cell.
#[must_use]
pub fn build_row(row: &RenderedRow, chip_style: Style) -> Row<'static> {
    let cells = row
        .cells
        .iter()
        .map(|cell| build_cell(cell, chip_style))
        .collect::<Vec<_>>();
    Row::new(cells).height(u16::try_from(row.height()).unwrap_or(u16::MAX))
}

#[must_use]
pub fn build_rows(model: &TableModel, chip_style: Style) -> Vec<Row<'static>> {
    model
        .rows
        .iter()
        .map(|row| build_row(row, chip_style))
        .collect()
}

fn build_cell(cell: &RenderedCell, chip_style: Style) -> Cell<'static> {
    match cell {
        RenderedCell::Scalar(text) | RenderedCell::Timestamp(text) => Cell::from(text.clone()),
        RenderedCell::Chips(chips) => {
            let lines = chips
                .iter()
                .map(|chip| Line::styled(chip.text.clone(), chip_style))
                .collect::<Vec<_>>();
            Cell::from(Text::from(lines))
        }
        RenderedCell::Empty => Cell::from(""),
    }
}

/// Widest line per column, header included.
#[must_use]
pub fn natural_widths(model: &TableModel) -> Vec<u16> {
    model
        .headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            let widest_cell = model
                .rows
                .iter()
                .filter_map(|row| row.cells.get(column))
                .flat_map(RenderedCell::lines)
                .map(UnicodeWidthStr::width)
                .max()
                .unwrap_or(0);
            u16::try_from(UnicodeWidthStr::width(*header).max(widest_cell)).unwrap_or(u16::MAX)
        })
        .collect()
}
