//! Column-driven table model.
//!
//! [`TableModel::build`] turns the display list into headers and cells purely
//! from the column descriptors. The terminal widgets and the plain-text
//! output both consume this model, so every surface agrees on layout and
//! cell content.

mod cells;

use std::fmt;

use crate::columns::{ColumnDescriptor, ColumnKey};
use crate::records::Record;

pub use cells::{Chip, DEFAULT_TIMESTAMP_FORMAT, RenderedCell, TimestampStyle};

/// Identity of a rendered row.
///
/// Persisted records use their backend identifier. Rows without one fall back
/// to their position in the display list, which may shift between searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(i64),
    Position(usize),
}

impl RowKey {
    #[must_use]
    pub fn for_record(record: &Record, position: usize) -> Self {
        record.id.map_or(Self::Position(position), Self::Id)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id-{id}"),
            Self::Position(idx) => write!(f, "row-{idx}"),
        }
    }
}

/// Identity of one element of a list-valued cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChipKey {
    pub row: RowKey,
    pub column: ColumnKey,
    pub index: usize,
}

impl fmt::Display for ChipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.row, self.column, self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub key: RowKey,
    pub cells: Vec<RenderedCell>,
}

impl RenderedRow {
    /// Number of terminal lines the tallest cell needs.
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells
            .iter()
            .map(RenderedCell::height)
            .max()
            .unwrap_or(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableModel {
    pub keys: Vec<ColumnKey>,
    pub headers: Vec<&'static str>,
    pub rows: Vec<RenderedRow>,
}

impl TableModel {
    #[must_use]
    pub fn build<'a, I>(
        columns: &[ColumnDescriptor],
        display: I,
        timestamps: &TimestampStyle,
    ) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let keys = columns.iter().map(|column| column.key).collect();
        let headers = columns.iter().map(|column| column.label).collect();
        let rows = display
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                let key = RowKey::for_record(record, position);
                let cells = columns
                    .iter()
                    .map(|column| {
                        RenderedCell::from_value(key, column.key, column.value(record), timestamps)
                    })
                    .collect();
                RenderedRow { key, cells }
            })
            .collect();

        Self {
            keys,
            headers,
            rows,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
