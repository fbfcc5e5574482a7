use std::fmt::Write;

use chrono::{DateTime, Local, Utc};

use super::{ChipKey, RowKey};
use crate::columns::{CellValue, ColumnKey};

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// How timestamp cells are turned into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampStyle {
    pattern: String,
    utc: bool,
}

impl Default for TimestampStyle {
    fn default() -> Self {
        Self::local(DEFAULT_TIMESTAMP_FORMAT)
    }
}

impl TimestampStyle {
    /// Format in the machine's local time zone.
    #[must_use]
    pub fn local(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            utc: false,
        }
    }

    #[must_use]
    pub fn utc(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            utc: true,
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.utc
    }

    /// Format `value` with the pattern. A pattern chrono cannot render
    /// falls back to RFC 3339.
    #[must_use]
    pub fn format(&self, value: DateTime<Utc>) -> String {
        let mut out = String::new();
        let written = if self.utc {
            write!(out, "{}", value.format(&self.pattern))
        } else {
            write!(out, "{}", value.with_timezone(&Local).format(&self.pattern))
        };
        match written {
            Ok(()) => out,
            Err(_) => value.to_rfc3339(),
        }
    }
}

/// One element of a list-valued cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub key: ChipKey,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedCell {
    Scalar(String),
    Chips(Vec<Chip>),
    Timestamp(String),
    Empty,
}

impl RenderedCell {
    pub(super) fn from_value(
        row: RowKey,
        column: ColumnKey,
        value: CellValue<'_>,
        timestamps: &TimestampStyle,
    ) -> Self {
        match value {
            CellValue::Text(text) => Self::Scalar(text.to_string()),
            CellValue::Number(number) => Self::Scalar(number.to_string()),
            CellValue::List(items) => Self::Chips(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, text)| Chip {
                        key: ChipKey { row, column, index },
                        text: text.clone(),
                    })
                    .collect(),
            ),
            CellValue::Timestamp(value) => Self::Timestamp(timestamps.format(value)),
            CellValue::Missing => Self::Empty,
        }
    }

    /// Text lines of the cell, one per chip for list cells.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Scalar(text) | Self::Timestamp(text) => vec![text.as_str()],
            Self::Chips(chips) => chips.iter().map(|chip| chip.text.as_str()).collect(),
            Self::Empty => Vec::new(),
        }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Chips(chips) => chips.len().max(1),
            _ => 1,
        }
    }

    /// Single-line rendering used by plain-text output.
    #[must_use]
    pub fn joined(&self, separator: &str) -> String {
        self.lines().join(separator)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn utc_style_formats_without_offset() {
        let style = TimestampStyle::utc(DEFAULT_TIMESTAMP_FORMAT);
        let value = Utc.with_ymd_and_hms(2023, 7, 4, 15, 5, 0).unwrap();
        assert_eq!(style.format(value), "Jul 4, 2023 3:05 PM");
    }

    #[test]
    fn unrenderable_pattern_falls_back_to_rfc3339() {
        let value = Utc.with_ymd_and_hms(2023, 7, 4, 15, 5, 0).unwrap();
        assert_eq!(TimestampStyle::utc("%Q").format(value), "2023-07-04T15:05:00+00:00");
    }

    #[test]
    fn joined_flattens_chips() {
        let row = RowKey::Position(0);
        let items = vec!["A".to_string(), "B".to_string()];
        let cell = RenderedCell::from_value(
            row,
            ColumnKey::Specialties,
            CellValue::List(&items),
            &TimestampStyle::default(),
        );
        assert_eq!(cell.joined(", "), "A, B");
        assert_eq!(RenderedCell::Empty.joined(", "), "");
    }
}
