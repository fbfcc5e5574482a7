//! Fixed column configuration for the advocate table.
//!
//! [`COLUMNS`] is the only place that decides which fields are shown, in which
//! order, and under which label. Header generation and cell generation both
//! walk the same slice, so headers and data cannot drift apart.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::records::Record;

/// Stable key for each displayable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    FirstName,
    LastName,
    City,
    Degree,
    Specialties,
    YearsOfExperience,
    PhoneNumber,
    CreatedAt,
}

impl ColumnKey {
    /// Wire name of the field, as used in the backend payload.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::City => "city",
            Self::Degree => "degree",
            Self::Specialties => "specialties",
            Self::YearsOfExperience => "yearsOfExperience",
            Self::PhoneNumber => "phoneNumber",
            Self::CreatedAt => "createdAt",
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a value read from a record, which selects its render rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(u64),
    List(&'a [String]),
    Timestamp(DateTime<Utc>),
    Missing,
}

type Accessor = for<'r> fn(&'r Record) -> CellValue<'r>;

/// Pairs a field key with its header label and typed accessor.
#[derive(Clone, Copy)]
pub struct ColumnDescriptor {
    pub key: ColumnKey,
    pub label: &'static str,
    accessor: Accessor,
}

impl ColumnDescriptor {
    #[must_use]
    pub const fn new(key: ColumnKey, label: &'static str, accessor: Accessor) -> Self {
        Self {
            key,
            label,
            accessor,
        }
    }

    /// Read this column's value from `record`.
    #[must_use]
    pub fn value<'r>(&self, record: &'r Record) -> CellValue<'r> {
        (self.accessor)(record)
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new(ColumnKey::FirstName, "First Name", first_name),
    ColumnDescriptor::new(ColumnKey::LastName, "Last Name", last_name),
    ColumnDescriptor::new(ColumnKey::City, "City", city),
    ColumnDescriptor::new(ColumnKey::Degree, "Degree", degree),
    ColumnDescriptor::new(ColumnKey::Specialties, "Specialties", specialties),
    ColumnDescriptor::new(
        ColumnKey::YearsOfExperience,
        "Years of Experience",
        years_of_experience,
    ),
    ColumnDescriptor::new(ColumnKey::PhoneNumber, "Phone Number", phone_number),
    ColumnDescriptor::new(ColumnKey::CreatedAt, "Added", created_at),
];

/// Header labels in column order.
#[must_use]
pub fn labels(columns: &[ColumnDescriptor]) -> Vec<&'static str> {
    columns.iter().map(|column| column.label).collect()
}

fn text(value: &str) -> CellValue<'_> {
    if value.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(value)
    }
}

fn first_name(record: &Record) -> CellValue<'_> {
    text(&record.first_name)
}

fn last_name(record: &Record) -> CellValue<'_> {
    text(&record.last_name)
}

fn city(record: &Record) -> CellValue<'_> {
    text(&record.city)
}

fn degree(record: &Record) -> CellValue<'_> {
    text(&record.degree)
}

fn specialties(record: &Record) -> CellValue<'_> {
    CellValue::List(&record.specialties)
}

fn years_of_experience(record: &Record) -> CellValue<'_> {
    record
        .years_of_experience
        .map_or(CellValue::Missing, |years| CellValue::Number(years.into()))
}

fn phone_number(record: &Record) -> CellValue<'_> {
    record
        .phone_number
        .map_or(CellValue::Missing, CellValue::Number)
}

fn created_at(record: &Record) -> CellValue<'_> {
    record
        .created_at
        .map_or(CellValue::Missing, CellValue::Timestamp)
}
