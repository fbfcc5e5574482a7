use crate::records::Record;

/// A normalised search term ready to be matched against records.
///
/// Text fields are compared lower-cased against the lower-cased term. Years of
/// experience are compared as their decimal string against the same
/// lower-cased term; digits have no case so the result is identical to a raw
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            needle: raw.to_lowercase(),
        }
    }

    /// The term exactly as typed.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Empty and whitespace-only terms match every record.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        if self.is_blank() {
            return true;
        }

        self.text_matches(&record.first_name)
            || self.text_matches(&record.last_name)
            || self.text_matches(&record.city)
            || self.text_matches(&record.degree)
            || record
                .specialties
                .iter()
                .any(|specialty| self.text_matches(specialty))
            || record
                .years_of_experience
                .is_some_and(|years| years.to_string().contains(&self.needle))
    }

    // An empty field never matches a non-blank term.
    fn text_matches(&self, field: &str) -> bool {
        !field.is_empty() && field.to_lowercase().contains(&self.needle)
    }
}

/// Return the records matching `term`, preserving input order.
#[must_use]
pub fn filter<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let term = SearchTerm::new(term);
    records
        .iter()
        .filter(|record| term.matches(record))
        .collect()
}

/// Positions in `records` of the entries matching `term`, ascending.
#[must_use]
pub fn filter_indices(records: &[Record], term: &str) -> Vec<usize> {
    let term = SearchTerm::new(term);
    if term.is_blank() {
        return (0..records.len()).collect();
    }
    records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| term.matches(record).then_some(idx))
        .collect()
}
