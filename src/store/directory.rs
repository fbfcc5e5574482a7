use tracing::{info, warn};

use super::FetchError;
use crate::records::Record;
use crate::search::{SearchTerm, filter_indices};

/// Where the directory is in its load/search lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been loaded yet.
    Idle,
    /// Records are loaded and shown unfiltered.
    Loaded,
    /// Records are loaded and the display reflects the search input.
    Filtered,
}

/// Owner of the full advocate list, the derived display list and the current
/// search string.
///
/// The display list is stored as positions into the full list, so it can only
/// ever reference records that were actually loaded. It is always recomputed
/// from the full list, never from a previous display list.
#[derive(Debug, Clone)]
pub struct Directory {
    full: Vec<Record>,
    display: Vec<usize>,
    search: String,
    phase: Phase,
    last_error: Option<String>,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            full: Vec::new(),
            display: Vec::new(),
            search: String::new(),
            phase: Phase::Idle,
            last_error: None,
        }
    }

    /// Convenience constructor for an already loaded list.
    #[must_use]
    pub fn with_records(records: Vec<Record>) -> Self {
        let mut directory = Self::new();
        directory.replace(records);
        directory
    }

    /// Apply the outcome of a fetch.
    ///
    /// Failures are logged and remembered for the status line; the lists are
    /// left exactly as they were.
    pub fn apply_fetch(&mut self, result: Result<Vec<Record>, FetchError>) {
        match result {
            Ok(records) => self.replace(records),
            Err(err) => {
                warn!(error = %err, "failed to load advocates");
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Swap in a freshly fetched list.
    ///
    /// With an empty search the display mirrors the new list. A search typed
    /// before the records arrived is applied to them.
    pub fn replace(&mut self, records: Vec<Record>) {
        info!(count = records.len(), "advocate list loaded");
        self.full = records;
        self.last_error = None;
        if self.search.is_empty() {
            self.phase = Phase::Loaded;
            self.display = (0..self.full.len()).collect();
        } else {
            self.phase = Phase::Filtered;
            self.display = filter_indices(&self.full, &self.search);
        }
    }

    /// Update the search string and recompute the display list.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        if self.phase == Phase::Idle {
            return;
        }
        self.phase = Phase::Filtered;
        self.display = filter_indices(&self.full, term);
    }

    /// Clear the search and show the full list again.
    pub fn reset(&mut self) {
        self.search.clear();
        self.display = (0..self.full.len()).collect();
        if self.phase != Phase::Idle {
            self.phase = Phase::Loaded;
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn search_term(&self) -> SearchTerm {
        SearchTerm::new(&self.search)
    }

    #[must_use]
    pub fn full(&self) -> &[Record] {
        &self.full
    }

    #[must_use]
    pub fn display_indices(&self) -> &[usize] {
        &self.display
    }

    pub fn display(&self) -> impl ExactSizeIterator<Item = &Record> + '_ {
        self.display.iter().map(|&idx| &self.full[idx])
    }

    #[must_use]
    pub fn display_len(&self) -> usize {
        self.display.len()
    }

    /// Record at `position` in the display list.
    #[must_use]
    pub fn displayed(&self, position: usize) -> Option<&Record> {
        self.display
            .get(position)
            .and_then(|&idx| self.full.get(idx))
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Record {
        Record::new("Jane", "Doe", "Austin", "MD")
            .with_specialties(["Cardiology"])
            .with_years(10)
    }

    fn john() -> Record {
        Record::new("John", "Smith", "Boston", "PhD")
            .with_specialties(["Neurology"])
            .with_years(5)
    }

    fn displayed(directory: &Directory) -> Vec<Record> {
        directory.display().cloned().collect()
    }

    #[test]
    fn starts_idle_and_empty() {
        let directory = Directory::new();
        assert_eq!(directory.phase(), Phase::Idle);
        assert_eq!(directory.display_len(), 0);
        assert!(directory.full().is_empty());
    }

    #[test]
    fn fetch_success_loads_unfiltered_list() {
        let mut directory = Directory::new();
        directory.apply_fetch(Ok(vec![jane(), john()]));
        assert_eq!(directory.phase(), Phase::Loaded);
        assert_eq!(displayed(&directory), vec![jane(), john()]);
    }

    #[test]
    fn fetch_failure_keeps_previous_lists() {
        let mut directory = Directory::new();
        directory.apply_fetch(Err(FetchError::WorkerGone));
        assert_eq!(directory.phase(), Phase::Idle);
        assert_eq!(directory.display_len(), 0);
        assert!(directory.last_error().is_some());

        directory.apply_fetch(Ok(vec![jane()]));
        assert!(directory.last_error().is_none());
        directory.set_search("jane");
        directory.apply_fetch(Err(FetchError::WorkerGone));
        assert_eq!(directory.phase(), Phase::Filtered);
        assert_eq!(displayed(&directory), vec![jane()]);
        assert_eq!(directory.full(), &[jane()]);
    }

    #[test]
    fn search_then_reset_round_trip() {
        let mut directory = Directory::with_records(vec![jane(), john()]);

        directory.set_search("bos");
        assert_eq!(directory.phase(), Phase::Filtered);
        assert_eq!(displayed(&directory), vec![john()]);

        directory.reset();
        assert_eq!(directory.phase(), Phase::Loaded);
        assert_eq!(directory.search(), "");
        assert_eq!(displayed(&directory), directory.full().to_vec());
        assert_eq!(displayed(&directory), vec![jane(), john()]);
    }

    #[test]
    fn each_search_starts_from_the_full_list() {
        let mut directory = Directory::with_records(vec![jane(), john()]);
        directory.set_search("bos");
        directory.set_search("aus");
        assert_eq!(displayed(&directory), vec![jane()]);
        directory.set_search("");
        assert_eq!(directory.phase(), Phase::Filtered);
        assert_eq!(directory.display_len(), 2);
    }

    #[test]
    fn search_typed_before_load_is_applied_on_arrival() {
        let mut directory = Directory::new();
        directory.set_search("smith");
        assert_eq!(directory.phase(), Phase::Idle);
        assert_eq!(directory.display_len(), 0);

        directory.apply_fetch(Ok(vec![jane(), john()]));
        assert_eq!(directory.phase(), Phase::Filtered);
        assert_eq!(displayed(&directory), vec![john()]);
    }

    #[test]
    fn reload_replaces_list_wholesale() {
        let mut directory = Directory::with_records(vec![jane(), john()]);
        directory.apply_fetch(Ok(vec![john()]));
        assert_eq!(directory.full(), &[john()]);
        assert_eq!(directory.display_indices(), &[0]);
    }

    #[test]
    fn displayed_indexes_into_display_list() {
        let mut directory = Directory::with_records(vec![jane(), john()]);
        directory.set_search("phd");
        assert_eq!(directory.displayed(0), Some(&john()));
        assert_eq!(directory.displayed(1), None);
    }

    #[test]
    fn display_is_always_drawn_from_full_list() {
        let mut directory = Directory::with_records(crate::records::seed::advocates());
        for term in ["a", "san", "1", "", "zzz", "md"] {
            directory.set_search(term);
            assert!(
                directory
                    .display_indices()
                    .iter()
                    .all(|&idx| idx < directory.full().len())
            );
            assert!(directory.display_indices().windows(2).all(|w| w[0] < w[1]));
        }
    }
}
