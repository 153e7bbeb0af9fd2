use std::path::{Path, PathBuf};

use crate::data::aggregate::aggregate;
use crate::data::loader;
use crate::data::model::{AggregateView, QualityLabel, Record};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The record list and the expanded-section flag are the only mutable state
/// in the system; both live here and are handed to the UI read-only (or
/// mutated through the methods below).
pub struct AppState {
    /// Loaded records, input order preserved. Replaced whole on each load.
    pub records: Vec<Record>,

    /// Aggregate summary derived from `records` (cached, rebuilt on load).
    pub view: AggregateView,

    /// The single section currently expanded in the detail list, if any.
    pub expanded: Option<QualityLabel>,

    /// Where the current records came from.
    pub source_path: Option<PathBuf>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            view: AggregateView::default(),
            expanded: None,
            source_path: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Replace the record set atomically: rebuild the aggregate view and
    /// collapse any expanded section.
    pub fn set_records(&mut self, records: Vec<Record>, source: Option<PathBuf>) {
        self.view = aggregate(&records);
        self.records = records;
        self.source_path = source;
        self.expanded = None;
        self.status_message = None;
    }

    /// Load records from a file and install them on success.
    ///
    /// There are no fatal load conditions: a failure logs a warning, leaves
    /// the current record set untouched, and surfaces a status message so
    /// the dashboard keeps rendering.
    pub fn load_from(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(records) => {
                log::info!("loaded {} records from {}", records.len(), path.display());
                self.set_records(records, Some(path.to_path_buf()));
            }
            Err(e) => {
                log::warn!("failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Single-select click-to-toggle on a detail section: expanding a label
    /// collapses whichever one was open; toggling the open one collapses all.
    pub fn toggle_section(&mut self, label: QualityLabel) {
        self.expanded = if self.expanded == Some(label) {
            None
        } else {
            Some(label)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_single_select() {
        let mut state = AppState::default();
        assert_eq!(state.expanded, None);

        state.toggle_section(QualityLabel::Bien);
        assert_eq!(state.expanded, Some(QualityLabel::Bien));

        // opening another section collapses the first
        state.toggle_section(QualityLabel::Regular);
        assert_eq!(state.expanded, Some(QualityLabel::Regular));

        // toggling the open section collapses everything
        state.toggle_section(QualityLabel::Regular);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn set_records_rebuilds_view_and_collapses() {
        let mut state = AppState::default();
        state.toggle_section(QualityLabel::Mala);

        state.set_records(
            vec![Record::new("a", "BIEN"), Record::new("b", "BIEN")],
            None,
        );
        assert_eq!(state.expanded, None);
        assert_eq!(state.view.total, 2);
        assert_eq!(state.view.group(QualityLabel::Bien).len(), 2);

        // a fresh load replaces the whole set
        state.set_records(vec![Record::new("c", "MALA")], None);
        assert_eq!(state.view.total, 1);
        assert!(state.view.group(QualityLabel::Bien).is_empty());
    }

    #[test]
    fn failed_load_keeps_records_and_sets_status() {
        let mut state = AppState::default();
        state.load_from(Path::new("/no/such/publications.csv"));
        assert!(state.records.is_empty());
        assert!(state.status_message.is_some());
    }
}
