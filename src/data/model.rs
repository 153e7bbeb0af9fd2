use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// QualityLabel – the closed five-step quality taxonomy
// ---------------------------------------------------------------------------

/// One of the five canonical quality labels, ranked best to worst.
///
/// Label strings are matched exactly (case-sensitive). Anything else falls
/// outside the taxonomy and is scored via [`score_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityLabel {
    MuyBien,
    Bien,
    Regular,
    Mala,
    MuyMala,
}

impl QualityLabel {
    /// All labels in canonical display order (best first).
    pub const ALL: [QualityLabel; 5] = [
        QualityLabel::MuyBien,
        QualityLabel::Bien,
        QualityLabel::Regular,
        QualityLabel::Mala,
        QualityLabel::MuyMala,
    ];

    /// The canonical string for this label.
    pub fn as_str(self) -> &'static str {
        match self {
            QualityLabel::MuyBien => "MUY BIEN",
            QualityLabel::Bien => "BIEN",
            QualityLabel::Regular => "REGULAR",
            QualityLabel::Mala => "MALA",
            QualityLabel::MuyMala => "MUY MALA",
        }
    }

    /// Numeric score used for the weighted average (5 = best, 1 = worst).
    pub fn score(self) -> u32 {
        match self {
            QualityLabel::MuyBien => 5,
            QualityLabel::Bien => 4,
            QualityLabel::Regular => 3,
            QualityLabel::Mala => 2,
            QualityLabel::MuyMala => 1,
        }
    }

    /// Parse a quality string. Exact match only; `None` for anything else.
    pub fn parse(s: &str) -> Option<QualityLabel> {
        match s {
            "MUY BIEN" => Some(QualityLabel::MuyBien),
            "BIEN" => Some(QualityLabel::Bien),
            "REGULAR" => Some(QualityLabel::Regular),
            "MALA" => Some(QualityLabel::Mala),
            "MUY MALA" => Some(QualityLabel::MuyMala),
            _ => None,
        }
    }

    /// Position of this label in [`Self::ALL`].
    pub fn index(self) -> usize {
        match self {
            QualityLabel::MuyBien => 0,
            QualityLabel::Bien => 1,
            QualityLabel::Regular => 2,
            QualityLabel::Mala => 3,
            QualityLabel::MuyMala => 4,
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score for an arbitrary quality string: canonical labels map to their
/// rank, any other string to `1` (the source system's fallback branch).
pub fn score_of(quality: &str) -> u32 {
    QualityLabel::parse(quality).map_or(1, QualityLabel::score)
}

// ---------------------------------------------------------------------------
// Record – one (link, quality) pair from the source data
// ---------------------------------------------------------------------------

/// A single publication record. The link is an opaque string (no validation,
/// may be empty); the quality is trimmed and non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub link: String,
    pub quality: String,
}

impl Record {
    pub fn new(link: impl Into<String>, quality: impl Into<String>) -> Self {
        Record {
            link: link.into(),
            quality: quality.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AggregateView – derived summary of the full record set
// ---------------------------------------------------------------------------

/// Counts, average, and per-label groups derived from the record set.
/// Rebuilt whole whenever the records change; see `data::aggregate`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateView {
    /// Count per raw quality string, in first-seen order (drives the pie
    /// legend). Strings with zero occurrences are absent; non-canonical
    /// strings get their own entries.
    pub counts: Vec<(String, usize)>,
    /// Weighted average score in `[1, 5]`, `None` when there are no records.
    /// Rounding to two decimals happens at display time only.
    pub average: Option<f64>,
    /// Records partitioned by canonical label, input order preserved.
    /// Records with a non-canonical quality string appear in no group.
    groups: [Vec<Record>; 5],
    /// Total number of records aggregated.
    pub total: usize,
}

impl AggregateView {
    pub(crate) fn new(
        counts: Vec<(String, usize)>,
        average: Option<f64>,
        groups: [Vec<Record>; 5],
        total: usize,
    ) -> Self {
        AggregateView {
            counts,
            average,
            groups,
            total,
        }
    }

    /// The records carrying the given canonical label, in input order.
    /// Always present; empty when the label has no matches.
    pub fn group(&self, label: QualityLabel) -> &[Record] {
        &self.groups[label.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_labels_round_trip() {
        for label in QualityLabel::ALL {
            assert_eq!(QualityLabel::parse(label.as_str()), Some(label));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(QualityLabel::parse("muy bien"), None);
        assert_eq!(QualityLabel::parse("Bien"), None);
        assert_eq!(QualityLabel::parse(" BIEN"), None);
    }

    #[test]
    fn scores_rank_best_to_worst() {
        let scores: Vec<u32> = QualityLabel::ALL.iter().map(|l| l.score()).collect();
        assert_eq!(scores, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn unknown_quality_scores_one() {
        assert_eq!(score_of("WEIRD"), 1);
        assert_eq!(score_of(""), 1);
        assert_eq!(score_of("MUY MALA"), 1);
        assert_eq!(score_of("MUY BIEN"), 5);
    }
}
