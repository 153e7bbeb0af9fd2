use super::model::{score_of, AggregateView, QualityLabel, Record};

// ---------------------------------------------------------------------------
// aggregate – single pass over the record set
// ---------------------------------------------------------------------------

/// Compute the [`AggregateView`] for a record set.
///
/// Pure and total: any well-formed slice, including the empty one, yields a
/// view. Counts are keyed by the raw quality string in first-seen order;
/// groups partition the records carrying one of the five canonical labels,
/// preserving input order.
pub fn aggregate(records: &[Record]) -> AggregateView {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut groups: [Vec<Record>; 5] = Default::default();
    let mut score_sum: u64 = 0;

    for rec in records {
        match counts.iter_mut().find(|(q, _)| q == &rec.quality) {
            Some((_, n)) => *n += 1,
            None => counts.push((rec.quality.clone(), 1)),
        }
        score_sum += u64::from(score_of(&rec.quality));
        if let Some(label) = QualityLabel::parse(&rec.quality) {
            groups[label.index()].push(rec.clone());
        }
    }

    let average = if records.is_empty() {
        None
    } else {
        Some(score_sum as f64 / records.len() as f64)
    };

    AggregateView::new(counts, average, groups, records.len())
}
