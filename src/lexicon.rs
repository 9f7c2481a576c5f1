use crate::types::Span;
use rustc_hash::FxHashMap;

/// Occurrence counts for every token span currently treated as a unit:
/// the "restaurant" of the Dirichlet process.
///
/// Invariant between committed updates: the sum of all counts equals the
/// number of units the current segmentation induces, and `total` tracks
/// that sum incrementally.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Lexicon {
    counts: FxHashMap<Span, i64>,
    total: i64,
}

impl Lexicon {
    pub(crate) fn increment(&mut self, span: Span) {
        *self.counts.entry(span).or_insert(0) += 1;
        self.total += 1;
    }

    /// Entries never store zero or negative counts; a decrement to zero
    /// removes the entry so stale keys cannot contaminate probability mass.
    pub(crate) fn decrement(&mut self, span: &Span) {
        if let Some(count) = self.counts.get_mut(span) {
            *count -= 1;
            self.total -= 1;
            if *count <= 0 {
                self.counts.remove(span);
            }
        }
    }

    pub(crate) fn count(&self, span: &Span) -> i64 {
        self.counts.get(span).copied().unwrap_or(0)
    }

    /// Sum of all entry counts: the number of units generated so far,
    /// used as the Dirichlet-process normalizer.
    pub(crate) fn total(&self) -> i64 {
        self.total
    }

    pub(crate) fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&Span, i64)> {
        self.counts.iter().map(|(span, count)| (span, *count))
    }
}
