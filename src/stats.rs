use crate::interner::Interner;
use crate::lexicon::Lexicon;
use crate::types::{HISTOGRAM_BUCKETS, PARALLEL_SORT_THRESHOLD};
use rayon::prelude::*;
use std::fmt;

/// A discovered lexicon entry: the span's tokens concatenated with no
/// separator, and its occurrence count under the final segmentation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexiconEntry {
    pub surface: String,
    pub count: i64,
}

/// Extracts `(surface, count)` entries above the given thresholds, sorted
/// by count descending then surface. The order is total, so identical
/// lexicon states always produce identical listings.
pub(crate) fn filtered_entries(
    lexicon: &Lexicon,
    interner: &Interner,
    min_count: i64,
    min_length: usize,
) -> Vec<LexiconEntry> {
    let mut entries = lexicon
        .iter()
        .filter(|(span, count)| *count >= min_count && span.len() >= min_length)
        .map(|(span, count)| LexiconEntry {
            surface: interner.surface(span),
            count,
        })
        .collect::<Vec<_>>();

    let compare = |a: &LexiconEntry, b: &LexiconEntry| {
        b.count.cmp(&a.count).then_with(|| a.surface.cmp(&b.surface))
    };
    if entries.len() >= PARALLEL_SORT_THRESHOLD {
        entries.par_sort_unstable_by(compare);
    } else {
        entries.sort_unstable_by(compare);
    }
    entries
}

/// Distinct-entry and occurrence counts bucketed by span length. Lengths
/// past the last bucket are clamped into it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LengthHistogram {
    types: [i64; HISTOGRAM_BUCKETS + 1],
    tokens: [i64; HISTOGRAM_BUCKETS + 1],
}

impl LengthHistogram {
    pub(crate) fn from_lexicon(lexicon: &Lexicon) -> Self {
        let mut histogram = Self {
            types: [0; HISTOGRAM_BUCKETS + 1],
            tokens: [0; HISTOGRAM_BUCKETS + 1],
        };
        for (span, count) in lexicon.iter() {
            let bucket = (span.len() - 1).min(HISTOGRAM_BUCKETS);
            histogram.types[bucket] += 1;
            histogram.tokens[bucket] += count;
        }
        histogram
    }

    /// Distinct entries of the given span length.
    pub fn types_of_length(&self, length: usize) -> i64 {
        self.types[length.saturating_sub(1).min(HISTOGRAM_BUCKETS)]
    }

    /// Total occurrences of entries of the given span length.
    pub fn tokens_of_length(&self, length: usize) -> i64 {
        self.tokens[length.saturating_sub(1).min(HISTOGRAM_BUCKETS)]
    }

    pub fn type_counts(&self) -> Vec<i64> {
        self.types.to_vec()
    }

    pub fn token_counts(&self) -> Vec<i64> {
        self.tokens.to_vec()
    }
}

impl fmt::Display for LengthHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "length:")?;
        for length in 2..=HISTOGRAM_BUCKETS {
            write!(f, "\t<{length}>")?;
        }
        write!(f, "\ntypes:")?;
        for bucket in 1..HISTOGRAM_BUCKETS {
            write!(f, "\t{}", self.types[bucket])?;
        }
        write!(f, "\ntokens:")?;
        for bucket in 1..HISTOGRAM_BUCKETS {
            write!(f, "\t{}", self.tokens[bucket])?;
        }
        Ok(())
    }
}
