use crate::types::TokenId;
use rustc_hash::FxHashMap;

/// Per-token corpus frequencies, computed once from the raw token
/// sequence (not from the current segmentation) and never mutated after.
#[derive(Clone, Debug, Default)]
pub(crate) struct UnigramTable {
    counts: FxHashMap<TokenId, i64>,
}

impl UnigramTable {
    pub(crate) fn from_tokens(tokens: &[TokenId]) -> Self {
        let mut counts = FxHashMap::default();
        for token in tokens {
            *counts.entry(*token).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub(crate) fn count(&self, token: TokenId) -> i64 {
        self.counts.get(&token).copied().unwrap_or(0)
    }

    pub(crate) fn vocab_len(&self) -> usize {
        self.counts.len()
    }
}
