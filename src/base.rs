use crate::types::TokenId;
use crate::unigrams::UnigramTable;

/// Prior log-probability that a token span forms a coherent unit: an
/// add-one-smoothed unigram model combined with a geometric penalty on
/// the number of tokens. This is the base distribution from which the
/// Dirichlet process draws brand-new units.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BaseMeasure {
    log_continue: f64,
    log_extend: f64,
}

impl BaseMeasure {
    pub(crate) fn new(continue_prob: f64) -> Self {
        Self {
            log_continue: continue_prob.ln(),
            log_extend: (1.0 - continue_prob).ln(),
        }
    }

    /// `normalizer` is the smoothing denominator `Z = lexicon total +
    /// unigram vocabulary size`, snapshotted by the caller.
    pub(crate) fn span_log_prob(
        &self,
        unigrams: &UnigramTable,
        normalizer: f64,
        span: &[TokenId],
    ) -> f64 {
        let mut log_prob = 0.0;
        for token in span {
            log_prob += ((unigrams.count(*token) + 1) as f64 / normalizer).ln();
        }
        log_prob + self.log_continue + (span.len() as f64 - 1.0) * self.log_extend
    }
}
