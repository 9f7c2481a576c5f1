#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("concentration must be a finite value greater than 0, got {0}")]
    InvalidConcentration(f64),
    #[error("continue_prob must be strictly between 0 and 1, got {0}")]
    InvalidContinueProb(f64),
    #[error("expected {expected} boundary marks for {tokens} tokens, got {actual}")]
    BoundaryLengthMismatch {
        tokens: usize,
        expected: usize,
        actual: usize,
    },
    #[error("token vocabulary exceeded TokenId capacity (u32)")]
    TokenVocabularyOverflow,
    #[error("{0}")]
    InvalidSplitter(String),
}
