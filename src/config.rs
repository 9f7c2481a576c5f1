use crate::error::ConfigError;

/// Sampler configuration.
///
/// `concentration` is the Dirichlet-process strength parameter: small
/// values (e.g. 1) lead to a smaller, denser expression lexicon; large
/// values (e.g. 1e6) lead to a larger, sparser one. It should be on the
/// order of the expected lexicon size.
///
/// `continue_prob` is the probability of terminating a unit after each
/// token; raising it favors shorter expressions, lowering it favors
/// longer ones.
#[derive(Clone, Copy, Debug)]
pub struct SegmenterConfig {
    pub concentration: f64,
    pub continue_prob: f64,
    /// Sweeps during which the temperature ramps from near 0 to 1.
    pub anneal_iters: usize,
    /// Plain Gibbs sweeps after annealing, at temperature 1.
    pub extra_iters: usize,
    /// Minimum occurrence count for an entry to appear in the extracted lexicon.
    pub min_count: i64,
    /// Minimum span length (in tokens) for an entry to appear in the extracted lexicon.
    pub min_length: usize,
    pub seed: u64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            concentration: 20_000.0,
            continue_prob: 0.67,
            anneal_iters: 100,
            extra_iters: 100,
            min_count: 5,
            min_length: 1,
            seed: 1234,
        }
    }
}

impl SegmenterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.concentration.is_finite() || self.concentration <= 0.0 {
            return Err(ConfigError::InvalidConcentration(self.concentration));
        }
        if !self.continue_prob.is_finite()
            || self.continue_prob <= 0.0
            || self.continue_prob >= 1.0
        {
            return Err(ConfigError::InvalidContinueProb(self.continue_prob));
        }
        Ok(())
    }
}
