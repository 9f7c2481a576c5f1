//! Multi-word expression discovery over unsegmented token streams.
//!
//! Word-boundary placement is treated as a set of latent variables under
//! a Dirichlet-process lexicon model and inferred by collapsed Gibbs
//! sampling with simulated annealing: frequent, cohesive token runs merge
//! into lexicon units while infrequent runs fall apart into unigrams.
//!
//! Two knobs shape the result. `concentration` controls lexicon size and
//! sparsity (small values give a smaller, denser inventory; large values
//! a larger, sparser one) and should be on the order of the expected
//! lexicon size. `continue_prob` shapes the unit length distribution:
//! raising it favors shorter expressions.

mod base;
mod config;
mod error;
mod interner;
mod lexicon;
mod sampler;
mod stats;
mod types;
mod unigrams;

#[cfg(feature = "python")]
mod py_bindings;


pub use config::SegmenterConfig;
pub use error::ConfigError;
pub use sampler::Segmenter;
pub use stats::{LengthHistogram, LexiconEntry};
pub use types::{Boundary, Splitter};
