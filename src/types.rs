use crate::error::ConfigError;
use smallvec::SmallVec;

// Annealing only modifies the sampling distribution below this temperature;
// at 1.0 the predictive probabilities are used unmodified.
pub(crate) const ANNEAL_TEMPERATURE_CUTOFF: f64 = 0.999;
pub(crate) const HISTOGRAM_BUCKETS: usize = 16;
pub(crate) const PARALLEL_SORT_THRESHOLD: usize = 4096;

pub(crate) type TokenId = u32;
pub(crate) type Span = SmallVec<[TokenId; 3]>;

/// State of the gap between two consecutive tokens.
///
/// `Fixed` is absorbing: the sampler never revisits it. The other two
/// states are mutually reachable on every sweep.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Boundary {
    /// The tokens on both sides belong to the same unit.
    Merged,
    /// The tokens are split into separate units; resamplable.
    Split,
    /// Split, and permanently excluded from resampling.
    Fixed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Splitter<'a> {
    Delimiter(Option<&'a str>),
    Sentencex { language: &'a str },
}

impl<'a> Splitter<'a> {
    pub fn parse(
        splitter: &'a str,
        line_delimiter: Option<&'a str>,
        sentencex_language: &'a str,
    ) -> Result<Self, ConfigError> {
        match splitter {
            "delimiter" => Ok(Self::Delimiter(line_delimiter)),
            "sentencex" => {
                if sentencex_language.trim().is_empty() {
                    return Err(ConfigError::InvalidSplitter(
                        "sentencex_language must be a non-empty language code".to_string(),
                    ));
                }
                Ok(Self::Sentencex {
                    language: sentencex_language,
                })
            }
            _ => Err(ConfigError::InvalidSplitter(format!(
                "invalid splitter {splitter:?}; expected one of: 'delimiter', 'sentencex'"
            ))),
        }
    }
}
