use crate::base::BaseMeasure;
use crate::config::SegmenterConfig;
use crate::error::ConfigError;
use crate::interner::Interner;
use crate::lexicon::Lexicon;
use crate::stats::{filtered_entries, LengthHistogram, LexiconEntry};
use crate::types::{Boundary, Span, Splitter, TokenId, ANNEAL_TEMPERATURE_CUTOFF};
use crate::unigrams::UnigramTable;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Temperature for a 0-based sweep index: ramps linearly over the
/// annealing sweeps, then holds at exactly 1 for the remainder.
pub(crate) fn annealing_temperature(sweep_ix: usize, anneal_iters: usize) -> f64 {
    ((sweep_ix + 1) as f64 / anneal_iters as f64).min(1.0)
}

/// Gibbs sampler over word-boundary variables.
///
/// Owns the token sequence, the current boundary marks, the unit lexicon,
/// and the unigram statistics. Each sweep resamples every non-fixed gap
/// left to right from the Dirichlet-process predictive distribution; the
/// lexicon left behind after the final sweep is the discovered
/// multi-word-expression inventory.
pub struct Segmenter {
    pub(crate) interner: Interner,
    pub(crate) tokens: Vec<TokenId>,
    pub(crate) boundaries: Vec<Boundary>,
    pub(crate) lexicon: Lexicon,
    pub(crate) unigrams: UnigramTable,
    pub(crate) base: BaseMeasure,
    pub(crate) config: SegmenterConfig,
    rng: StdRng,
}

impl Segmenter {
    /// Builds a sampler from a pre-tokenized sequence and an explicit
    /// initial boundary assignment. Mark a gap `Fixed` to pin a known
    /// boundary; the sampler will never merge across it.
    pub fn new(
        tokens: Vec<String>,
        boundaries: Vec<Boundary>,
        config: SegmenterConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let expected = tokens.len().saturating_sub(1);
        if boundaries.len() != expected {
            return Err(ConfigError::BoundaryLengthMismatch {
                tokens: tokens.len(),
                expected,
                actual: boundaries.len(),
            });
        }
        let (interner, token_ids) = Interner::from_tokens(&tokens)?;
        Ok(Self::from_parts(interner, token_ids, boundaries, config))
    }

    /// Builds a sampler straight from raw documents. Gaps inside a
    /// segment start out `Split`; gaps between segments are `Fixed`, so
    /// expressions never cross a sentence or line break.
    pub fn from_documents(
        documents: &[String],
        splitter: Splitter<'_>,
        config: SegmenterConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let (interner, token_ids, boundaries) = Interner::from_documents(documents, splitter)?;
        Ok(Self::from_parts(interner, token_ids, boundaries, config))
    }

    fn from_parts(
        interner: Interner,
        tokens: Vec<TokenId>,
        boundaries: Vec<Boundary>,
        config: SegmenterConfig,
    ) -> Self {
        let unigrams = UnigramTable::from_tokens(&tokens);
        let mut segmenter = Self {
            interner,
            tokens,
            boundaries,
            lexicon: Lexicon::default(),
            unigrams,
            base: BaseMeasure::new(config.continue_prob),
            config,
            rng: StdRng::seed_from_u64(config.seed),
        };
        segmenter.seed_lexicon();
        segmenter
    }

    /// Counts the units implied by the initial boundary marks into the
    /// lexicon, one increment per unit.
    fn seed_lexicon(&mut self) {
        if self.tokens.is_empty() {
            return;
        }
        let mut start = 0;
        for gap in 0..self.boundaries.len() {
            if self.boundaries[gap] != Boundary::Merged {
                self.lexicon
                    .increment(Span::from_slice(&self.tokens[start..gap + 1]));
                start = gap + 1;
            }
        }
        self.lexicon
            .increment(Span::from_slice(&self.tokens[start..]));
    }

    /// Runs the full annealing schedule followed by plain Gibbs sweeps.
    pub fn run(&mut self) {
        let total_sweeps = self.config.anneal_iters + self.config.extra_iters;
        log::info!(
            "starting boundary sampling: {} tokens, {} sweeps ({} annealed)",
            self.tokens.len(),
            total_sweeps,
            self.config.anneal_iters
        );

        for sweep_ix in 0..total_sweeps {
            let temperature = annealing_temperature(sweep_ix, self.config.anneal_iters);
            log::debug!("sweep {sweep_ix}  temperature={temperature:.2}");
            self.sweep(temperature);
            #[allow(clippy::manual_is_multiple_of)]
            if sweep_ix % 10 == 0 {
                log::debug!("lexicon by span length:\n{}", self.length_histogram());
            }
        }

        log::info!(
            "finished sampling: {} distinct units, {} unit occurrences",
            self.lexicon.distinct_len(),
            self.lexicon.total()
        );
    }

    /// One left-to-right pass resampling every non-fixed gap at the given
    /// temperature. Strictly sequential: each decision reads the lexicon
    /// and neighbor marks left behind by the previous one.
    pub(crate) fn sweep(&mut self, temperature: f64) {
        let alpha = self.config.concentration;
        let total = self.lexicon.total() as f64;
        let inv_total_alpha = 1.0 / (total + alpha);
        let normalizer = total + self.unigrams.vocab_len() as f64;

        for gap in 0..self.tokens.len().saturating_sub(1) {
            if self.boundaries[gap] == Boundary::Fixed {
                continue;
            }
            self.resample_gap(gap, alpha, inv_total_alpha, normalizer, temperature);
        }
    }

    /// The maximal spans meeting at `gap`: the left span runs back and
    /// the right span runs forward through consecutive `Merged` marks.
    pub(crate) fn span_extents(&self, gap: usize) -> (usize, usize) {
        let mut start = gap;
        while start > 0 && self.boundaries[start - 1] == Boundary::Merged {
            start -= 1;
        }
        let mut end = gap + 2;
        while end < self.tokens.len() && self.boundaries[end - 1] == Boundary::Merged {
            end += 1;
        }
        (start, end)
    }

    fn resample_gap(
        &mut self,
        gap: usize,
        alpha: f64,
        inv_total_alpha: f64,
        normalizer: f64,
        temperature: f64,
    ) {
        let split_at = gap + 1;
        let (start, end) = self.span_extents(gap);

        let key_left = Span::from_slice(&self.tokens[start..split_at]);
        let key_right = Span::from_slice(&self.tokens[split_at..end]);
        let mut key_merged = Span::with_capacity(key_left.len() + key_right.len());
        key_merged.extend_from_slice(&key_left);
        key_merged.extend_from_slice(&key_right);

        // Leave-one-out: remove the current assignment's own contribution
        // before scoring. Local arithmetic only; the table is not written
        // until the commit below.
        let mut count_left = self.lexicon.count(&key_left);
        let mut count_right = self.lexicon.count(&key_right);
        let mut count_merged = self.lexicon.count(&key_merged);
        if self.boundaries[gap] == Boundary::Split {
            count_left -= 1;
            count_right -= 1;
        } else {
            count_merged -= 1;
        }

        let log_prob_left = self
            .base
            .span_log_prob(&self.unigrams, normalizer, &key_left);
        let log_prob_right = self
            .base
            .span_log_prob(&self.unigrams, normalizer, &key_right);
        let log_prob_merged = self
            .base
            .span_log_prob(&self.unigrams, normalizer, &key_merged);

        let mut prob_merge =
            (count_merged as f64 + alpha * log_prob_merged.exp()) * inv_total_alpha;
        let mut prob_split = ((count_left as f64 + alpha * log_prob_left.exp())
            * inv_total_alpha)
            * ((count_right as f64 + alpha * log_prob_right.exp()) * inv_total_alpha);

        // Annealing: normalize, raise to the temperature, renormalize. At
        // temperature 1 the predictive distribution is used unmodified.
        if temperature < ANNEAL_TEMPERATURE_CUTOFF {
            let sum = prob_merge + prob_split;
            prob_merge = (prob_merge / sum).powf(temperature);
            prob_split = (prob_split / sum).powf(temperature);
        }

        let prob_merge = prob_merge / (prob_merge + prob_split);
        let split = self.rng.random::<f64>() > prob_merge;

        if self.boundaries[gap] == Boundary::Merged && split {
            self.boundaries[gap] = Boundary::Split;
            self.lexicon.decrement(&key_merged);
            self.lexicon.increment(key_left);
            self.lexicon.increment(key_right);
        } else if self.boundaries[gap] == Boundary::Split && !split {
            self.boundaries[gap] = Boundary::Merged;
            self.lexicon.decrement(&key_left);
            self.lexicon.decrement(&key_right);
            self.lexicon.increment(key_merged);
        }
    }

    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// The discovered lexicon under the configured `min_count` and
    /// `min_length` filters, sorted by count descending then surface.
    pub fn lexicon_entries(&self) -> Vec<LexiconEntry> {
        self.filtered_entries(self.config.min_count, self.config.min_length)
    }

    pub fn filtered_entries(&self, min_count: i64, min_length: usize) -> Vec<LexiconEntry> {
        filtered_entries(&self.lexicon, &self.interner, min_count, min_length)
    }

    pub fn length_histogram(&self) -> LengthHistogram {
        LengthHistogram::from_lexicon(&self.lexicon)
    }

    /// Decodes the current segmentation into unit token groups, in corpus
    /// order. Concatenating the groups reconstructs the token sequence.
    pub fn units(&self) -> Vec<Vec<String>> {
        let mut units = Vec::new();
        if self.tokens.is_empty() {
            return units;
        }
        let mut start = 0;
        for gap in 0..self.boundaries.len() {
            if self.boundaries[gap] != Boundary::Merged {
                units.push(self.interner.ids_to_strings(&self.tokens[start..gap + 1]));
                start = gap + 1;
            }
        }
        units.push(self.interner.ids_to_strings(&self.tokens[start..]));
        units
    }
}
