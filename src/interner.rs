use crate::error::ConfigError;
use crate::types::{Boundary, Splitter, TokenId};
use rustc_hash::{FxHashMap, FxHashSet};
use sentencex::segment;

pub(crate) fn validate_token_vocabulary_size(vocab_size: usize) -> Result<(), ConfigError> {
    let capacity = (u32::MAX as usize).saturating_add(1);
    if vocab_size > capacity {
        return Err(ConfigError::TokenVocabularyOverflow);
    }
    Ok(())
}

#[derive(Default)]
pub(crate) struct Interner {
    str_to_id: FxHashMap<String, TokenId>,
    id_to_str: Vec<String>,
}

impl Interner {
    /// Splits documents into segments, whitespace-tokenizes them, and
    /// interns the vocabulary. The returned boundary marks start every
    /// within-segment gap as `Split` and every between-segment gap as
    /// `Fixed`, so units never cross a sentence or line break.
    pub(crate) fn from_documents(
        documents: &[String],
        splitter: Splitter<'_>,
    ) -> Result<(Self, Vec<TokenId>, Vec<Boundary>), ConfigError> {
        let mut uniq = FxHashSet::default();
        let mut tokenized_segments = Vec::new();

        for document in documents {
            let mut ingest_segment = |segment: &str| {
                let tokens = segment
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>();
                if tokens.is_empty() {
                    return;
                }
                uniq.extend(tokens.iter().cloned());
                tokenized_segments.push(tokens);
            };

            match splitter {
                Splitter::Delimiter(Some(delim)) => {
                    for segment in document.split(delim) {
                        ingest_segment(segment);
                    }
                }
                Splitter::Delimiter(None) => ingest_segment(document),
                Splitter::Sentencex { language } => {
                    for sentence in segment(language, document) {
                        ingest_segment(sentence);
                    }
                }
            }
        }

        let interner = Self::from_vocabulary(uniq)?;

        let mut tokens = Vec::new();
        let mut boundaries = Vec::new();
        for segment_tokens in &tokenized_segments {
            if !tokens.is_empty() {
                boundaries.push(Boundary::Fixed);
            }
            for (ix, token) in segment_tokens.iter().enumerate() {
                if ix > 0 {
                    boundaries.push(Boundary::Split);
                }
                tokens.push(interner.id_for(token));
            }
        }

        Ok((interner, tokens, boundaries))
    }

    /// Interns an already-tokenized sequence, preserving order.
    pub(crate) fn from_tokens(tokens: &[String]) -> Result<(Self, Vec<TokenId>), ConfigError> {
        let uniq = tokens.iter().cloned().collect::<FxHashSet<_>>();
        let interner = Self::from_vocabulary(uniq)?;
        let token_ids = tokens
            .iter()
            .map(|token| interner.id_for(token))
            .collect::<Vec<_>>();
        Ok((interner, token_ids))
    }

    fn from_vocabulary(uniq: FxHashSet<String>) -> Result<Self, ConfigError> {
        let mut sorted = uniq.into_iter().collect::<Vec<_>>();
        sorted.sort_unstable();
        validate_token_vocabulary_size(sorted.len())?;

        let mut interner = Self::default();
        interner.str_to_id.reserve(sorted.len());
        interner.id_to_str.reserve(sorted.len());
        for token in sorted {
            let id = interner.id_to_str.len() as TokenId;
            interner.str_to_id.insert(token.clone(), id);
            interner.id_to_str.push(token);
        }
        Ok(interner)
    }

    pub(crate) fn id_for(&self, value: &str) -> TokenId {
        *self
            .str_to_id
            .get(value)
            .expect("token missing in interner while converting corpus")
    }

    pub(crate) fn ids_to_strings(&self, ids: &[TokenId]) -> Vec<String> {
        ids.iter()
            .map(|id| self.id_to_str[*id as usize].clone())
            .collect()
    }

    /// Renders a span as its surface form: the tokens concatenated with no
    /// separator between them.
    pub(crate) fn surface(&self, ids: &[TokenId]) -> String {
        ids.iter()
            .map(|id| self.id_to_str[*id as usize].as_str())
            .collect()
    }
}
