//! Line tokenizer producing normalized, filtered tokens.

use crate::engine::normalize::Normalizer;
use crate::lexicon::Lexicon;

/// Deterministic tokenizer: the same line always yields the same token
/// sequence, so re-running a unit of work is always safe.
pub struct Tokenizer<'a> {
    normalizer: Normalizer<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over the given lexicon.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            normalizer: Normalizer::new(lexicon),
        }
    }

    /// Tokenizer over the process-wide lexicon.
    pub fn with_global() -> Tokenizer<'static> {
        Tokenizer::new(Lexicon::global())
    }

    /// Tokenize one line into normalized tokens, in input order, duplicates
    /// included. Empty and whitespace-only lines yield no tokens.
    ///
    /// The line is lowercased and stripped of punctuation before the
    /// whitespace split; each candidate is stripped once more at token
    /// granularity (a no-op when the line pass already removed everything)
    /// and then filtered through [`Normalizer::is_valid_token`].
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        let stripped = self.normalizer.remove_punctuation(&line.to_lowercase());
        stripped
            .split_whitespace()
            .map(|candidate| self.normalizer.remove_punctuation(candidate))
            .filter(|token| self.normalizer.is_valid_token(token))
            .collect()
    }
}
