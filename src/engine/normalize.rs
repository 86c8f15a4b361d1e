//! Token normalization: punctuation stripping and validity filtering.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Lexicon;

/// Purely numeric tokens with an optional leading sign, including the empty
/// string.
static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]*$").expect("numeric pattern is valid"));

/// Pure normalization functions over an already-loaded [`Lexicon`].
pub struct Normalizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Normalizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Remove every occurrence of every punctuation symbol from `input`.
    ///
    /// Symbols are removed one at a time as plain substrings (not as a
    /// character class), in the lexicon's fixed longest-first order, so
    /// overlapping symbols strip the same way on every run.
    pub fn remove_punctuation(&self, input: &str) -> String {
        let mut out = input.to_string();
        for symbol in self.lexicon.punctuation() {
            if out.contains(symbol.as_str()) {
                out = out.replace(symbol.as_str(), "");
            }
        }
        out
    }

    /// Whether a candidate survives filtering. Purely numeric tokens
    /// (optionally signed, including the empty string) and stop words are
    /// rejected; everything else passes.
    pub fn is_valid_token(&self, token: &str) -> bool {
        !NUMERIC.is_match(token) && !self.lexicon.is_stop_word(token)
    }
}
