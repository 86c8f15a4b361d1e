//! Reference lists: punctuation symbols to strip and stop words to discard.
//!
//! A [`Lexicon`] is immutable once built and may be shared by any number of
//! concurrent tokenization units. The process-wide instance is initialized
//! lazily behind a `OnceCell`, so concurrent first use cannot race or
//! double-initialize.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::OnceCell;

use crate::types::{FreqError, FreqResult};

/// Punctuation stripped when no symbol file is supplied.
const DEFAULT_PUNCTUATION: &[&str] = &[
    ".", ",", ";", ":", "!", "?", "\"", "'", "(", ")", "[", "]", "{", "}", "<", ">", "/", "\\",
    "|", "@", "#", "$", "%", "^", "&", "*", "_", "~", "`", "=",
];

/// Stop words discarded when no stop-word file is supplied.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can",
    "need", "must", "to", "of", "in", "for", "on", "with", "at", "by", "from", "as", "into",
    "about", "but", "not", "or", "and", "if", "it", "its", "this", "that", "which", "who", "what",
    "when", "where", "how", "all", "each", "both", "few", "more", "most", "other", "some", "such",
    "no", "than", "too", "very", "just", "also",
];

static GLOBAL: OnceCell<Lexicon> = OnceCell::new();

/// Immutable punctuation and stop-word lists shared by all tokenization work.
#[derive(Debug, Clone)]
pub struct Lexicon {
    punctuation: Vec<String>,
    stop_words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from raw symbol and stop-word lists.
    ///
    /// Punctuation symbols are ordered longest first, ties byte-lexicographic,
    /// so repeated substring removal behaves the same on every run even when
    /// symbols overlap or contain one another.
    pub fn new(punctuation: Vec<String>, stop_words: HashSet<String>) -> Self {
        let mut punctuation = punctuation;
        punctuation.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        punctuation.dedup();
        Self {
            punctuation,
            stop_words,
        }
    }

    /// Lexicon built from the embedded default lists.
    pub fn embedded() -> Self {
        Self::new(
            DEFAULT_PUNCTUATION.iter().map(|s| s.to_string()).collect(),
            DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Load a lexicon, falling back to the embedded list for any resource
    /// without a file.
    ///
    /// Both resources are newline-delimited. Punctuation lines may carry a
    /// backslash escape, which is stripped before use; stop-word lines are
    /// trimmed. Blank lines are ignored. A missing or unreadable file is a
    /// [`FreqError::ResourceLoad`] and no lexicon is produced.
    pub fn load(punctuation: Option<&Path>, stop_words: Option<&Path>) -> FreqResult<Self> {
        let punctuation: Vec<String> = match punctuation {
            Some(path) => read_lines(path, "punctuation")?
                .into_iter()
                .map(|line| line.replacen('\\', "", 1))
                .filter(|symbol| !symbol.is_empty())
                .collect(),
            None => DEFAULT_PUNCTUATION.iter().map(|s| s.to_string()).collect(),
        };
        let stop_words: HashSet<String> = match stop_words {
            Some(path) => read_lines(path, "stop-word")?
                .into_iter()
                .map(|line| line.trim().to_string())
                .filter(|word| !word.is_empty())
                .collect(),
            None => DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
        };
        Ok(Self::new(punctuation, stop_words))
    }

    /// Process-wide lexicon with the embedded lists, initialized at most once
    /// no matter how many units reach for it first.
    pub fn global() -> &'static Lexicon {
        GLOBAL.get_or_init(Lexicon::embedded)
    }

    /// Punctuation symbols in removal order.
    pub fn punctuation(&self) -> &[String] {
        &self.punctuation
    }

    /// Whether a token is in the stop-word set.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Number of stop words.
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::embedded()
    }
}

fn read_lines(path: &Path, resource: &'static str) -> FreqResult<Vec<String>> {
    let file = File::open(path).map_err(|e| load_error(resource, path, e))?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(line.map_err(|e| load_error(resource, path, e))?);
    }
    Ok(lines)
}

fn load_error(resource: &'static str, path: &Path, source: std::io::Error) -> FreqError {
    FreqError::ResourceLoad {
        resource,
        path: path.to_path_buf(),
        source,
    }
}
