//! Descriptor tokenization
//!
//! Descriptors are short tag strings such as `"Sci-Fi, Action"`. They are
//! lowercased, split on any non-alphanumeric character, stripped of very short
//! tokens and filtered through a stop-word set.

use crate::stopwords::ENGLISH_STOP_WORDS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Which terms to drop as low-information
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    /// The common English function-word list
    #[default]
    English,
    /// Keep every term
    None,
    /// Caller-supplied list (matched case-insensitively)
    Custom(Vec<String>),
}

impl StopWords {
    fn to_set(&self) -> HashSet<String> {
        match self {
            StopWords::English => ENGLISH_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            StopWords::None => HashSet::new(),
            StopWords::Custom(words) => words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}

/// Text analysis and weighting options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Lowercase descriptors before splitting
    pub lowercase: bool,
    /// Tokens shorter than this many characters are dropped
    pub min_token_chars: usize,
    pub stop_words: StopWords,
    /// Use `ln((1 + n) / (1 + df)) + 1` instead of `ln(n / df) + 1`
    pub smooth_idf: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_token_chars: 2,
            stop_words: StopWords::English,
            smooth_idf: true,
        }
    }
}

impl TextConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_token_chars == 0 {
            return Err(Error::InvalidConfig(
                "min_token_chars must be at least 1".to_string(),
            ));
        }
        if let StopWords::Custom(words) = &self.stop_words {
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(Error::InvalidConfig(
                    "custom stop words must not be blank".to_string(),
                ));
            }
            // Descriptors are split on every non-alphanumeric character
            if let Some(word) = words.iter().find(|w| !w.chars().all(char::is_alphanumeric)) {
                return Err(Error::InvalidConfig(format!(
                    "custom stop word '{}' is not a single term",
                    word
                )));
            }
        }
        Ok(())
    }

    /// Load and validate a JSON config file. Missing fields take defaults.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: TextConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }
}

/// Splits descriptors into terms according to a [`TextConfig`]
#[derive(Debug, Clone)]
pub struct Tokenizer {
    lowercase: bool,
    min_token_chars: usize,
    stop_words: HashSet<String>,
}

impl Tokenizer {
    pub fn new(config: &TextConfig) -> Self {
        Self {
            lowercase: config.lowercase,
            min_token_chars: config.min_token_chars,
            stop_words: config.stop_words.to_set(),
        }
    }

    /// Terms of `text` in order of appearance, repeats included
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.chars().count() >= self.min_token_chars)
            .filter(|s| !self.is_stop_word(s))
            .map(str::to_string)
            .collect()
    }

    #[inline]
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(&term.to_lowercase())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TextConfig::default())
    }
}
