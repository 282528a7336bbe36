//! Text normalization: lowercasing, punctuation stripping and stop-word removal

use crate::config::DEFAULT_MIN_TOKEN_LENGTH;
use crate::processing::stop_words::{EnglishStopWords, StopWordSource};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct TextProcessor {
    stop_words: HashSet<String>,
    min_token_length: usize,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    /// Processor backed by the built-in English stop-words
    pub fn new() -> Self {
        Self::from_source(&EnglishStopWords::new())
    }

    /// Processor backed by any stop-word source.
    ///
    /// Stop-words go through the same cleaning as document text, so list
    /// entries with apostrophes ("don't") still match the stripped token ("dont").
    pub fn from_source<S: StopWordSource + ?Sized>(source: &S) -> Self {
        let mut processor = Self {
            stop_words: HashSet::new(),
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
        };
        processor.add_stop_words(source.stop_words());
        processor
    }

    pub fn with_min_token_length(mut self, min_token_length: usize) -> Self {
        self.min_token_length = min_token_length;
        self
    }

    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_stop_words(words);
        self
    }

    /// Entries are cleaned like document text and split on whitespace, so
    /// "machine learning" stops both "machine" and "learning"
    fn add_stop_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            for cleaned in self.clean_text(word.as_ref()).split_whitespace() {
                self.stop_words.insert(cleaned.to_string());
            }
        }
    }

    /// Lowercase and drop every character that is neither alphanumeric nor whitespace
    pub fn clean_text(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect()
    }

    /// Normalize raw text into an ordered token sequence
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.clean_text(text)
            .split_whitespace()
            .filter(|token| token.chars().count() >= self.min_token_length)
            .filter(|token| !self.stop_words.contains(*token))
            .map(str::to_string)
            .collect()
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}
