//! Stop-word sources for text normalization

use std::collections::HashSet;

/// Supplies the set of words excluded during normalization.
///
/// Implemented by the built-in English list and by any plain `HashSet<String>`,
/// so callers can inject a fixed set without touching the processor.
pub trait StopWordSource {
    fn stop_words(&self) -> HashSet<String>;
}

impl StopWordSource for HashSet<String> {
    fn stop_words(&self) -> HashSet<String> {
        self.clone()
    }
}

impl StopWordSource for [&str] {
    fn stop_words(&self) -> HashSet<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

/// Common English function words.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below",
    "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t",
    "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn",
    "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Words that show up in every posting and say nothing about the candidate.
const JOB_POSTING: &[&str] = &["job", "role", "position", "company", "team", "work"];

/// Built-in English stop-words plus job-posting filler, extendable per run.
#[derive(Debug, Clone, Default)]
pub struct EnglishStopWords {
    extra: Vec<String>,
}

impl EnglishStopWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra.extend(words.into_iter().map(Into::into));
        self
    }
}

impl StopWordSource for EnglishStopWords {
    fn stop_words(&self) -> HashSet<String> {
        ENGLISH
            .iter()
            .chain(JOB_POSTING.iter())
            .map(|s| s.to_string())
            .chain(self.extra.iter().map(|s| s.to_lowercase()))
            .collect()
    }
}
