//! Frequency-ranked keyword extraction

use crate::error::{JobMatcherError, Result};
use std::collections::HashMap;

/// Top-K most frequent distinct tokens, ties kept in first-occurrence order.
///
/// Fails with `InvalidArgument` when `max_keywords` is zero.
pub fn extract_keywords(tokens: &[String], max_keywords: usize) -> Result<Vec<String>> {
    validate_keyword_count(max_keywords)?;

    // Distinct tokens in first-occurrence order, with their counts
    let mut first_seen: Vec<&str> = Vec::new();
    let mut word_freq: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        let count = word_freq.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(token.as_str());
        }
        *count += 1;
    }

    let mut keywords: Vec<(&str, usize)> = first_seen
        .into_iter()
        .map(|word| (word, word_freq[word]))
        .collect();

    // Stable sort keeps first-occurrence order among equal counts
    keywords.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(keywords
        .into_iter()
        .take(max_keywords)
        .map(|(word, _)| word.to_string())
        .collect())
}

pub fn validate_keyword_count(max_keywords: usize) -> Result<()> {
    if max_keywords == 0 {
        return Err(JobMatcherError::InvalidArgument(
            "number of keywords must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
