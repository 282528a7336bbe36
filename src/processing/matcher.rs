//! Resume to job description matching pipeline

use crate::config::MatchingConfig;
use crate::error::Result;
use crate::processing::comparator::compare_keywords;
use crate::processing::document::{Document, DocumentType};
use crate::processing::keywords::{extract_keywords, validate_keyword_count};
use crate::processing::similarity::TfIdfVectorizer;
use crate::processing::stop_words::{EnglishStopWords, StopWordSource};
use crate::processing::text_processor::TextProcessor;
use log::debug;
use serde::{Deserialize, Serialize};

/// Outcome of one matching run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// TF-IDF cosine similarity of the full documents, in [0.0, 1.0]
    pub score: f64,
    /// Job keywords also among the resume keywords, in job keyword order
    pub matched: Vec<String>,
    /// Job keywords absent from the resume keywords, in job keyword order
    pub missing: Vec<String>,
    pub resume_keywords: Vec<String>,
    pub job_keywords: Vec<String>,
}

impl MatchResult {
    pub fn match_percentage(&self) -> f64 {
        self.score * 100.0
    }
}

/// Stateless matcher configured once with stop-words and keyword count.
///
/// Holds no per-run state, so one instance can serve any number of
/// concurrent matches.
#[derive(Debug, Clone)]
pub struct JobMatcher {
    processor: TextProcessor,
    vectorizer: TfIdfVectorizer,
    num_keywords: usize,
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::from_config(&MatchingConfig::default())
    }
}

impl JobMatcher {
    /// Built-in English stop-words extended with the configured extras
    pub fn from_config(config: &MatchingConfig) -> Self {
        let stop_words = EnglishStopWords::new().with_extra(config.extra_stop_words.iter().cloned());
        Self::with_stop_words(&stop_words, config)
    }

    pub fn with_stop_words<S: StopWordSource + ?Sized>(source: &S, config: &MatchingConfig) -> Self {
        let processor = TextProcessor::from_source(source).with_min_token_length(config.min_token_length);

        Self {
            processor,
            vectorizer: TfIdfVectorizer::new().with_max_features(config.max_features),
            num_keywords: config.num_keywords,
        }
    }

    pub fn num_keywords(&self) -> usize {
        self.num_keywords
    }

    /// Match using the configured keyword count
    pub fn match_default(&self, resume_text: &str, job_text: &str) -> Result<MatchResult> {
        self.match_texts(resume_text, job_text, self.num_keywords)
    }

    /// Score a resume against a job description and split the job's keywords
    /// into matched and missing.
    ///
    /// Only a zero `num_keywords` is an error; empty or stop-word-only text
    /// yields empty keyword sets and a score of 0.0.
    pub fn match_texts(&self, resume_text: &str, job_text: &str, num_keywords: usize) -> Result<MatchResult> {
        validate_keyword_count(num_keywords)?;

        let resume = Document::new(resume_text, DocumentType::Resume, &self.processor);
        let job = Document::new(job_text, DocumentType::JobDescription, &self.processor);
        self.match_documents(&resume, &job, num_keywords)
    }

    pub fn match_documents(&self, resume: &Document, job: &Document, num_keywords: usize) -> Result<MatchResult> {
        debug!(
            "Normalized tokens: resume={}, job={}",
            resume.tokens().len(),
            job.tokens().len()
        );

        let resume_keywords = extract_keywords(resume.tokens(), num_keywords)?;
        let job_keywords = extract_keywords(job.tokens(), num_keywords)?;
        debug!(
            "Extracted keywords: resume={}, job={} (k={})",
            resume_keywords.len(),
            job_keywords.len(),
            num_keywords
        );

        let score = self.vectorizer.similarity(resume.tokens(), job.tokens());
        let comparison = compare_keywords(&resume_keywords, &job_keywords);
        debug!(
            "Match score {:.4}: {} matched, {} missing",
            score,
            comparison.matched.len(),
            comparison.missing.len()
        );

        Ok(MatchResult {
            score,
            matched: comparison.matched,
            missing: comparison.missing,
            resume_keywords,
            job_keywords,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_high_overlap_scenario() {
        let matcher = JobMatcher::default();
        let result = matcher
            .match_texts(
                "Python developer with REST API experience and Docker",
                "Looking for Python developer with REST API and Kubernetes experience",
                30,
            )
            .unwrap();

        for word in ["python", "developer", "rest", "api", "experience"] {
            assert!(result.matched.contains(&word.to_string()), "expected match: {}", word);
        }
        assert!(result.missing.contains(&"kubernetes".to_string()));
        assert!(!result.missing.contains(&"docker".to_string()));
        assert!(result.score >= 0.60, "score was {}", result.score);
        assert!(result.score < 0.80);
    }

    #[test]
    fn test_empty_resume_scenario() {
        let result = JobMatcher::default().match_texts("", "Python required", 30).unwrap();

        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["python", "required"]);
        assert!(result.resume_keywords.is_empty());
    }

    #[test]
    fn test_identical_texts_scenario() {
        let text = "Senior Rust engineer: async Rust, Tokio, PostgreSQL, Kubernetes.";
        let result = JobMatcher::default().match_default(text, text).unwrap();

        assert_eq!(result.score, 1.0);
        assert!(result.missing.is_empty());
        assert_eq!(result.matched, result.job_keywords);
    }

    #[test]
    fn test_identical_short_terms_score_one() {
        let result = JobMatcher::default().match_default("Go AI ML C", "Go AI ML C").unwrap();

        assert_eq!(result.score, 1.0);
        assert_eq!(result.job_keywords, vec!["go", "ai", "ml", "c"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_short_skill_terms_reported_missing() {
        let result = JobMatcher::default()
            .match_default("Python developer", "Python developer with Go and AI")
            .unwrap();

        assert_eq!(result.matched, vec!["python", "developer"]);
        assert_eq!(result.missing, vec!["go", "ai"]);
    }

    #[test]
    fn test_min_token_length_from_config() {
        let config = MatchingConfig {
            min_token_length: 3,
            ..MatchingConfig::default()
        };
        let result = JobMatcher::from_config(&config)
            .match_default("Python developer", "Python developer with Go and AI")
            .unwrap();

        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_multi_word_extra_stop_word() {
        let config = MatchingConfig {
            extra_stop_words: vec!["machine learning".to_string()],
            ..MatchingConfig::default()
        };
        let result = JobMatcher::from_config(&config)
            .match_default("rust", "machine learning rust")
            .unwrap();

        assert_eq!(result.job_keywords, vec!["rust"]);
    }

    #[test]
    fn test_zero_keywords_rejected_for_any_text() {
        let matcher = JobMatcher::default();
        for (resume, job) in [("", ""), ("Rust", "Rust"), ("Python developer", "Go developer")] {
            let err = matcher.match_texts(resume, job, 0).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_config_num_keywords_zero_is_rejected() {
        let config = MatchingConfig {
            num_keywords: 0,
            ..MatchingConfig::default()
        };
        let err = JobMatcher::from_config(&config).match_default("rust", "rust").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_stop_word_only_documents() {
        let result = JobMatcher::default()
            .match_texts("the and of", "with for the", 10)
            .unwrap();
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_keyword_sets_bound_missing_terms() {
        let matcher = JobMatcher::default();
        let result = matcher
            .match_texts(
                "rust",
                "kubernetes kubernetes kubernetes terraform terraform ansible",
                2,
            )
            .unwrap();

        assert_eq!(result.job_keywords, vec!["kubernetes", "terraform"]);
        assert_eq!(result.missing, vec!["kubernetes", "terraform"]);
    }

    #[test]
    fn test_injected_stop_words() {
        let stop_words: HashSet<String> = ["python".to_string()].into_iter().collect();
        let matcher = JobMatcher::with_stop_words(&stop_words, &MatchingConfig::default());

        let result = matcher.match_default("Python and Rust", "Python and Rust").unwrap();
        assert_eq!(result.job_keywords, vec!["and", "rust"]);
    }

    #[test]
    fn test_extra_stop_words_from_config() {
        let config = MatchingConfig {
            extra_stop_words: vec!["looking".to_string()],
            ..MatchingConfig::default()
        };
        let result = JobMatcher::from_config(&config)
            .match_default("python", "Looking for python")
            .unwrap();
        assert_eq!(result.job_keywords, vec!["python"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_match_percentage() {
        let result = JobMatcher::default().match_default("rust", "rust").unwrap();
        assert_eq!(result.match_percentage(), 100.0);
    }
}
