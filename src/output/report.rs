//! Report structures built from a matching run

use crate::processing::matcher::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation bands for a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.80 {
            ScoreBand::Excellent
        } else if score >= 0.60 {
            ScoreBand::Good
        } else if score >= 0.40 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "EXCELLENT MATCH",
            ScoreBand::Good => "GOOD MATCH",
            ScoreBand::Moderate => "MODERATE MATCH",
            ScoreBand::Weak => "WEAK MATCH",
        }
    }

    /// Excellent and good matches are worth applying with as-is
    pub fn is_positive(&self) -> bool {
        matches!(self, ScoreBand::Excellent | ScoreBand::Good)
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    #[serde(flatten)]
    pub result: MatchResult,
    pub match_percentage: f64,
    pub band: ScoreBand,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub resume_file: String,
    pub job_file: String,
    pub num_keywords: usize,
    pub generated_at: DateTime<Utc>,
    pub matcher_version: String,
}

impl MatchReport {
    pub fn new(result: MatchResult, resume_file: &str, job_file: &str, num_keywords: usize) -> Self {
        let match_percentage = result.match_percentage();
        let band = ScoreBand::from_score(result.score);

        Self {
            result,
            match_percentage,
            band,
            metadata: ReportMetadata {
                resume_file: resume_file.to_string(),
                job_file: job_file.to_string(),
                num_keywords,
                generated_at: Utc::now(),
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Matched skills in alphabetical order for display
    pub fn sorted_matched(&self) -> Vec<&str> {
        let mut skills: Vec<&str> = self.result.matched.iter().map(String::as_str).collect();
        skills.sort_unstable();
        skills
    }

    /// Missing skills in alphabetical order for display
    pub fn sorted_missing(&self) -> Vec<&str> {
        let mut skills: Vec<&str> = self.result.missing.iter().map(String::as_str).collect();
        skills.sort_unstable();
        skills
    }
}
