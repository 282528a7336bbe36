//! Keyword set comparison between a resume and a job description

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Job keywords split by whether the resume's keyword set also has them.
///
/// Both lists keep the job keyword set's order, and together they hold every
/// job keyword exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordComparison {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

pub fn compare_keywords(resume_keywords: &[String], job_keywords: &[String]) -> KeywordComparison {
    let resume_set: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();

    let (matched, missing): (Vec<String>, Vec<String>) = job_keywords
        .iter()
        .cloned()
        .partition(|keyword| resume_set.contains(keyword.as_str()));

    KeywordComparison { matched, missing }
}
