//! Job matcher library
//!
//! Scores a resume against a job description with TF-IDF cosine similarity
//! and splits the job's top keywords into those the resume covers and those
//! it misses.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{JobMatcherError, Result};
pub use processing::{JobMatcher, MatchResult};
