//! Text processing and matching module

pub mod comparator;
pub mod document;
pub mod keywords;
pub mod matcher;
pub mod similarity;
pub mod stop_words;
pub mod text_processor;

pub use matcher::{JobMatcher, MatchResult};
