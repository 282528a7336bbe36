//! Document structures: raw text paired with its normalized tokens

use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Resume,
    JobDescription,
}

/// A document and its normalized form.
///
/// Tokens are derived once in [`Document::new`] and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    content: String,
    document_type: DocumentType,
    tokens: Vec<String>,
}

impl Document {
    pub fn new(content: impl Into<String>, document_type: DocumentType, processor: &TextProcessor) -> Self {
        let content = content.into();
        let tokens = processor.tokenize(&content);

        Self {
            content,
            document_type,
            tokens,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::Resume => write!(f, "Resume"),
            DocumentType::JobDescription => write!(f, "Job Description"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let processor = TextProcessor::new();
        let content = "John Doe\nSoftware Engineer\n\nSkills:\nRust, Python, Rust";
        let doc = Document::new(content, DocumentType::Resume, &processor);

        assert_eq!(doc.content(), content);
        assert_eq!(doc.document_type(), DocumentType::Resume);
        assert_eq!(
            doc.tokens(),
            ["john", "doe", "software", "engineer", "skills", "rust", "python", "rust"]
        );
    }

    #[test]
    fn test_empty_document() {
        let processor = TextProcessor::new();
        let doc = Document::new("", DocumentType::JobDescription, &processor);
        assert!(doc.is_empty());
        assert_eq!(doc.document_type().to_string(), "Job Description");
    }
}
