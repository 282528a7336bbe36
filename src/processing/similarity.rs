//! TF-IDF weighting and cosine similarity over a two-document corpus

use std::collections::BTreeMap;

/// Number of documents in the corpus being compared
const CORPUS_SIZE: f64 = 2.0;

/// Builds TF-IDF vectors for a resume/job pair and scores them.
///
/// Weights are raw term count times smoothed IDF, `ln((1 + n) / (1 + df)) + 1`,
/// so a term present in both documents weighs 1.0 per occurrence and a term
/// unique to one document weighs `ln(1.5) + 1` per occurrence.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    max_features: Option<usize>,
}

/// Weight vectors of both documents over a shared, term-ordered vocabulary
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfVectors {
    pub vocabulary: Vec<String>,
    pub first: Vec<f64>,
    pub second: Vec<f64>,
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the `max_features` terms with the highest combined count
    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    pub fn fit_transform(&self, first: &[String], second: &[String]) -> TfIdfVectors {
        // term -> (count in first, count in second); BTreeMap fixes the order
        // so both documents are summed identically regardless of argument order
        let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for token in first {
            counts.entry(token.as_str()).or_default().0 += 1;
        }
        for token in second {
            counts.entry(token.as_str()).or_default().1 += 1;
        }

        let mut terms: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
        if let Some(limit) = self.max_features {
            terms.sort_by(|a, b| (b.1 .0 + b.1 .1).cmp(&(a.1 .0 + a.1 .1)));
            terms.truncate(limit);
            terms.sort_by(|a, b| a.0.cmp(b.0));
        }

        let mut vectors = TfIdfVectors {
            vocabulary: Vec::with_capacity(terms.len()),
            first: Vec::with_capacity(terms.len()),
            second: Vec::with_capacity(terms.len()),
        };

        for (term, (tf_first, tf_second)) in terms {
            let df = (tf_first > 0) as usize + (tf_second > 0) as usize;
            let idf = smoothed_idf(df);

            vectors.vocabulary.push(term.to_string());
            vectors.first.push(tf_first as f64 * idf);
            vectors.second.push(tf_second as f64 * idf);
        }

        vectors
    }

    /// Cosine similarity of the two documents' TF-IDF vectors, in [0.0, 1.0]
    pub fn similarity(&self, first: &[String], second: &[String]) -> f64 {
        let vectors = self.fit_transform(first, second);
        cosine(&vectors.first, &vectors.second)
    }
}

fn smoothed_idf(document_frequency: usize) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency as f64)).ln() + 1.0
}

/// Cosine of two equal-length weight vectors; 0.0 when either has zero magnitude
fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot_product: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    // Identical directions may land a rounding step below 1.0
    if a == b {
        return 1.0;
    }

    (dot_product / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_idf_weights() {
        let vectors = TfIdfVectorizer::new().fit_transform(&tokens("rust rust go"), &tokens("rust java"));

        assert_eq!(vectors.vocabulary, vec!["go", "java", "rust"]);
        let unique = 1.5_f64.ln() + 1.0;
        assert!((vectors.first[0] - unique).abs() < EPSILON);
        assert_eq!(vectors.first[1], 0.0);
        assert!((vectors.first[2] - 2.0).abs() < EPSILON);
        assert_eq!(vectors.second[0], 0.0);
        assert!((vectors.second[1] - unique).abs() < EPSILON);
        assert!((vectors.second[2] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_identical_documents_score_one() {
        let doc = tokens("python developer rest api python");
        let score = TfIdfVectorizer::new().similarity(&doc, &doc);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let score = TfIdfVectorizer::new().similarity(&tokens("rust cargo"), &tokens("java maven"));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_document_scores_zero() {
        let vectorizer = TfIdfVectorizer::new();
        assert_eq!(vectorizer.similarity(&[], &tokens("python required")), 0.0);
        assert_eq!(vectorizer.similarity(&tokens("python required"), &[]), 0.0);
        assert_eq!(vectorizer.similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let vectorizer = TfIdfVectorizer::new();
        let a = tokens("python developer rest api experience docker");
        let b = tokens("looking python developer rest api kubernetes experience");
        assert_eq!(vectorizer.similarity(&a, &b), vectorizer.similarity(&b, &a));
    }

    #[test]
    fn test_duplicated_text_does_not_change_score() {
        let vectorizer = TfIdfVectorizer::new();
        let a = tokens("rust tokio serde rust axum");
        let doubled = tokens("rust tokio serde rust axum rust tokio serde rust axum");
        let b = tokens("rust axum postgres kubernetes");

        let base = vectorizer.similarity(&a, &b);
        let scaled = vectorizer.similarity(&doubled, &b);
        assert!((base - scaled).abs() < EPSILON);
    }

    #[test]
    fn test_known_overlap_score() {
        // Five shared terms (weight 1), one unique to the resume, two unique to the job
        let a = tokens("python developer rest api experience docker");
        let b = tokens("looking python developer rest api kubernetes experience");
        let unique = 1.5_f64.ln() + 1.0;
        let expected = 5.0 / ((5.0 + unique * unique).sqrt() * (5.0 + 2.0 * unique * unique).sqrt());

        let score = TfIdfVectorizer::new().similarity(&a, &b);
        assert!((score - expected).abs() < EPSILON);
        assert!(score >= 0.60);
    }

    #[test]
    fn test_max_features_caps_vocabulary() {
        let vectorizer = TfIdfVectorizer::new().with_max_features(Some(2));
        let vectors = vectorizer.fit_transform(&tokens("rust rust go zig"), &tokens("rust go java"));

        assert_eq!(vectors.vocabulary, vec!["go", "rust"]);
        assert_eq!(vectors.first.len(), 2);
    }

    #[test]
    fn test_cosine_of_raw_vectors() {
        assert!((cosine(&[1.0, 0.0], &[2.0, 0.0]) - 1.0).abs() < EPSILON);
        assert_eq!(cosine(&[1.0, 0.0], &[0.0, 3.0]), 0.0);
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
