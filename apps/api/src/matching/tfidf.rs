//! Minimal TF-IDF vector space over a small set of documents.
//!
//! Defaults mirror the usual toolkit settings: tokens are alphanumeric runs of
//! at least two characters, raw term counts, smoothed idf
//! `ln((1 + n) / (1 + df)) + 1`, and L2-normalized rows.

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum VectorizeError {
    #[error("empty vocabulary; documents contain only stop words or nothing")]
    EmptyVocabulary,
}

/// A vectorizer fitted on one document set. Owns its vocabulary, so a fitted
/// instance can never be reused across unrelated document sets by accident.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

fn tokens(doc: &str) -> impl Iterator<Item = &str> {
    doc.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
}

impl TfidfVectorizer {
    /// Fits vocabulary and idf weights, returning the vectorizer together with
    /// the L2-normalized document vectors.
    pub fn fit_transform(docs: &[&str]) -> Result<(Self, Vec<Vec<f64>>), VectorizeError> {
        let mut vocabulary = BTreeMap::new();
        for doc in docs {
            for token in tokens(doc) {
                vocabulary.entry(token.to_string()).or_insert(0);
            }
        }
        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }
        // Sorted term order, like the toolkits do.
        for (index, slot) in vocabulary.values_mut().enumerate() {
            *slot = index;
        }

        let counts: Vec<Vec<f64>> = docs
            .iter()
            .map(|doc| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens(doc) {
                    if let Some(&i) = vocabulary.get(token) {
                        row[i] += 1.0;
                    }
                }
                row
            })
            .collect();

        let n = docs.len() as f64;
        let idf = (0..vocabulary.len())
            .map(|i| {
                let df = counts.iter().filter(|row| row[i] > 0.0).count() as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect::<Vec<_>>();

        let vectorizer = Self { vocabulary, idf };
        let rows = counts.into_iter().map(|row| vectorizer.weight(row)).collect();
        Ok((vectorizer, rows))
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    fn weight(&self, mut row: Vec<f64>) -> Vec<f64> {
        for (value, idf) in row.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            row.iter_mut().for_each(|v| *v /= norm);
        }
        row
    }
}

/// Cosine similarity of two vectors; 0 when either is all zeros.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Fits a fresh vector space over exactly `left` and `right` and returns their
/// cosine similarity. Scores are only comparable between pairs sharing `left`.
pub fn pairwise_similarity(left: &str, right: &str) -> Result<f64, VectorizeError> {
    let (_, rows) = TfidfVectorizer::fit_transform(&[left, right])?;
    Ok(cosine_similarity(&rows[0], &rows[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_similarity_one() {
        let sim = pairwise_similarity("python java docker", "python java docker").unwrap();
        assert!((sim - 1.0).abs() < 1e-9, "sim was {sim}");
    }

    #[test]
    fn test_disjoint_documents_similarity_zero() {
        let sim = pairwise_similarity("python java", "ruby none").unwrap();
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_partial_overlap_uses_smoothed_idf() {
        // shared terms: idf = ln(3/3) + 1 = 1; candidate-only terms: ln(3/2) + 1
        let sim = pairwise_similarity("python java docker", "python java sql docker git").unwrap();
        let rare = (1.5_f64).ln() + 1.0;
        let expected = 3.0 / (3.0_f64.sqrt() * (3.0 + 2.0 * rare * rare).sqrt());
        assert!((sim - expected).abs() < 1e-9, "sim was {sim}, expected {expected}");
    }

    #[test]
    fn test_single_character_tokens_ignored() {
        assert_eq!(
            pairwise_similarity("c r", "c"),
            Err(VectorizeError::EmptyVocabulary)
        );
    }

    #[test]
    fn test_both_empty_is_empty_vocabulary() {
        assert_eq!(pairwise_similarity("", ""), Err(VectorizeError::EmptyVocabulary));
    }

    #[test]
    fn test_one_empty_document_scores_zero() {
        assert_eq!(pairwise_similarity("python", "").unwrap(), 0.0);
    }

    #[test]
    fn test_vocabulary_is_per_fit() {
        let (first, _) = TfidfVectorizer::fit_transform(&["python java", "java"]).unwrap();
        let (second, _) = TfidfVectorizer::fit_transform(&["rust", "go rust kotlin"]).unwrap();
        assert_eq!(first.vocabulary_len(), 2);
        assert_eq!(second.vocabulary_len(), 3);
    }

    #[test]
    fn test_rows_are_l2_normalized() {
        let (_, rows) = TfidfVectorizer::fit_transform(&["python python java", "java sql"]).unwrap();
        for row in rows {
            let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }
}
