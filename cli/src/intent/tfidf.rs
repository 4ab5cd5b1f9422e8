//! # TF-IDF Vectorizer
//!
//! File: cli/src/intent/tfidf.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! Turns text into dense, L2-normalised TF-IDF rows over a vocabulary learned
//! from the training patterns.
//!
//! - Vocabulary: every distinct token in the training documents, indexed in
//!   sorted order so feature positions are stable across runs.
//! - Term frequency: raw token counts.
//! - Inverse document frequency (smoothed): `ln((1 + n) / (1 + df)) + 1`.
//! - Normalisation: each row is scaled to unit Euclidean length; rows with no
//!   known tokens stay all-zero.
//!
//! Tokens that were never seen during fitting are ignored at transform time.
//!
use super::tokenizer::Tokenizer;
use crate::core::error::{BloombotError, Result};
use anyhow::anyhow;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learns the vocabulary and idf weights from `documents`.
    ///
    /// Fails if the documents contain no usable tokens at all.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self> {
        let tokenizer = Tokenizer::new()?;

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenizer.tokenize(doc.as_ref()))
            .collect();

        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        if terms.is_empty() {
            return Err(anyhow!(BloombotError::Training(
                "training patterns produced an empty vocabulary".to_string()
            )));
        }

        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();

        // Document frequency: in how many documents each term appears.
        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let distinct: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in distinct {
                if let Some(&index) = vocabulary.get(term) {
                    document_frequency[index] += 1;
                }
            }
        }

        let n_documents = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_documents) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        debug!(
            "Fitted TF-IDF vocabulary of {} terms over {} documents",
            vocabulary.len(),
            documents.len()
        );

        Ok(Self {
            tokenizer,
            vocabulary,
            idf,
        })
    }

    /// Number of features (vocabulary size).
    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Featurises one text into a dense TF-IDF row.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.vocabulary.len()];
        for token in self.tokenizer.tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                row[index] += 1.0;
            }
        }

        for (value, idf) in row.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in row.iter_mut() {
                *value /= norm;
            }
        }
        row
    }

    /// Featurises every document.
    pub fn transform_all<S: AsRef<str>>(&self, documents: &[S]) -> Vec<Vec<f64>> {
        documents
            .iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    /// Test that the vocabulary is the sorted set of every training token.
    #[test]
    fn test_vocabulary_is_sorted_union_of_tokens() {
        let vectorizer = TfidfVectorizer::fit(&["i feel sad", "i feel happy", "hi"]).unwrap();
        let terms: Vec<&str> = vectorizer.vocabulary.keys().map(String::as_str).collect();
        assert_eq!(terms, vec!["feel", "happy", "hi", "sad"]);
        assert_eq!(vectorizer.vocabulary["feel"], 0);
        assert_eq!(vectorizer.vocabulary["sad"], 3);
        assert_eq!(vectorizer.n_features(), 4);
    }

    /// Test L2 normalisation of non-empty rows.
    #[test]
    fn test_rows_are_unit_length() {
        let vectorizer = TfidfVectorizer::fit(&["i feel sad", "i feel happy", "hi"]).unwrap();
        let row = vectorizer.transform("feel sad sad");
        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < EPS);
    }

    /// Test that the smoothed idf favours terms seen in fewer documents.
    #[test]
    fn test_rarer_terms_weigh_more() {
        // "feel" appears in two of three documents, "sad" in one.
        let vectorizer = TfidfVectorizer::fit(&["i feel sad", "i feel happy", "hi"]).unwrap();
        let row = vectorizer.transform("i feel sad");
        let feel = row[vectorizer.vocabulary["feel"]];
        let sad = row[vectorizer.vocabulary["sad"]];
        assert!(sad > feel);

        // idf(feel) = ln(4/3) + 1, idf(sad) = ln(4/2) + 1
        let idf_feel = (4.0f64 / 3.0).ln() + 1.0;
        let idf_sad = (4.0f64 / 2.0).ln() + 1.0;
        let norm = (idf_feel * idf_feel + idf_sad * idf_sad).sqrt();
        assert!((feel - idf_feel / norm).abs() < EPS);
        assert!((sad - idf_sad / norm).abs() < EPS);
    }

    /// Test that out-of-vocabulary text maps to the zero vector.
    #[test]
    fn test_unknown_tokens_give_zero_row() {
        let vectorizer = TfidfVectorizer::fit(&["hi", "bye"]).unwrap();
        let row = vectorizer.transform("xyz completely unrelated gibberish");
        assert_eq!(row, vec![0.0, 0.0]);
    }

    /// Test that fitting on token-less documents fails.
    #[test]
    fn test_empty_vocabulary_is_rejected() {
        let err = TfidfVectorizer::fit(&["i", "?", ""]).unwrap_err();
        assert!(err.to_string().contains("empty vocabulary"));
    }
}
