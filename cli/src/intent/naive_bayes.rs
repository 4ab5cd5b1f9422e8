//! # Multinomial Naive Bayes
//!
//! File: cli/src/intent/naive_bayes.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! A multinomial Naive Bayes model over non-negative feature rows (here:
//! TF-IDF rows). Training accumulates per-class feature totals and turns them
//! into log probabilities with additive (Laplace) smoothing:
//!
//! ```text
//! prior[c]     = ln(count[c] / n_samples)
//! log_prob[c,t] = ln((total[c,t] + alpha) / (sum_t total[c,t] + alpha * n_features))
//! score[c]     = prior[c] + sum_t x[t] * log_prob[c,t]
//! ```
//!
//! Classes are kept in sorted label order. `predict` returns the class with
//! the highest score; on equal scores the earlier class in that order wins.
//!
use crate::core::error::{BloombotError, Result};
use anyhow::anyhow;
use std::collections::BTreeMap;
use tracing::debug;

/// Default additive smoothing.
pub const DEFAULT_ALPHA: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct MultinomialNb {
    classes: Vec<String>,
    class_log_prior: Vec<f64>,
    // [n_classes][n_features]
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fits the model on `rows` labelled by `labels`.
    ///
    /// Requires at least one sample, matching lengths and at least two
    /// distinct labels.
    pub fn fit(rows: &[Vec<f64>], labels: &[String], alpha: f64) -> Result<Self> {
        if rows.is_empty() {
            return Err(anyhow!(BloombotError::Training(
                "training set is empty".to_string()
            )));
        }
        if rows.len() != labels.len() {
            return Err(anyhow!(BloombotError::Training(format!(
                "{} feature rows but {} labels",
                rows.len(),
                labels.len()
            ))));
        }

        let n_features = rows[0].len();
        if rows.iter().any(|row| row.len() != n_features) {
            return Err(anyhow!(BloombotError::Training(
                "feature rows have inconsistent lengths".to_string()
            )));
        }

        // Sorted class list; the map gives each label its class index.
        let mut class_index: BTreeMap<&str, usize> =
            labels.iter().map(|l| (l.as_str(), 0)).collect();
        if class_index.len() < 2 {
            return Err(anyhow!(BloombotError::Training(format!(
                "need at least 2 distinct intents, found {}",
                class_index.len()
            ))));
        }
        for (index, slot) in class_index.values_mut().enumerate() {
            *slot = index;
        }
        let classes: Vec<String> = class_index.keys().map(|c| c.to_string()).collect();

        let mut class_count = vec![0usize; classes.len()];
        let mut feature_count = vec![vec![0.0f64; n_features]; classes.len()];
        for (row, label) in rows.iter().zip(labels) {
            let c = class_index[label.as_str()];
            class_count[c] += 1;
            for (total, value) in feature_count[c].iter_mut().zip(row) {
                *total += value;
            }
        }

        let n_samples = rows.len() as f64;
        let class_log_prior = class_count
            .iter()
            .map(|&count| (count as f64 / n_samples).ln())
            .collect();

        let feature_log_prob = feature_count
            .iter()
            .map(|totals| {
                let denominator = totals.iter().sum::<f64>() + alpha * n_features as f64;
                totals
                    .iter()
                    .map(|total| ((total + alpha) / denominator).ln())
                    .collect()
            })
            .collect();

        debug!(
            "Fitted multinomial Naive Bayes: {} classes, {} features, alpha={}",
            classes.len(),
            n_features,
            alpha
        );

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Class labels in model order (sorted).
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Joint log likelihood of `row` under every class, in model order.
    pub fn joint_log_likelihood(&self, row: &[f64]) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior
                    + row
                        .iter()
                        .zip(log_probs)
                        .map(|(x, log_prob)| x * log_prob)
                        .sum::<f64>()
            })
            .collect()
    }

    /// Index of the best-scoring class for `row`.
    pub fn predict_index(&self, row: &[f64]) -> usize {
        let scores = self.joint_log_likelihood(row);
        let mut best = 0;
        for (index, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = index;
            }
        }
        best
    }

    /// Label of the best-scoring class for `row`.
    pub fn predict(&self, row: &[f64]) -> &str {
        &self.classes[self.predict_index(row)]
    }
}
