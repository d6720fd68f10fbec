//! Multinomial naive Bayes over sparse TF-IDF features

use crate::tfidf::SparseVector;
use reviewguard_core::{Error, Result, ReviewLabel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Additive (Laplace) smoothing applied to every feature count
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Fitted multinomial naive Bayes classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNaiveBayes {
    /// Smoothing parameter used at fit time
    alpha: f64,

    /// Classes seen during training, sorted
    classes: Vec<ReviewLabel>,

    /// Training documents per class
    class_count: Vec<usize>,

    /// `ln P(class)` estimated from class frequencies
    class_log_prior: Vec<f64>,

    /// `ln P(feature | class)`, one row per class
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNaiveBayes {
    /// Fit the classifier with the default smoothing
    pub fn fit(
        features: &[SparseVector],
        labels: &[ReviewLabel],
        n_features: usize,
    ) -> Result<Self> {
        Self::fit_with_alpha(features, labels, n_features, DEFAULT_ALPHA)
    }

    /// Fit the classifier with explicit smoothing
    pub fn fit_with_alpha(
        features: &[SparseVector],
        labels: &[ReviewLabel],
        n_features: usize,
        alpha: f64,
    ) -> Result<Self> {
        if features.len() != labels.len() {
            return Err(Error::classifier(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if features.is_empty() {
            return Err(Error::classifier("cannot fit on zero samples"));
        }
        if alpha.is_nan() || alpha <= 0.0 {
            return Err(Error::classifier(format!(
                "alpha must be positive, got {alpha}"
            )));
        }

        let classes: Vec<ReviewLabel> = labels
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let mut class_count = vec![0usize; classes.len()];
        let mut feature_count = vec![vec![0.0f64; n_features]; classes.len()];

        for (row, label) in features.iter().zip(labels) {
            let c = classes
                .iter()
                .position(|known| known == label)
                .ok_or_else(|| Error::classifier("label missing from class table"))?;
            class_count[c] += 1;
            for &(idx, weight) in row {
                let slot = feature_count[c].get_mut(idx).ok_or_else(|| {
                    Error::classifier(format!(
                        "feature index {idx} exceeds {n_features} features"
                    ))
                })?;
                *slot += weight;
            }
        }

        let n_samples = features.len() as f64;
        let class_log_prior = class_count
            .iter()
            .map(|&count| (count as f64).ln() - n_samples.ln())
            .collect();

        let feature_log_prob = feature_count
            .into_iter()
            .map(|row| {
                let total: f64 = row.iter().map(|count| count + alpha).sum();
                let log_total = total.ln();
                row.into_iter()
                    .map(|count| (count + alpha).ln() - log_total)
                    .collect()
            })
            .collect();

        Ok(Self {
            alpha,
            classes,
            class_count,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Unnormalized `ln P(class) + ln P(document | class)` per class
    pub fn joint_log_likelihood(&self, x: &SparseVector) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_prob)| {
                prior
                    + x.iter()
                        .filter_map(|&(idx, weight)| log_prob.get(idx).map(|lp| weight * lp))
                        .sum::<f64>()
            })
            .collect()
    }

    /// Posterior probability per class, in class order
    pub fn predict_proba(&self, x: &SparseVector) -> Vec<(ReviewLabel, f64)> {
        self.posterior(&self.joint_log_likelihood(x))
    }

    /// Most likely class and its posterior probability
    ///
    /// Ties go to the first class in sorted order.
    pub fn predict(&self, x: &SparseVector) -> (ReviewLabel, f64) {
        let jll = self.joint_log_likelihood(x);

        let mut best = 0;
        for (idx, value) in jll.iter().enumerate() {
            if *value > jll[best] {
                best = idx;
            }
        }

        self.posterior(&jll)[best]
    }

    fn posterior(&self, jll: &[f64]) -> Vec<(ReviewLabel, f64)> {
        let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let log_norm = max + jll.iter().map(|v| (v - max).exp()).sum::<f64>().ln();

        self.classes
            .iter()
            .zip(jll)
            .map(|(&label, v)| (label, (v - log_norm).exp()))
            .collect()
    }

    /// Classes seen during training
    pub fn classes(&self) -> &[ReviewLabel] {
        &self.classes
    }

    pub(crate) fn validate(&self, n_features: usize) -> Result<()> {
        let n_classes = self.classes.len();
        if n_classes == 0 {
            return Err(Error::artifact("classifier has no classes"));
        }
        if self.alpha.is_nan() || self.alpha <= 0.0 {
            return Err(Error::artifact(format!(
                "classifier smoothing must be positive, got {}",
                self.alpha
            )));
        }
        if self.class_count.len() != n_classes
            || self.class_log_prior.len() != n_classes
            || self.feature_log_prob.len() != n_classes
        {
            return Err(Error::artifact("classifier tables disagree on class count"));
        }
        if self.feature_log_prob.iter().any(|row| row.len() != n_features) {
            return Err(Error::artifact(format!(
                "classifier rows do not match the {n_features} vectorizer features"
            )));
        }
        Ok(())
    }
}
