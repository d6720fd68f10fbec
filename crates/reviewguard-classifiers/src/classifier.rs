//! Classifier trait and common types

use reviewguard_core::{Result, ReviewLabel};

/// Trait for all review classifiers
pub trait Classifier: Send + Sync {
    /// Classify the given review text
    fn classify(&self, text: &str) -> Result<ClassificationResult>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Result of classification
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Predicted label
    pub label: ReviewLabel,

    /// Probability of the predicted label (0.0-1.0)
    pub score: f64,

    /// Posterior probability of every known class, in class order
    pub class_scores: Vec<(ReviewLabel, f64)>,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Create a new classification result
    pub fn new(label: ReviewLabel, score: f64) -> Self {
        Self {
            label,
            score,
            class_scores: vec![(label, score)],
            latency_us: 0,
        }
    }

    /// Posterior probability of a specific class, zero if the model never saw it
    pub fn probability_of(&self, label: ReviewLabel) -> f64 {
        self.class_scores
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, p)| *p)
            .unwrap_or(0.0)
    }
}
