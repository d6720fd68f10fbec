//! Review detector: the single entry point front-ends call
//!
//! The detector owns the loaded classifier (if any) for the lifetime of the
//! process. A missing model is a normal state, reported to callers as a
//! structured error payload rather than a failure.

use crate::artifact::ArtifactStore;
use crate::classifier::Classifier;
use crate::heuristics::{self, Reason};
use reviewguard_core::{DetectionResponse, Result, ReviewLabel, ReviewMetadata, Verdict};
use tracing::{debug, warn};

/// Error payload for empty input
pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// Error payload when no trained model is available
pub const MODEL_NOT_FOUND: &str = "Model not found";

/// Scores reviews with a learned classifier and explains them with heuristics
pub struct ReviewDetector {
    classifier: Option<Box<dyn Classifier>>,
}

impl ReviewDetector {
    /// Create a detector around an optional classifier
    pub fn new(classifier: Option<Box<dyn Classifier>>) -> Self {
        Self { classifier }
    }

    /// Create a detector with a classifier
    pub fn with_classifier(classifier: impl Classifier + 'static) -> Self {
        Self::new(Some(Box::new(classifier)))
    }

    /// Create a detector with no model
    pub fn unavailable() -> Self {
        Self::new(None)
    }

    /// Load the trained pipeline from the store, if one has been written
    pub fn from_store(store: &ArtifactStore) -> Result<Self> {
        match store.load()? {
            Some(artifact) => Ok(Self::with_classifier(artifact.into_pipeline())),
            None => {
                warn!(
                    "Model not found at {}; run training first",
                    store.path().display()
                );
                Ok(Self::unavailable())
            }
        }
    }

    /// Whether a model is loaded
    pub fn is_ready(&self) -> bool {
        self.classifier.is_some()
    }

    /// Score a review from its text alone
    pub fn detect(&self, text: &str) -> DetectionResponse {
        self.run(text, None)
    }

    /// Score a review and add reasons derived from listing metadata
    pub fn detect_with_metadata(&self, text: &str, metadata: &ReviewMetadata) -> DetectionResponse {
        self.run(text, Some(metadata))
    }

    fn run(&self, text: &str, metadata: Option<&ReviewMetadata>) -> DetectionResponse {
        if text.trim().is_empty() {
            return DetectionResponse::error(NO_TEXT_PROVIDED);
        }

        let Some(classifier) = &self.classifier else {
            return DetectionResponse::error(MODEL_NOT_FOUND);
        };

        let result = match classifier.classify(text) {
            Ok(result) => result,
            Err(e) => {
                warn!("Classifier {} failed: {}", classifier.name(), e);
                return DetectionResponse::error(e.to_string());
            }
        };

        let mut reasons = heuristics::text_reasons(text);
        if let Some(metadata) = metadata {
            reasons.extend(heuristics::metadata_reasons(text, metadata));
            if result.label == ReviewLabel::Fake && reasons.is_empty() {
                reasons.push(Reason::KnownFakePattern);
            }
        }

        debug!(
            label = %result.label,
            confidence = result.score,
            reasons = reasons.len(),
            latency_us = result.latency_us,
            "Scored review"
        );

        DetectionResponse::from(Verdict {
            prediction: result.label,
            confidence: result.score,
            reasons: reasons.iter().map(|r| r.message().to_string()).collect(),
        })
    }
}
