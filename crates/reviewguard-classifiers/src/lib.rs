//! ReviewGuard Classifiers
//!
//! Fake review detection for marketplace-safety triage.
//!
//! A review is scored by a learned pipeline (TF-IDF features feeding a
//! multinomial naive Bayes classifier) and explained by an independent set of
//! heuristic rules:
//! - [`trainer`] fits the pipeline on a labeled CSV and writes one artifact
//! - [`artifact`] reads and writes that artifact
//! - [`detector`] loads it once and answers `text -> verdict` requests
//! - [`heuristics`] produces the human-readable reasons

pub mod artifact;
pub mod classifier;
pub mod config;
pub mod detector;
pub mod heuristics;
pub mod naive_bayes;
pub mod pipeline;
pub mod tfidf;
pub mod trainer;

pub use artifact::{ArtifactMetadata, ArtifactStore, ModelArtifact};
pub use classifier::{ClassificationResult, Classifier};
pub use config::ReviewGuardConfig;
pub use detector::{ReviewDetector, MODEL_NOT_FOUND, NO_TEXT_PROVIDED};
pub use heuristics::{analyze_reasons, Reason};
pub use pipeline::TextPipeline;
pub use trainer::{train, Dataset, Trainer, TrainingReport};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::artifact::ArtifactStore;
    pub use crate::classifier::{ClassificationResult, Classifier};
    pub use crate::detector::ReviewDetector;
    pub use crate::heuristics::analyze_reasons;
    pub use crate::pipeline::TextPipeline;
    pub use reviewguard_core::{DetectionResponse, ReviewLabel, ReviewMetadata, Verdict};
}
