//! Subcommand handlers
//!
//! Handlers return values instead of printing so the binary decides what
//! reaches stdout.

use anyhow::{Context, Result};
use reviewguard_classifiers::{
    ReviewDetector, ReviewGuardConfig, Trainer, TrainingReport, NO_TEXT_PROVIDED,
};
use reviewguard_core::{DetectionResponse, ReviewMetadata};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Load the config file and apply command-line overrides
pub fn resolve_config(
    path: &Path,
    dataset: Option<PathBuf>,
    artifact: Option<PathBuf>,
) -> Result<ReviewGuardConfig> {
    let mut config = ReviewGuardConfig::load(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    if let Some(dataset) = dataset {
        config.dataset_path = dataset;
    }
    if let Some(artifact) = artifact {
        config.artifact_path = artifact;
    }

    Ok(config)
}

/// Train the model and write the artifact
pub fn run_train(config: &ReviewGuardConfig) -> Result<TrainingReport> {
    let trainer = Trainer::new(&config.dataset_path, config.artifact_store());
    let report = trainer.train().context("Training failed")?;
    info!(
        "Trained on {} documents with {} terms",
        report.metadata.n_documents, report.metadata.vocabulary_size
    );
    Ok(report)
}

/// Options for a single prediction
#[derive(Debug, Clone, Default)]
pub struct PredictRequest {
    pub text: Option<String>,
    pub rating: Option<u8>,
    pub verified: bool,
    pub unverified: bool,
}

impl PredictRequest {
    /// Listing metadata, if any metadata flag was given
    pub fn metadata(&self) -> Option<ReviewMetadata> {
        if self.rating.is_none() && !self.verified && !self.unverified {
            return None;
        }
        Some(ReviewMetadata {
            rating: self.rating,
            verified_purchase: self.verified,
        })
    }
}

/// Score one review
///
/// Every outcome is a payload: missing text, a missing model and an
/// unreadable artifact all come back as `{"error": ...}`.
pub fn run_predict(config: &ReviewGuardConfig, request: &PredictRequest) -> DetectionResponse {
    let Some(text) = request.text.as_deref() else {
        return DetectionResponse::error(NO_TEXT_PROVIDED);
    };

    let detector = match ReviewDetector::from_store(&config.artifact_store()) {
        Ok(detector) => detector,
        Err(e) => {
            warn!("Failed to load model artifact: {}", e);
            return DetectionResponse::error(e.to_string());
        }
    };

    match request.metadata() {
        Some(metadata) => detector.detect_with_metadata(text, &metadata),
        None => detector.detect(text),
    }
}

/// Serialize a response for stdout
pub fn render(response: &DetectionResponse, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    Ok(json)
}
