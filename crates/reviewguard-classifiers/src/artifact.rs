//! Model artifact persistence
//!
//! A trained [`TextPipeline`] is written as a single JSON document together
//! with provenance metadata. The file is replaced wholesale on every training
//! run and treated as read-only afterwards.

use crate::pipeline::TextPipeline;
use chrono::{DateTime, Utc};
use reviewguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Bumped whenever the serialized layout changes incompatibly
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Default artifact location, relative to the working directory
pub const DEFAULT_ARTIFACT_PATH: &str = "models/fake_review_model.json";

/// Where a model came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// When training finished
    pub created_at: DateTime<Utc>,

    /// Hex SHA-256 of the raw dataset file
    pub dataset_sha256: String,

    /// Number of training documents
    pub n_documents: usize,

    /// Genuine documents in the training set
    pub n_genuine: usize,

    /// Fabricated documents in the training set
    pub n_fabricated: usize,

    /// Distinct vocabulary terms
    pub vocabulary_size: usize,
}

/// Serialized bundle of fitted pipeline and provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub metadata: ArtifactMetadata,
    pub pipeline: TextPipeline,
}

impl ModelArtifact {
    pub fn new(pipeline: TextPipeline, metadata: ArtifactMetadata) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            metadata,
            pipeline,
        }
    }

    /// Consume the artifact, keeping only the pipeline
    pub fn into_pipeline(self) -> TextPipeline {
        self.pipeline
    }
}

/// Reads and writes the artifact at a fixed path
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    path: PathBuf,
}

impl ArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the artifact
    ///
    /// Returns `Ok(None)` when no artifact has been written yet. A file that
    /// exists but does not parse is an error.
    pub fn load(&self) -> Result<Option<ModelArtifact>> {
        if !self.exists() {
            debug!("No model artifact at {}", self.path.display());
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let artifact: ModelArtifact = serde_json::from_slice(&bytes).map_err(|e| {
            Error::artifact(format!("{} is not a model artifact: {e}", self.path.display()))
        })?;

        if artifact.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(Error::artifact(format!(
                "{} has format version {}, expected {}; retrain the model",
                self.path.display(),
                artifact.format_version,
                ARTIFACT_FORMAT_VERSION
            )));
        }
        artifact.pipeline.validate()?;

        info!(
            "Loaded model from {} ({} documents, {} terms)",
            self.path.display(),
            artifact.metadata.n_documents,
            artifact.metadata.vocabulary_size
        );

        Ok(Some(artifact))
    }

    /// Write the artifact, replacing any previous one
    ///
    /// The payload goes to a sibling temp file first and is renamed into
    /// place, so readers never observe a half-written artifact.
    pub fn save(&self, artifact: &ModelArtifact) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_vec(artifact)?;
        let staging = self.staging_path();
        let written = fs::write(&staging, payload).and_then(|()| fs::rename(&staging, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }

        info!("Saved model to {}", self.path.display());
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewguard_core::DatasetRecord;
    use tempfile::TempDir;

    fn sample_artifact() -> ModelArtifact {
        let records = vec![
            DatasetRecord {
                text: "works great and arrived early".to_string(),
                label: 0,
            },
            DatasetRecord {
                text: "free gift click here".to_string(),
                label: 1,
            },
        ];
        let pipeline = TextPipeline::fit(&records).unwrap();
        let metadata = ArtifactMetadata {
            created_at: Utc::now(),
            dataset_sha256: "00".repeat(32),
            n_documents: 2,
            n_genuine: 1,
            n_fabricated: 1,
            vocabulary_size: pipeline.vectorizer().vocabulary_size(),
        };
        ModelArtifact::new(pipeline, metadata)
    }

    #[test]
    fn test_missing_artifact_is_none() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(dir.path().join("models/model.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(dir.path().join("nested/models/model.json"));
        let artifact = sample_artifact();

        store.save(&artifact).unwrap();
        assert!(store.exists());
        assert!(!dir.path().join("nested/models/model.json.tmp").exists());

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, artifact);
    }

    #[test]
    fn test_save_overwrites_previous_artifact() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(dir.path().join("model.json"));

        let first = sample_artifact();
        store.save(&first).unwrap();

        let mut second = sample_artifact();
        second.metadata.dataset_sha256 = "ff".repeat(32);
        store.save(&second).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.metadata.dataset_sha256, "ff".repeat(32));
    }

    #[test]
    fn test_failed_save_removes_staging_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        // a directory in the way makes the final rename fail
        fs::create_dir_all(path.join("occupied")).unwrap();

        let store = ArtifactStore::new(&path);
        assert!(matches!(store.save(&sample_artifact()), Err(Error::Io(_))));
        assert!(!dir.path().join("model.json.tmp").exists());
        assert!(path.join("occupied").is_dir());
    }

    #[test]
    fn test_corrupt_artifact_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, b"not json").unwrap();

        let err = ArtifactStore::new(&path).load().unwrap_err();
        assert!(matches!(err, Error::Artifact(_)));
    }

    #[test]
    fn test_unknown_format_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = ArtifactStore::new(dir.path().join("model.json"));

        let mut artifact = sample_artifact();
        artifact.format_version = ARTIFACT_FORMAT_VERSION + 1;
        store.save(&artifact).unwrap();

        assert!(matches!(store.load(), Err(Error::Artifact(_))));
    }
}
