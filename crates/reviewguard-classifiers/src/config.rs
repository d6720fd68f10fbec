//! Configuration for training and inference paths

use crate::artifact::{ArtifactStore, DEFAULT_ARTIFACT_PATH};
use crate::trainer::DEFAULT_DATASET_PATH;
use reviewguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "reviewguard.yaml";

/// File locations used by training and inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewGuardConfig {
    /// Labeled CSV with `text` and `label` columns
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Serialized model location
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,
}

impl Default for ReviewGuardConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            artifact_path: default_artifact_path(),
        }
    }
}

impl ReviewGuardConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::config(e.to_string()))
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load from file if it exists, otherwise use defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            debug!("Reading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Artifact store for the configured model path
    pub fn artifact_store(&self) -> ArtifactStore {
        ArtifactStore::new(&self.artifact_path)
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACT_PATH)
}
