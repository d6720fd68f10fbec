//! Offline training: CSV dataset in, model artifact out
//!
//! Training is deliberately a minimal baseline: the whole dataset is used to
//! fit the pipeline, with no held-out split, cross-validation or parameter
//! search.

use crate::artifact::{ArtifactMetadata, ArtifactStore, ModelArtifact};
use crate::pipeline::TextPipeline;
use chrono::Utc;
use reviewguard_core::{DatasetRecord, Error, Result, ReviewLabel};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "data/fake_reviews_dataset.csv";

const TEXT_COLUMN: &str = "text";
const LABEL_COLUMN: &str = "label";

/// Parsed training dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<DatasetRecord>,

    /// Hex SHA-256 of the file contents
    pub sha256: String,
}

impl Dataset {
    /// Read a `text,label` CSV file
    ///
    /// Extra columns are ignored. Labels must be `0` (genuine) or `1`
    /// (fabricated).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::DatasetNotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        let sha256 = format!("{:x}", Sha256::digest(&bytes));
        let records = parse_records(&bytes)?;

        Ok(Self { records, sha256 })
    }

    /// Documents per label as `(genuine, fabricated)`
    pub fn class_balance(&self) -> (usize, usize) {
        let fabricated = self
            .records
            .iter()
            .filter(|r| r.label == ReviewLabel::Fake.class_id())
            .count();
        (self.records.len() - fabricated, fabricated)
    }
}

fn parse_records(bytes: &[u8]) -> Result<Vec<DatasetRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| Error::dataset(format!("failed to read header: {e}")))?;
    for column in [TEXT_COLUMN, LABEL_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::dataset(format!("missing required column '{column}'")));
        }
    }

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<DatasetRecord>().enumerate() {
        // header is line 1
        let line = idx + 2;
        let record = row.map_err(|e| Error::dataset(format!("line {line}: {e}")))?;
        ReviewLabel::from_class(record.label)
            .map_err(|e| Error::dataset(format!("line {line}: {e}")))?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(Error::dataset("dataset has no rows"));
    }

    Ok(records)
}

/// Summary of a finished training run
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub artifact_path: PathBuf,
    pub metadata: ArtifactMetadata,
}

/// Fits a pipeline on a dataset and stores it
#[derive(Debug, Clone)]
pub struct Trainer {
    dataset_path: PathBuf,
    store: ArtifactStore,
}

impl Trainer {
    pub fn new(dataset_path: impl Into<PathBuf>, store: ArtifactStore) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            store,
        }
    }

    /// Run training end to end
    ///
    /// The dataset is fully parsed and the model fitted before the artifact
    /// path is touched, so a failed run leaves any previous artifact intact.
    pub fn train(&self) -> Result<TrainingReport> {
        info!("Loading dataset from {}", self.dataset_path.display());
        let dataset = Dataset::load(&self.dataset_path)?;
        let (n_genuine, n_fabricated) = dataset.class_balance();
        info!(
            "Dataset has {} documents ({} genuine, {} fabricated)",
            dataset.records.len(),
            n_genuine,
            n_fabricated
        );

        info!("Training model...");
        let pipeline = TextPipeline::fit(&dataset.records)?;
        let vocabulary_size = pipeline.vectorizer().vocabulary_size();
        info!("Fitted vocabulary of {} terms", vocabulary_size);
        if let [only] = pipeline.classifier().classes() {
            warn!("Dataset has a single class; every review will be labeled {}", only);
        }

        let metadata = ArtifactMetadata {
            created_at: Utc::now(),
            dataset_sha256: dataset.sha256,
            n_documents: dataset.records.len(),
            n_genuine,
            n_fabricated,
            vocabulary_size,
        };
        self.store
            .save(&ModelArtifact::new(pipeline, metadata.clone()))?;

        Ok(TrainingReport {
            artifact_path: self.store.path().to_path_buf(),
            metadata,
        })
    }
}

/// Train on `dataset_path` and write the artifact to `artifact_path`
pub fn train(dataset_path: impl AsRef<Path>, artifact_path: impl AsRef<Path>) -> Result<PathBuf> {
    let trainer = Trainer::new(
        dataset_path.as_ref(),
        ArtifactStore::new(artifact_path.as_ref()),
    );
    Ok(trainer.train()?.artifact_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parses_quoted_text() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "reviews.csv",
            "text,label\n\"Solid, well made, \"\"five stars\"\"\",0\n\"FREE gift, click here\",1\n",
        );

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.records.len(), 2);
        assert_eq!(dataset.records[0].text, "Solid, well made, \"five stars\"");
        assert_eq!(dataset.class_balance(), (1, 1));
        assert_eq!(dataset.sha256.len(), 64);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "reviews.csv",
            "rating,text,label\n5,great kettle,0\n1,buy now,1\n",
        );
        assert_eq!(Dataset::load(&path).unwrap().records.len(), 2);
    }

    #[test]
    fn test_missing_dataset() {
        let dir = TempDir::new().unwrap();
        let err = Dataset::load(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, Error::DatasetNotFound(_)));
    }

    #[test]
    fn test_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "reviews.csv", "review,label\nfine,0\n");
        let err = Dataset::load(&path).unwrap_err();
        assert!(err.to_string().contains("'text'"));
    }

    #[test]
    fn test_bad_label_names_the_line() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "reviews.csv", "text,label\nfine,0\nodd,7\n");
        let err = Dataset::load(&path).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_header_only_dataset() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "reviews.csv", "text,label\n");
        assert!(matches!(Dataset::load(&path), Err(Error::Dataset(_))));
    }

    #[test]
    fn test_failed_training_leaves_no_artifact() {
        let dir = TempDir::new().unwrap();
        let artifact = dir.path().join("models/model.json");

        let err = train(dir.path().join("missing.csv"), &artifact).unwrap_err();
        assert!(matches!(err, Error::DatasetNotFound(_)));
        assert!(!artifact.exists());
        assert!(!dir.path().join("models").exists());
    }

    #[test]
    fn test_single_class_dataset_still_trains() {
        let dir = TempDir::new().unwrap();
        let dataset = write(
            &dir,
            "reviews.csv",
            "text,label
free gift click here,1
buy now discount,1
",
        );
        let store = ArtifactStore::new(dir.path().join("model.json"));

        let report = Trainer::new(&dataset, store.clone()).train().unwrap();
        assert_eq!(report.metadata.n_genuine, 0);

        let pipeline = store.load().unwrap().unwrap().into_pipeline();
        assert_eq!(pipeline.classifier().classes(), &[ReviewLabel::Fake]);
        assert_eq!(pipeline.predict("sturdy kettle"), (ReviewLabel::Fake, 1.0));
    }

    #[test]
    fn test_train_writes_artifact() {
        let dir = TempDir::new().unwrap();
        let dataset = write(
            &dir,
            "reviews.csv",
            "text,label\nsturdy and quiet,0\nfree gift click here,1\n",
        );
        let artifact = dir.path().join("models/model.json");

        let written = train(&dataset, &artifact).unwrap();
        assert_eq!(written, artifact);
        assert!(artifact.is_file());
    }
}
