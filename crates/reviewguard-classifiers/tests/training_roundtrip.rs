//! End-to-end tests: train on a synthetic CSV, reload the artifact, score reviews.

use reviewguard_classifiers::{analyze_reasons, ArtifactStore, ReviewDetector, Trainer};
use reviewguard_core::{Error, ReviewLabel};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const GENUINE: &[&str] = &[
    "The blender is sturdy and crushes ice without trouble",
    "Arrived on time, fits my desk, assembly took twenty minutes",
    "Battery lasts about two days with moderate use",
    "Sound quality is clear although the bass is a little weak",
    "The handle cracked after a month of daily use",
    "Comfortable shoes, true to size, soles wore evenly",
];

const FABRICATED: &[&str] = &[
    "FREE gift card with every order click here now",
    "Best deal ever buy now guaranteed money back offer",
    "Click here for a huge discount and free shipping link",
    "Amazing offer free gift guaranteed click here",
    "Get money back guaranteed buy now discount code",
    "Free free free click the link for your gift",
];

struct Fixture {
    _dir: TempDir,
    dataset: PathBuf,
    artifact: PathBuf,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let dataset = dir.path().join("data/fake_reviews_dataset.csv");
    let artifact = dir.path().join("models/fake_review_model.json");
    fs::create_dir_all(dataset.parent().unwrap()).unwrap();

    let mut csv = String::from("text,label\n");
    for text in GENUINE {
        csv.push_str(&format!("\"{text}\",0\n"));
    }
    for text in FABRICATED {
        csv.push_str(&format!("\"{text}\",1\n"));
    }
    fs::write(&dataset, csv).unwrap();

    Fixture {
        _dir: dir,
        dataset,
        artifact,
    }
}

fn trained_detector(fx: &Fixture) -> ReviewDetector {
    let store = ArtifactStore::new(&fx.artifact);
    Trainer::new(&fx.dataset, store.clone()).train().unwrap();
    ReviewDetector::from_store(&store).unwrap()
}

#[test]
fn test_training_round_trip_flags_promotional_review() {
    let fx = fixture();
    let detector = trained_detector(&fx);
    assert!(detector.is_ready());

    let verdict = detector
        .detect("Click here for a free gift and a discount")
        .verdict()
        .cloned()
        .unwrap();
    assert_eq!(verdict.prediction, ReviewLabel::Fake);
    assert!(verdict.confidence > 0.5);
    assert!(verdict.confidence <= 1.0);
}

#[test]
fn test_training_round_trip_keeps_genuine_review() {
    let fx = fixture();
    let detector = trained_detector(&fx);

    let verdict = detector
        .detect("The battery is sturdy and lasts two days of daily use")
        .verdict()
        .cloned()
        .unwrap();
    assert_eq!(verdict.prediction, ReviewLabel::Real);
    assert!(verdict.confidence > 0.5);
}

#[test]
fn test_report_describes_the_dataset() {
    let fx = fixture();
    let report = Trainer::new(&fx.dataset, ArtifactStore::new(&fx.artifact))
        .train()
        .unwrap();

    assert_eq!(report.artifact_path, fx.artifact);
    assert_eq!(report.metadata.n_documents, 12);
    assert_eq!(report.metadata.n_genuine, 6);
    assert_eq!(report.metadata.n_fabricated, 6);
    assert!(report.metadata.vocabulary_size > 0);
}

#[test]
fn test_predictions_are_deterministic() {
    let fx = fixture();
    let detector = trained_detector(&fx);
    let text = "Guaranteed best sound, click here";

    let first = detector.detect(text);
    for _ in 0..10 {
        assert_eq!(detector.detect(text), first);
    }

    // a second process loading the same artifact agrees too
    let reloaded = ReviewDetector::from_store(&ArtifactStore::new(&fx.artifact)).unwrap();
    assert_eq!(reloaded.detect(text), first);
}

#[test]
fn test_retraining_replaces_artifact() {
    let fx = fixture();
    let store = ArtifactStore::new(&fx.artifact);
    let trainer = Trainer::new(&fx.dataset, store.clone());

    trainer.train().unwrap();
    fs::write(&fx.dataset, "text,label\nquiet fan,0\nfree gift,1\n").unwrap();
    let report = trainer.train().unwrap();

    let artifact = store.load().unwrap().unwrap();
    assert_eq!(artifact.metadata.n_documents, 2);
    assert_eq!(artifact.metadata.dataset_sha256, report.metadata.dataset_sha256);
}

#[test]
fn test_missing_dataset_is_reported() {
    let fx = fixture();
    let err = Trainer::new(
        fx.dataset.with_file_name("nope.csv"),
        ArtifactStore::new(&fx.artifact),
    )
    .train()
    .unwrap_err();

    assert!(matches!(err, Error::DatasetNotFound(_)));
    assert!(!fx.artifact.exists());
}

#[test]
fn test_missing_model_is_not_a_crash() {
    let fx = fixture();
    let store = ArtifactStore::new(&fx.artifact);

    assert!(store.load().unwrap().is_none());
    let detector = ReviewDetector::from_store(&store).unwrap();
    assert_eq!(
        detector.detect("Nice lamp").error_message(),
        Some("Model not found")
    );
}

#[test]
fn test_reasons_do_not_depend_on_model() {
    let fx = fixture();
    let trained = trained_detector(&fx);
    let text = "FREE GIFT NOW!!!!";

    let expected = analyze_reasons(text);
    assert_eq!(expected.len(), 3);
    assert_eq!(trained.detect(text).verdict().unwrap().reasons, expected);
    assert_eq!(analyze_reasons(text), expected);
}

#[test]
fn test_reason_cases() {
    assert_eq!(analyze_reasons("good"), vec!["Suspiciously short and generic"]);
    assert_eq!(
        analyze_reasons(
            "I think I liked it. I would buy it again. I really do. I mean it. I promise."
        ),
        vec!["Unusual frequency of first-person pronouns"]
    );
    assert!(analyze_reasons("This product works as described and arrived on time.").is_empty());
}
