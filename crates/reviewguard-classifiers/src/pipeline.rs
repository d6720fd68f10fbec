//! Composed text pipeline: TF-IDF vectorizer feeding a naive Bayes classifier
//!
//! The two stages are fitted together and stored together, so callers only
//! ever hand raw review text to [`TextPipeline::predict`].

use crate::classifier::{ClassificationResult, Classifier};
use crate::naive_bayes::MultinomialNaiveBayes;
use crate::tfidf::TfidfVectorizer;
use reviewguard_core::{DatasetRecord, Result, ReviewLabel};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Fitted feature transform plus classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPipeline {
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNaiveBayes,
}

impl TextPipeline {
    /// Fit both stages on a labeled corpus
    pub fn fit(records: &[DatasetRecord]) -> Result<Self> {
        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        let labels = records
            .iter()
            .map(|r| ReviewLabel::from_class(r.label))
            .collect::<Result<Vec<_>>>()?;

        let vectorizer = TfidfVectorizer::fit(&texts)?;
        let features: Vec<_> = texts.iter().map(|t| vectorizer.transform(t)).collect();
        let classifier =
            MultinomialNaiveBayes::fit(&features, &labels, vectorizer.vocabulary_size())?;

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Predicted label and the probability assigned to it
    pub fn predict(&self, text: &str) -> (ReviewLabel, f64) {
        self.classifier.predict(&self.vectorizer.transform(text))
    }

    /// Posterior probability of every class seen in training
    pub fn predict_proba(&self, text: &str) -> Vec<(ReviewLabel, f64)> {
        self.classifier
            .predict_proba(&self.vectorizer.transform(text))
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &MultinomialNaiveBayes {
        &self.classifier
    }

    /// Check that the stages agree on the feature space
    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()?;
        self.classifier.validate(self.vectorizer.vocabulary_size())
    }
}

impl Classifier for TextPipeline {
    fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let start = Instant::now();

        let features = self.vectorizer.transform(text);
        let (label, score) = self.classifier.predict(&features);
        let class_scores = self.classifier.predict_proba(&features);

        Ok(ClassificationResult {
            label,
            score,
            class_scores,
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        "tfidf-multinomial-nb"
    }
}
