//! TF-IDF feature extraction
//!
//! Mirrors the conventional bag-of-words defaults so that models trained here
//! behave like the usual text-classification baseline:
//!
//! - text is lowercased, then split into tokens of two or more word characters
//! - vocabulary terms are indexed in lexicographic order
//! - smoothed idf: `ln((1 + n) / (1 + df)) + 1`
//! - raw term counts weighted by idf, then L2-normalized per document

use regex::Regex;
use reviewguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Token pattern: runs of at least two word characters
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"))
}

/// Sparse document vector as `(feature index, weight)` pairs sorted by index
pub type SparseVector = Vec<(usize, f64)>;

/// Lowercase and split text into vocabulary tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Fitted TF-IDF vectorizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term to feature index, indices assigned in sorted term order
    vocabulary: BTreeMap<String, usize>,

    /// Inverse document frequency per feature index
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn vocabulary and idf weights from a corpus
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for doc in documents {
            let unique: BTreeSet<String> = tokenize(doc.as_ref()).into_iter().collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(Error::dataset(
                "empty vocabulary: no document contains a token of two or more word characters",
            ));
        }

        let n_documents = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());

        for (idx, (term, df)) in document_frequency.into_iter().enumerate() {
            idf.push(((1.0 + n_documents) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        Ok(Self { vocabulary, idf })
    }

    /// Transform one document into an L2-normalized TF-IDF vector
    ///
    /// Tokens outside the fitted vocabulary are ignored, so a document made
    /// only of unseen terms maps to the empty vector.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(document) {
            if let Some(idx) = self.index_of(&token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]))
            .collect();

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut vector {
                *weight /= norm;
            }
        }

        vector
    }

    /// Number of features (distinct vocabulary terms)
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of a term, if it is in the vocabulary
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Reject artifacts whose tables disagree with each other
    pub(crate) fn validate(&self) -> Result<()> {
        if self.vocabulary.len() != self.idf.len() {
            return Err(Error::artifact(format!(
                "vectorizer has {} terms but {} idf weights",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        if self.vocabulary.values().any(|&idx| idx >= self.idf.len()) {
            return Err(Error::artifact("vectorizer term index out of range"));
        }
        Ok(())
    }
}
