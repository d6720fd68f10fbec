//! Core types for ReviewGuard

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary verdict for a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReviewLabel {
    /// Genuine review (dataset class `0`)
    Real,
    /// Fabricated or promotional review (dataset class `1`)
    Fake,
}

impl ReviewLabel {
    /// Map a dataset class id onto a label
    pub fn from_class(class: u8) -> Result<Self> {
        match class {
            0 => Ok(Self::Real),
            1 => Ok(Self::Fake),
            other => Err(Error::dataset(format!(
                "label must be 0 (genuine) or 1 (fabricated), got {other}"
            ))),
        }
    }

    /// Dataset class id for this label
    pub fn class_id(self) -> u8 {
        match self {
            Self::Real => 0,
            Self::Fake => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Real => "Real",
            Self::Fake => "Fake",
        }
    }
}

impl fmt::Display for ReviewLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled row of the training dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Review text
    pub text: String,

    /// Class id: `0` genuine, `1` fabricated
    pub label: u8,
}

/// Listing metadata that may accompany a review
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewMetadata {
    /// Star rating given by the reviewer (1-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    /// Whether the marketplace confirmed the purchase
    #[serde(default)]
    pub verified_purchase: bool,
}

/// Scored review returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Predicted label
    pub prediction: ReviewLabel,

    /// Probability of the predicted label (0.0-1.0)
    pub confidence: f64,

    /// Human-readable explanations, in rule order
    pub reasons: Vec<String>,
}

/// Payload handed to front-ends: either a verdict or an explicit error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetectionResponse {
    Verdict(Verdict),
    Error { error: String },
}

impl DetectionResponse {
    /// Build an error payload
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error { error: msg.into() }
    }

    /// The verdict, if scoring succeeded
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Self::Verdict(verdict) => Some(verdict),
            Self::Error { .. } => None,
        }
    }

    /// The error message, if scoring did not happen
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Verdict(_) => None,
            Self::Error { error } => Some(error),
        }
    }
}

impl From<Verdict> for DetectionResponse {
    fn from(verdict: Verdict) -> Self {
        Self::Verdict(verdict)
    }
}
