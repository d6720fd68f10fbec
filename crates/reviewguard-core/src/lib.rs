//! ReviewGuard Core
//!
//! Core types and error handling shared across ReviewGuard components.
//!
//! This crate provides:
//! - The review label and verdict types returned to callers
//! - Dataset records and optional listing metadata
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{DatasetRecord, DetectionResponse, ReviewLabel, ReviewMetadata, Verdict};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{DetectionResponse, ReviewLabel, ReviewMetadata, Verdict};
}
