//! Rule-based explanations for review verdicts
//!
//! These rules run alongside the learned model and never influence its label
//! or confidence. Each rule contributes at most one reason, and reasons are
//! always reported in the order below.

use reviewguard_core::ReviewMetadata;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Share of uppercase characters above which a review reads as shouting
pub const UPPERCASE_RATIO_THRESHOLD: f64 = 0.4;

/// `!` count above which punctuation is considered excessive
pub const EXCLAMATION_THRESHOLD: usize = 3;

/// Reviews shorter than this (in chars) are candidates for "short and generic"
pub const SHORT_REVIEW_CHARS: usize = 20;

/// Occurrences of `"i "` above which first-person narration is suspicious
pub const FIRST_PERSON_THRESHOLD: usize = 4;

/// Five-star reviews shorter than this (in chars) are suspicious
pub const SHORT_FIVE_STAR_CHARS: usize = 50;

/// Case-insensitive substrings typical of spam and paid promotion
pub const PROMOTIONAL_KEYWORDS: [&str; 9] = [
    "free",
    "gift",
    "click here",
    "link",
    "money",
    "guaranteed",
    "offer",
    "discount",
    "buy now",
];

/// A single explanation attached to a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    ExcessiveUppercase,
    PromotionalKeywords,
    ExcessiveExclamation,
    ShortAndGeneric,
    FirstPersonOveruse,
    ShortFiveStar,
    UnverifiedPurchase,
    KnownFakePattern,
}

impl Reason {
    /// Human-readable message shown to reviewers
    pub fn message(self) -> &'static str {
        match self {
            Self::ExcessiveUppercase => "Excessive use of UPPERCASE letters",
            Self::PromotionalKeywords => "Contains promotional or spam keywords",
            Self::ExcessiveExclamation => "Excessive use of exclamation marks!!!",
            Self::ShortAndGeneric => "Suspiciously short and generic",
            Self::FirstPersonOveruse => "Unusual frequency of first-person pronouns",
            Self::ShortFiveStar => "Suspiciously short 5-star review",
            Self::UnverifiedPurchase => "Unverified Purchase",
            Self::KnownFakePattern => "Pattern matching with known fake reviews",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Text-only heuristic reasons, in rule order
pub fn text_reasons(text: &str) -> Vec<Reason> {
    let lowered = text.to_lowercase();
    let char_count = text.chars().count();
    let mut reasons = Vec::new();

    if char_count > 0 {
        let uppercase = text.chars().filter(|c| c.is_uppercase()).count();
        if uppercase as f64 / char_count as f64 > UPPERCASE_RATIO_THRESHOLD {
            reasons.push(Reason::ExcessiveUppercase);
        }
    }

    if PROMOTIONAL_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
    {
        reasons.push(Reason::PromotionalKeywords);
    }

    if text.matches('!').count() > EXCLAMATION_THRESHOLD {
        reasons.push(Reason::ExcessiveExclamation);
    }

    if char_count < SHORT_REVIEW_CHARS && lowered.contains("good") {
        reasons.push(Reason::ShortAndGeneric);
    }

    if lowered.matches("i ").count() > FIRST_PERSON_THRESHOLD {
        reasons.push(Reason::FirstPersonOveruse);
    }

    reasons
}

/// Reasons derived from listing metadata, in rule order
pub fn metadata_reasons(text: &str, metadata: &ReviewMetadata) -> Vec<Reason> {
    let mut reasons = Vec::new();

    if metadata.rating == Some(5) && text.chars().count() < SHORT_FIVE_STAR_CHARS {
        reasons.push(Reason::ShortFiveStar);
    }

    if !metadata.verified_purchase {
        reasons.push(Reason::UnverifiedPurchase);
    }

    reasons
}

/// Explain a review with human-readable messages
pub fn analyze_reasons(text: &str) -> Vec<String> {
    text_reasons(text)
        .into_iter()
        .map(|reason| reason.message().to_string())
        .collect()
}
