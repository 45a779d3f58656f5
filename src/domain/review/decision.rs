//! Review decision and reason codes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a result was, or was not, routed to a human
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewReason {
    Ok,
    NoContext,
    LowConfidence,
    UncertainPhrasing,
    ValidationErrors,
    UncertainFields,
}

impl ReviewReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NoContext => "no_context",
            Self::LowConfidence => "low_confidence",
            Self::UncertainPhrasing => "uncertain_phrasing",
            Self::ValidationErrors => "validation_errors",
            Self::UncertainFields => "uncertain_fields",
        }
    }
}

impl fmt::Display for ReviewReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a review gate
///
/// `needs_review` is false exactly when the reason is `ok`; the fields are
/// private so the pair cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateDecision {
    needs_review: bool,
    #[serde(rename = "review_reason")]
    reason: ReviewReason,
}

impl GateDecision {
    pub fn ok() -> Self {
        Self {
            needs_review: false,
            reason: ReviewReason::Ok,
        }
    }

    pub fn review(reason: ReviewReason) -> Self {
        Self {
            needs_review: reason != ReviewReason::Ok,
            reason,
        }
    }

    pub fn needs_review(&self) -> bool {
        self.needs_review
    }

    pub fn reason(&self) -> ReviewReason {
        self.reason
    }
}
