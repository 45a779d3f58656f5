//! Review gates for QA answers and extraction records

use once_cell::sync::Lazy;
use regex::RegexSet;
use serde::{Deserialize, Serialize};

use super::{GateDecision, ReviewReason};

/// Phrases that suggest the model is unsure or declining to answer
static UNCERTAIN_PHRASES: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"i\s+don'?t\s+know",
        r"not\s+(?:found|mentioned|stated|in\s+the\s+document)",
        r"cannot\s+(?:find|determine|answer)",
        r"no\s+information",
        r"insufficient\s+(?:context|information)",
        r"not\s+in\s+the\s+context",
        r"unclear",
        r"cannot\s+be\s+determined",
    ])
    .expect("uncertainty patterns are valid")
});

/// Thresholds for the QA gate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Answers below this self-reported confidence go to review
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    /// Fewer retrieved passages than this means there was no usable context
    #[serde(default = "default_min_passages")]
    pub min_passages: usize,
}

fn default_confidence_threshold() -> f64 {
    0.7
}

fn default_min_passages() -> usize {
    1
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            min_passages: default_min_passages(),
        }
    }
}

/// Decide whether a QA answer needs human review
///
/// Checks run in order and the first hit wins: too few passages, low
/// confidence, then uncertain phrasing in the answer.
pub fn qa_gate(
    answer: &str,
    confidence: Option<f64>,
    num_passages: usize,
    confidence_threshold: f64,
    min_passages: usize,
) -> GateDecision {
    if num_passages < min_passages {
        return GateDecision::review(ReviewReason::NoContext);
    }

    if confidence.is_some_and(|c| c < confidence_threshold) {
        return GateDecision::review(ReviewReason::LowConfidence);
    }

    let normalized = answer.trim().to_lowercase();
    if UNCERTAIN_PHRASES.is_match(&normalized) {
        return GateDecision::review(ReviewReason::UncertainPhrasing);
    }

    GateDecision::ok()
}

/// Decide whether an extraction record needs human review
///
/// Validation errors take priority over uncertain fields.
pub fn extraction_gate<S: AsRef<str>, E: AsRef<str>>(
    uncertain_fields: &[S],
    validation_errors: &[E],
) -> GateDecision {
    if !validation_errors.is_empty() {
        return GateDecision::review(ReviewReason::ValidationErrors);
    }

    if !uncertain_fields.is_empty() {
        return GateDecision::review(ReviewReason::UncertainFields);
    }

    GateDecision::ok()
}
