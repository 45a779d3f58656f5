//! QA reply parsing: answer text and trailing confidence

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static CONFIDENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*Confidence:\s*([0-9]*\.?[0-9]+)\s*$").expect("confidence pattern is valid")
});

/// Answer text with the self-reported confidence split off
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedAnswer {
    pub answer: String,
    pub confidence: Option<f64>,
}

/// Split a trailing `Confidence: <number>` annotation off a reply
///
/// The value is clamped to `[0, 1]`. Without a trailing annotation the
/// whole trimmed reply is the answer and confidence is absent.
pub fn parse_answer(content: &str) -> ParsedAnswer {
    let content = content.trim();

    if let Some(caps) = CONFIDENCE_PATTERN.captures(content) {
        if let (Some(whole), Ok(value)) = (caps.get(0), caps[1].parse::<f64>()) {
            return ParsedAnswer {
                answer: content[..whole.start()].trim().to_string(),
                confidence: Some(value.clamp(0.0, 1.0)),
            };
        }
    }

    ParsedAnswer {
        answer: content.to_string(),
        confidence: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_confidence() {
        let parsed = parse_answer("The fee is $5.\nConfidence: 0.85");
        assert_eq!(parsed.answer, "The fee is $5.");
        assert_eq!(parsed.confidence, Some(0.85));
    }

    #[test]
    fn test_confidence_is_clamped() {
        let parsed = parse_answer("Answer: X\nConfidence: 1.5");
        assert_eq!(parsed.answer, "Answer: X");
        assert_eq!(parsed.confidence, Some(1.0));
    }

    #[test]
    fn test_no_confidence() {
        let parsed = parse_answer("  I don't know  ");
        assert_eq!(parsed.answer, "I don't know");
        assert_eq!(parsed.confidence, None);
    }

    #[test]
    fn test_case_insensitive_and_leading_dot() {
        let parsed = parse_answer("Yes. CONFIDENCE: .5\n");
        assert_eq!(parsed.answer, "Yes.");
        assert_eq!(parsed.confidence, Some(0.5));
    }

    #[test]
    fn test_confidence_not_at_end_is_kept() {
        let parsed = parse_answer("Confidence: 0.9 but more text follows");
        assert_eq!(parsed.answer, "Confidence: 0.9 but more text follows");
        assert_eq!(parsed.confidence, None);
    }

    #[test]
    fn test_only_confidence() {
        let parsed = parse_answer("Confidence: 0.2");
        assert_eq!(parsed.answer, "");
        assert_eq!(parsed.confidence, Some(0.2));
    }

    #[test]
    fn test_unclear_answer_keeps_clamped_confidence() {
        let parsed = parse_answer("The total is unclear.\nConfidence: 1.4");
        assert_eq!(parsed.answer, "The total is unclear.");
        assert_eq!(parsed.confidence, Some(1.0));
    }
}
