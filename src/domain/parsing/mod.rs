//! Parsing of raw LLM replies into answers and records
//!
//! Parsing never fails: a reply that cannot be read becomes data
//! (no confidence, or a `parse_error` marker) for the review gate to act on.

mod answer;
mod record;

pub use answer::{parse_answer, ParsedAnswer};
pub use record::{parse_record, ParsedRecord, PARSE_ERROR};
