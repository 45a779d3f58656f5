//! Human-review gating for QA answers and extraction records

mod decision;
mod gate;

pub use decision::{GateDecision, ReviewReason};
pub use gate::{extraction_gate, qa_gate, GateConfig};
