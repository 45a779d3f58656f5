//! Extraction reply parsing into a schema-shaped record

use serde_json::Value;
use tracing::warn;

use crate::domain::extraction::{ExtractionRecord, ExtractionSchema, UNCERTAIN_FIELDS_KEY};

/// Uncertain-field marker for a reply that held no usable JSON object
pub const PARSE_ERROR: &str = "parse_error";

/// Record read from a reply plus the fields the model flagged
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub record: ExtractionRecord,
    pub uncertain_fields: Vec<String>,
}

impl ParsedRecord {
    fn parse_error(schema: &ExtractionSchema) -> Self {
        Self {
            record: ExtractionRecord::empty(schema),
            uncertain_fields: vec![PARSE_ERROR.to_string()],
        }
    }

    pub fn is_parse_error(&self) -> bool {
        self.uncertain_fields.iter().any(|f| f == PARSE_ERROR)
    }
}

/// Read the JSON object spanning the first `{` to the last `}` of a reply
pub fn parse_record(content: &str, schema: &ExtractionSchema) -> ParsedRecord {
    let content = content.trim();

    let span = match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if end > start => &content[start..=end],
        _ => {
            warn!("No JSON object found in extraction reply");
            return ParsedRecord::parse_error(schema);
        }
    };

    let mut object = match serde_json::from_str::<Value>(span) {
        Ok(Value::Object(object)) => object,
        Ok(_) => {
            warn!("Extraction reply JSON is not an object");
            return ParsedRecord::parse_error(schema);
        }
        Err(e) => {
            warn!(error = %e, "Extraction reply is not valid JSON");
            return ParsedRecord::parse_error(schema);
        }
    };

    let uncertain_fields = match object.get(UNCERTAIN_FIELDS_KEY) {
        Some(Value::Array(_)) => match object.remove(UNCERTAIN_FIELDS_KEY) {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    ParsedRecord {
        record: ExtractionRecord::from_object(schema, &object),
        uncertain_fields,
    }
}
