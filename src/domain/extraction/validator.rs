//! Record validation against the schema field types

use chrono::NaiveDate;
use serde_json::Value;

use super::{ExtractionRecord, ExtractionSchema, FieldDescriptor, FieldType};

/// Check a record against its schema
///
/// Returns `"<field-path>: <message>"` entries in schema order; an empty
/// list means the record is valid. Never fails.
pub fn validate_record(record: &ExtractionRecord, schema: &ExtractionSchema) -> Vec<String> {
    let mut errors = Vec::new();

    for field in schema.fields() {
        let value = record.get(&field.name).unwrap_or(&Value::Null);
        check_field(field, value, &mut errors);
    }

    errors
}

fn check_field(field: &FieldDescriptor, value: &Value, errors: &mut Vec<String>) {
    if value.is_null() {
        if field.required {
            errors.push(format!("{}: Field required", field.name));
        }
        return;
    }

    match field.effective_type() {
        FieldType::StringList => match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        errors.push(format!(
                            "{}.{}: {}",
                            field.name,
                            i,
                            type_message(FieldType::String)
                        ));
                    }
                }
            }
            _ => errors.push(format!("{}: Input should be a valid list", field.name)),
        },
        scalar => {
            if !matches_scalar(scalar, value) {
                errors.push(format!("{}: {}", field.name, type_message(scalar)));
            }
        }
    }
}

fn matches_scalar(field_type: FieldType, value: &Value) -> bool {
    match field_type {
        FieldType::String => value.is_string(),
        FieldType::Number => value.is_number(),
        FieldType::Boolean => value.is_boolean(),
        FieldType::Date => value.as_str().is_some_and(is_iso_date),
        FieldType::StringList => value.is_array(),
    }
}

fn is_iso_date(s: &str) -> bool {
    s.len() == 10 && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn type_message(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::String => "Input should be a valid string",
        FieldType::Number => "Input should be a valid number",
        FieldType::Boolean => "Input should be a valid boolean",
        FieldType::Date => "Input should be a valid date in YYYY-MM-DD format",
        FieldType::StringList => "Input should be a valid list",
    }
}
