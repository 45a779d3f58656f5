//! Extracted records keyed by schema field

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use super::ExtractionSchema;

/// Values for exactly the schema's fields, `null` when absent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExtractionRecord {
    values: IndexMap<String, Value>,
}

impl ExtractionRecord {
    /// Every schema field set to null
    pub fn empty(schema: &ExtractionSchema) -> Self {
        Self {
            values: schema
                .field_names()
                .map(|name| (name.to_string(), Value::Null))
                .collect(),
        }
    }

    /// Take the schema's fields from a JSON object, dropping any other key
    pub fn from_object(schema: &ExtractionSchema, object: &Map<String, Value>) -> Self {
        Self {
            values: schema
                .field_names()
                .map(|name| {
                    let value = object.get(name).cloned().unwrap_or(Value::Null);
                    (name.to_string(), value)
                })
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every field is null
    pub fn is_all_null(&self) -> bool {
        self.values.values().all(Value::is_null)
    }

    /// Non-null fields as `name: value` lines
    ///
    /// Strings are written without quotes, other values as JSON.
    pub fn display_lines(&self) -> String {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| match v {
                Value::String(s) => format!("{}: {}", k, s),
                other => format!("{}: {}", k, other),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_record_has_every_field() {
        let record = ExtractionRecord::empty(&ExtractionSchema::contract());

        assert_eq!(record.len(), 4);
        assert!(record.is_all_null());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"dates": null, "parties": null, "amounts": null, "summary": null})
        );
    }

    #[test]
    fn test_from_object_keeps_schema_order_and_drops_extras() {
        let object = json!({"summary": "S", "extra": 1, "parties": "Acme"});
        let record =
            ExtractionRecord::from_object(&ExtractionSchema::contract(), object.as_object().unwrap());

        let keys: Vec<_> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["dates", "parties", "amounts", "summary"]);
        assert_eq!(record.get("extra"), None);
        assert_eq!(record.get("parties"), Some(&json!("Acme")));
        assert_eq!(record.get("dates"), Some(&Value::Null));
        assert!(!record.is_all_null());
    }

    #[test]
    fn test_display_lines() {
        let object = json!({"parties": "Acme", "amounts": 500, "dates": null});
        let record =
            ExtractionRecord::from_object(&ExtractionSchema::contract(), object.as_object().unwrap());

        assert_eq!(record.display_lines(), "parties: Acme\namounts: 500");
    }
}
