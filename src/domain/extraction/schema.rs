//! Extraction schema: the fields a record must carry

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Reserved key the model uses to flag low-confidence fields
pub const UNCERTAIN_FIELDS_KEY: &str = "uncertain_fields";

/// Value type a field must hold when it is not null
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    String,
    Number,
    Boolean,
    /// A `YYYY-MM-DD` string
    Date,
    StringList,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::StringList => "string_list",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One field of an extraction schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(default)]
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            field_type: None,
            required: false,
        }
    }

    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declared type, `string` when none was given
    pub fn effective_type(&self) -> FieldType {
        self.field_type.unwrap_or_default()
    }
}

/// Ordered set of fields the model is asked to fill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionSchema {
    fields: Vec<FieldDescriptor>,
}

impl ExtractionSchema {
    /// Create a schema, rejecting empty, blank, duplicate or reserved names
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, DomainError> {
        if fields.is_empty() {
            return Err(DomainError::configuration(
                "Extraction schema must declare at least one field",
            ));
        }

        let mut seen = HashSet::new();
        for field in &fields {
            if field.name.trim().is_empty() {
                return Err(DomainError::configuration(
                    "Extraction schema field names cannot be empty",
                ));
            }
            if field.name == UNCERTAIN_FIELDS_KEY {
                return Err(DomainError::configuration(format!(
                    "'{}' is a reserved field name",
                    UNCERTAIN_FIELDS_KEY
                )));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(DomainError::configuration(format!(
                    "Duplicate extraction field: {}",
                    field.name
                )));
            }
        }

        Ok(Self { fields })
    }

    /// Dates, parties, amounts and summary, all optional strings
    pub fn contract() -> Self {
        Self {
            fields: vec![
                FieldDescriptor::new("dates", "Relevant dates mentioned"),
                FieldDescriptor::new("parties", "People or organizations involved"),
                FieldDescriptor::new("amounts", "Monetary amounts or quantities"),
                FieldDescriptor::new("summary", "Brief summary of the document"),
            ],
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Prompt listing, one `- name: description` line per field
    pub fn describe(&self) -> String {
        self.fields
            .iter()
            .map(|f| {
                let info = if f.description.is_empty() {
                    f.effective_type().to_string()
                } else {
                    f.description.clone()
                };
                format!("- {}: {}", f.name, info)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Retrieval query used when the caller gives none
    pub fn default_query(&self) -> String {
        self.field_names().collect::<Vec<_>>().join(" ")
    }
}

impl Default for ExtractionSchema {
    fn default() -> Self {
        Self::contract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_schema() {
        let schema = ExtractionSchema::contract();

        assert_eq!(
            schema.field_names().collect::<Vec<_>>(),
            vec!["dates", "parties", "amounts", "summary"]
        );
        assert!(schema.fields().iter().all(|f| !f.required));
        assert_eq!(schema.default_query(), "dates parties amounts summary");
    }

    #[test]
    fn test_describe() {
        let schema = ExtractionSchema::new(vec![
            FieldDescriptor::new("dates", "Relevant dates mentioned"),
            FieldDescriptor::new("total", "").with_type(FieldType::Number),
        ])
        .unwrap();

        assert_eq!(
            schema.describe(),
            "- dates: Relevant dates mentioned\n- total: number"
        );
    }

    #[test]
    fn test_invalid_schemas() {
        assert!(ExtractionSchema::new(vec![]).unwrap_err().is_configuration());

        let duplicate = ExtractionSchema::new(vec![
            FieldDescriptor::new("a", ""),
            FieldDescriptor::new("a", ""),
        ]);
        assert!(duplicate.unwrap_err().to_string().contains("Duplicate"));

        let reserved = ExtractionSchema::new(vec![FieldDescriptor::new("uncertain_fields", "")]);
        assert!(reserved.unwrap_err().is_configuration());

        let blank = ExtractionSchema::new(vec![FieldDescriptor::new("  ", "")]);
        assert!(blank.is_err());
    }

    #[test]
    fn test_field_descriptor_deserialize_defaults() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{"name": "effective_date", "field_type": "date"}"#).unwrap();

        assert_eq!(field.effective_type(), FieldType::Date);
        assert!(!field.required);
        assert!(field.description.is_empty());
    }
}
