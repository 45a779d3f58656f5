//! Extraction schema, records and record validation

mod record;
mod schema;
mod validator;

pub use record::ExtractionRecord;
pub use schema::{ExtractionSchema, FieldDescriptor, FieldType, UNCERTAIN_FIELDS_KEY};
pub use validator::validate_record;
