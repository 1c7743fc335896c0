//! Validation gate for untyped collaborator payloads
//!
//! The extraction collaborator returns its tool input as an untyped JSON
//! mapping. Everything the pipeline does downstream assumes a typed
//! [`ExtractionResult`], so the payload is reconstructed field by field
//! right here at the boundary, and every failure names the offending
//! field and reason. Unknown extra keys are ignored; an explicit `null`
//! for an optional field counts as absent.

use crate::document_type::DocumentType;
use crate::record::{Diagnosis, ExtractionResult, Medication, Provider};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

/// A structured payload was present but does not conform to the schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaValidationError {
    /// The payload itself is not a JSON object
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// A required field is missing or null
    #[error("missing required field '{0}'")]
    MissingField(String),

    /// A field is present but has the wrong JSON type
    #[error("field '{field}' has the wrong type (expected {expected})")]
    WrongType {
        /// Dotted path to the offending field
        field: String,
        /// Human-readable expected type
        expected: &'static str,
    },

    /// document_type is outside the enumeration
    #[error("field 'document_type' has unknown value '{0}'")]
    UnknownDocumentType(String),

    /// A date field is not a valid ISO calendar date
    #[error("field '{field}' is not a valid ISO date: '{value}'")]
    MalformedDate {
        /// Dotted path to the offending field
        field: String,
        /// The rejected value
        value: String,
    },
}

impl ExtractionResult {
    /// Validate an untyped tool payload and construct a typed result.
    ///
    /// # Examples
    ///
    /// ```
    /// use medscribe_domain::{DocumentType, ExtractionResult};
    /// use serde_json::json;
    ///
    /// let payload = json!({"document_type": "visit_note"});
    /// let result = ExtractionResult::from_payload(&payload).unwrap();
    /// assert_eq!(result.document_type, DocumentType::VisitNote);
    /// assert!(result.diagnoses.is_empty());
    /// ```
    pub fn from_payload(payload: &Value) -> Result<Self, SchemaValidationError> {
        let obj = payload
            .as_object()
            .ok_or(SchemaValidationError::NotAnObject)?;

        let raw_type = required_str(obj, "document_type")?;
        let document_type: DocumentType = raw_type
            .parse()
            .map_err(|_| SchemaValidationError::UnknownDocumentType(raw_type))?;

        let document_date = match optional_str(obj, "document_date")? {
            Some(s) => Some(parse_iso_date("document_date", &s)?),
            None => None,
        };

        let provider = match obj.get("provider") {
            None | Some(Value::Null) => None,
            Some(value) => Some(parse_provider(value)?),
        };

        Ok(ExtractionResult {
            document_type,
            document_date,
            provider,
            chief_complaint: optional_str(obj, "chief_complaint")?,
            assessment: optional_str(obj, "assessment")?,
            diagnoses: sequence(obj, "diagnoses", parse_diagnosis)?,
            medications: sequence(obj, "medications", parse_medication)?,
            follow_up_instructions: optional_str(obj, "follow_up_instructions")?,
        })
    }
}

fn parse_provider(value: &Value) -> Result<Provider, SchemaValidationError> {
    let obj = value.as_object().ok_or(SchemaValidationError::WrongType {
        field: "provider".to_string(),
        expected: "object",
    })?;

    Ok(Provider {
        name: required_str_at(obj, "provider", "name")?,
        specialty: optional_str_at(obj, "provider", "specialty")?,
        facility: optional_str_at(obj, "provider", "facility")?,
    })
}

fn parse_diagnosis(path: &str, value: &Value) -> Result<Diagnosis, SchemaValidationError> {
    let obj = value.as_object().ok_or(SchemaValidationError::WrongType {
        field: path.to_string(),
        expected: "object",
    })?;

    Ok(Diagnosis {
        description: required_str_at(obj, path, "description")?,
        icd_code: optional_str_at(obj, path, "icd_code")?,
    })
}

fn parse_medication(path: &str, value: &Value) -> Result<Medication, SchemaValidationError> {
    let obj = value.as_object().ok_or(SchemaValidationError::WrongType {
        field: path.to_string(),
        expected: "object",
    })?;

    Ok(Medication {
        name: required_str_at(obj, path, "name")?,
        dosage: optional_str_at(obj, path, "dosage")?,
        frequency: optional_str_at(obj, path, "frequency")?,
        instructions: optional_str_at(obj, path, "instructions")?,
    })
}

/// A missing or null sequence field becomes an empty vec; anything else
/// must be an array whose items all parse.
fn sequence<T, F>(
    obj: &Map<String, Value>,
    field: &str,
    parse_item: F,
) -> Result<Vec<T>, SchemaValidationError>
where
    F: Fn(&str, &Value) -> Result<T, SchemaValidationError>,
{
    let items = match obj.get(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(SchemaValidationError::WrongType {
                field: field.to_string(),
                expected: "array",
            })
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| parse_item(&format!("{}[{}]", field, idx), item))
        .collect()
}

fn required_str(obj: &Map<String, Value>, field: &str) -> Result<String, SchemaValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(SchemaValidationError::MissingField(field.to_string())),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SchemaValidationError::WrongType {
            field: field.to_string(),
            expected: "string",
        }),
    }
}

fn optional_str(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, SchemaValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SchemaValidationError::WrongType {
            field: field.to_string(),
            expected: "string",
        }),
    }
}

fn required_str_at(
    obj: &Map<String, Value>,
    path: &str,
    field: &str,
) -> Result<String, SchemaValidationError> {
    required_str(obj, field).map_err(|e| prefix_path(e, path))
}

fn optional_str_at(
    obj: &Map<String, Value>,
    path: &str,
    field: &str,
) -> Result<Option<String>, SchemaValidationError> {
    optional_str(obj, field).map_err(|e| prefix_path(e, path))
}

fn prefix_path(err: SchemaValidationError, path: &str) -> SchemaValidationError {
    match err {
        SchemaValidationError::MissingField(field) => {
            SchemaValidationError::MissingField(format!("{}.{}", path, field))
        }
        SchemaValidationError::WrongType { field, expected } => SchemaValidationError::WrongType {
            field: format!("{}.{}", path, field),
            expected,
        },
        other => other,
    }
}

fn parse_iso_date(field: &str, value: &str) -> Result<NaiveDate, SchemaValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| SchemaValidationError::MalformedDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}
