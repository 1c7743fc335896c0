//! Machine-readable schema descriptor for the extraction collaborator
//!
//! Produces the JSON-Schema object handed to the collaborator's
//! forced-tool-call API so it can only emit payloads shaped like
//! [`ExtractionResult`](crate::ExtractionResult). Field names and
//! descriptions here mirror the record types in `record.rs`; the
//! validation gate in `validate.rs` is the other half of the contract.

use crate::document_type::DocumentType;
use serde_json::{json, Value};

/// Name of the forced tool invocation.
pub const TOOL_NAME: &str = "extract_medical_info";

/// Description attached to the tool definition.
pub const TOOL_DESCRIPTION: &str =
    "Extract structured medical information from a document";

/// Build the JSON-Schema `input_schema` for the extraction tool.
///
/// Only `document_type` is required; every other field is optional and
/// must be left out or null when the document does not state it.
pub fn extraction_schema() -> Value {
    let document_types: Vec<&str> = DocumentType::ALL.iter().map(|t| t.as_str()).collect();

    json!({
        "type": "object",
        "properties": {
            "document_type": {
                "type": "string",
                "enum": document_types,
                "description": "Type of medical document"
            },
            "document_date": {
                "type": "string",
                "format": "date",
                "description": "Date of the visit or document (YYYY-MM-DD)"
            },
            "provider": {
                "type": "object",
                "description": "Healthcare provider information",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Full name of the healthcare provider"
                    },
                    "specialty": {
                        "type": "string",
                        "description": "Medical specialty (e.g., Internal Medicine, Cardiology)"
                    },
                    "facility": {
                        "type": "string",
                        "description": "Name of the medical facility or practice"
                    }
                },
                "required": ["name"]
            },
            "chief_complaint": {
                "type": "string",
                "description": "Primary reason for the visit or main concern"
            },
            "assessment": {
                "type": "string",
                "description": "Provider's assessment or clinical impression"
            },
            "diagnoses": {
                "type": "array",
                "description": "List of diagnoses mentioned",
                "items": {
                    "type": "object",
                    "properties": {
                        "description": {
                            "type": "string",
                            "description": "Description of the diagnosis"
                        },
                        "icd_code": {
                            "type": "string",
                            "description": "ICD-10 code if mentioned in the document"
                        }
                    },
                    "required": ["description"]
                }
            },
            "medications": {
                "type": "array",
                "description": "List of medications prescribed or mentioned",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Name of the medication"
                        },
                        "dosage": {
                            "type": "string",
                            "description": "Dosage amount (e.g., 500mg, 10ml)"
                        },
                        "frequency": {
                            "type": "string",
                            "description": "How often to take (e.g., twice daily, as needed)"
                        },
                        "instructions": {
                            "type": "string",
                            "description": "Additional instructions (e.g., take with food)"
                        }
                    },
                    "required": ["name"]
                }
            },
            "follow_up_instructions": {
                "type": "string",
                "description": "Follow-up care instructions"
            }
        },
        "required": ["document_type"]
    })
}
