//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::prompt;
use chrono::Utc;
use medscribe_domain::{
    extraction_schema, ExtractionResult, MedicalRecord, ToolCallProvider, ToolCallRequest,
    TOOL_DESCRIPTION, TOOL_NAME,
};
use tracing::{debug, info};

/// The Extractor converts document text into a validated MedicalRecord
pub struct Extractor<P>
where
    P: ToolCallProvider,
{
    provider: P,
    config: ExtractorConfig,
}

impl<P> Extractor<P>
where
    P: ToolCallProvider,
{
    /// Create a new Extractor
    pub fn new(provider: P, config: ExtractorConfig) -> Self {
        Self { provider, config }
    }

    /// Extract medical information from document text.
    ///
    /// Sends exactly one forced-tool-call request, validates the payload
    /// against the schema, and merges in provenance metadata. The input
    /// text may be arbitrarily long; the collaborator enforces its own
    /// length limit and fails accordingly.
    pub async fn extract(
        &self,
        text: &str,
        source_file: &str,
    ) -> Result<MedicalRecord, ExtractorError> {
        info!(
            "starting extraction for '{}', text length {}",
            source_file,
            text.len()
        );

        let request = ToolCallRequest {
            system: prompt::system_prompt(),
            user: prompt::user_prompt(text),
            tool_name: TOOL_NAME.to_string(),
            tool_description: TOOL_DESCRIPTION.to_string(),
            input_schema: extraction_schema(),
            max_tokens: self.config.max_tokens,
        };

        debug!("prompt length: {} chars", request.user.len());

        let payload = self
            .provider
            .invoke(&request)
            .await
            .map_err(|e| ExtractorError::Provider(e.to_string()))?;

        let extraction = ExtractionResult::from_payload(&payload)?;

        info!(
            "extraction complete: type '{}', {} diagnoses, {} medications",
            extraction.document_type,
            extraction.diagnoses.len(),
            extraction.medications.len()
        );

        Ok(MedicalRecord {
            extraction,
            raw_text: text.to_string(),
            source_file: source_file.to_string(),
            extracted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medscribe_domain::{DocumentType, SchemaValidationError};
    use medscribe_llm::MockProvider;
    use serde_json::json;

    fn extractor_with(payload: serde_json::Value) -> (Extractor<MockProvider>, MockProvider) {
        let provider = MockProvider::new(payload);
        let extractor = Extractor::new(provider.clone(), ExtractorConfig::default());
        (extractor, provider)
    }

    #[tokio::test]
    async fn test_extract_builds_record_with_provenance() {
        let (extractor, _) = extractor_with(json!({
            "document_type": "visit_note",
            "diagnoses": [{"description": "Hypertension"}],
            "medications": [
                {"name": "Lisinopril", "dosage": "10mg", "frequency": "once daily"}
            ]
        }));

        let text = "Patient presents with hypertension. Prescribed Lisinopril 10mg once daily.";
        let before = Utc::now();
        let record = extractor.extract(text, "note.txt").await.unwrap();

        assert_eq!(record.extraction.document_type, DocumentType::VisitNote);
        assert_eq!(record.extraction.diagnoses[0].description, "Hypertension");
        assert_eq!(record.extraction.medications[0].name, "Lisinopril");
        assert_eq!(
            record.extraction.medications[0].frequency.as_deref(),
            Some("once daily")
        );
        // provenance: raw text verbatim, filename only, extraction-time stamp
        assert_eq!(record.raw_text, text);
        assert_eq!(record.source_file, "note.txt");
        assert!(record.extracted_at >= before);
        assert!(record.extracted_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_extract_sends_forced_tool_call_request() {
        let (extractor, provider) = extractor_with(json!({"document_type": "other"}));
        extractor.extract("No medical content here.", "memo.txt").await.unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.tool_name, "extract_medical_info");
        assert!(request.system.contains("medical document analyst"));
        assert!(request.user.contains("No medical content here."));
        assert_eq!(request.max_tokens, ExtractorConfig::default().max_tokens);
        assert_eq!(request.input_schema["required"], json!(["document_type"]));
    }

    #[tokio::test]
    async fn test_no_content_resolves_to_other_with_absent_fields() {
        let (extractor, _) = extractor_with(json!({"document_type": "other"}));
        let record = extractor.extract("Grocery list: milk, eggs.", "list.txt").await.unwrap();

        assert_eq!(record.extraction.document_type, DocumentType::Other);
        assert_eq!(record.extraction.chief_complaint, None);
        assert_eq!(record.extraction.assessment, None);
        assert!(record.extraction.diagnoses.is_empty());
        assert!(record.extraction.medications.is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_is_hard_error_without_retry() {
        let provider = MockProvider::failing("connection reset by peer");
        let extractor = Extractor::new(provider.clone(), ExtractorConfig::default());

        let err = extractor.extract("text", "note.txt").await.unwrap_err();
        assert!(matches!(err, ExtractorError::Provider(_)));
        // exactly one attempt
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_payload_is_validation_error() {
        let (extractor, provider) = extractor_with(json!({"document_type": "progress_note"}));

        let err = extractor.extract("text", "note.txt").await.unwrap_err();
        match err {
            ExtractorError::Validation(SchemaValidationError::UnknownDocumentType(v)) => {
                assert_eq!(v, "progress_note");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_diagnosis_order_preserved_from_payload() {
        let (extractor, _) = extractor_with(json!({
            "document_type": "discharge_summary",
            "diagnoses": [
                {"description": "Pneumonia", "icd_code": "J18.9"},
                {"description": "Type 2 diabetes"},
                {"description": "Hypertension", "icd_code": "I10"}
            ]
        }));

        let record = extractor.extract("...", "discharge.txt").await.unwrap();
        let descriptions: Vec<_> = record
            .extraction
            .diagnoses
            .iter()
            .map(|d| d.description.as_str())
            .collect();
        assert_eq!(descriptions, ["Pneumonia", "Type 2 diabetes", "Hypertension"]);
    }
}
