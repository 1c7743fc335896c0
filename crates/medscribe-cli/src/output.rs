//! Human-readable summary output.

use medscribe_domain::MedicalRecord;

/// Format the post-run summary: document type, date and provider when
/// present, and non-zero diagnosis/medication counts.
pub fn format_summary(record: &MedicalRecord) -> String {
    let extraction = &record.extraction;
    let mut lines = vec![
        "Extraction Summary:".to_string(),
        format!("  Document type: {}", extraction.document_type),
    ];

    if let Some(date) = extraction.document_date {
        lines.push(format!("  Date: {}", date));
    }
    if let Some(provider) = &extraction.provider {
        lines.push(format!("  Provider: {}", provider.name));
    }
    if !extraction.diagnoses.is_empty() {
        lines.push(format!("  Diagnoses: {}", extraction.diagnoses.len()));
    }
    if !extraction.medications.is_empty() {
        lines.push(format!("  Medications: {}", extraction.medications.len()));
    }

    lines.join("\n")
}
