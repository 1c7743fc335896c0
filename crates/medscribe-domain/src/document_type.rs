//! Document type classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of categories a document can be classified as.
///
/// The snake_case string forms are part of the persisted JSON contract and
/// of the schema handed to the extraction collaborator; they must remain
/// stable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Office visit, consultation, or clinical encounter notes
    VisitNote,
    /// Laboratory test results
    LabResult,
    /// Hospital discharge documentation
    DischargeSummary,
    /// Medication prescriptions
    Prescription,
    /// Referral letters to specialists
    Referral,
    /// X-ray, MRI, CT scan reports
    ImagingReport,
    /// Any other medical document type
    Other,
}

impl DocumentType {
    /// All variants, in the order presented to the extraction collaborator.
    pub const ALL: [DocumentType; 7] = [
        DocumentType::VisitNote,
        DocumentType::LabResult,
        DocumentType::DischargeSummary,
        DocumentType::Prescription,
        DocumentType::Referral,
        DocumentType::ImagingReport,
        DocumentType::Other,
    ];

    /// One-line description used in the extraction prompt's glossary.
    pub fn description(&self) -> &'static str {
        match self {
            DocumentType::VisitNote => "Office visit, consultation, or clinical encounter notes",
            DocumentType::LabResult => "Laboratory test results",
            DocumentType::DischargeSummary => "Hospital discharge documentation",
            DocumentType::Prescription => "Medication prescriptions",
            DocumentType::Referral => "Referral letters to specialists",
            DocumentType::ImagingReport => "X-ray, MRI, CT scan reports",
            DocumentType::Other => "Any other medical document type",
        }
    }

    /// The stable snake_case string form.
    ///
    /// # Examples
    ///
    /// ```
    /// use medscribe_domain::DocumentType;
    ///
    /// assert_eq!(DocumentType::VisitNote.as_str(), "visit_note");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::VisitNote => "visit_note",
            DocumentType::LabResult => "lab_result",
            DocumentType::DischargeSummary => "discharge_summary",
            DocumentType::Prescription => "prescription",
            DocumentType::Referral => "referral",
            DocumentType::ImagingReport => "imaging_report",
            DocumentType::Other => "other",
        }
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown document type: {}", s))
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_str() {
        for ty in DocumentType::ALL {
            assert_eq!(ty.as_str().parse::<DocumentType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_every_variant_has_a_distinct_description() {
        let descriptions: std::collections::HashSet<_> =
            DocumentType::ALL.iter().map(|t| t.description()).collect();
        assert_eq!(descriptions.len(), DocumentType::ALL.len());
        assert!(descriptions.iter().all(|d| !d.is_empty()));
    }

    #[test]
    fn test_rejects_unknown_value() {
        assert!("clinic_note".parse::<DocumentType>().is_err());
        assert!("".parse::<DocumentType>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&DocumentType::DischargeSummary).unwrap();
        assert_eq!(json, "\"discharge_summary\"");

        let parsed: DocumentType = serde_json::from_str("\"imaging_report\"").unwrap();
        assert_eq!(parsed, DocumentType::ImagingReport);
    }
}
