//! Prompt construction for the extraction collaborator
//!
//! The system instruction constrains extraction to explicitly stated
//! facts: nothing inferred, ISO dates, terminology preserved as written.
//! The document-type glossary is generated from the enumeration so the
//! prompt can never drift from the schema.

use medscribe_domain::DocumentType;

const SYSTEM_INSTRUCTIONS: &str = r#"You are a medical document analyst. Your task is to extract structured information from medical documents.

Guidelines:
- Extract only information that is explicitly stated in the document
- Do not infer or assume information that isn't present
- If a field cannot be determined from the document, leave it as null
- For dates, use ISO format (YYYY-MM-DD)
- For ICD codes, only include if explicitly mentioned
- Be precise with medication dosages and frequencies as written
- Preserve medical terminology as used in the document"#;

/// Build the fixed system instruction, including the document-type glossary.
pub fn system_prompt() -> String {
    let mut prompt = String::from(SYSTEM_INSTRUCTIONS);
    prompt.push_str("\n\nDocument types:\n");
    for ty in DocumentType::ALL {
        prompt.push_str(&format!("- {}: {}\n", ty.as_str(), ty.description()));
    }
    prompt
}

/// Build the user turn embedding the document text.
pub fn user_prompt(text: &str) -> String {
    format!(
        "Extract the medical information from the following document.\n\n\
         <document>\n{}\n</document>\n\n\
         Extract all relevant medical information according to the schema provided.",
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_forbids_inference() {
        let prompt = system_prompt();
        assert!(prompt.contains("explicitly stated"));
        assert!(prompt.contains("Do not infer"));
        assert!(prompt.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_system_prompt_lists_every_document_type() {
        let prompt = system_prompt();
        for ty in DocumentType::ALL {
            assert!(prompt.contains(ty.as_str()), "missing {}", ty);
        }
    }

    #[test]
    fn test_user_prompt_embeds_document() {
        let prompt = user_prompt("Patient presents with hypertension.");
        assert!(prompt.contains("<document>\nPatient presents with hypertension.\n</document>"));
    }
}
