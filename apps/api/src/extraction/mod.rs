//! Background enrichment — structured field extraction from free text.
//!
//! Two tasks, same shape: embed the user's text in a delimited prompt, ask
//! for a fixed JSON field set, parse the reply. Failures are logged with the
//! underlying cause and surfaced to the client as a stable task-specific
//! message, never a raw provider error.

pub mod models;
pub mod prompts;

use tracing::error;

use crate::errors::AppError;
use crate::llm_client::{generate_json, TextGenerator};

pub use models::{CandidateContact, JobPosting};

/// Stable user-facing message for a failed contact extraction.
pub const CONTACT_EXTRACTION_FAILED: &str =
    "Could not extract contact details from the resume. You can still edit your inputs and retry.";

/// Stable user-facing message for a failed job-info extraction.
pub const JOB_INFO_EXTRACTION_FAILED: &str =
    "Could not extract job details from the description. Edit the text to retry.";

/// Extracts the candidate's contact block from résumé text.
/// All five fields come back as strings, possibly empty.
pub async fn extract_contact(
    resume_text: &str,
    llm: &dyn TextGenerator,
) -> Result<CandidateContact, AppError> {
    let prompt =
        prompts::CONTACT_EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    generate_json::<CandidateContact>(llm, &prompt, prompts::CONTACT_EXTRACT_SYSTEM)
        .await
        .map_err(|e| {
            error!("contact extraction failed: {e}");
            AppError::Llm(CONTACT_EXTRACTION_FAILED.to_string())
        })
}

/// Extracts role / company / hiring manager from job-description text.
pub async fn extract_job_info(
    jd_text: &str,
    llm: &dyn TextGenerator,
) -> Result<JobPosting, AppError> {
    let prompt = prompts::JOB_INFO_EXTRACT_PROMPT_TEMPLATE.replace("{jd_text}", jd_text);
    generate_json::<JobPosting>(llm, &prompt, prompts::JOB_INFO_EXTRACT_SYSTEM)
        .await
        .map_err(|e| {
            error!("job-info extraction failed: {e}");
            AppError::Llm(JOB_INFO_EXTRACTION_FAILED.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    /// A provider that echoes the fields it finds in the embedded resume
    /// verbatim, like the ideal extraction backend.
    struct EchoProvider;

    #[async_trait]
    impl TextGenerator for EchoProvider {
        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            assert!(prompt.contains("=== RESUME TEXT START ==="));
            Ok(r#"{
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-1212",
                "address": "123 Main St",
                "linkedin": "linkedin.com/in/janedoe"
            }"#
            .to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl TextGenerator for FailingProvider {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    struct SparseProvider;

    #[async_trait]
    impl TextGenerator for SparseProvider {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok("{\"role\": \"Backend Engineer\"}".to_string())
        }
    }

    #[tokio::test]
    async fn test_contact_extraction_echo_scenario() {
        let resume = "Jane Doe, jane@x.com, 555-1212, 123 Main St, linkedin.com/in/janedoe";
        let contact = extract_contact(resume, &EchoProvider).await.unwrap();
        assert_eq!(
            contact,
            CandidateContact {
                name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                phone: "555-1212".to_string(),
                address: "123 Main St".to_string(),
                linkedin: "linkedin.com/in/janedoe".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_contact_extraction_failure_uses_stable_message() {
        let err = extract_contact("anything", &FailingProvider)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), CONTACT_EXTRACTION_FAILED);
    }

    #[tokio::test]
    async fn test_job_info_missing_fields_become_empty_strings() {
        let posting = extract_job_info("Backend Engineer role", &SparseProvider)
            .await
            .unwrap();
        assert_eq!(posting.role, "Backend Engineer");
        assert_eq!(posting.company, "");
        assert_eq!(posting.hiring_manager_name, "");
    }

    #[tokio::test]
    async fn test_job_info_failure_uses_stable_message() {
        let err = extract_job_info("anything", &FailingProvider)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), JOB_INFO_EXTRACTION_FAILED);
    }
}
