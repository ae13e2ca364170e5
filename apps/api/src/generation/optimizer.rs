//! Résumé optimization — the model rewrites the body, the contact header is
//! re-attached locally from the extracted `CandidateContact`.

use tracing::error;

use crate::errors::AppError;
use crate::extraction::CandidateContact;
use crate::generation::prompts::{OPTIMIZE_PROMPT_TEMPLATE, OPTIMIZE_SYSTEM};
use crate::llm_client::TextGenerator;

/// Stable user-facing message for a failed résumé optimization.
pub const OPTIMIZE_FAILED: &str = "Resume optimization failed. Please try again.";

/// Rewrites the résumé body for the target job. The prompt instructs the
/// model to leave the contact header out; callers re-attach it via
/// [`assemble_optimized_resume`].
pub async fn optimize_resume(
    jd_text: &str,
    resume_text: &str,
    llm: &dyn TextGenerator,
) -> Result<String, AppError> {
    let prompt = OPTIMIZE_PROMPT_TEMPLATE
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text);

    llm.generate(&prompt, OPTIMIZE_SYSTEM)
        .await
        .map(|text| text.trim().to_string())
        .map_err(|e| {
            error!("resume optimization failed: {e}");
            AppError::Llm(OPTIMIZE_FAILED.to_string())
        })
}

/// Prepends the locally rendered contact header to the model's body.
/// Without a contact (or with an all-empty one) the body stands alone.
pub fn assemble_optimized_resume(contact: Option<&CandidateContact>, body: &str) -> String {
    match contact.map(CandidateContact::header) {
        Some(header) if !header.is_empty() => format!("{header}\n\n{body}"),
        _ => body.to_string(),
    }
}
