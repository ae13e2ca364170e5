//! ATS scoring — simulated applicant-tracking-system match report.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::generation::prompts::{ATS_SCORE_PROMPT_TEMPLATE, ATS_SCORE_SYSTEM};
use crate::llm_client::{generate_json, TextGenerator};

/// Stable user-facing message for a failed ATS analysis.
pub const ATS_UNAVAILABLE: &str = "ATS analysis is unavailable right now. Please try again.";

/// Match report for a résumé against a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    /// 0–100 inclusive. Clamped after parsing in case the model strays.
    pub score: f32,
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub suggestions: String,
}

/// Scores the résumé against the job description. JSON-constrained, one call.
pub async fn score_against_job(
    jd_text: &str,
    resume_text: &str,
    llm: &dyn TextGenerator,
) -> Result<AtsReport, AppError> {
    let prompt = ATS_SCORE_PROMPT_TEMPLATE
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text);

    let mut report = generate_json::<AtsReport>(llm, &prompt, ATS_SCORE_SYSTEM)
        .await
        .map_err(|e| {
            error!("ATS scoring failed: {e}");
            AppError::Llm(ATS_UNAVAILABLE.to_string())
        })?;

    report.score = report.score.clamp(0.0, 100.0);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct CannedProvider(&'static str);

    #[async_trait]
    impl TextGenerator for CannedProvider {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_score_parses_report() {
        let llm = CannedProvider(
            r#"{"score": 72, "strengths": "Good keyword match", "suggestions": "Add metrics"}"#,
        );
        let report = score_against_job("jd", "resume", &llm).await.unwrap();
        assert_eq!(report.score, 72.0);
        assert_eq!(report.strengths, "Good keyword match");
        assert_eq!(report.suggestions, "Add metrics");
    }

    #[tokio::test]
    async fn test_score_is_clamped_to_valid_range() {
        let llm = CannedProvider(r#"{"score": 140, "strengths": "", "suggestions": ""}"#);
        let report = score_against_job("jd", "resume", &llm).await.unwrap();
        assert_eq!(report.score, 100.0);

        let llm = CannedProvider(r#"{"score": -3, "strengths": "", "suggestions": ""}"#);
        let report = score_against_job("jd", "resume", &llm).await.unwrap();
        assert_eq!(report.score, 0.0);
    }

    #[tokio::test]
    async fn test_unparseable_reply_uses_stable_message() {
        let llm = CannedProvider("I scored it an 80 out of 100!");
        let err = score_against_job("jd", "resume", &llm).await.unwrap_err();
        assert_eq!(err.to_string(), ATS_UNAVAILABLE);
    }
}
