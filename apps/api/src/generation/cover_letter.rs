//! Cover-letter generation — deterministic prompt assembly, one LLM call.

use chrono::NaiveDate;
use tracing::error;

use crate::errors::AppError;
use crate::extraction::JobPosting;
use crate::generation::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};
use crate::llm_client::TextGenerator;

/// Stable user-facing message for a failed cover-letter generation.
pub const COVER_LETTER_FAILED: &str =
    "Cover letter generation failed. Please try again.";

/// Known hiring manager → personal greeting; unknown → generic.
pub fn salutation(manager_name: &str) -> String {
    let manager_name = manager_name.trim();
    if manager_name.is_empty() {
        "Dear Hiring Manager,".to_string()
    } else {
        format!("Dear {manager_name},")
    }
}

/// Subject line used when the caller does not supply one.
pub fn default_subject_line(job: &JobPosting) -> String {
    match (job.role.is_empty(), job.company.is_empty()) {
        (false, false) => format!("Application for {} at {}", job.role, job.company),
        (false, true) => format!("Application for {}", job.role),
        _ => "Job Application".to_string(),
    }
}

/// Assembles the full cover-letter prompt. Pure: the date is a parameter so
/// callers pass "today" and tests pass a fixed day.
pub fn build_cover_letter_prompt(
    jd_text: &str,
    resume_text: &str,
    candidate_name: &str,
    subject_line: &str,
    manager_name: &str,
    today: NaiveDate,
) -> String {
    let date_line = today.format("%B %d, %Y").to_string();
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{date_line}", &date_line)
        .replace("{salutation}", &salutation(manager_name))
        .replace("{subject_line}", subject_line)
        .replace("{candidate_name}", candidate_name)
        .replace("{jd_text}", jd_text)
        .replace("{resume_text}", resume_text)
}

/// Generates a cover letter. Unconstrained text output, single request.
#[allow(clippy::too_many_arguments)]
pub async fn generate_cover_letter(
    jd_text: &str,
    resume_text: &str,
    candidate_name: &str,
    subject_line: &str,
    manager_name: &str,
    today: NaiveDate,
    llm: &dyn TextGenerator,
) -> Result<String, AppError> {
    let prompt = build_cover_letter_prompt(
        jd_text,
        resume_text,
        candidate_name,
        subject_line,
        manager_name,
        today,
    );
    llm.generate(&prompt, COVER_LETTER_SYSTEM)
        .await
        .map(|text| text.trim().to_string())
        .map_err(|e| {
            error!("cover letter generation failed: {e}");
            AppError::Llm(COVER_LETTER_FAILED.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn test_salutation_with_known_manager() {
        assert_eq!(salutation("Avery Chen"), "Dear Avery Chen,");
    }

    #[test]
    fn test_salutation_without_manager_is_generic() {
        assert_eq!(salutation(""), "Dear Hiring Manager,");
        assert_eq!(salutation("   "), "Dear Hiring Manager,");
    }

    #[test]
    fn test_default_subject_line_variants() {
        let full = JobPosting {
            role: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            hiring_manager_name: String::new(),
        };
        assert_eq!(
            default_subject_line(&full),
            "Application for Backend Engineer at Acme"
        );

        let role_only = JobPosting {
            role: "Backend Engineer".to_string(),
            ..Default::default()
        };
        assert_eq!(
            default_subject_line(&role_only),
            "Application for Backend Engineer"
        );

        assert_eq!(default_subject_line(&JobPosting::default()), "Job Application");
    }

    #[test]
    fn test_prompt_interpolates_date_and_salutation() {
        let prompt = build_cover_letter_prompt(
            "jd body",
            "resume body",
            "Jane Doe",
            "Application for Backend Engineer at Acme",
            "Avery Chen",
            fixed_day(),
        );
        assert!(prompt.contains("August 30, 2026"));
        assert!(prompt.contains("Dear Avery Chen,"));
        assert!(prompt.contains("Jane Doe"));
        assert!(!prompt.contains("{date_line}"));
        assert!(!prompt.contains("{salutation}"));
    }

    #[test]
    fn test_prompt_embeds_user_text_inside_delimited_sections() {
        let prompt = build_cover_letter_prompt(
            "the jd text",
            "the resume text",
            "Jane",
            "subject",
            "",
            fixed_day(),
        );
        let jd_start = prompt.find("=== JOB DESCRIPTION START ===").unwrap();
        let jd_end = prompt.find("=== JOB DESCRIPTION END ===").unwrap();
        let jd_body = prompt.find("the jd text").unwrap();
        assert!(jd_start < jd_body && jd_body < jd_end);

        let resume_start = prompt.find("=== RESUME TEXT START ===").unwrap();
        let resume_end = prompt.find("=== RESUME TEXT END ===").unwrap();
        let resume_body = prompt.find("the resume text").unwrap();
        assert!(resume_start < resume_body && resume_body < resume_end);
    }
}
