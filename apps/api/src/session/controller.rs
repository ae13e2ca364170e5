//! The application controller — explicit async operations over session state.
//!
//! Each operation locks the store, flips flags, snapshots its inputs, and
//! releases the lock before awaiting anything. Background enrichment
//! (contact, job info) runs in spawned tasks tagged with a sequence number;
//! the job-description path is additionally debounced so rapid edits
//! coalesce into one request after the quiet period.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{self, CandidateContact, JobPosting};
use crate::generation::ats::{self, AtsReport};
use crate::generation::cover_letter::{self, default_subject_line};
use crate::generation::optimizer;
use crate::generation::GeneratedArtifact;
use crate::intake::{self, OcrEngine};
use crate::llm_client::TextGenerator;
use crate::session::{ActionKind, ActionPhase, SessionStore, SessionView};

/// Guard message when a primary action is requested while another is running.
pub const ACTION_IN_FLIGHT: &str = "Another action is already running. Wait for it to finish.";

/// Guard message when the cover-letter preconditions are not met.
pub const GENERATE_NOT_READY: &str =
    "Cover letter generation needs a resume, a job description, and both extractions to finish.";

/// Guard message for the secondary actions before any letter exists.
pub const NEEDS_COVER_LETTER: &str = "Generate a cover letter first.";

/// Guard message when a once-per-cycle action already ran.
pub const ALREADY_COMPLETED: &str =
    "Already completed for this cover letter. Generate a new one to run it again.";

/// Handles a file upload: clears downstream state, extracts text, then kicks
/// off contact extraction in the background.
///
/// An intake failure halts the pipeline here — no contact extraction is
/// attempted, and the message (which embeds the underlying error) lands in
/// the session banner as well as the response.
pub async fn upload_resume(
    store: &SessionStore,
    llm: Arc<dyn TextGenerator>,
    ocr: &dyn OcrEngine,
    session_id: Uuid,
    filename: &str,
    bytes: &[u8],
) -> Result<SessionView, AppError> {
    store.with(session_id, |s| {
        s.processing_file = true;
        s.clear_for_new_upload();
    })?;

    let text = match intake::extract_document_text(filename, bytes, ocr).await {
        Ok(text) => text,
        Err(e) => {
            let message = e.to_string();
            store.with(session_id, |s| {
                s.processing_file = false;
                s.error = Some(message.clone());
            })?;
            return Err(AppError::Intake(message));
        }
    };

    info!("extracted {} chars from '{filename}'", text.len());

    let seq = store.with(session_id, |s| {
        s.resume_text = text.clone();
        s.resume_filename = Some(filename.to_string());
        s.processing_file = false;
        s.extracting_contact = true;
        s.contact_seq += 1;
        s.contact_seq
    })?;

    let store_bg = store.clone();
    tokio::spawn(async move {
        let result = extraction::extract_contact(&text, llm.as_ref()).await;
        let _ = store_bg.with(session_id, |s| {
            if s.contact_seq != seq {
                debug!("discarding stale contact extraction (seq {seq})");
                return;
            }
            s.extracting_contact = false;
            match result {
                Ok(contact) => s.contact = Some(contact),
                Err(e) => s.error = Some(e.to_string()),
            }
        });
    });

    store.view(session_id)
}

/// Records a job-description edit and schedules the debounced job-info
/// extraction. The stale `JobPosting` is cleared immediately: it described
/// the previous text.
///
/// Coalescing: every edit bumps `job_info_seq` and spawns a task that sleeps
/// the quiet period; on waking, a task whose sequence number is no longer
/// the latest simply returns. Exactly one request is issued per settled
/// non-empty input.
pub fn update_job_description(
    store: &SessionStore,
    llm: Arc<dyn TextGenerator>,
    debounce_ms: u64,
    session_id: Uuid,
    text: String,
) -> Result<SessionView, AppError> {
    let seq = store.with(session_id, |s| {
        s.job_description = text.clone();
        s.job_posting = None;
        s.extracting_job_info = false;
        s.job_info_seq += 1;
        s.job_info_seq
    })?;

    if !text.trim().is_empty() {
        let store_bg = store.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(debounce_ms)).await;

            // Superseded during the quiet period: a newer edit owns the flow.
            let proceed = store_bg
                .with(session_id, |s| {
                    if s.job_info_seq != seq {
                        return false;
                    }
                    s.extracting_job_info = true;
                    true
                })
                .unwrap_or(false);
            if !proceed {
                return;
            }

            let result = extraction::extract_job_info(&text, llm.as_ref()).await;
            let _ = store_bg.with(session_id, |s| {
                if s.job_info_seq != seq {
                    debug!("discarding stale job-info extraction (seq {seq})");
                    return;
                }
                s.extracting_job_info = false;
                match result {
                    Ok(posting) => s.job_posting = Some(posting),
                    Err(e) => s.error = Some(e.to_string()),
                }
            });
        });
    }

    store.view(session_id)
}

struct CoverLetterInputs {
    jd_text: String,
    resume_text: String,
    contact: CandidateContact,
    posting: JobPosting,
}

/// Runs the cover-letter action. On success the previously computed ATS
/// report and optimized résumé are cleared — they described inputs that this
/// letter has now superseded — and both once-per-cycle latches re-arm.
pub async fn generate_cover_letter(
    store: &SessionStore,
    llm: Arc<dyn TextGenerator>,
    session_id: Uuid,
    subject_line: Option<String>,
    manager_override: Option<String>,
    today: NaiveDate,
) -> Result<SessionView, AppError> {
    let inputs = store.with(session_id, |s| {
        if s.active_action.is_some() {
            return Err(AppError::Conflict(ACTION_IN_FLIGHT.to_string()));
        }
        if !s.can_generate_cover_letter() {
            return Err(AppError::Validation(GENERATE_NOT_READY.to_string()));
        }
        let (Some(contact), Some(posting)) = (s.contact.clone(), s.job_posting.clone()) else {
            return Err(AppError::Validation(GENERATE_NOT_READY.to_string()));
        };
        s.active_action = Some(ActionKind::CoverLetter);
        s.action_phase = ActionPhase::Loading;
        Ok(CoverLetterInputs {
            jd_text: s.job_description.clone(),
            resume_text: s.resume_text.clone(),
            contact,
            posting,
        })
    })??;

    let subject = subject_line
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default_subject_line(&inputs.posting));
    let manager = manager_override
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| inputs.posting.hiring_manager_name.clone());

    let result = cover_letter::generate_cover_letter(
        &inputs.jd_text,
        &inputs.resume_text,
        &inputs.contact.name,
        &subject,
        &manager,
        today,
        llm.as_ref(),
    )
    .await;

    store.with(session_id, |s| {
        s.active_action = None;
        match &result {
            Ok(body) => {
                s.action_phase = ActionPhase::Success;
                s.error = None;
                s.cover_letter = Some(GeneratedArtifact {
                    title: subject.clone(),
                    body: body.clone(),
                });
                // Stale for the new letter: both secondary artifacts reset.
                s.ats_report = None;
                s.optimized_resume = None;
                s.ats_done = false;
                s.optimize_done = false;
            }
            Err(e) => {
                s.action_phase = ActionPhase::Error;
                s.error = Some(e.to_string());
            }
        }
    })?;

    result?;
    store.view(session_id)
}

/// Runs the ATS action. Once per cover-letter cycle.
pub async fn analyze_ats(
    store: &SessionStore,
    llm: Arc<dyn TextGenerator>,
    session_id: Uuid,
) -> Result<SessionView, AppError> {
    let (jd_text, resume_text) = store.with(session_id, |s| {
        guard_secondary_action(s, s.ats_done)?;
        s.active_action = Some(ActionKind::AtsReport);
        s.action_phase = ActionPhase::Loading;
        Ok::<_, AppError>((s.job_description.clone(), s.resume_text.clone()))
    })??;

    let result = ats::score_against_job(&jd_text, &resume_text, llm.as_ref()).await;

    store.with(session_id, |s| {
        s.active_action = None;
        match &result {
            Ok(report) => {
                s.action_phase = ActionPhase::Success;
                s.error = None;
                s.ats_report = Some(report.clone());
                s.ats_done = true;
            }
            Err(e) => {
                s.action_phase = ActionPhase::Error;
                s.error = Some(e.to_string());
            }
        }
    })?;

    result.map(|_: AtsReport| ())?;
    store.view(session_id)
}

/// Runs the optimize-CV action. The model returns the body only; the contact
/// header is re-attached here from the extracted `CandidateContact`.
pub async fn optimize_resume(
    store: &SessionStore,
    llm: Arc<dyn TextGenerator>,
    session_id: Uuid,
) -> Result<SessionView, AppError> {
    let (jd_text, resume_text, contact) = store.with(session_id, |s| {
        guard_secondary_action(s, s.optimize_done)?;
        s.active_action = Some(ActionKind::OptimizeResume);
        s.action_phase = ActionPhase::Loading;
        Ok::<_, AppError>((
            s.job_description.clone(),
            s.resume_text.clone(),
            s.contact.clone(),
        ))
    })??;

    let result = optimizer::optimize_resume(&jd_text, &resume_text, llm.as_ref()).await;

    store.with(session_id, |s| {
        s.active_action = None;
        match &result {
            Ok(body) => {
                let assembled = optimizer::assemble_optimized_resume(contact.as_ref(), body);
                s.action_phase = ActionPhase::Success;
                s.error = None;
                s.optimized_resume = Some(GeneratedArtifact {
                    title: "Optimized Resume".to_string(),
                    body: assembled,
                });
                s.optimize_done = true;
            }
            Err(e) => {
                s.action_phase = ActionPhase::Error;
                s.error = Some(e.to_string());
            }
        }
    })?;

    result.map(|_| ())?;
    store.view(session_id)
}

fn guard_secondary_action(s: &crate::session::Session, latch: bool) -> Result<(), AppError> {
    if s.active_action.is_some() {
        return Err(AppError::Conflict(ACTION_IN_FLIGHT.to_string()));
    }
    if s.cover_letter.is_none() {
        return Err(AppError::Validation(NEEDS_COVER_LETTER.to_string()));
    }
    if latch {
        return Err(AppError::Conflict(ALREADY_COMPLETED.to_string()));
    }
    Ok(())
}
