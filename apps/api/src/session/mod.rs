//! Session state — the application controller's data model.
//!
//! Everything lives in memory and vanishes on restart. A session tracks the
//! two user inputs (résumé text, job description), the two background
//! enrichment results (contact, job posting), the three generated artifacts,
//! and the flags that drive button enablement in the UI.
//!
//! Flag discipline: all mutations happen under the store's mutex, the
//! in-process analogue of the single-threaded event loop the flow was
//! designed for. Each input class carries a monotonically increasing
//! sequence number; a background task that finishes after its sequence
//! number has been superseded discards its result.

pub mod controller;
pub mod handlers;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{CandidateContact, JobPosting};
use crate::generation::ats::AtsReport;
use crate::generation::GeneratedArtifact;

/// The three primary user actions. At most one is in flight at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    CoverLetter,
    AtsReport,
    OptimizeResume,
}

/// Lifecycle of the most recent primary action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// One user's in-memory working state.
#[derive(Debug, Default)]
pub struct Session {
    pub resume_text: String,
    pub resume_filename: Option<String>,
    pub job_description: String,

    pub contact: Option<CandidateContact>,
    pub job_posting: Option<JobPosting>,

    /// Background enrichment flags. On while the corresponding extraction
    /// call is outstanding for the current input.
    pub extracting_contact: bool,
    pub extracting_job_info: bool,

    /// Fencing sequence numbers, one per input class. Bumped whenever the
    /// input changes; completions tagged with an older number are stale.
    pub contact_seq: u64,
    pub job_info_seq: u64,

    /// On while an uploaded file is being turned into text.
    pub processing_file: bool,

    /// The single flag covering all three primary-action buttons.
    pub active_action: Option<ActionKind>,
    pub action_phase: ActionPhase,

    pub cover_letter: Option<GeneratedArtifact>,
    pub ats_report: Option<AtsReport>,
    pub optimized_resume: Option<GeneratedArtifact>,

    /// Once-per-cycle latches. Set after a successful run, re-armed when a
    /// new cover letter is generated.
    pub ats_done: bool,
    pub optimize_done: bool,

    /// Session-level error message, shown in the UI banner.
    pub error: Option<String>,
}

impl Session {
    /// The generate button's biconditional: enabled iff nothing is in
    /// flight, both texts are present, and both extractions have resolved.
    pub fn can_generate_cover_letter(&self) -> bool {
        self.active_action.is_none()
            && !self.processing_file
            && !self.job_description.trim().is_empty()
            && !self.resume_text.trim().is_empty()
            && self.contact.is_some()
            && self.job_posting.is_some()
    }

    pub fn can_analyze_ats(&self) -> bool {
        self.active_action.is_none() && self.cover_letter.is_some() && !self.ats_done
    }

    pub fn can_optimize_resume(&self) -> bool {
        self.active_action.is_none() && self.cover_letter.is_some() && !self.optimize_done
    }

    /// A new upload invalidates everything derived from the previous résumé.
    /// Bumping `contact_seq` here fences off any extraction still in flight
    /// for the old file.
    pub fn clear_for_new_upload(&mut self) {
        self.resume_text.clear();
        self.resume_filename = None;
        self.contact = None;
        self.extracting_contact = false;
        self.contact_seq += 1;
        self.cover_letter = None;
        self.ats_report = None;
        self.optimized_resume = None;
        self.ats_done = false;
        self.optimize_done = false;
        self.action_phase = ActionPhase::Idle;
        self.error = None;
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            resume_text: self.resume_text.clone(),
            resume_filename: self.resume_filename.clone(),
            job_description: self.job_description.clone(),
            contact: self.contact.clone(),
            job_posting: self.job_posting.clone(),
            extracting_contact: self.extracting_contact,
            extracting_job_info: self.extracting_job_info,
            processing_file: self.processing_file,
            active_action: self.active_action,
            action_phase: self.action_phase,
            cover_letter: self.cover_letter.clone(),
            ats_report: self.ats_report.clone(),
            optimized_resume: self.optimized_resume.clone(),
            can_generate_cover_letter: self.can_generate_cover_letter(),
            can_analyze_ats: self.can_analyze_ats(),
            can_optimize_resume: self.can_optimize_resume(),
            error: self.error.clone(),
        }
    }
}

/// Serializable snapshot returned by every endpoint so the UI can render
/// panels and button enablement without computing any rules itself.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub resume_text: String,
    pub resume_filename: Option<String>,
    pub job_description: String,
    pub contact: Option<CandidateContact>,
    pub job_posting: Option<JobPosting>,
    pub extracting_contact: bool,
    pub extracting_job_info: bool,
    pub processing_file: bool,
    pub active_action: Option<ActionKind>,
    pub action_phase: ActionPhase,
    pub cover_letter: Option<GeneratedArtifact>,
    pub ats_report: Option<AtsReport>,
    pub optimized_resume: Option<GeneratedArtifact>,
    pub can_generate_cover_letter: bool,
    pub can_analyze_ats: bool,
    pub can_optimize_resume: bool,
    pub error: Option<String>,
}

/// In-memory session registry shared across handlers and background tasks.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.lock().insert(id, Session::default());
        id
    }

    /// Runs `f` with exclusive access to the session. The critical section
    /// must stay synchronous; never hold this across an await point.
    pub fn with<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> Result<R, AppError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        Ok(f(session))
    }

    pub fn view(&self, id: Uuid) -> Result<SessionView, AppError> {
        self.with(id, |s| s.view())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Session>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
