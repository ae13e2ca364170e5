//! Axum route handlers for the session API.
//!
//! Handlers stay thin: unpack the request, call the controller, return the
//! refreshed `SessionView` so the UI can re-render from one payload.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::{controller, SessionView};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub session: SessionView,
}

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CoverLetterRequest {
    pub subject_line: Option<String>,
    pub hiring_manager_name: Option<String>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let session_id = state.sessions.create();
    let session = state.sessions.view(session_id)?;
    Ok(Json(CreateSessionResponse {
        session_id,
        session,
    }))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.sessions.view(session_id)?))
}

/// POST /api/v1/sessions/:id/resume
///
/// Multipart upload with a single `file` field (.txt, .md, or .pdf).
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SessionView>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .ok_or_else(|| AppError::Validation("The 'file' part needs a filename".to_string()))?
            .to_string();
        let bytes: bytes::Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        let view = controller::upload_resume(
            &state.sessions,
            state.llm.clone(),
            state.ocr.as_ref(),
            session_id,
            &filename,
            &bytes,
        )
        .await?;
        return Ok(Json(view));
    }

    Err(AppError::Validation(
        "Multipart body must contain a 'file' field".to_string(),
    ))
}

/// PUT /api/v1/sessions/:id/job-description
pub async fn handle_update_job_description(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = controller::update_job_description(
        &state.sessions,
        state.llm.clone(),
        state.config.jd_debounce_ms,
        session_id,
        request.text,
    )?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/cover-letter
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Option<Json<CoverLetterRequest>>,
) -> Result<Json<SessionView>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let view = controller::generate_cover_letter(
        &state.sessions,
        state.llm.clone(),
        session_id,
        request.subject_line,
        request.hiring_manager_name,
        Local::now().date_naive(),
    )
    .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/ats-report
pub async fn handle_analyze_ats(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = controller::analyze_ats(&state.sessions, state.llm.clone(), session_id).await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/optimized-resume
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = controller::optimize_resume(&state.sessions, state.llm.clone(), session_id).await?;
    Ok(Json(view))
}
