pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        .route(
            "/api/v1/sessions/:id/resume",
            post(handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/job-description",
            put(handlers::handle_update_job_description),
        )
        .route(
            "/api/v1/sessions/:id/cover-letter",
            post(handlers::handle_generate_cover_letter),
        )
        .route(
            "/api/v1/sessions/:id/ats-report",
            post(handlers::handle_analyze_ats),
        )
        .route(
            "/api/v1/sessions/:id/optimized-resume",
            post(handlers::handle_optimize_resume),
        )
        .with_state(state)
}
