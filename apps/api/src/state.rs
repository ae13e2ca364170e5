use std::sync::Arc;

use crate::config::Config;
use crate::intake::OcrEngine;
use crate::llm_client::TextGenerator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both external services sit behind traits so tests can run the whole
/// controller against fakes: `TextGenerator` for the LLM, `OcrEngine` for
/// scanned-PDF recognition.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn TextGenerator>,
    pub ocr: Arc<dyn OcrEngine>,
    pub sessions: SessionStore,
    pub config: Config,
}
