// Generation — the three primary user actions.
// Cover letter, ATS compatibility report, optimized résumé body.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod ats;
pub mod cover_letter;
pub mod optimizer;
pub mod prompts;

use serde::Serialize;

/// An opaque generated text blob with a display title.
/// Rendered in a result panel and copyable as-is.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArtifact {
    pub title: String,
    pub body: String,
}
