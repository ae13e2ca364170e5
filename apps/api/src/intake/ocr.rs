//! Remote OCR client for scanned PDFs.
//!
//! The heavy lifting happens in a hosted OCR service; this is a thin typed
//! client over its single "recognize" operation. Carried in `AppState` as
//! `Arc<dyn OcrEngine>` so tests can plug in a fake engine.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::intake::IntakeError;

/// OCR requests get a longer budget than LLM calls; scanned multi-page
/// documents are slow to process.
const OCR_TIMEOUT_SECS: u64 = 180;

/// Seam over the OCR backend.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Runs OCR over a PDF and returns the recognized plain text.
    async fn recognize(&self, pdf_bytes: &[u8]) -> Result<String, IntakeError>;
}

#[derive(Debug, Deserialize)]
struct OcrResponse {
    text: String,
}

/// Client for a hosted OCR service exposing `POST {base_url}/ocr` taking raw
/// PDF bytes and returning `{"text": "..."}`.
#[derive(Clone)]
pub struct RemoteOcr {
    client: Client,
    base_url: String,
}

impl RemoteOcr {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(OCR_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl OcrEngine for RemoteOcr {
    async fn recognize(&self, pdf_bytes: &[u8]) -> Result<String, IntakeError> {
        let url = format!("{}/ocr", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/pdf")
            .body(pdf_bytes.to_vec())
            .send()
            .await
            .map_err(|e| IntakeError::Ocr(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntakeError::Ocr(format!(
                "OCR service returned {status}: {body}"
            )));
        }

        let parsed: OcrResponse = response
            .json()
            .await
            .map_err(|e| IntakeError::Ocr(e.to_string()))?;

        debug!("OCR succeeded: {} chars recognized", parsed.text.len());
        Ok(parsed.text)
    }
}
