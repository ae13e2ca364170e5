//! File intake — turns an uploaded file into plain résumé text.
//!
//! `.txt` and `.md` decode as UTF-8. `.pdf` goes through the text layer
//! first (`pdf-extract`); when that yields fewer than
//! [`OCR_FALLBACK_MIN_CHARS`] characters the document is treated as scanned
//! and handed to the OCR engine. Any failure here halts the upload pipeline:
//! no contact extraction runs on a file that did not produce text.

pub mod ocr;

use thiserror::Error;
use tracing::info;

pub use ocr::{OcrEngine, RemoteOcr};

/// A digital PDF's text layer is expected to clear this easily; anything
/// shorter is treated as a scanned document and sent to OCR.
pub const OCR_FALLBACK_MIN_CHARS: usize = 100;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Unsupported file type '{0}'. Upload a .txt, .md, or .pdf file.")]
    UnsupportedType(String),

    #[error("The file is not valid UTF-8 text: {0}")]
    Encoding(String),

    #[error("Could not read the PDF: {0}")]
    Pdf(String),

    #[error("OCR failed: {0}")]
    Ocr(String),
}

/// True when the PDF text layer is too thin to trust — the binary decision
/// point between the digital-PDF and scanned-PDF handling paths.
pub fn needs_ocr(text_layer: &str) -> bool {
    text_layer.trim().chars().count() < OCR_FALLBACK_MIN_CHARS
}

/// Extracts plain text from an uploaded file.
pub async fn extract_document_text(
    filename: &str,
    bytes: &[u8],
    ocr: &dyn OcrEngine,
) -> Result<String, IntakeError> {
    match extension_of(filename).as_str() {
        "txt" | "md" => String::from_utf8(bytes.to_vec())
            .map_err(|e| IntakeError::Encoding(e.to_string())),
        "pdf" => extract_pdf_text(bytes, ocr).await,
        other => Err(IntakeError::UnsupportedType(other.to_string())),
    }
}

async fn extract_pdf_text(bytes: &[u8], ocr: &dyn OcrEngine) -> Result<String, IntakeError> {
    let text_layer =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| IntakeError::Pdf(e.to_string()))?;

    if !needs_ocr(&text_layer) {
        info!("PDF text layer accepted ({} chars)", text_layer.len());
        return Ok(text_layer);
    }

    info!(
        "PDF text layer too short ({} chars), falling back to OCR",
        text_layer.trim().len()
    );
    ocr.recognize(bytes).await
}

fn extension_of(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}
