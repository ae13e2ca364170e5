use anyhow::{Context, Result};

/// Default quiet period before a settled job description triggers extraction.
pub const DEFAULT_JD_DEBOUNCE_MS: u64 = 800;

/// Application configuration loaded from environment variables.
/// The only hard requirement is the LLM credential; everything else defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Base URL of the hosted OCR service used for scanned PDFs.
    pub ocr_endpoint: String,
    /// Quiet period (ms) before a settled job description triggers extraction.
    pub jd_debounce_ms: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            ocr_endpoint: std::env::var("OCR_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            jd_debounce_ms: std::env::var("JD_DEBOUNCE_MS")
                .ok()
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("JD_DEBOUNCE_MS must be a number of milliseconds")?
                .unwrap_or(DEFAULT_JD_DEBOUNCE_MS),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
