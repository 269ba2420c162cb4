use serde::{Deserialize, Serialize};

/// Maximum characters the server accepts per request. The client only
/// displays the count; the server enforces the cap.
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Language codes offered by the generation form.
pub const LANGUAGES: &[&str] = &["en", "es", "fr", "de", "hi", "it", "pt", "ja"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
    pub lang: String,
}

/// Body of a `/generate-audio` response. Every field is optional: non-2xx
/// responses usually carry only `error`, and a 2xx body may itself carry
/// `error` as a display-level failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub audio_url: Option<String>,
    pub remaining_credits: Option<i64>,
    pub history: Option<Vec<HistoryEntry>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text_preview: String,
    pub lang: Option<String>,
    pub timestamp: Option<String>,
    pub audio_url: String,
}
