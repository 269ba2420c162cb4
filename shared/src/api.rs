use bytes::Bytes;
use thiserror::Error;

use crate::types::{GenerateRequest, GenerateResponse};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Invalid JSON response from server")]
    InvalidJson,
    #[error("{0}")]
    Server(String),
    #[error("Server error while generating audio.")]
    ServerFailure,
}

/// HTTP client for the audio generation server.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /generate-audio.
    ///
    /// Transport failures, unparseable bodies, and non-2xx statuses are
    /// `Err`. A 2xx body that itself carries an `error` field is returned
    /// as `Ok` so callers can treat it as a display-level failure without
    /// applying the other response fields.
    pub async fn generate_audio(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, ApiError> {
        let response = self
            .http
            .post(format!(
                "{}/generate-audio",
                self.base_url.trim_end_matches('/')
            ))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        let parsed: GenerateResponse =
            serde_json::from_slice(&body).map_err(|_| ApiError::InvalidJson)?;

        if !status.is_success() {
            return Err(match parsed.error {
                Some(message) => ApiError::Server(message),
                None => ApiError::ServerFailure,
            });
        }

        Ok(parsed)
    }

    /// Download generated audio. The server hands out server-relative URLs
    /// (`/static/audio/...`), which are resolved against the base URL.
    pub async fn fetch_audio(&self, audio_url: &str) -> Result<Bytes, ApiError> {
        let url = self.resolve(audio_url);
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?)
    }

    fn resolve(&self, audio_url: &str) -> String {
        if audio_url.starts_with("http://") || audio_url.starts_with("https://") {
            audio_url.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                audio_url.trim_start_matches('/')
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_urls_resolve_against_base() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(
            client.resolve("/static/audio/tts_1.mp3"),
            "http://localhost:5000/static/audio/tts_1.mp3"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let client = ApiClient::new("http://localhost:5000");
        assert_eq!(
            client.resolve("https://cdn.example.com/a.mp3"),
            "https://cdn.example.com/a.mp3"
        );
    }
}
