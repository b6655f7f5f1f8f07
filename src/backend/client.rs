//! HTTP client for the OpenAI speech endpoint.

use super::Backend;
use super::types::{BackendError, SpeechRequest};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// HTTP-based backend client.
pub struct HttpBackend {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a new HTTP backend client.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Get the base URL for this backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Backend for HttpBackend {
    fn speech(&self, request: &SpeechRequest) -> Result<Vec<u8>, BackendError> {
        let url = format!("{}/audio/speech", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(BackendError::RequestFailed(format!(
                "Status {status}: {body}"
            )));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
