//! Backend communication with the speech API.
//!
//! Provides the trait and HTTP implementation for the single synthesis
//! call the tool makes per invocation.

mod client;
mod types;

pub use client::HttpBackend;
pub use types::{BackendError, SPEECH_MODEL, SpeechRequest};

/// Trait for speech backend communication.
///
/// This trait abstracts the HTTP call to the speech API, allowing for
/// mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Synthesize speech from a request.
    ///
    /// # Returns
    /// Raw audio data in the request's response format.
    fn speech(&self, request: &SpeechRequest) -> Result<Vec<u8>, BackendError>;
}

/// Create a backend authenticated with the given API key.
pub fn create_backend(api_key: impl Into<String>) -> HttpBackend {
    HttpBackend::new(api_key)
}
