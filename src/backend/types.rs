//! Backend request types and errors.

use serde::Serialize;
use thiserror::Error;

/// Speech model used for every synthesis call.
pub const SPEECH_MODEL: &str = "gpt-4o-mini-tts";

/// Errors that can occur when communicating with the backend.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Request body for the speech endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    pub model: String,
    pub input: String,
    pub voice: String,
    /// Natural-language steering string for tone and delivery.
    pub instructions: String,
    pub response_format: String,
}

impl SpeechRequest {
    /// Create a new speech request with the default model, voice, and
    /// output format.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            model: SPEECH_MODEL.to_string(),
            input: text.into(),
            voice: "alloy".to_string(),
            instructions: String::new(),
            response_format: "mp3".to_string(),
        }
    }

    /// Set the voice identifier.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// Set the narration instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }
}
