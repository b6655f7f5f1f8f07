//! TTS engine implementation.

use thiserror::Error;

use crate::backend::{Backend, BackendError, SpeechRequest};
use crate::input::SynthesisRequest;

use super::instructions::narration_instructions;

/// Errors that can occur during synthesis.
#[derive(Error, Debug)]
pub enum TTSError {
    #[error("Backend error: {0}")]
    BackendError(#[from] BackendError),
}

/// Drives the single synthesis call for a resolved request.
pub struct TTSEngine<B: Backend> {
    backend: B,
}

impl<B: Backend> TTSEngine<B> {
    /// Create a new TTS engine.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Synthesize speech for a resolved request.
    ///
    /// Composes the narration instructions from the request's language and
    /// style, then performs exactly one backend call.
    pub fn generate(&self, request: &SynthesisRequest) -> Result<Vec<u8>, TTSError> {
        let instructions = narration_instructions(&request.language, &request.style);

        let speech = SpeechRequest::new(request.text.clone())
            .with_voice(request.voice.as_str())
            .with_instructions(instructions);

        Ok(self.backend.speech(&speech)?)
    }
}
