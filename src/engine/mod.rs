//! Synthesis orchestration.
//!
//! This module composes narration instructions from the resolved language
//! and style and performs the single backend call per invocation.

mod instructions;
mod tts;

pub use instructions::narration_instructions;
pub use tts::{TTSEngine, TTSError};
