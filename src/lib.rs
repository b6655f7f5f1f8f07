//! generar-audio: text-to-speech CLI for the OpenAI speech API.
//!
//! This crate provides a command-line interface for turning text into
//! narrated audio. Input comes from a flag, a structured text file, or an
//! interactive prompt session; narration delivery is steered by a
//! language/style instruction string.

pub mod backend;
pub mod cli;
pub mod engine;
pub mod input;
