//! Option resolution.
//!
//! Merges command-line (or interactive) values with file-derived values
//! and hard-coded defaults into a complete [`SynthesisRequest`].

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use super::parser::FileMetadata;
use super::request::{SynthesisRequest, Voice};

/// Default narration language.
pub const DEFAULT_LANGUAGE: &str = "Spanish";

/// Default delivery style.
pub const DEFAULT_STYLE: &str = "normal";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "output.mp3";

/// Errors that can occur while resolving input options.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Text must be provided either via the text option or an input file")]
    MissingText,

    #[error("Invalid voice '{0}'. Valid voices: {choices}", choices = Voice::choices())]
    InvalidVoice(String),
}

/// Raw option values as collected by the CLI or the interactive session.
///
/// Every field may be absent; empty strings count as absent too.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub text: Option<String>,
    pub language: Option<String>,
    pub style: Option<String>,
    pub voice: Option<String>,
    pub output: Option<PathBuf>,
}

/// Resolve raw options against optional file metadata and the defaults.
///
/// Per field, the first non-empty value wins: direct option, then file
/// header, then default. `text` has no default; its file fallback is the
/// narration body.
pub fn resolve(
    options: RawOptions,
    metadata: Option<&FileMetadata>,
) -> Result<SynthesisRequest, ResolveError> {
    let text = pick(options.text, metadata.map(|m| m.text()))
        .ok_or(ResolveError::MissingText)?;

    let language = pick(options.language, metadata.and_then(|m| m.get("language")))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let style = pick(options.style, metadata.and_then(|m| m.get("style")))
        .unwrap_or_else(|| DEFAULT_STYLE.to_string());

    let voice = match pick(options.voice, metadata.and_then(|m| m.get("voice"))) {
        Some(name) => Voice::from_str(&name).map_err(|_| ResolveError::InvalidVoice(name))?,
        None => Voice::default(),
    };

    let output_option = options.output.filter(|p| !p.as_os_str().is_empty());
    let output = match output_option {
        Some(path) => path,
        None => match metadata.and_then(|m| m.get("output")).filter(|v| !v.is_empty()) {
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_OUTPUT),
        },
    };

    Ok(SynthesisRequest {
        text,
        language,
        style,
        voice,
        output,
    })
}

/// First non-empty value of the direct option and the file value.
fn pick(direct: Option<String>, file: Option<&str>) -> Option<String> {
    direct
        .filter(|v| !v.is_empty())
        .or_else(|| file.filter(|v| !v.is_empty()).map(str::to_string))
}
