//! Resolved synthesis request types.

use std::path::PathBuf;
use std::str::FromStr;

/// Narration voice, one of the personas the speech backend accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Voice {
    #[default]
    Alloy,
    Ash,
    Ballad,
    Coral,
    Echo,
    Fable,
    Onyx,
    Nova,
    Sage,
    Shimmer,
    Verse,
}

impl Voice {
    /// Every voice the backend accepts, in display order.
    pub const ALL: [Voice; 11] = [
        Voice::Alloy,
        Voice::Ash,
        Voice::Ballad,
        Voice::Coral,
        Voice::Echo,
        Voice::Fable,
        Voice::Onyx,
        Voice::Nova,
        Voice::Sage,
        Voice::Shimmer,
        Voice::Verse,
    ];

    /// Returns the identifier sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Alloy => "alloy",
            Voice::Ash => "ash",
            Voice::Ballad => "ballad",
            Voice::Coral => "coral",
            Voice::Echo => "echo",
            Voice::Fable => "fable",
            Voice::Onyx => "onyx",
            Voice::Nova => "nova",
            Voice::Sage => "sage",
            Voice::Shimmer => "shimmer",
            Voice::Verse => "verse",
        }
    }

    /// Comma-separated list of all valid voice identifiers.
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(Voice::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Voice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved synthesis request.
///
/// Built once per invocation by the resolver and never mutated afterwards;
/// the process exits after the single synthesis call it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    /// Text to narrate. Always non-empty.
    pub text: String,
    /// Language the narration instructions are phrased around.
    pub language: String,
    /// Delivery style key (surfer, formal, casual, normal, ...).
    pub style: String,
    /// Backend voice persona.
    pub voice: Voice,
    /// Where the audio bytes are written.
    pub output: PathBuf,
}
