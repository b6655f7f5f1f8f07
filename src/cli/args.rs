//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::input::RawOptions;

/// Generate speech audio from text.
#[derive(Parser, Debug)]
#[command(name = "generar-audio")]
#[command(about = "Generate speech audio from text using the OpenAI speech API")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Text to convert to speech
    #[arg(short, long)]
    pub text: Option<String>,

    /// TXT file to read text and metadata from
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Language for narration
    #[arg(short, long)]
    pub language: Option<String>,

    /// Narration style (surfer, formal, casual, normal)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Voice for narration
    #[arg(short, long)]
    pub voice: Option<String>,

    /// Output file name
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run in interactive mode
    #[arg(long)]
    pub interactive: bool,
}

/// Utility subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a template TXT file for audio generation
    GenerateTemplate,
}

impl Args {
    /// Raw option values for the resolver.
    pub fn raw_options(&self) -> RawOptions {
        RawOptions {
            text: self.text.clone(),
            language: self.language.clone(),
            style: self.style.clone(),
            voice: self.voice.clone(),
            output: self.output.clone(),
        }
    }
}
