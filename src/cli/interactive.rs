//! Interactive prompt session.
//!
//! Collects the same raw options the CLI flags do, over stdin. Answers
//! feed the regular resolver path, so defaults and validation behave
//! identically in both modes.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::{DEFAULT_LANGUAGE, DEFAULT_OUTPUT, DEFAULT_STYLE, RawOptions, Voice};

/// Errors that can occur during an interactive session.
#[derive(Error, Debug)]
pub enum InteractiveError {
    #[error("No TXT files found in the current directory")]
    NoTxtFiles,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Run the interactive session against stdin.
///
/// Returns the selected input file (if any) and the collected options.
pub fn run() -> Result<(Option<PathBuf>, RawOptions), InteractiveError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    run_with(&mut reader, Path::new("."))
}

fn run_with<R: BufRead>(
    reader: &mut R,
    dir: &Path,
) -> Result<(Option<PathBuf>, RawOptions), InteractiveError> {
    println!("How would you like to provide the text?");
    println!("  1) Enter text directly");
    println!("  2) Use a TXT file from the current directory");
    let choice = prompt(reader, "Selection [1]:")?;

    let (text, file) = match choice.as_str() {
        "" | "1" => {
            let text = prompt(reader, "Enter the text to convert to speech:")?;
            (Some(text), None)
        }
        "2" => {
            let files = list_txt_files(dir)?;
            if files.is_empty() {
                return Err(InteractiveError::NoTxtFiles);
            }
            println!("Select a TXT file:");
            for (i, file) in files.iter().enumerate() {
                println!("  {}) {}", i + 1, file.display());
            }
            let answer = prompt(reader, "Selection:")?;
            let index = parse_selection(&answer, files.len())?;
            (None, Some(files[index].clone()))
        }
        other => return Err(InteractiveError::InvalidSelection(other.to_string())),
    };

    let language = prompt_or(reader, "Language for narration", DEFAULT_LANGUAGE)?;
    let style = prompt_or(reader, "Narration style", DEFAULT_STYLE)?;

    println!("Voices: {}", Voice::choices());
    let voice = prompt_or(reader, "Voice", Voice::default().as_str())?;

    let output = prompt_or(reader, "Output file name", DEFAULT_OUTPUT)?;

    let options = RawOptions {
        text,
        language: Some(language),
        style: Some(style),
        voice: Some(voice),
        output: Some(PathBuf::from(output)),
    };

    Ok((file, options))
}

/// List `.txt` files in a directory, sorted by name.
fn list_txt_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Parse a 1-based menu selection.
fn parse_selection(input: &str, len: usize) -> Result<usize, InteractiveError> {
    input
        .parse::<usize>()
        .ok()
        .filter(|&n| n >= 1 && n <= len)
        .map(|n| n - 1)
        .ok_or_else(|| InteractiveError::InvalidSelection(input.to_string()))
}

fn prompt<R: BufRead>(reader: &mut R, message: &str) -> io::Result<String> {
    print!("{message} ");
    io::stdout().flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_or<R: BufRead>(reader: &mut R, message: &str, default: &str) -> io::Result<String> {
    let answer = prompt(reader, &format!("{message} [{default}]:"))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}
