//! generar-audio CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use generar_audio::backend::create_backend;
use generar_audio::cli::{Args, Command, interactive};
use generar_audio::engine::TTSEngine;
use generar_audio::input::{self, RawOptions, parse_metadata, resolve};

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(Command::GenerateTemplate) = args.command {
        return generate_template();
    }

    let (file, options) = if args.interactive {
        interactive::run().context("Interactive session failed")?
    } else {
        (args.file.clone(), args.raw_options())
    };

    generate_audio(file, options)
}

fn generate_audio(file: Option<PathBuf>, options: RawOptions) -> Result<()> {
    dotenvy::dotenv().ok();
    let api_key =
        env::var("OPENAI_API_KEY").context("OPENAI_API_KEY environment variable is not set")?;

    let metadata = match &file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            Some(parse_metadata(&content))
        }
        None => None,
    };

    let request = resolve(options, metadata.as_ref())?;

    let backend = create_backend(api_key);
    let engine = TTSEngine::new(backend);

    println!("Generating audio...");
    let audio = engine
        .generate(&request)
        .context("Failed to synthesize speech")?;

    fs::write(&request.output, &audio)
        .with_context(|| format!("Failed to write audio to: {}", request.output.display()))?;

    println!(
        "Audio file generated successfully: {}",
        request.output.display()
    );
    println!("  Size: {} bytes", audio.len());

    Ok(())
}

fn generate_template() -> Result<()> {
    fs::write("template.txt", input::TEMPLATE).context("Failed to write template.txt")?;

    println!("Template generated: template.txt");
    Ok(())
}
