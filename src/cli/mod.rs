//! CLI argument parsing and the interactive session.

mod args;
pub mod interactive;

pub use args::{Args, Command};
pub use interactive::InteractiveError;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_all_flags() {
        let args = Args::parse_from([
            "generar-audio",
            "-t",
            "Hello",
            "-l",
            "English",
            "-s",
            "formal",
            "-v",
            "nova",
            "-o",
            "tale.mp3",
        ]);

        assert_eq!(args.text.as_deref(), Some("Hello"));
        assert_eq!(args.language.as_deref(), Some("English"));
        assert_eq!(args.style.as_deref(), Some("formal"));
        assert_eq!(args.voice.as_deref(), Some("nova"));
        assert_eq!(args.output, Some(PathBuf::from("tale.mp3")));
        assert!(!args.interactive);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_file_flag() {
        let args = Args::parse_from(["generar-audio", "-f", "story.txt"]);

        assert_eq!(args.file, Some(PathBuf::from("story.txt")));
        assert!(args.text.is_none());
    }

    #[test]
    fn test_parse_interactive_flag() {
        let args = Args::parse_from(["generar-audio", "--interactive"]);

        assert!(args.interactive);
    }

    #[test]
    fn test_parse_generate_template_subcommand() {
        let args = Args::parse_from(["generar-audio", "generate-template"]);

        assert!(matches!(args.command, Some(Command::GenerateTemplate)));
    }

    #[test]
    fn test_raw_options_carries_flag_values() {
        let args = Args::parse_from(["generar-audio", "-t", "Hi", "-v", "echo"]);
        let options = args.raw_options();

        assert_eq!(options.text.as_deref(), Some("Hi"));
        assert_eq!(options.voice.as_deref(), Some("echo"));
        assert!(options.language.is_none());
        assert!(options.output.is_none());
    }
}
