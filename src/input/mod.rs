//! Input handling: structured file parsing and option resolution.
//!
//! This is the core of the tool. The parser splits a structured text file
//! into headers and a narration body; the resolver merges direct options,
//! file values, and defaults into one immutable [`SynthesisRequest`].

mod parser;
mod request;
mod resolver;

pub use parser::{FileMetadata, TEMPLATE, parse_metadata};
pub use request::{SynthesisRequest, Voice};
pub use resolver::{
    DEFAULT_LANGUAGE, DEFAULT_OUTPUT, DEFAULT_STYLE, RawOptions, ResolveError, resolve,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ===========================================
    // parse_metadata tests
    // ===========================================

    #[test]
    fn test_parse_headers_and_body() {
        let parsed = parse_metadata("Language: French\nStyle: formal\n\nHello there.");

        assert_eq!(parsed.get("language"), Some("French"));
        assert_eq!(parsed.get("style"), Some("formal"));
        assert_eq!(parsed.text(), "Hello there.");
    }

    #[test]
    fn test_parse_keys_are_lowercased_and_trimmed() {
        let parsed = parse_metadata("  VOICE :  nova  \n\nbody");

        assert_eq!(parsed.get("voice"), Some("nova"));
        assert_eq!(parsed.text(), "body");
    }

    #[test]
    fn test_parse_no_blank_line_means_empty_body() {
        let parsed = parse_metadata("Language: French\nStyle: formal\nno blank line here");

        assert_eq!(parsed.get("language"), Some("French"));
        assert_eq!(parsed.text(), "");
    }

    #[test]
    fn test_parse_leading_colon_line_is_not_a_header() {
        let parsed = parse_metadata(": oops\nStyle: casual\n\nbody");

        assert_eq!(parsed.get(""), None);
        assert_eq!(parsed.get("oops"), None);
        assert_eq!(parsed.get("style"), Some("casual"));
    }

    #[test]
    fn test_parse_non_header_lines_before_blank_are_ignored() {
        let parsed = parse_metadata("just some prose\nLanguage: German\n\nbody");

        assert_eq!(parsed.get("language"), Some("German"));
        assert_eq!(parsed.text(), "body");
    }

    #[test]
    fn test_parse_unrecognized_keys_are_stored() {
        let parsed = parse_metadata("Speed: fast\n\nbody");

        assert_eq!(parsed.get("speed"), Some("fast"));
    }

    #[test]
    fn test_parse_multiline_body_is_joined_and_trimmed() {
        let parsed = parse_metadata("Style: normal\n\nline one\nline two\n\n");

        assert_eq!(parsed.text(), "line one\nline two");
    }

    #[test]
    fn test_parse_empty_content() {
        let parsed = parse_metadata("");

        assert_eq!(parsed.text(), "");
        assert_eq!(parsed.get("language"), None);
    }

    #[test]
    fn test_template_round_trips_through_parser() {
        let parsed = parse_metadata(TEMPLATE);

        assert_eq!(parsed.get("language"), Some("Spanish"));
        assert_eq!(parsed.get("style"), Some("normal"));
        assert_eq!(parsed.get("voice"), Some("alloy"));
        assert_eq!(parsed.get("output"), Some("output.mp3"));
        assert_eq!(parsed.text(), "Your text here.");
    }

    // ===========================================
    // resolve tests
    // ===========================================

    #[test]
    fn test_resolve_defaults() {
        let options = RawOptions {
            text: Some("Hi".to_string()),
            ..Default::default()
        };

        let request = resolve(options, None).unwrap();

        assert_eq!(request.text, "Hi");
        assert_eq!(request.language, "Spanish");
        assert_eq!(request.style, "normal");
        assert_eq!(request.voice, Voice::Alloy);
        assert_eq!(request.output, PathBuf::from("output.mp3"));
    }

    #[test]
    fn test_resolve_missing_text_fails() {
        let result = resolve(RawOptions::default(), None);

        assert!(matches!(result.unwrap_err(), ResolveError::MissingText));
    }

    #[test]
    fn test_resolve_direct_text_beats_file_body() {
        let metadata = parse_metadata("Language: English\n\nfile body");
        let options = RawOptions {
            text: Some("direct".to_string()),
            ..Default::default()
        };

        let request = resolve(options, Some(&metadata)).unwrap();

        assert_eq!(request.text, "direct");
        assert_eq!(request.language, "English");
    }

    #[test]
    fn test_resolve_file_body_used_when_no_direct_text() {
        let metadata = parse_metadata("Voice: nova\nOutput: tale.mp3\n\nfile body");

        let request = resolve(RawOptions::default(), Some(&metadata)).unwrap();

        assert_eq!(request.text, "file body");
        assert_eq!(request.voice, Voice::Nova);
        assert_eq!(request.output, PathBuf::from("tale.mp3"));
    }

    #[test]
    fn test_resolve_empty_file_body_fails() {
        let metadata = parse_metadata("Language: English\nno blank line");

        let result = resolve(RawOptions::default(), Some(&metadata));

        assert!(matches!(result.unwrap_err(), ResolveError::MissingText));
    }

    #[test]
    fn test_resolve_empty_direct_option_falls_through() {
        let metadata = parse_metadata("Style: formal\n\nbody");
        let options = RawOptions {
            style: Some(String::new()),
            ..Default::default()
        };

        let request = resolve(options, Some(&metadata)).unwrap();

        assert_eq!(request.style, "formal");
    }

    #[test]
    fn test_resolve_valid_voice() {
        let options = RawOptions {
            text: Some("Hi".to_string()),
            voice: Some("nova".to_string()),
            ..Default::default()
        };

        let request = resolve(options, None).unwrap();

        assert_eq!(request.voice, Voice::Nova);
    }

    #[test]
    fn test_resolve_invalid_voice_lists_choices() {
        let options = RawOptions {
            text: Some("Hi".to_string()),
            voice: Some("robot".to_string()),
            ..Default::default()
        };

        let err = resolve(options, None).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidVoice(_)));

        let message = err.to_string();
        assert!(message.contains("robot"));
        for voice in Voice::ALL {
            assert!(message.contains(voice.as_str()), "missing {voice}");
        }
    }

    #[test]
    fn test_resolve_invalid_voice_from_file() {
        let metadata = parse_metadata("Voice: robot\n\nbody");

        let result = resolve(RawOptions::default(), Some(&metadata));

        assert!(matches!(result.unwrap_err(), ResolveError::InvalidVoice(_)));
    }

    #[test]
    fn test_voice_parse_all_identifiers() {
        for voice in Voice::ALL {
            assert_eq!(voice.as_str().parse::<Voice>().unwrap(), voice);
        }
        assert!("Alloy".parse::<Voice>().is_err());
    }
}
