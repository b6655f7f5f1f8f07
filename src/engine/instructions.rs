//! Narration instruction composition.

const SURFER: &str = "relajado y entusiasta, como un surfero";
const FORMAL: &str = "formal y profesional";
const CASUAL: &str = "casual y amigable";
const NORMAL: &str = "normal y natural";

/// Descriptive phrase for a style key. Unknown styles get the surfer
/// phrase.
fn style_phrase(style: &str) -> &'static str {
    match style {
        "surfer" => SURFER,
        "formal" => FORMAL,
        "casual" => CASUAL,
        "normal" => NORMAL,
        _ => SURFER,
    }
}

/// Build the steering string sent alongside the narration text.
///
/// Spanish and English get dedicated templates; any other language is
/// named literally in a generic one. Pure function, never fails.
pub fn narration_instructions(language: &str, style: &str) -> String {
    let phrase = style_phrase(style);

    match language.to_lowercase().as_str() {
        "spanish" => format!("Habla en español pero como si fueras {phrase}."),
        "english" => format!("Speak in English but as if you were {phrase}."),
        _ => format!("Speak in {language} but as if you were {phrase}."),
    }
}
