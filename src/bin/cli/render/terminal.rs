use kalimat_lib::vocabulary::VocabularyEntry;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in a color when colors are on
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// One line per entry: `english (pronunciation) ↔ arabic [001.mp3]`
pub fn render_entry(entry: &VocabularyEntry, use_color: bool) -> String {
    format!(
        "{} {} \u{2194} {} {}",
        paint(&entry.english, Color::BOLD, use_color),
        paint(&format!("({})", entry.pronunciation), Color::GRAY, use_color),
        paint(&entry.arabic, Color::CYAN, use_color),
        paint(&format!("[{}]", entry.audio_file()), Color::DIM, use_color),
    )
}

pub fn rule(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// JSON shape of an entry in CLI output
pub fn entry_json(entry: &VocabularyEntry) -> serde_json::Value {
    serde_json::json!({
        "index": entry.id,
        "english": entry.english,
        "arabic": entry.arabic,
        "pronunciation": entry.pronunciation,
        "audioFile": entry.audio_file(),
    })
}
