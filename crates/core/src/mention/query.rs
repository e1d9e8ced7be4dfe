//! Accepted query characters.

use std::sync::LazyLock;

use regex::Regex;

static ACCEPTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        // Chinese (CJK unified ideographs, Bopomofo)
        r"[\u{4E00}-\u{9FFF}\u{3100}-\u{312F}]",
        // Emoji
        r"|\p{Extended_Pictographic}",
        // CJK symbols and punctuation, mathematical operators, fullwidth forms
        r"|[\u{3000}-\u{303F}\u{2200}-\u{22FF}\u{FF00}-\u{FFEF}]",
        // Hiragana, Katakana
        r"|[\u{3040}-\u{309F}\u{30A0}-\u{30FF}]",
        // Hangul syllables and jamo
        r"|[\u{AC00}-\u{D7AF}\u{1100}-\u{11FF}]",
        // Other valid filename characters
        r#"|[a-zA-Z0-9$\-_!%"'.,*&();{}+=~`?\\]"#,
    ))
    .unwrap()
});

/// Whether `query` contains at least one character a note name could start with.
pub fn has_accepted_char(query: &str) -> bool {
    ACCEPTED_RE.is_match(query)
}
