use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";
const DEFAULT_TIME_FORMAT: &str = "HH:mm";

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // {{title}}, {{date}}, {{time}}, {{date:FORMAT}}, {{time:FORMAT}}
    Regex::new(r"\{\{\s*(title|date|time)\s*(?::([^}]*))?\}\}").unwrap()
});

/// Render a new-note template.
///
/// Supports the core template variables:
/// - `{{title}}`: the new note's name
/// - `{{date}}` / `{{date:FORMAT}}`: current date, default `YYYY-MM-DD`
/// - `{{time}}` / `{{time:FORMAT}}`: current time, default `HH:mm`
///
/// Formats use Moment-style tokens. Anything else in `{{...}}` is left as-is.
pub fn render_new_note(template: &str, title: &str, now: NaiveDateTime) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let format = caps.get(2).map(|m| m.as_str().trim()).filter(|f| !f.is_empty());
            match &caps[1] {
                "title" => title.to_string(),
                "date" => now
                    .format(&moment_to_strftime(format.unwrap_or(DEFAULT_DATE_FORMAT)))
                    .to_string(),
                "time" => now
                    .format(&moment_to_strftime(format.unwrap_or(DEFAULT_TIME_FORMAT)))
                    .to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Moment tokens, longest first so `YYYY` wins over `YY`.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("HH", "%H"),
    ("H", "%-H"),
    ("hh", "%I"),
    ("h", "%-I"),
    ("mm", "%M"),
    ("m", "%-M"),
    ("ss", "%S"),
    ("s", "%-S"),
    ("A", "%p"),
    ("a", "%P"),
];

/// Translate a Moment.js format string into a chrono strftime string.
///
/// Text in `[brackets]` is copied literally; literal `%` is escaped.
pub fn moment_to_strftime(format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '[' {
            let end = rest.find(']').unwrap_or(rest.len());
            push_literal(&mut out, &rest[1..end]);
            rest = rest.get(end + 1..).unwrap_or("");
            continue;
        }
        for (token, spec) in TOKENS {
            if let Some(after) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = after;
                continue 'outer;
            }
        }
        push_literal(&mut out, &rest[..c.len_utf8()]);
        rest = &rest[c.len_utf8()..];
    }
    out
}

fn push_literal(out: &mut String, text: &str) {
    out.push_str(&text.replace('%', "%%"));
}
