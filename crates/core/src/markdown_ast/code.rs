use comrak::nodes::{LineColumn, NodeValue, Sourcepos};
use comrak::{Arena, Options, parse_document};

use crate::buffer::{Position, TextBuffer};
use crate::host::SyntaxClassifier;

/// [`SyntaxClassifier`] that parses the buffer as CommonMark + GFM.
///
/// Fenced and indented code blocks count by line span; inline code spans
/// count between their opening and closing backtick runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownSyntax;

impl SyntaxClassifier for MarkdownSyntax {
    fn is_code(&self, buffer: &dyn TextBuffer, cursor: Position) -> bool {
        is_code_at(&buffer.text(), cursor)
    }
}

/// Whether `cursor` falls inside inline code or a code block of `input`.
pub fn is_code_at(input: &str, cursor: Position) -> bool {
    let Some(line_text) = input.split('\n').nth(cursor.line) else {
        return false;
    };
    // comrak reports 1-based lines and 1-based byte columns.
    let line = cursor.line + 1;
    let byte_col = line_text.char_indices().nth(cursor.ch).map_or(line_text.len(), |(i, _)| i);
    let here = LineColumn { line, column: byte_col };

    let arena = Arena::new();
    let options = default_options();
    let root = parse_document(&arena, input, &options);

    root.descendants().any(|node| {
        let data = node.data.borrow();
        match data.value {
            NodeValue::CodeBlock(_) => {
                data.sourcepos.start.line <= line && line <= data.sourcepos.end.line
            }
            NodeValue::Code(_) => within_span(data.sourcepos, here),
            _ => false,
        }
    })
}

/// `here` names the character just before the cursor. comrak places a code
/// span over its content only, so both ends are inclusive.
fn within_span(pos: Sourcepos, here: LineColumn) -> bool {
    let key = |lc: LineColumn| (lc.line, lc.column);
    key(pos.start) <= key(here) && key(here) <= key(pos.end)
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options
}
