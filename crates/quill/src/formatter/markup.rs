use lazy_static::lazy_static;
use regex::Regex;

use crate::models::segment::Segment;

lazy_static! {
    static ref HEADING: Regex = Regex::new(r"^#{3}\s").unwrap();
    // Spans are non-greedy and never cross a line terminator (\n, \r, U+2028, U+2029).
    static ref MATH: Regex = Regex::new(r"\$[^\n\r\x{2028}\x{2029}]*?\$").unwrap();
    // Bold and code share one pass so they are recognised left to right together.
    static ref EMPHASIS: Regex = Regex::new(
        r"\*\*[^\n\r\x{2028}\x{2029}]*?\*\*|`[^\n\r\x{2028}\x{2029}]*?`"
    )
    .unwrap();
}

/// Break one answer entry into typed segments.
///
/// The passes run in order:
/// 1. a `### ` prefix turns the whole entry into a single heading, nothing else is parsed;
/// 2. `$...$` spans become math;
/// 3. in the text between math spans, `**...**` becomes bold and `` `...` `` code;
/// 4. everything left over is plain text, kept verbatim.
///
/// Segments come out in source order and empty plain runs are skipped, so joining
/// the contents gives back the entry without its markup delimiters.
pub fn render_inline(answer: &str) -> Vec<Segment<'_>> {
    if let Some(prefix) = HEADING.find(answer) {
        return vec![Segment::heading(&answer[prefix.end()..])];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    for math in MATH.find_iter(answer) {
        push_emphasis(&answer[cursor..math.start()], &mut segments);
        segments.push(Segment::math(strip(math.as_str(), "$")));
        cursor = math.end();
    }
    push_emphasis(&answer[cursor..], &mut segments);
    segments
}

fn push_emphasis<'a>(text: &'a str, segments: &mut Vec<Segment<'a>>) {
    let mut cursor = 0;
    for span in EMPHASIS.find_iter(text) {
        push_plain(&text[cursor..span.start()], segments);
        let matched = span.as_str();
        if matched.starts_with("**") {
            segments.push(Segment::bold(strip(matched, "**")));
        } else {
            segments.push(Segment::code(strip(matched, "`")));
        }
        cursor = span.end();
    }
    push_plain(&text[cursor..], segments);
}

fn push_plain<'a>(text: &'a str, segments: &mut Vec<Segment<'a>>) {
    if !text.is_empty() {
        segments.push(Segment::plain(text));
    }
}

fn strip<'a>(matched: &'a str, delimiter: &str) -> &'a str {
    &matched[delimiter.len()..matched.len() - delimiter.len()]
}
