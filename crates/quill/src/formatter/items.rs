use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A numbered list marker such as "12. ": ASCII digits, a dot, any whitespace.
    static ref LIST_MARKER: Regex = Regex::new(r"[0-9]+\.\s+").unwrap();
}

/// Split a response into answer entries.
///
/// The text is cut at every numbered list marker (`1. `, `12.  `), the markers are
/// dropped, every piece is trimmed and blank pieces are skipped. Text without
/// markers yields itself, trimmed. A marker inside a number followed by whitespace
/// (`3.14 ` does not match, `v2. ` does) still splits; there is no escaping.
pub fn split_items(text: &str) -> impl Iterator<Item = &str> + '_ {
    LIST_MARKER
        .split(text)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}
