//! Cleanup applied to every piece of text a provider returns.

/// Quote pairs that may wrap a model's answer.
const QUOTE_PAIRS: [(char, char); 4] = [('"', '"'), ('\'', '\''), ('\u{201C}', '\u{201D}'), ('\u{2018}', '\u{2019}')];

/// Trim whitespace, then repeatedly strip wrapping quote pairs.
///
/// Each round removes one matching outer pair and trims again, until no
/// pair remains. Nested wrappers therefore all go: `""double""` becomes
/// `double`. This keeps the function idempotent:
/// `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.trim();

    while let Some(inner) = strip_quote_pair(text) {
        text = inner.trim();
    }

    text.to_string()
}

/// Strip one pair of matching quotes, if the text is wrapped in one.
fn strip_quote_pair(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;

    QUOTE_PAIRS
        .iter()
        .find(|(open, close)| first == *open && last == *close)
        .map(|_| &text[first.len_utf8()..text.len() - last.len_utf8()])
}
