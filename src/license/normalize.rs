use std::sync::LazyLock;

use regex::Regex;

static LINE_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line ending regex must compile"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace regex must compile"));

/// Fold license text into the form the classification rules compare against.
///
/// Lower-cases everything, turns each line ending into a space, then
/// collapses runs of whitespace to a single space. Punctuation and word
/// boundaries are left as they are.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let joined = LINE_ENDING.replace_all(&lower, " ");
    WHITESPACE_RUN.replace_all(&joined, " ").into_owned()
}

/// Literal containment check. `normalized` must come from [`normalize`] and
/// `literal` must already be lower case.
pub fn contains(normalized: &str, literal: &str) -> bool {
    normalized.contains(literal)
}
