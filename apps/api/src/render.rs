//! Display formatting for model output.
//!
//! Maps the four emphasis markers the prompts ask for onto inline HTML. Nothing
//! else is touched: `<`, `>` and `&` pass through unescaped, so whatever markup the
//! model emits reaches the page as-is.

use std::sync::LazyLock;

use regex::Regex;

// Marker contents stop at any line terminator: `\n`, `\r`, U+2028 and U+2029.
static DOUBLE_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\r\n\x{2028}\x{2029}]*?)\*\*").unwrap());
static SINGLE_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\r\n\x{2028}\x{2029}]*?)\*").unwrap());
static DOUBLE_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^\r\n\x{2028}\x{2029}]*?)__").unwrap());
static SINGLE_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([^\r\n\x{2028}\x{2029}]*?)_").unwrap());

/// Converts `**bold**`, `*italic*`, `__bold__` and `_italic_` to `<strong>`/`<em>`.
///
/// Substitutions run in exactly that order and never span a line terminator
/// (`\n`, `\r`, U+2028 or U+2029). A pass pairs every marker on a line except
/// at most one leftover per kind, so running the function again on its own
/// output changes nothing.
pub fn format_text_output(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = DOUBLE_STAR.replace_all(text, "<strong>${1}</strong>");
    let text = SINGLE_STAR.replace_all(&text, "<em>${1}</em>");
    let text = DOUBLE_UNDERSCORE.replace_all(&text, "<strong>${1}</strong>");
    let text = SINGLE_UNDERSCORE.replace_all(&text, "<em>${1}</em>");
    text.into_owned()
}
