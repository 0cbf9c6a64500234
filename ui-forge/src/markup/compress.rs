//! Best-effort HTML whitespace compression
//!
//! An ordered list of regex substitutions. This is not an HTML parser: later
//! rules rely on the whitespace normalization done by earlier ones, so the
//! table order is significant.

use once_cell::sync::Lazy;
use regex::Regex;

/// `(pattern, replacement)` pairs, applied strictly in sequence
const RULES: &[(&str, &str)] = &[
    // Whitespace runs (including vertical tabs and newlines) become one space
    (r"\s+", " "),
    // No whitespace before `<`
    (r"\s*<", "<"),
    // No whitespace around `>` or `/>`
    (r"\s*(/?>)\s*", "$1"),
    // No whitespace around `=` in quoted attribute assignments
    (r#"\s*=\s*(["'])"#, "=$1"),
    // No whitespace between a closing quote and `>` or `/>`
    (r#"(["'])\s+(/?>)"#, "$1$2"),
    // Comments, across newlines, non-greedy
    (r"(?s)<!--.*?-->", ""),
];

static COMPILED: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    RULES
        .iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|regex| (regex, *replacement))
        })
        .collect()
});

/// Compress markup
///
/// # Examples
///
/// ```rust
/// use ui_forge::markup::compress;
///
/// let html = compress("<div   class = 'a' >\n\n  hi  </div><!-- c -->");
/// assert_eq!(html, "<div class='a'>hi</div>");
/// ```
#[must_use]
pub fn compress(code: &str) -> String {
    let compressed = COMPILED
        .iter()
        .fold(code.to_string(), |acc, (regex, replacement)| {
            regex.replace_all(&acc, *replacement).into_owned()
        });
    compressed.trim().to_string()
}
