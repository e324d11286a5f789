//! HTML helper functions

use lazy_static::lazy_static;
use regex::Regex;

/// Number of words kept in a post summary
pub const SUMMARY_WORDS: usize = 25;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"(?s)<.*?>").unwrap();
}

/// Replace anything that looks like an HTML tag with a space
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, " ").into_owned()
}

/// Strip tags and keep the first `words` whitespace-separated words
///
/// # Examples
/// ```ignore
/// truncate("<p>one two three four</p>", 3) // -> "one two three"
/// ```
pub fn truncate(html: &str, words: usize) -> String {
    strip_tags(html)
        .split_whitespace()
        .take(words)
        .collect::<Vec<_>>()
        .join(" ")
}
