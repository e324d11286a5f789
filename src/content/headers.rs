//! Header block parsing
//!
//! A content file may start with any number of `<!-- key: value -->` lines.
//! The first line that is not a header ends the block; everything after the
//! last header is the body.

use lazy_static::lazy_static;
use regex::{CaptureMatches, Regex};

lazy_static! {
    /// Either a header (with surrounding whitespace) or any other line
    static ref HEADER_RE: Regex =
        Regex::new(r"\s*<!--\s*(.+?)\s*:\s*(.+?)\s*-->\s*|.+").unwrap();
}

/// A single `key: value` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub key: &'a str,
    pub value: &'a str,
    /// Byte offset right after this header and its trailing whitespace
    pub end: usize,
}

/// Lazy iterator over the header block of a text
pub struct HeaderIter<'a> {
    matches: CaptureMatches<'static, 'a>,
    done: bool,
}

impl<'a> Iterator for HeaderIter<'a> {
    type Item = Header<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let caps = self.matches.next();
        let header = caps.and_then(|caps| {
            let key = caps.get(1)?;
            let value = caps.get(2)?;
            let end = caps.get(0)?.end();
            Some(Header {
                key: key.as_str().trim(),
                value: value.as_str().trim(),
                end,
            })
        });

        if header.is_none() {
            self.done = true;
        }
        header
    }
}

/// Iterate over the leading headers of `text`
pub fn headers(text: &str) -> HeaderIter<'_> {
    HeaderIter {
        matches: HEADER_RE.captures_iter(text),
        done: false,
    }
}

/// Byte offset where the body of `text` starts (0 if there are no headers)
pub fn body_offset(text: &str) -> usize {
    headers(text).last().map(|h| h.end).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_headers() {
        let text = "<p>Just a body.</p>\n";
        assert_eq!(headers(text).count(), 0);
        assert_eq!(body_offset(text), 0);
    }

    #[test]
    fn test_headers_in_order() {
        let text = "<!-- title: Hello World -->\n<!-- tag: trip -->\n<p>Body</p>\n";
        let parsed: Vec<_> = headers(text).map(|h| (h.key, h.value)).collect();
        assert_eq!(parsed, vec![("title", "Hello World"), ("tag", "trip")]);

        let offset = body_offset(text);
        assert_eq!(&text[offset..], "<p>Body</p>\n");
    }

    #[test]
    fn test_keys_and_values_are_trimmed() {
        let text = "<!--   title  :   Spaced Out   -->\nBody";
        let header = headers(text).next().unwrap();
        assert_eq!(header.key, "title");
        assert_eq!(header.value, "Spaced Out");
    }

    #[test]
    fn test_blank_value_is_empty() {
        let text = "<!-- title:   -->\n<!-- slug:\t -->\nBody";
        let parsed: Vec<_> = headers(text).map(|h| (h.key, h.value)).collect();
        assert_eq!(parsed, vec![("title", ""), ("slug", "")]);
        assert_eq!(&text[body_offset(text)..], "Body");
    }

    #[test]
    fn test_value_may_contain_colon() {
        let text = "<!-- link: https://example.com/ -->\nBody";
        let header = headers(text).next().unwrap();
        assert_eq!(header.key, "link");
        assert_eq!(header.value, "https://example.com/");
    }

    #[test]
    fn test_blank_lines_between_headers_and_body() {
        let text = "\n<!-- title: A -->\n\n\n<!-- tag: b -->\n\n# Heading\n";
        assert_eq!(headers(text).count(), 2);
        assert_eq!(&text[body_offset(text)..], "# Heading\n");
    }

    #[test]
    fn test_stops_at_first_content_line() {
        let text = "<!-- title: A -->\nIntro\n<!-- tag: late -->\n";
        let keys: Vec<_> = headers(text).map(|h| h.key).collect();
        assert_eq!(keys, vec!["title"]);
        assert_eq!(&text[body_offset(text)..], "Intro\n<!-- tag: late -->\n");
    }

    #[test]
    fn test_plain_comment_is_body() {
        let text = "<!-- not a header -->\nBody";
        assert_eq!(body_offset(text), 0);
    }
}
