//! Markdown conversion

use pulldown_cmark::{html, Options, Parser};
use std::path::Path;
use thiserror::Error;

/// File extensions rendered as Markdown
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mkd", "mkdn", "mdown", "markdown"];

/// The converter could not run; the body is kept as plain text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct Unavailable(pub String);

/// Converts Markdown text to HTML
pub trait MarkdownConverter {
    fn convert(&self, markdown: &str) -> Result<String, Unavailable>;
}

/// CommonMark renderer backed by pulldown-cmark
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMark;

impl MarkdownConverter for CommonMark {
    fn convert(&self, markdown: &str) -> Result<String, Unavailable> {
        let parser = Parser::new_ext(markdown, Options::empty());
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        Ok(html_output)
    }
}

/// A converter that is never available
#[derive(Debug, Clone)]
pub struct Disabled {
    reason: String,
}

impl Disabled {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl MarkdownConverter for Disabled {
    fn convert(&self, _markdown: &str) -> Result<String, Unavailable> {
        Err(Unavailable(self.reason.clone()))
    }
}

/// Check if a file should be rendered as Markdown
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| MARKDOWN_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}
