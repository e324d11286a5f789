//! Content module - header parsing, loading, and Markdown conversion

pub mod headers;
pub mod loader;
mod markdown;
mod post;

pub use loader::{load, read_all, read_posts};
pub use markdown::{is_markdown_file, CommonMark, Disabled, MarkdownConverter, Unavailable};
pub use post::Post;
