//! Flat placeholder templates
//!
//! A template is plain text with `{{ name }}` placeholders. Rendering
//! substitutes each parameter in order; there are no conditionals, loops or
//! includes. Values are inserted as-is with no HTML escaping, so header
//! values from content files are trusted.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::path::Path;

use crate::config::{value_text, ParamMap};
use crate::error::Result;
use crate::helpers::read_file;

lazy_static! {
    /// `{{ key }}` with optional spaces or tabs around a brace-free key
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{\{[ \t]*([^{}\r\n]*?)[ \t]*\}\}").unwrap();
}

/// Default layouts written by `init`
pub const DEFAULT_LAYOUTS: &[(&str, &str)] = &[
    ("page.html", include_str!("default/page.html")),
    ("post.html", include_str!("default/post.html")),
    ("list.html", include_str!("default/list.html")),
    ("item.html", include_str!("default/item.html")),
    ("home.html", include_str!("default/home.html")),
    ("feed.xml", include_str!("default/feed.xml")),
    ("item.xml", include_str!("default/item.xml")),
];

/// Replace `{{ key }}` placeholders with parameter values
///
/// Keys are substituted in map order, so a value that contains a
/// placeholder for a later key gets expanded too. Unknown placeholders are
/// left untouched.
pub fn render(template: &str, params: &ParamMap) -> String {
    let mut output = template.to_string();
    for (key, value) in params {
        if !output.contains(key.as_str()) {
            continue;
        }

        let text = value_text(value);
        output = PLACEHOLDER_RE
            .replace_all(&output, |caps: &Captures| {
                if &caps[1] == key.as_str() {
                    text.to_string()
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned();
    }
    output
}

/// Render `content` into a layout's `{{ content }}` placeholder
pub fn compose(layout: &str, content: &str) -> String {
    let mut params = ParamMap::new();
    params.insert("content".to_string(), content.into());
    render(layout, &params)
}

/// The site layouts, with post, list and home already placed inside the page
#[derive(Debug, Clone)]
pub struct Layouts {
    pub page: String,
    pub post: String,
    pub list: String,
    pub item: String,
    pub home: String,
    pub feed: String,
    pub feed_item: String,
}

impl Layouts {
    /// Load the seven layout files from a directory
    pub fn load(dir: &Path) -> Result<Self> {
        let read = |name: &str| read_file(&dir.join(name));
        let page = read("page.html")?;

        Ok(Self {
            post: compose(&page, &read("post.html")?),
            list: compose(&page, &read("list.html")?),
            home: compose(&page, &read("home.html")?),
            item: read("item.html")?,
            feed: read("feed.xml")?,
            feed_item: read("item.xml")?,
            page,
        })
    }
}
