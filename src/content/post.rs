//! Post model

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

use crate::config::ParamMap;
use crate::helpers::iso_date;

/// Header keys computed by the loader; authors cannot set them
pub const RESERVED_KEYS: &[&str] = &["src", "content", "summary", "rfc_2822_date"];

/// One loaded content file, either a standalone page or a blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Publication date, from the filename prefix or a `date` header
    pub date: NaiveDate,

    /// URL-friendly name, from the filename or a `slug` header
    pub slug: String,

    /// Source file path, only used in log lines
    pub src: PathBuf,

    /// Author-supplied headers in file order, e.g. `title` and `tag`
    pub headers: IndexMap<String, String>,

    /// Rendered HTML body
    pub content: String,

    /// First words of the body with tags stripped
    pub summary: String,

    /// `date` formatted for RSS feeds
    pub rfc_2822_date: String,
}

impl Post {
    /// Look up an author-supplied header
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.header("title")
    }

    pub fn tag(&self) -> Option<&str> {
        self.header("tag")
    }

    /// Template parameters for this post
    pub fn to_params(&self) -> ParamMap {
        let mut params = ParamMap::new();
        params.insert("date".to_string(), Value::from(iso_date(&self.date)));
        params.insert("slug".to_string(), Value::from(self.slug.as_str()));
        params.insert(
            "src".to_string(),
            Value::from(self.src.to_string_lossy().into_owned()),
        );
        for (key, value) in &self.headers {
            params.insert(key.clone(), Value::from(value.as_str()));
        }
        params.insert("content".to_string(), Value::from(self.content.as_str()));
        params.insert("summary".to_string(), Value::from(self.summary.as_str()));
        params.insert(
            "rfc_2822_date".to_string(),
            Value::from(self.rfc_2822_date.as_str()),
        );
        params
    }
}
