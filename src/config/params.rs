//! Template parameters
//!
//! Parameters live in four layers, lowest precedence first: built-in
//! defaults, overrides from `params.json`, values added by one generator
//! call, and values for one output page. Lookups search from the top layer
//! down; `resolve` flattens the layers into the ordered map that the
//! template renderer substitutes.

use chrono::Datelike;
use indexmap::IndexMap;
use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;

use crate::content::Post;
use crate::error::{Result, SiteError};
use crate::helpers::read_file;

/// Name of the optional overrides file in the site root
pub const PARAMS_FILE: &str = "params.json";

/// Ordered parameter map
pub type ParamMap = IndexMap<String, Value>;

/// Layered template parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    defaults: ParamMap,
    config: ParamMap,
    invocation: ParamMap,
    page: ParamMap,
}

impl Params {
    /// Create parameters with the given defaults layer
    pub fn new(defaults: ParamMap) -> Self {
        Self {
            defaults,
            ..Default::default()
        }
    }

    /// Built-in defaults
    pub fn defaults() -> Self {
        let mut defaults = ParamMap::new();
        defaults.insert("subtitle".to_string(), Value::from(" - Sunaina Pai"));
        defaults.insert("author".to_string(), Value::from("Sunaina Pai"));
        defaults.insert("site_url".to_string(), Value::from("http://localhost:8000"));
        defaults.insert("start_year".to_string(), Value::from(2014));
        defaults.insert(
            "current_year".to_string(),
            Value::from(chrono::Local::now().year()),
        );
        Self::new(defaults)
    }

    /// Replace the config layer
    pub fn with_config(mut self, overrides: ParamMap) -> Self {
        self.config = overrides;
        self
    }

    /// Copy with one more per-call value
    pub fn with(&self, key: &str, value: impl Into<Value>) -> Self {
        let mut params = self.clone();
        params.invocation.insert(key.to_string(), value.into());
        params
    }

    /// Copy with a post's fields layered on top
    pub fn with_post(&self, post: &Post) -> Self {
        let mut params = self.clone();
        params.page.extend(post.to_params());
        params
    }

    /// Set a value for the current page only
    pub fn set_page(&mut self, key: &str, value: impl Into<Value>) {
        self.page.insert(key.to_string(), value.into());
    }

    /// Look up a value, highest layer first
    pub fn get(&self, key: &str) -> Option<&Value> {
        [&self.page, &self.invocation, &self.config, &self.defaults]
            .into_iter()
            .find_map(|layer| layer.get(key))
    }

    /// Look up a value as template text
    pub fn get_text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(value_text)
    }

    /// Flatten all layers into one map
    ///
    /// A key keeps the position where its lowest layer first defined it and
    /// takes the value of its highest layer.
    pub fn resolve(&self) -> ParamMap {
        let mut resolved = self.defaults.clone();
        for layer in [&self.config, &self.invocation, &self.page] {
            for (key, value) in layer {
                resolved.insert(key.clone(), value.clone());
            }
        }
        resolved
    }
}

/// Text inserted into a template for a value
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

/// Load overrides from a JSON object file; a missing file means none
pub fn load_overrides(path: &Path) -> Result<ParamMap> {
    if !path.is_file() {
        return Ok(ParamMap::new());
    }

    let text = read_file(path)?;
    let overrides: ParamMap = serde_json::from_str(&text).map_err(|source| SiteError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Loaded {} params from {:?}", overrides.len(), path);
    Ok(overrides)
}
