//! makesite-rs: a small static site and blog generator
//!
//! Content files carry `<!-- key: value -->` headers and an HTML or Markdown
//! body. They are rendered through flat `{{ placeholder }}` layouts into
//! pages, blog posts, list pages, a home page and RSS feeds.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Directory holding pages and the `blog/` posts
pub const CONTENT_DIR: &str = "content";
/// Directory holding the layout templates
pub const LAYOUT_DIR: &str = "layout";
/// Directory copied verbatim into the output
pub const STATIC_DIR: &str = "static";
/// Generated site
pub const OUTPUT_DIR: &str = "_site";

/// A site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Layout directory
    pub layout_dir: PathBuf,
    /// Static assets directory
    pub static_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
    /// Defaults merged with `params.json`
    pub params: config::Params,
}

impl Site {
    /// Open a site, loading `params.json` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let overrides = config::load_overrides(&base_dir.join(config::PARAMS_FILE))?;
        let params = config::Params::defaults().with_config(overrides);

        Ok(Self {
            content_dir: base_dir.join(CONTENT_DIR),
            layout_dir: base_dir.join(LAYOUT_DIR),
            static_dir: base_dir.join(STATIC_DIR),
            output_dir: base_dir.join(OUTPUT_DIR),
            base_dir,
            params,
        })
    }

    /// Glob patterns under the content directory
    pub fn content_patterns(&self, patterns: &[&str]) -> Vec<String> {
        let dir = glob::Pattern::escape(&self.content_dir.to_string_lossy());
        patterns
            .iter()
            .map(|pattern| format!("{}/{}", dir, pattern))
            .collect()
    }

    /// Build the whole site from scratch
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self, &commands::generate::GenerateOptions::default())
    }

    /// Delete the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
