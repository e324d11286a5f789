//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::PARAMS_FILE;
use crate::helpers::write_file;
use crate::templates::DEFAULT_LAYOUTS;
use crate::{CONTENT_DIR, LAYOUT_DIR, STATIC_DIR};

const PARAMS: &str = r#"{
    "author": "Jane Doe",
    "subtitle": " - Jane Doe",
    "site_url": "http://localhost:8000",
    "start_year": 2024
}
"#;

const STYLE: &str = r#"body {
    max-width: 42em;
    margin: 2em auto;
    padding: 0 1em;
    font-family: sans-serif;
    line-height: 1.5;
}

nav a, footer {
    color: #555;
}

.summary {
    color: #333;
}
"#;

const ABOUT: &str = r#"<!-- title: About -->
<p>This site is built with makesite.</p>
"#;

const HELLO: &str = r#"<!-- title: Hello, World -->
<!-- tag: blog -->

The first post. Edit `content/blog/` to add more.
"#;

/// Initialize a new site in the given directory
///
/// Files that already exist are left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join(CONTENT_DIR).join("blog"))?;

    let mut files: Vec<(String, &str)> = DEFAULT_LAYOUTS
        .iter()
        .map(|(name, text)| (format!("{}/{}", LAYOUT_DIR, name), *text))
        .collect();
    files.push((PARAMS_FILE.to_string(), PARAMS));
    files.push((format!("{}/css/style.css", STATIC_DIR), STYLE));
    files.push((format!("{}/about.html", CONTENT_DIR), ABOUT));
    files.push((format!("{}/blog/2024-01-01-hello-world.md", CONTENT_DIR), HELLO));

    for (name, text) in files {
        let path = target_dir.join(name);
        if path.exists() {
            tracing::debug!("Keeping existing {:?}", path);
            continue;
        }
        write_file(&path, text)?;
    }

    Ok(())
}
