//! Create a new blog post

use anyhow::Result;
use std::path::PathBuf;

use crate::helpers::write_file;
use crate::Site;

/// Create `content/blog/<today>-<slug>.<ext>` with a header block
pub fn create_post(site: &Site, title: &str, tag: Option<&str>, markdown: bool) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    let today = chrono::Local::now().format("%Y-%m-%d");
    let ext = if markdown { "md" } else { "html" };
    let file_path = site
        .content_dir
        .join("blog")
        .join(format!("{}-{}.{}", today, slug, ext));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let mut text = format!("<!-- title: {} -->\n", title);
    if let Some(tag) = tag {
        text.push_str(&format!("<!-- tag: {} -->\n", tag));
    }
    text.push('\n');
    text.push_str(if markdown {
        "Write your post here.\n"
    } else {
        "<p>Write your post here.</p>\n"
    });

    write_file(&file_path, &text)?;
    Ok(file_path)
}
