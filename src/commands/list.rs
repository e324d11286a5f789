//! List site content

use anyhow::Result;

use crate::content::{read_all, CommonMark, Post};
use crate::generator::POST_PATTERNS;
use crate::Site;

/// Load the blog posts, newest first
pub fn posts(site: &Site) -> Result<Vec<Post>> {
    Ok(read_all(&site.content_patterns(POST_PATTERNS), &CommonMark)?)
}

/// One summary line for a post
pub fn line(post: &Post) -> String {
    format!(
        "  {}  {}  {} [{}]",
        post.date,
        post.slug,
        post.title().unwrap_or("(untitled)"),
        post.tag().unwrap_or("-")
    )
}

/// Print the blog posts, as text or as a JSON array
pub fn run(site: &Site, json: bool) -> Result<()> {
    let posts = posts(site)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("{}", line(post));
    }

    Ok(())
}
