//! Content loader - turns content files into posts

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

use super::headers::{body_offset, headers};
use super::markdown::{is_markdown_file, MarkdownConverter};
use super::post::{Post, RESERVED_KEYS};
use crate::error::{Result, SiteError};
use crate::helpers::{
    parse_date, read_file, rfc_2822_date, truncate, DEFAULT_DATE, SUMMARY_WORDS,
};

lazy_static! {
    static ref DATE_SLUG_RE: Regex = Regex::new(r"^(?:(\d\d\d\d-\d\d-\d\d)-)?(.+)$").unwrap();
}

/// Split a file name into its optional date prefix and slug
///
/// Everything after the first `.` is ignored, so `2020-01-01-a.tar.md`
/// yields the slug `a`.
pub fn date_slug(path: &Path) -> Result<(Option<&str>, &str)> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SiteError::InvalidFilename(path.to_path_buf()))?;
    let stem = name.split('.').next().unwrap_or_default();

    let caps = DATE_SLUG_RE
        .captures(stem)
        .ok_or_else(|| SiteError::InvalidFilename(path.to_path_buf()))?;
    let date = caps.get(1).map(|m| m.as_str());
    let slug = caps
        .get(2)
        .map(|m| m.as_str())
        .ok_or_else(|| SiteError::InvalidFilename(path.to_path_buf()))?;

    Ok((date, slug))
}

/// Load a single content file
pub fn load(path: &Path, converter: &dyn MarkdownConverter) -> Result<Post> {
    let text = read_file(path)?;
    let (date, slug) = date_slug(path)?;
    let mut date = date.unwrap_or(DEFAULT_DATE).to_string();
    let mut slug = slug.to_string();

    let mut header_map = IndexMap::new();
    for header in headers(&text) {
        match header.key {
            "date" => date = header.value.to_string(),
            "slug" if header.value.is_empty() => {
                return Err(SiteError::EmptySlug(path.to_path_buf()));
            }
            "slug" => slug = header.value.to_string(),
            key if RESERVED_KEYS.contains(&key) => {
                tracing::debug!("Ignoring reserved header {:?} in {:?}", key, path);
            }
            key => {
                header_map.insert(key.to_string(), header.value.to_string());
            }
        }
    }

    let body = &text[body_offset(&text)..];
    let content = if is_markdown_file(path) {
        match converter.convert(body) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Cannot render Markdown in {}: {}", path.display(), e);
                body.to_string()
            }
        }
    } else {
        body.to_string()
    };

    let date = parse_date(&date)?;
    let summary = truncate(&content, SUMMARY_WORDS);

    Ok(Post {
        date,
        slug,
        src: path.to_path_buf(),
        headers: header_map,
        summary,
        rfc_2822_date: rfc_2822_date(&date),
        content,
    })
}

/// Load every file matching `pattern`, newest first
///
/// Posts with the same date keep the order in which the glob listed them.
/// Hidden files are never matched.
pub fn read_posts(pattern: &str, converter: &dyn MarkdownConverter) -> Result<Vec<Post>> {
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };

    let mut posts = Vec::new();
    for entry in glob::glob_with(pattern, options)? {
        let path = entry?;
        if path.is_file() {
            posts.push(load(&path, converter)?);
        }
    }

    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

/// Load every file matching any of `patterns`, newest first
///
/// Ties keep pattern order, then glob order within a pattern.
pub fn read_all<S: AsRef<str>>(
    patterns: &[S],
    converter: &dyn MarkdownConverter,
) -> Result<Vec<Post>> {
    let mut posts = Vec::new();
    for pattern in patterns {
        posts.extend(read_posts(pattern.as_ref(), converter)?);
    }

    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CommonMark, Disabled};
    use crate::helpers::write_file;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
        let path = dir.path().join(name);
        write_file(&path, text).unwrap();
        path
    }

    #[test]
    fn test_date_and_slug_from_filename() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "2020-05-01-hello.md", "Hi");
        let post = load(&path, &CommonMark).unwrap();
        assert_eq!(post.date.to_string(), "2020-05-01");
        assert_eq!(post.slug, "hello");
    }

    #[test]
    fn test_default_date() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "hello.md", "Hi");
        let post = load(&path, &CommonMark).unwrap();
        assert_eq!(post.date.to_string(), "1970-01-01");
        assert_eq!(post.slug, "hello");
        assert_eq!(post.rfc_2822_date, "Thu, 01 Jan 1970 00:00:00 +0000");
    }

    #[test]
    fn test_headers_and_body() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "2018-01-01-post.html",
            "<!-- title: First -->\n<!-- tag: trip -->\n<!-- title: Second -->\n<p>Body</p>\n",
        );
        let post = load(&path, &CommonMark).unwrap();
        assert_eq!(post.title(), Some("Second"));
        assert_eq!(post.tag(), Some("trip"));
        assert_eq!(post.headers.len(), 2);
        assert_eq!(post.content, "<p>Body</p>\n");
        assert_eq!(post.summary, "Body");
        assert_eq!(post.rfc_2822_date, "Mon, 01 Jan 2018 00:00:00 +0000");
    }

    #[test]
    fn test_markdown_is_rendered() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "page.md", "<!-- title: A -->\n# Hi\n");
        let post = load(&path, &CommonMark).unwrap();
        assert_eq!(post.content, "<h1>Hi</h1>\n");
        assert_eq!(post.summary, "Hi");
    }

    #[test]
    fn test_html_is_not_rendered() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "page.html", "# Hi\n");
        let post = load(&path, &CommonMark).unwrap();
        assert_eq!(post.content, "# Hi\n");
    }

    #[test]
    fn test_markdown_unavailable_keeps_text() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "page.md", "<!-- title: A -->\n# Hi\n");
        let post = load(&path, &Disabled::new("forced by test")).unwrap();
        assert_eq!(post.content, "# Hi\n");
        assert_eq!(post.summary, "# Hi");
    }

    #[test]
    fn test_date_and_slug_headers_override_filename() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "2020-01-01-old.html",
            "<!-- date: 2021-02-03 -->\n<!-- slug: new -->\nBody",
        );
        let post = load(&path, &CommonMark).unwrap();
        assert_eq!(post.date.to_string(), "2021-02-03");
        assert_eq!(post.slug, "new");
        assert!(post.headers.is_empty());
    }

    #[test]
    fn test_reserved_headers_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "a.html", "<!-- summary: fake -->\nreal words");
        let post = load(&path, &CommonMark).unwrap();
        assert_eq!(post.summary, "real words");
        assert!(post.headers.is_empty());
    }

    #[test]
    fn test_blank_headers() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "2020-01-01-a.html", "<!-- title:   -->\nBody");
        let post = load(&path, &CommonMark).unwrap();
        assert_eq!(post.title(), Some(""));
        assert_eq!(post.slug, "a");
        assert_eq!(post.content, "Body");

        let path = write(&tmp, "2020-01-01-b.html", "<!-- slug:   -->\nBody");
        let err = load(&path, &CommonMark).unwrap_err();
        assert!(matches!(err, SiteError::EmptySlug(_)));
    }

    #[test]
    fn test_malformed_date_fails() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "2020-13-45-bad.html", "Body");
        let err = load(&path, &CommonMark).unwrap_err();
        assert!(matches!(err, SiteError::InvalidDate { .. }));

        let path = write(&tmp, "good.html", "<!-- date: soon -->\nBody");
        assert!(load(&path, &CommonMark).is_err());
    }

    #[test]
    fn test_dotfile_has_no_slug() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, ".hidden", "Body");
        let err = load(&path, &CommonMark).unwrap_err();
        assert!(matches!(err, SiteError::InvalidFilename(_)));
    }

    #[test]
    fn test_read_posts_sorted_newest_first() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "2020-01-01-a.html", "A");
        write(&tmp, "2021-06-01-b.html", "B");
        write(&tmp, "2020-06-01-c.html", "C");

        let pattern = format!("{}/*.html", tmp.path().display());
        let posts = read_posts(&pattern, &CommonMark).unwrap();
        let dates: Vec<_> = posts.iter().map(|p| p.date.to_string()).collect();
        assert_eq!(dates, vec!["2021-06-01", "2020-06-01", "2020-01-01"]);
    }

    #[test]
    fn test_read_posts_same_date_keeps_glob_order() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "2020-01-01-a.html", "A");
        write(&tmp, "2020-01-01-b.html", "B");
        write(&tmp, "2019-01-01-c.html", "C");

        let pattern = format!("{}/*.html", tmp.path().display());
        let posts = read_posts(&pattern, &CommonMark).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_read_all_merges_patterns() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "2020-01-01-a.html", "A");
        write(&tmp, "2022-01-01-b.md", "B");
        write(&tmp, "2021-01-01-c.html", "C");
        write(&tmp, "notes.txt", "skipped");

        let dir = tmp.path().display();
        let patterns = [format!("{}/*.html", dir), format!("{}/*.md", dir)];
        let posts = read_all(&patterns, &CommonMark).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "c", "a"]);
        assert_eq!(posts[0].content, "<p>B</p>\n");
    }

    #[test]
    fn test_read_posts_skips_hidden_files() {
        let tmp = TempDir::new().unwrap();
        write(&tmp, "a.html", "A");
        write(&tmp, ".draft.html", "hidden");

        let pattern = format!("{}/*.html", tmp.path().display());
        let posts = read_posts(&pattern, &CommonMark).unwrap();
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn test_read_posts_invalid_pattern() {
        let err = read_posts("content/[", &CommonMark).unwrap_err();
        assert!(matches!(err, SiteError::Pattern(_)));
    }
}
