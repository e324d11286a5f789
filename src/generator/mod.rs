//! Generator module - renders posts into pages, lists and feeds

mod suggest;

pub use suggest::suggest;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::borrow::Cow;
use std::path::Path;

use crate::config::Params;
use crate::content::loader::read_all;
use crate::content::{MarkdownConverter, Post};
use crate::error::Result;
use crate::helpers::{copy_dir, remove_dir, write_file};
use crate::templates::{render, Layouts};
use crate::Site;

/// Standalone pages, relative to the content directory
pub const PAGE_PATTERNS: &[&str] = &["[!_]*.html", "[!_]*.md"];
/// Blog posts, relative to the content directory
pub const POST_PATTERNS: &[&str] = &["blog/*.html", "blog/*.md"];
/// URL prefix of blog posts
pub const BLOG: &str = "blog";
/// Tag that moves a post from the blog list to the trips list
pub const TRIP_TAG: &str = "trip";
/// Number of posts listed on the home page
pub const HOME_POSTS: usize = 5;

/// Renders posts into output files
pub struct Generator {
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator with randomly seeded suggestions
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a generator whose suggestions are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Render one page per post
    ///
    /// Each post's fields are layered over `params`. When `blog` is set the
    /// page also gets `suggestions` and a `list_slug` pointing back to the
    /// list the post appears in.
    pub fn make_pages(
        &mut self,
        posts: &[Post],
        dst: &str,
        layout: &str,
        params: &Params,
    ) -> Result<()> {
        for post in posts {
            let mut page = params.with_post(post);

            if let Some(blog) = page.get_text("blog").map(Cow::into_owned) {
                let suggestions = suggest(posts, post, &blog, &mut self.rng)?;
                page.set_page("suggestions", suggestions);

                let list_slug = if post.tag() == Some(TRIP_TAG) {
                    "trips"
                } else {
                    "blog"
                };
                page.set_page("list_slug", list_slug);
            }

            let resolved = page.resolve();
            let dst_path = render(dst, &resolved);
            let output = render(layout, &resolved);

            tracing::info!("Rendering {} => {} ...", post.src.display(), dst_path);
            write_file(Path::new(&dst_path), &output)?;
        }

        Ok(())
    }

    /// Render all posts through `item_layout` into one list page or feed
    pub fn make_list(
        &self,
        posts: &[Post],
        dst: &str,
        list_layout: &str,
        item_layout: &str,
        params: &Params,
    ) -> Result<()> {
        let items: String = posts
            .iter()
            .map(|post| render(item_layout, &params.with_post(post).resolve()))
            .collect();

        let mut list = params.clone();
        list.set_page("content", items);
        let resolved = list.resolve();
        let dst_path = render(dst, &resolved);
        let output = render(list_layout, &resolved);

        tracing::info!("Rendering list => {} ...", dst_path);
        write_file(Path::new(&dst_path), &output)
    }

    /// Build the whole site into a fresh output directory
    pub fn generate(&mut self, site: &Site, converter: &dyn MarkdownConverter) -> Result<()> {
        remove_dir(&site.output_dir)?;
        if site.static_dir.is_dir() {
            copy_dir(&site.static_dir, &site.output_dir)?;
        } else {
            tracing::warn!("No static directory at {:?}", site.static_dir);
        }

        let layouts = Layouts::load(&site.layout_dir)?;
        let out = |path: &str| site.output_dir.join(path).to_string_lossy().into_owned();

        // Standalone pages
        let pages = read_all(&site.content_patterns(PAGE_PATTERNS), converter)?;
        self.make_pages(
            &pages,
            &out("{{ slug }}/index.html"),
            &layouts.page,
            &site.params,
        )?;

        // Blog posts
        let posts = read_all(&site.content_patterns(POST_PATTERNS), converter)?;
        let blog = site.params.with("blog", BLOG);
        self.make_pages(
            &posts,
            &out("{{ blog }}/{{ slug }}/index.html"),
            &layouts.post,
            &blog,
        )?;

        let (trip_posts, blog_posts): (Vec<Post>, Vec<Post>) = posts
            .iter()
            .cloned()
            .partition(|p| p.tag() == Some(TRIP_TAG));
        let lists = [
            (&blog_posts, "blog", "Blog"),
            (&trip_posts, "trips", "Trips"),
            (&posts, "posts", "All Posts"),
        ];

        // List pages
        for (list_posts, list_slug, title) in lists {
            self.make_list(
                list_posts,
                &out("{{ list_slug }}/index.html"),
                &layouts.list,
                &layouts.item,
                &blog.with("list_slug", list_slug).with("title", title),
            )?;
        }

        // Home page
        let author = site
            .params
            .get_text("author")
            .unwrap_or_default()
            .into_owned();
        let home = blog.with("title", author.as_str()).with("subtitle", "");
        let latest = &blog_posts[..blog_posts.len().min(HOME_POSTS)];
        self.make_list(
            latest,
            &out("index.html"),
            &layouts.home,
            &layouts.item,
            &home,
        )?;

        // RSS feeds
        for (list_posts, list_slug, title) in lists {
            let feed_title = match title {
                "All Posts" => format!("{}'s Posts", author),
                _ => format!("{}'s {}", author, title),
            };
            self.make_list(
                list_posts,
                &out("{{ list_slug }}/rss.xml"),
                &layouts.feed,
                &layouts.feed_item,
                &blog.with("list_slug", list_slug).with("title", feed_title),
            )?;
        }

        Ok(())
    }
}
