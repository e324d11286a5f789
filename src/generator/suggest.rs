//! Related-post suggestions for blog pages

use rand::Rng;

use crate::content::Post;
use crate::error::{Result, SiteError};

/// Pick up to four posts sharing the current post's tag
///
/// Picks, in order: the latest post, the next newer post, the next older
/// post, and one random post from those left. The current post is never
/// suggested and no post is suggested twice. Returns one `<li>` line per
/// pick, linking to `/{blog}/{slug}/`.
pub fn suggest<R: Rng>(
    posts: &[Post],
    current: &Post,
    blog: &str,
    rng: &mut R,
) -> Result<String> {
    let tag = current.tag();
    let group: Vec<(&str, &str)> = posts
        .iter()
        .filter(|p| p.tag() == tag)
        .map(|p| (p.slug.as_str(), p.title().unwrap_or(p.slug.as_str())))
        .collect();

    let index = group
        .iter()
        .position(|(slug, _)| *slug == current.slug)
        .ok_or_else(|| SiteError::NotInGroup {
            slug: current.slug.clone(),
            tag: tag.map(str::to_string),
        })?;

    let mut chosen = Vec::with_capacity(4);
    let mut neighbours = Vec::with_capacity(3);
    if index > 0 {
        neighbours.push(0);
    }
    if index > 1 {
        neighbours.push(index - 1);
    }
    if index + 1 < group.len() {
        neighbours.push(index + 1);
    }
    for i in neighbours {
        if is_eligible(&chosen, &group[i], &current.slug) {
            chosen.push(group[i]);
        }
    }

    let remaining: Vec<_> = group
        .iter()
        .filter(|candidate| is_eligible(&chosen, candidate, &current.slug))
        .copied()
        .collect();
    if !remaining.is_empty() {
        chosen.push(remaining[rng.random_range(0..remaining.len())]);
    }

    Ok(chosen
        .iter()
        .map(|(slug, title)| format!("<li><a href=\"/{}/{}/\">{}</a></li>\n", blog, slug, title))
        .collect())
}

fn is_eligible<'a>(
    chosen: &[(&'a str, &'a str)],
    candidate: &(&'a str, &'a str),
    current: &str,
) -> bool {
    candidate.0 != current && !chosen.contains(candidate)
}
