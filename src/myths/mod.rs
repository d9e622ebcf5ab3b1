//! Static story pages for the origin-myth series.
//!
//! Thirteen standalone HTML pages plus a timeline index, emitted as plain
//! strings. The pages share one fixed layout (header, hero, quote, story,
//! AI metaphor grid, footer chain, particle canvas); only the per-story
//! content table differs. There is no templating engine on purpose.

pub mod index;
pub mod page;
pub mod stories;

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;

pub use stories::{Story, STORIES};

/// Look up a story by slug.
pub fn story(slug: &str) -> Option<&'static Story> {
    STORIES.iter().find(|s| s.slug == slug)
}

/// Previous and next story in timeline order, if any.
pub fn neighbors(slug: &str) -> (Option<&'static Story>, Option<&'static Story>) {
    let idx = match STORIES.iter().position(|s| s.slug == slug) {
        Some(i) => i,
        None => return (None, None),
    };
    let prev = if idx > 0 { Some(&STORIES[idx - 1]) } else { None };
    let next = STORIES.get(idx + 1);
    (prev, next)
}

/// Write the 13 story pages and the timeline index into `out_dir`.
///
/// Returns the written paths, stories first, index last.
pub fn generate(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(STORIES.len() + 1);
    for s in STORIES {
        let path = out_dir.join(format!("{}.html", s.slug));
        fs::write(&path, page::render(s))?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    let index_path = out_dir.join("index.html");
    fs::write(&index_path, index::render())?;
    info!("wrote {}", index_path.display());
    written.push(index_path);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_stories_in_canonical_order() {
        assert_eq!(STORIES.len(), 13);
        assert_eq!(STORIES[0].slug, "pangu");
        assert_eq!(STORIES[12].slug, "xingtian");
    }

    #[test]
    fn neighbors_follow_the_chain() {
        let (prev, next) = neighbors("pangu");
        assert!(prev.is_none());
        assert_eq!(next.map(|s| s.slug), Some("nvwa"));

        let (prev, next) = neighbors("xingtian");
        assert_eq!(prev.map(|s| s.slug), Some("hanba"));
        assert!(next.is_none());

        let (prev, next) = neighbors("fuxi");
        assert_eq!(prev.map(|s| s.slug), Some("suiren"));
        assert_eq!(next.map(|s| s.slug), Some("shennong"));
    }

    #[test]
    fn slugs_and_gradients_are_unique() {
        for (i, a) in STORIES.iter().enumerate() {
            for b in &STORIES[i + 1..] {
                assert_ne!(a.slug, b.slug);
                assert_ne!(a.title, b.title);
                assert_ne!(a.gradient, b.gradient);
            }
        }
    }

    #[test]
    fn lookup_by_slug() {
        assert_eq!(story("nvwa").map(|s| s.title), Some("女娲造人"));
        assert!(story("houyi").is_none());
    }
}
