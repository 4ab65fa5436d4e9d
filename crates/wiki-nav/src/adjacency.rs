//! Linear prev/next navigation across the tree.

use serde::Serialize;

use crate::tree::{NavNode, NavTree};

/// A [`NavNode`] without its children, used for linear ordering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlatEntry {
    /// Display title.
    pub title: String,
    /// Document slug.
    pub slug: String,
    /// Effective ordering weight.
    pub weight: i32,
    /// Slug split on `/`.
    #[serde(rename = "pathSegments")]
    pub path_segments: Vec<String>,
}

impl From<&NavNode> for FlatEntry {
    fn from(node: &NavNode) -> Self {
        Self {
            title: node.title.clone(),
            slug: node.slug.clone(),
            weight: node.weight,
            path_segments: node.path_segments.clone(),
        }
    }
}

/// Neighbours of a page in reading order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Adjacent {
    /// Page before the current one, if any.
    pub prev: Option<FlatEntry>,
    /// Page after the current one, if any.
    pub next: Option<FlatEntry>,
}

/// Flatten the tree depth-first in pre-order.
///
/// Landing pages (`.../index`) are left out, but their children are still
/// visited in place.
#[must_use]
pub fn flatten(tree: &NavTree) -> Vec<FlatEntry> {
    tree.iter()
        .filter(|node| !node.is_index())
        .map(FlatEntry::from)
        .collect()
}

/// Find the previous and next pages around `current_slug`.
///
/// `current_slug` matches an entry by exact slug or as the bare folder path
/// of a `.../index` entry. An unknown slug yields no neighbours.
#[must_use]
pub fn find_adjacent_pages(tree: &NavTree, current_slug: &str) -> Adjacent {
    let flat = flatten(tree);

    let Some(pos) = flat.iter().position(|entry| {
        entry.slug == current_slug
            || entry
                .slug
                .strip_suffix("/index")
                .is_some_and(|folder| folder == current_slug)
    }) else {
        return Adjacent::default();
    };

    Adjacent {
        prev: pos.checked_sub(1).and_then(|p| flat.get(p)).cloned(),
        next: flat.get(pos + 1).cloned(),
    }
}
