//! Navigation tree construction.
//!
//! # Architecture
//!
//! Building happens in two passes over a flat arena:
//! 1. Every document (except the home page) becomes an entry, indexed by slug
//! 2. Each entry is linked to its parent by index lookup, or promoted to root
//!
//! Sibling lists are then sorted in place and the arena is materialized into
//! owned [`NavNode`] values. No node is shared or mutated after that.
//!
//! # Folder Landing Pages
//!
//! A `folder/index` document is folded into `folder` when a `folder` document
//! exists. Otherwise it stands in for the folder: it takes the folder's place
//! in the tree and hosts the folder's children.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::document::{
    DEFAULT_WEIGHT, Document, ROOT_INDEX_SLUG, folder_slug, is_index_slug, validate_slug,
};
use crate::error::NavError;

/// Node of the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavNode {
    /// Display title.
    pub title: String,
    /// Document slug, unique within the tree.
    pub slug: String,
    /// Effective ordering weight.
    pub weight: i32,
    /// Ordered child nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
    /// Slug split on `/`.
    #[serde(rename = "pathSegments")]
    pub path_segments: Vec<String>,
}

impl NavNode {
    /// True for folder landing pages (`.../index`).
    #[must_use]
    pub fn is_index(&self) -> bool {
        is_index_slug(&self.slug)
    }

    /// True when the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True when the node has at least one child.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of segments from the conceptual root, starting at 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path_segments.len().saturating_sub(1)
    }
}

/// Non-fatal diagnostic collected while building a tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildWarning {
    /// A node deeper than two segments had no resolvable parent and was
    /// left out of the tree along with its descendants.
    OrphanedNode {
        /// Slug of the dropped node.
        slug: String,
        /// Parent slug that could not be resolved.
        parent_slug: String,
    },
    /// A node left out because an ancestor was orphaned.
    DroppedWithAncestor {
        /// Slug of the dropped node.
        slug: String,
        /// Slug of the orphaned ancestor that took it out of the tree.
        orphan: String,
    },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrphanedNode { slug, parent_slug } => write!(
                f,
                "'{slug}' has no parent document ('{parent_slug}' or '{parent_slug}/index') and was left out of navigation"
            ),
            Self::DroppedWithAncestor { slug, orphan } => write!(
                f,
                "'{slug}' was left out of navigation with its orphaned ancestor '{orphan}'"
            ),
        }
    }
}

/// Sorted navigation forest plus the diagnostics gathered while building it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavTree {
    roots: Vec<NavNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<BuildWarning>,
}

impl NavTree {
    /// Top-level nodes in display order.
    #[must_use]
    pub fn roots(&self) -> &[NavNode] {
        &self.roots
    }

    /// Diagnostics for documents that could not be placed.
    #[must_use]
    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }

    /// True when the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Iterate all nodes in depth-first pre-order, index nodes included.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// Find a node by exact slug.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&NavNode> {
        self.iter().find(|node| node.slug == slug)
    }
}

/// Depth-first pre-order iterator over a [`NavTree`].
pub struct PreOrder<'a> {
    stack: Vec<&'a NavNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a NavNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Build a sorted navigation tree with the default weight sentinel.
///
/// See [`NavTreeBuilder::build`].
pub fn build_navigation_tree(docs: &[Document]) -> Result<NavTree, NavError> {
    NavTreeBuilder::new().build(docs)
}

/// Configurable navigation tree builder.
#[derive(Clone, Debug)]
pub struct NavTreeBuilder {
    default_weight: i32,
}

impl Default for NavTreeBuilder {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

/// Arena entry for one document.
struct Entry<'a> {
    doc: &'a Document,
    weight: i32,
    is_index: bool,
}

/// Where an entry ends up after parent resolution.
enum Placement<'a> {
    Root,
    Child(usize),
    /// Landing page folded into an existing folder document.
    Folded,
    Orphan(&'a str),
}

impl NavTreeBuilder {
    /// Create a builder using [`DEFAULT_WEIGHT`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight given to documents without one.
    #[must_use]
    pub fn default_weight(mut self, weight: i32) -> Self {
        self.default_weight = weight;
        self
    }

    /// Build a sorted navigation tree from a flat document collection.
    ///
    /// The home page (slug `"index"`) is skipped. Documents two segments deep
    /// whose parent is missing are promoted to the top level; deeper orphans
    /// are dropped and reported in [`NavTree::warnings`].
    ///
    /// Every sibling list is ordered landing pages first, then by ascending
    /// weight, keeping input order for ties.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] for an empty slug, an empty path segment, or a
    /// slug shared by two documents.
    pub fn build(&self, docs: &[Document]) -> Result<NavTree, NavError> {
        let mut seen = HashSet::with_capacity(docs.len());
        let mut entries = Vec::with_capacity(docs.len());
        let mut slug_index: HashMap<&str, usize> = HashMap::with_capacity(docs.len());

        for doc in docs {
            validate_slug(&doc.slug)?;
            if !seen.insert(doc.slug.as_str()) {
                return Err(NavError::DuplicateSlug {
                    slug: doc.slug.clone(),
                });
            }
            if doc.slug == ROOT_INDEX_SLUG {
                continue;
            }
            slug_index.insert(doc.slug.as_str(), entries.len());
            entries.push(Entry {
                doc,
                weight: doc.weight.unwrap_or(self.default_weight),
                is_index: is_index_slug(&doc.slug),
            });
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];
        let mut roots = Vec::new();
        let mut warnings = Vec::new();
        let mut folded = 0usize;
        let mut orphans = Vec::new();

        for (idx, entry) in entries.iter().enumerate() {
            match resolve_placement(&entry.doc.slug, &slug_index) {
                Placement::Root => roots.push(idx),
                Placement::Child(parent) => children[parent].push(idx),
                Placement::Folded => folded += 1,
                Placement::Orphan(parent_slug) => {
                    tracing::warn!(
                        slug = %entry.doc.slug,
                        parent = %parent_slug,
                        "Navigation node has no parent document, skipping"
                    );
                    warnings.push(BuildWarning::OrphanedNode {
                        slug: entry.doc.slug.clone(),
                        parent_slug: parent_slug.to_owned(),
                    });
                    orphans.push(idx);
                }
            }
        }

        for orphan in orphans {
            let orphan_slug = &entries[orphan].doc.slug;
            let mut stack = children[orphan].clone();
            while let Some(idx) = stack.pop() {
                stack.extend_from_slice(&children[idx]);
                tracing::warn!(
                    slug = %entries[idx].doc.slug,
                    orphan = %orphan_slug,
                    "Navigation node dropped with orphaned ancestor"
                );
                warnings.push(BuildWarning::DroppedWithAncestor {
                    slug: entries[idx].doc.slug.clone(),
                    orphan: orphan_slug.clone(),
                });
            }
        }

        sort_siblings(&mut roots, &entries);
        for siblings in &mut children {
            sort_siblings(siblings, &entries);
        }

        let roots: Vec<NavNode> = roots
            .iter()
            .map(|&idx| materialize(idx, &entries, &children))
            .collect();

        tracing::debug!(
            document_count = docs.len(),
            root_count = roots.len(),
            folded_count = folded,
            dropped_count = warnings.len(),
            "Navigation tree built"
        );

        Ok(NavTree { roots, warnings })
    }
}

/// Decide where a slug attaches.
///
/// Landing pages are placed by their folder path, so `a/b/index` without an
/// `a/b` document resolves exactly as `a/b` would.
fn resolve_placement<'a>(slug: &'a str, slug_index: &HashMap<&str, usize>) -> Placement<'a> {
    let anchor = folder_slug(slug);
    if anchor.len() != slug.len() && slug_index.contains_key(anchor) {
        return Placement::Folded;
    }

    let Some((parent_slug, _)) = anchor.rsplit_once('/') else {
        return Placement::Root;
    };

    if let Some(&parent) = slug_index.get(parent_slug) {
        return Placement::Child(parent);
    }
    if let Some(&parent) = slug_index.get(format!("{parent_slug}/index").as_str()) {
        return Placement::Child(parent);
    }

    if parent_slug.contains('/') {
        Placement::Orphan(parent_slug)
    } else {
        // Missing top-level folder page: promote rather than drop
        Placement::Root
    }
}

/// Landing pages first, then ascending weight; stable for ties.
fn sort_siblings(siblings: &mut [usize], entries: &[Entry<'_>]) {
    siblings.sort_by_key(|&idx| (!entries[idx].is_index, entries[idx].weight));
}

fn materialize(idx: usize, entries: &[Entry<'_>], children: &[Vec<usize>]) -> NavNode {
    let entry = &entries[idx];
    NavNode {
        title: entry.doc.title.clone(),
        slug: entry.doc.slug.clone(),
        weight: entry.weight,
        children: children[idx]
            .iter()
            .map(|&child| materialize(child, entries, children))
            .collect(),
        path_segments: entry.doc.slug.split('/').map(str::to_owned).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static_assertions::assert_impl_all!(super::NavTree: Send, Sync);

    fn slugs(nodes: &[NavNode]) -> Vec<&str> {
        nodes.iter().map(|node| node.slug.as_str()).collect()
    }

    #[test]
    fn test_empty_collection_builds_empty_tree() {
        let tree = build_navigation_tree(&[]).unwrap();

        assert!(tree.is_empty());
        assert!(tree.warnings().is_empty());
    }

    #[test]
    fn test_folder_with_weighted_children() {
        let docs = vec![
            Document::new("guide", "Guide").with_weight(1),
            Document::new("guide/install", "Install").with_weight(1),
            Document::new("guide/faq", "FAQ").with_weight(2),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(slugs(tree.roots()), vec!["guide"]);
        let guide = &tree.roots()[0];
        assert!(guide.is_folder());
        assert_eq!(slugs(&guide.children), vec!["guide/install", "guide/faq"]);
        assert!(guide.children[0].is_leaf());
    }

    #[test]
    fn test_root_index_is_excluded() {
        let docs = vec![
            Document::new("index", "Home"),
            Document::new("guide", "Guide"),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(slugs(tree.roots()), vec!["guide"]);
        assert!(tree.find("index").is_none());
    }

    #[test]
    fn test_node_fields_from_document() {
        let docs = vec![Document::new("a/b", "B").with_weight(4)];

        let tree = build_navigation_tree(&docs).unwrap();

        let node = &tree.roots()[0];
        assert_eq!(node.title, "B");
        assert_eq!(node.weight, 4);
        assert_eq!(node.path_segments, vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(node.depth(), 1);
    }

    #[test]
    fn test_missing_weight_uses_sentinel() {
        let docs = vec![Document::new("a", "A")];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(tree.roots()[0].weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn test_custom_default_weight() {
        let docs = vec![
            Document::new("unweighted", "Unweighted"),
            Document::new("weighted", "Weighted").with_weight(5),
        ];

        let tree = NavTreeBuilder::new().default_weight(0).build(&docs).unwrap();

        assert_eq!(slugs(tree.roots()), vec!["unweighted", "weighted"]);
    }

    #[test]
    fn test_explicit_zero_weight_is_kept() {
        let docs = vec![
            Document::new("b", "B").with_weight(1),
            Document::new("a", "A").with_weight(0),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(slugs(tree.roots()), vec!["a", "b"]);
    }

    #[test]
    fn test_unweighted_documents_sort_last() {
        let docs = vec![
            Document::new("c", "C"),
            Document::new("b", "B").with_weight(20),
            Document::new("a", "A").with_weight(10),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(slugs(tree.roots()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_equal_weights_keep_input_order() {
        let docs = vec![
            Document::new("zeta", "Zeta"),
            Document::new("alpha", "Alpha"),
            Document::new("mid", "Mid").with_weight(5),
            Document::new("beta", "Beta"),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(slugs(tree.roots()), vec!["mid", "zeta", "alpha", "beta"]);
    }

    #[test]
    fn test_two_segment_orphan_promoted_to_root() {
        let docs = vec![
            Document::new("api/auth", "Auth"),
            Document::new("guide", "Guide"),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(slugs(tree.roots()), vec!["api/auth", "guide"]);
        assert!(tree.warnings().is_empty());
    }

    #[test]
    fn test_deep_orphan_is_reported() {
        let docs = vec![
            Document::new("guide", "Guide"),
            Document::new("guide/advanced/tuning", "Tuning"),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(slugs(tree.roots()), vec!["guide"]);
        assert!(tree.roots()[0].is_leaf());
        assert_eq!(
            tree.warnings(),
            &[BuildWarning::OrphanedNode {
                slug: "guide/advanced/tuning".to_owned(),
                parent_slug: "guide/advanced".to_owned(),
            }]
        );
    }

    #[test]
    fn test_orphan_descendants_are_reported() {
        let docs = vec![
            Document::new("guide", "Guide"),
            Document::new("guide/a/b", "B"),
            Document::new("guide/a/b/c", "C"),
            Document::new("guide/a/b/c/d", "D"),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(tree.iter().count() + tree.warnings().len(), docs.len());
        let mut reported: Vec<_> = tree
            .warnings()
            .iter()
            .map(|w| match w {
                BuildWarning::OrphanedNode { slug, .. } => (slug.as_str(), "guide/a/b"),
                BuildWarning::DroppedWithAncestor { slug, orphan } => {
                    (slug.as_str(), orphan.as_str())
                }
            })
            .collect();
        reported.sort_unstable();
        assert_eq!(
            reported,
            vec![
                ("guide/a/b", "guide/a/b"),
                ("guide/a/b/c", "guide/a/b"),
                ("guide/a/b/c/d", "guide/a/b"),
            ]
        );
    }

    #[test]
    fn test_orphan_warning_display_names_both_candidates() {
        let warning = BuildWarning::OrphanedNode {
            slug: "a/b/c".to_owned(),
            parent_slug: "a/b".to_owned(),
        };

        let msg = warning.to_string();

        assert!(msg.contains("'a/b/c'"));
        assert!(msg.contains("'a/b/index'"));
    }

    #[test]
    fn test_index_folded_into_existing_folder() {
        let docs = vec![
            Document::new("guide", "Guide"),
            Document::new("guide/index", "Guide Overview"),
            Document::new("guide/install", "Install"),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(slugs(tree.roots()), vec!["guide"]);
        assert_eq!(slugs(&tree.roots()[0].children), vec!["guide/install"]);
        assert!(tree.find("guide/index").is_none());
    }

    #[test]
    fn test_index_stands_in_for_missing_folder() {
        let docs = vec![
            Document::new("guide/install", "Install"),
            Document::new("guide/index", "Guide"),
            Document::new("guide/faq", "FAQ"),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(slugs(tree.roots()), vec!["guide/index"]);
        let folder = &tree.roots()[0];
        assert!(folder.is_index());
        assert_eq!(slugs(&folder.children), vec!["guide/install", "guide/faq"]);
    }

    #[test]
    fn test_nested_index_attaches_to_grandparent() {
        let docs = vec![
            Document::new("guide", "Guide"),
            Document::new("guide/advanced/index", "Advanced"),
            Document::new("guide/advanced/tuning", "Tuning"),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        let guide = &tree.roots()[0];
        assert_eq!(slugs(&guide.children), vec!["guide/advanced/index"]);
        assert_eq!(
            slugs(&guide.children[0].children),
            vec!["guide/advanced/tuning"]
        );
        assert!(tree.warnings().is_empty());
    }

    #[test]
    fn test_index_nodes_sort_before_lighter_siblings() {
        let docs = vec![
            Document::new("a", "A").with_weight(1),
            Document::new("b/index", "B").with_weight(50),
            Document::new("b/page", "Page"),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        assert_eq!(slugs(tree.roots()), vec!["b/index", "a"]);
    }

    #[test]
    fn test_sorting_applies_at_every_level() {
        let docs = vec![
            Document::new("a", "A"),
            Document::new("a/b", "B"),
            Document::new("a/b/y", "Y").with_weight(2),
            Document::new("a/b/x", "X").with_weight(1),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        let b = &tree.roots()[0].children[0];
        assert_eq!(slugs(&b.children), vec!["a/b/x", "a/b/y"]);
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let docs = vec![Document::new("a/b", "First"), Document::new("a/b", "Second")];

        let err = build_navigation_tree(&docs).unwrap_err();

        assert_eq!(
            err,
            NavError::DuplicateSlug {
                slug: "a/b".to_owned()
            }
        );
    }

    #[test]
    fn test_malformed_slug_is_rejected() {
        let docs = vec![Document::new("guide/", "Guide")];

        let err = build_navigation_tree(&docs).unwrap_err();

        assert!(matches!(err, NavError::EmptySegment { .. }));
    }

    #[test]
    fn test_iter_visits_pre_order() {
        let docs = vec![
            Document::new("a", "A").with_weight(1),
            Document::new("a/x", "X"),
            Document::new("b", "B").with_weight(2),
        ];

        let tree = build_navigation_tree(&docs).unwrap();

        let order: Vec<_> = tree.iter().map(|node| node.slug.as_str()).collect();
        assert_eq!(order, vec!["a", "a/x", "b"]);
    }

    #[test]
    fn test_serialization_uses_camel_case_segments() {
        let docs = vec![Document::new("guide", "Guide")];
        let tree = build_navigation_tree(&docs).unwrap();

        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(json["roots"][0]["slug"], "guide");
        assert_eq!(json["roots"][0]["pathSegments"][0], "guide");
        assert!(json["roots"][0].get("children").is_none());
        assert!(json.get("warnings").is_none());
    }
}
