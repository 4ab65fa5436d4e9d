//! Sidebar view model.
//!
//! Combines the sorted tree, the current request path and the expansion
//! choices a reader made during this session into the per-node decisions a
//! renderer needs. Everything is recomputed on each call; nothing here holds
//! ambient state.

use std::collections::HashMap;

use serde::Serialize;

use crate::active::{ActiveState, classify};
use crate::tree::{NavNode, NavTree};

/// Whether a sidebar entry renders as a link or a collapsible folder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Page without children that is not a landing page.
    Leaf,
    /// Page with children, or a folder landing page.
    Folder,
}

/// Sidebar entry with highlight and expansion resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    /// Display title.
    pub title: String,
    /// Document slug.
    pub slug: String,
    /// Link target (base path + slug).
    pub href: String,
    /// Leaf or folder.
    pub kind: NodeKind,
    /// Highlight state for the current path.
    pub state: ActiveState,
    /// Whether the folder shows its children. Always false for leaves.
    pub expanded: bool,
    /// Child entries in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarItem>,
}

/// Expansion choices recorded from direct user interaction.
///
/// A recorded choice for a slug always wins over auto-expansion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionOverrides {
    choices: HashMap<String, bool>,
}

impl ExpansionOverrides {
    /// Create an empty set of overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the reader opened or closed a folder.
    pub fn set(&mut self, slug: impl Into<String>, expanded: bool) {
        self.choices.insert(slug.into(), expanded);
    }

    /// Record a click on a folder header that was rendered `currently_expanded`.
    pub fn toggle(&mut self, slug: impl Into<String>, currently_expanded: bool) {
        self.set(slug, !currently_expanded);
    }

    /// Recorded choice for a slug, if any.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<bool> {
        self.choices.get(slug).copied()
    }

    /// Forget every recorded choice.
    pub fn clear(&mut self) {
        self.choices.clear();
    }
}

/// Build the sidebar for `current_path`.
///
/// Folders auto-expand when they are active or contain the active page,
/// unless `overrides` records a choice for them.
#[must_use]
pub fn build_sidebar(
    tree: &NavTree,
    current_path: &str,
    overrides: &ExpansionOverrides,
    base_path: &str,
) -> Vec<SidebarItem> {
    let ctx = SidebarContext {
        current_path,
        overrides,
        base_path: base_path.trim_end_matches('/'),
    };
    tree.roots().iter().map(|node| ctx.item(node)).collect()
}

struct SidebarContext<'a> {
    current_path: &'a str,
    overrides: &'a ExpansionOverrides,
    base_path: &'a str,
}

impl SidebarContext<'_> {
    fn item(&self, node: &NavNode) -> SidebarItem {
        let state = classify(self.current_path, &node.slug);
        // A landing page always stands for its folder, even an empty one
        let kind = if node.is_folder() || node.is_index() {
            NodeKind::Folder
        } else {
            NodeKind::Leaf
        };
        let expanded = kind == NodeKind::Folder
            && self
                .overrides
                .get(&node.slug)
                .unwrap_or(state != ActiveState::Inactive);

        let children = node.children.iter().map(|child| self.item(child)).collect();

        SidebarItem {
            title: node.title.clone(),
            slug: node.slug.clone(),
            href: format!("{}/{}", self.base_path, node.slug),
            kind,
            state,
            expanded,
            children,
        }
    }
}
