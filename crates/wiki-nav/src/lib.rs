//! Navigation structure for wiki documentation.
//!
//! This crate turns a flat, unordered collection of [`Document`] records into
//! everything the sidebar and page footer need:
//! - [`build_navigation_tree`]: ordered [`NavTree`] built from slug segments
//! - [`find_adjacent_pages`]: previous/next pages in depth-first order
//! - [`is_active`] / [`is_ancestor_of_active`]: highlighting predicates
//! - [`build_sidebar`]: per-node highlight and expansion decisions
//!
//! No I/O happens here. Documents are supplied already decoded, and every
//! output is recomputed from scratch for each render.
//!
//! # Quick Start
//!
//! ```
//! use wiki_nav::{Document, build_navigation_tree, find_adjacent_pages};
//!
//! let docs = vec![
//!     Document::new("guide", "Guide").with_weight(1),
//!     Document::new("guide/install", "Install").with_weight(1),
//!     Document::new("guide/faq", "FAQ").with_weight(2),
//! ];
//!
//! let tree = build_navigation_tree(&docs)?;
//! assert_eq!(tree.roots()[0].children.len(), 2);
//!
//! let adjacent = find_adjacent_pages(&tree, "guide/install");
//! assert_eq!(adjacent.prev.map(|p| p.slug).as_deref(), Some("guide"));
//! assert_eq!(adjacent.next.map(|p| p.slug).as_deref(), Some("guide/faq"));
//! # Ok::<(), wiki_nav::NavError>(())
//! ```

mod active;
mod adjacency;
mod document;
mod error;
mod sidebar;
mod tree;

pub use active::{ActiveState, classify, is_active, is_ancestor_of_active};
pub use adjacency::{Adjacent, FlatEntry, find_adjacent_pages, flatten};
pub use document::{DEFAULT_WEIGHT, Document, ROOT_INDEX_SLUG, folder_slug, is_index_slug};
pub use error::NavError;
pub use sidebar::{ExpansionOverrides, NodeKind, SidebarItem, build_sidebar};
pub use tree::{BuildWarning, NavNode, NavTree, NavTreeBuilder, PreOrder, build_navigation_tree};
