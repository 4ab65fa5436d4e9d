//! Active-page classification for sidebar highlighting.

use serde::Serialize;

use crate::document::folder_slug;

/// Highlight state of a navigation node for the current request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveState {
    /// The node is the current page.
    Active,
    /// The current page lies below this node.
    Ancestor,
    /// Neither.
    Inactive,
}

/// Check whether `slug` is the page at `current_path`.
///
/// A folder landing page is active when the bare folder path is requested.
#[must_use]
pub fn is_active(current_path: &str, slug: &str) -> bool {
    current_path == slug || current_path == folder_slug(slug)
}

/// Check whether `current_path` lies strictly below `slug`.
///
/// Matching is by whole path segments, so `guide` is not an ancestor of
/// `guides/setup`. Never true when [`is_active`] is.
#[must_use]
pub fn is_ancestor_of_active(current_path: &str, slug: &str) -> bool {
    if is_active(current_path, slug) {
        return false;
    }
    current_path
        .strip_prefix(folder_slug(slug))
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Classify a node for the current request path.
#[must_use]
pub fn classify(current_path: &str, slug: &str) -> ActiveState {
    if is_active(current_path, slug) {
        ActiveState::Active
    } else if is_ancestor_of_active(current_path, slug) {
        ActiveState::Ancestor
    } else {
        ActiveState::Inactive
    }
}
