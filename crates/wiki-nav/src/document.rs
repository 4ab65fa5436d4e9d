//! Document records and slug conventions.
//!
//! # Slug Convention
//!
//! Slugs are `/`-delimited paths without leading or trailing slash:
//! - `"guide"` - top-level page
//! - `"guide/install"` - nested page
//! - `"guide/index"` - landing page of the `guide` folder
//! - `"index"` - site home page, never part of navigation

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Weight assigned to documents that do not declare one.
///
/// Large enough that undeclared documents sort after weighted siblings.
pub const DEFAULT_WEIGHT: i32 = 999;

/// Slug of the site home page, excluded from navigation.
pub const ROOT_INDEX_SLUG: &str = "index";

const INDEX_SUFFIX: &str = "/index";

/// A content document as supplied by the content loader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Slash-delimited path, unique across the collection.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Optional short description, searched but not shown in navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional ordering weight; lower sorts first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

impl Document {
    /// Create a document with no description and no weight.
    #[must_use]
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: None,
            weight: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the ordering weight.
    #[must_use]
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Check whether a slug names a folder landing page (`.../index`).
///
/// The bare root slug `"index"` is not a folder landing page.
#[must_use]
pub fn is_index_slug(slug: &str) -> bool {
    slug.ends_with(INDEX_SUFFIX)
}

/// Strip a trailing `/index` segment, yielding the folder path.
///
/// # Examples
///
/// ```
/// use wiki_nav::folder_slug;
///
/// assert_eq!(folder_slug("guide/index"), "guide");
/// assert_eq!(folder_slug("guide/install"), "guide/install");
/// ```
#[must_use]
pub fn folder_slug(slug: &str) -> &str {
    slug.strip_suffix(INDEX_SUFFIX).unwrap_or(slug)
}

/// Reject slugs that would be silently mis-grouped.
pub(crate) fn validate_slug(slug: &str) -> Result<(), NavError> {
    if slug.is_empty() {
        return Err(NavError::EmptySlug);
    }
    if slug.split('/').any(str::is_empty) {
        return Err(NavError::EmptySegment {
            slug: slug.to_owned(),
        });
    }
    Ok(())
}
