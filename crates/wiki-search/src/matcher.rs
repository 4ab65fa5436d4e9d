//! Substring matching over title, slug and description.

use serde::Serialize;
use wiki_nav::Document;

/// Queries shorter than this (after trimming) do not search.
pub const MIN_QUERY_LEN: usize = 2;

/// Upper bound on returned matches.
pub const MAX_RESULTS: usize = 8;

/// Search limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Minimum trimmed query length in characters.
    pub min_query_len: usize,
    /// Maximum number of results.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: MIN_QUERY_LEN,
            max_results: MAX_RESULTS,
        }
    }
}

/// Matches for one query, in collection order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults<'a> {
    documents: Vec<&'a Document>,
    open: bool,
}

impl<'a> SearchResults<'a> {
    /// Matching documents, at most [`SearchConfig::max_results`].
    #[must_use]
    pub fn documents(&self) -> &[&'a Document] {
        &self.documents
    }

    /// Whether the query was long enough to search.
    ///
    /// A searched query with no matches is still open, so the dropdown can
    /// show a "no results" message.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Search `docs` with the default limits.
///
/// See [`Matcher::search`].
#[must_use]
pub fn search<'a>(query: &str, docs: &'a [Document]) -> SearchResults<'a> {
    Matcher::default().search(query, docs)
}

/// Case-insensitive substring matcher.
#[derive(Clone, Copy, Debug, Default)]
pub struct Matcher {
    config: SearchConfig,
}

impl Matcher {
    /// Create a matcher with custom limits.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Limits in effect.
    #[must_use]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Whether `query` passes the minimum length gate.
    #[must_use]
    pub fn accepts(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.config.min_query_len
    }

    /// Find documents whose title, slug or description contains `query`.
    ///
    /// Comparison is case-insensitive. Results keep collection order and are
    /// truncated to the configured maximum. A query below the minimum length
    /// yields an empty, closed result.
    #[must_use]
    pub fn search<'a>(&self, query: &str, docs: &'a [Document]) -> SearchResults<'a> {
        let Some(indices) = self.match_indices(query, docs) else {
            return SearchResults::default();
        };
        SearchResults {
            documents: indices.into_iter().map(|i| &docs[i]).collect(),
            open: true,
        }
    }

    /// Positions of matching documents, or `None` below the length gate.
    pub(crate) fn match_indices(&self, query: &str, docs: &[Document]) -> Option<Vec<usize>> {
        if !self.accepts(query) {
            return None;
        }

        let needle = query.to_lowercase();
        let indices: Vec<usize> = docs
            .iter()
            .enumerate()
            .filter(|(_, doc)| matches(doc, &needle))
            .map(|(i, _)| i)
            .take(self.config.max_results)
            .collect();

        tracing::debug!(query, match_count = indices.len(), "Search completed");
        Some(indices)
    }
}

/// Check each field independently against an already-lowercased needle.
fn matches(doc: &Document, needle: &str) -> bool {
    contains_lowercase(&doc.title, needle)
        || contains_lowercase(&doc.slug, needle)
        || doc
            .description
            .as_deref()
            .is_some_and(|description| contains_lowercase(description, needle))
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
