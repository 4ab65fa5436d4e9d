//! Interactive search state.
//!
//! A [`SearchSession`] mirrors the search box and its results dropdown. Every
//! query change recomputes matches synchronously, so a newer keystroke always
//! replaces whatever the previous one produced.

use wiki_nav::Document;

use crate::matcher::{Matcher, SearchConfig};

/// Dropdown state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// Query empty, too short, or the dropdown was dismissed.
    Idle,
    /// Results for the current query are shown.
    Searching,
}

/// Search box state over a borrowed document collection.
#[derive(Debug)]
pub struct SearchSession<'a> {
    docs: &'a [Document],
    matcher: Matcher,
    query: String,
    state: SearchState,
    results: Vec<usize>,
    highlighted: usize,
}

impl<'a> SearchSession<'a> {
    /// Create an idle session with default limits.
    #[must_use]
    pub fn new(docs: &'a [Document]) -> Self {
        Self::with_config(docs, SearchConfig::default())
    }

    /// Create an idle session with custom limits.
    #[must_use]
    pub fn with_config(docs: &'a [Document], config: SearchConfig) -> Self {
        Self {
            docs,
            matcher: Matcher::new(config),
            query: String::new(),
            state: SearchState::Idle,
            results: Vec::new(),
            highlighted: 0,
        }
    }

    /// Handle a change of the query text.
    ///
    /// Short queries close the dropdown; anything else recomputes results.
    /// The highlight moves back to the first result only when the results
    /// differ from the previous ones.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();

        let (results, state) = match self.matcher.match_indices(&self.query, self.docs) {
            Some(results) => (results, SearchState::Searching),
            None => (Vec::new(), SearchState::Idle),
        };

        if state != self.state || results != self.results {
            self.highlighted = 0;
        }
        self.results = results;
        self.state = state;
    }

    /// Close the dropdown, keeping the query text.
    pub fn dismiss(&mut self) {
        self.state = SearchState::Idle;
        self.results.clear();
        self.highlighted = 0;
    }

    /// Pick the highlighted result and close the dropdown.
    pub fn select(&mut self) -> Option<&'a Document> {
        let selected = self.highlighted_document();
        self.dismiss();
        selected
    }

    /// Move the highlight down, stopping at the last result.
    pub fn highlight_next(&mut self) {
        if self.highlighted + 1 < self.results.len() {
            self.highlighted += 1;
        }
    }

    /// Move the highlight up, stopping at the first result.
    pub fn highlight_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current dropdown state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Whether the dropdown is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == SearchState::Searching
    }

    /// Results for the current query; empty while idle.
    #[must_use]
    pub fn results(&self) -> Vec<&'a Document> {
        self.results.iter().map(|&i| &self.docs[i]).collect()
    }

    /// Position of the highlighted result.
    #[must_use]
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// The highlighted result, if the dropdown has any.
    #[must_use]
    pub fn highlighted_document(&self) -> Option<&'a Document> {
        let docs = self.docs;
        self.results.get(self.highlighted).map(|&i| &docs[i])
    }
}
