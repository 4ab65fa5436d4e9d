//! In-memory search over wiki documents.
//!
//! This crate provides:
//! - [`search`]: bounded, case-insensitive substring matching
//! - [`Matcher`]: the same matching with a custom [`SearchConfig`]
//! - [`SearchSession`]: query/dropdown state driven by input events
//!
//! Matching is recomputed from the full collection on every query. The
//! collection is documentation-sized, so there is no index to maintain.
//!
//! # Example
//!
//! ```
//! use wiki_nav::Document;
//! use wiki_search::search;
//!
//! let docs = vec![Document::new("guide/faq", "FAQ")];
//!
//! let results = search("fa", &docs);
//! assert!(results.is_open());
//! assert_eq!(results.documents()[0].title, "FAQ");
//!
//! assert!(!search("x", &docs).is_open());
//! ```

mod matcher;
mod session;

pub use matcher::{MAX_RESULTS, MIN_QUERY_LEN, Matcher, SearchConfig, SearchResults, search};
pub use session::{SearchSession, SearchState};
