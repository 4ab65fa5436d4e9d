//! Navigation error types.

/// Validation failure while building a navigation tree.
///
/// Any of these aborts the build; no partial tree is returned.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// A document was supplied with an empty slug.
    #[error("Document slug cannot be empty")]
    EmptySlug,
    /// A slug contains an empty segment (leading, trailing or doubled `/`).
    #[error("Document slug '{slug}' contains an empty path segment")]
    EmptySegment {
        /// The offending slug.
        slug: String,
    },
    /// Two distinct documents share a slug.
    #[error("Duplicate document slug '{slug}'")]
    DuplicateSlug {
        /// The repeated slug.
        slug: String,
    },
}
