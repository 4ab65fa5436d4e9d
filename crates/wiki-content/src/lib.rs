//! Markdown content collection loader.
//!
//! This crate provides [`ContentLoader`], which turns a directory of markdown
//! files into the [`Document`] records consumed by navigation and search. It
//! handles:
//!
//! - Recursive, deterministic directory scanning for `.md` and `.mdx` files
//! - YAML front matter (`title`, `description`, `weight`, `slug`, `draft`)
//! - Title fallback to the first H1 heading, then to the file name
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use wiki_content::ContentLoader;
//!
//! let loader = ContentLoader::new(PathBuf::from("src/content/docs"));
//! for doc in loader.load()? {
//!     println!("{}: {}", doc.slug, doc.title);
//! }
//! ```

mod error;
mod frontmatter;
mod scanner;

use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use wiki_nav::{Document, folder_slug};

pub use error::ContentError;

use crate::frontmatter::FrontMatter;
use crate::scanner::{ContentRef, Scanner};

static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("H1 pattern is valid"));

/// Convert a slug segment to title case.
///
/// Splits on `-`, `_` and spaces, capitalizes each word.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Loads the documentation collection from the filesystem.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    source_dir: PathBuf,
}

impl ContentLoader {
    /// Create a loader rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Read every content file and build its document record.
    ///
    /// Documents come back in scan order. Drafts are skipped. Slugs are not
    /// validated here; the tree builder rejects bad ones.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the directory or a file cannot be read
    /// and [`ContentError::FrontMatter`] if a front matter block is malformed.
    pub fn load(&self) -> Result<Vec<Document>, ContentError> {
        let refs = Scanner::new(self.source_dir.clone()).scan()?;

        let mut documents = Vec::with_capacity(refs.len());
        let mut drafts = 0usize;
        for content_ref in &refs {
            match Self::build_document(content_ref)? {
                Some(doc) => documents.push(doc),
                None => drafts += 1,
            }
        }

        tracing::debug!(
            source_dir = %self.source_dir.display(),
            document_count = documents.len(),
            drafts,
            "Loaded content collection"
        );

        Ok(documents)
    }

    /// Build a document from a scanned file. Returns `None` for drafts.
    fn build_document(content_ref: &ContentRef) -> Result<Option<Document>, ContentError> {
        let path = &content_ref.path;
        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;

        let (yaml, body) = frontmatter::split(&content);
        let front = match yaml {
            Some(yaml) => frontmatter::parse(yaml).map_err(|message| {
                ContentError::FrontMatter {
                    path: path.clone(),
                    message,
                }
            })?,
            None => FrontMatter::default(),
        };

        if front.draft {
            tracing::debug!(slug = %content_ref.slug, "Skipping draft");
            return Ok(None);
        }

        let title = front
            .title
            .filter(|t| !t.trim().is_empty())
            .or_else(|| extract_h1(body))
            .unwrap_or_else(|| derive_title_from_slug(&content_ref.slug));

        let slug = match front.slug {
            Some(slug) => {
                let slug = slug.trim_matches('/').to_owned();
                tracing::debug!(from = %content_ref.slug, to = %slug, "Slug override");
                slug
            }
            None => content_ref.slug.clone(),
        };

        let mut doc = Document::new(slug, title);
        if let Some(description) = front.description {
            doc = doc.with_description(description);
        }
        if let Some(weight) = front.weight {
            doc = doc.with_weight(weight);
        }

        Ok(Some(doc))
    }
}

fn extract_h1(body: &str) -> Option<String> {
    let caps = H1_REGEX.captures(body)?;
    let title = caps[1].trim();
    (!title.is_empty()).then(|| title.to_owned())
}

/// Title for a file with neither a front matter title nor a heading.
///
/// Landing pages take their folder's name: `guide/index` becomes "Guide".
fn derive_title_from_slug(slug: &str) -> String {
    let name = folder_slug(slug).rsplit('/').next().unwrap_or(slug);
    titlecase_from_slug(&name.to_lowercase())
}
