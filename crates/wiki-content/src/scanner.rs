//! Content file discovery by filesystem walking.
//!
//! The scanner only finds files and derives their slugs. Reading and parsing
//! happen in [`ContentLoader`](crate::ContentLoader).

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::ContentError;

/// File extensions treated as content documents.
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Reference to a content file found during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ContentRef {
    /// Slug derived from the relative path (e.g., "guide/install").
    pub slug: String,
    /// Absolute path to the file.
    pub path: PathBuf,
}

/// Walks a content directory in a deterministic order.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    pub(crate) fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Collect every content file below the source directory.
    ///
    /// Entries are visited sorted by file name; hidden entries are skipped.
    pub(crate) fn scan(&self) -> Result<Vec<ContentRef>, ContentError> {
        let mut refs = Vec::new();
        self.scan_directory(&self.source_dir, &mut refs)?;
        Ok(refs)
    }

    fn scan_directory(
        &self,
        dir_path: &Path,
        refs: &mut Vec<ContentRef>,
    ) -> Result<(), ContentError> {
        let entries = fs::read_dir(dir_path).map_err(|e| ContentError::io(dir_path, e))?;

        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                (e.file_name(), e.path(), is_dir)
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, path, is_dir) in entries {
            if name.to_string_lossy().starts_with('.') {
                continue;
            }

            if is_dir {
                self.scan_directory(&path, refs)?;
            } else if is_content_file(&path) {
                let Ok(rel_path) = path.strip_prefix(&self.source_dir) else {
                    continue;
                };
                refs.push(ContentRef {
                    slug: file_path_to_slug(rel_path),
                    path,
                });
            }
        }

        Ok(())
    }
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| CONTENT_EXTENSIONS.iter().any(|c| ext == *c))
}

/// Convert a path relative to the content root into a slug.
///
/// Examples:
/// - `index.md` -> `"index"`
/// - `guide.md` -> `"guide"`
/// - `guide/index.md` -> `"guide/index"`
/// - `guide/install.mdx` -> `"guide/install"`
pub(crate) fn file_path_to_slug(rel_path: &Path) -> String {
    let without_ext = rel_path.with_extension("");
    without_ext
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
