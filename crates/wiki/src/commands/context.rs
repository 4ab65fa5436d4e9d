//! Arguments and loading shared by every command.

use std::path::PathBuf;

use clap::Args;
use wiki_config::{CliSettings, Config};
use wiki_content::ContentLoader;
use wiki_nav::{Document, NavTree, NavTreeBuilder};
use wiki_search::SearchConfig;

use crate::error::CliError;

/// Options for locating configuration and content.
#[derive(Args)]
pub(crate) struct ContextArgs {
    /// Path to configuration file (default: auto-discover wiki.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// URL prefix for page links (overrides config).
    #[arg(long, env = "WIKI_BASE_PATH")]
    base_path: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ContextArgs {
    /// Load configuration and the document collection.
    pub(crate) fn load(&self) -> Result<Site, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            base_path: self.base_path.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source_dir = &config.docs_resolved.source_dir;
        tracing::info!(source_dir = %source_dir.display(), "Loading content");
        let docs = ContentLoader::new(source_dir.clone()).load()?;

        Ok(Site { config, docs })
    }
}

/// Loaded configuration plus the document collection.
pub(crate) struct Site {
    pub config: Config,
    pub docs: Vec<Document>,
}

impl Site {
    /// Build the navigation tree with the configured default weight.
    pub(crate) fn tree(&self) -> Result<NavTree, CliError> {
        let tree = NavTreeBuilder::new()
            .default_weight(self.config.navigation.default_weight)
            .build(&self.docs)?;
        Ok(tree)
    }

    pub(crate) fn search_config(&self) -> SearchConfig {
        SearchConfig {
            min_query_len: self.config.search.min_query_len,
            max_results: self.config.search.max_results,
        }
    }

    /// Link target for a slug under the configured base path.
    pub(crate) fn href(&self, slug: &str) -> String {
        href(&self.config.site.base_path, slug)
    }

    pub(crate) fn slug_for_path(&self, path: &str) -> String {
        request_path_to_slug(path, &self.config.site.base_path)
    }
}

fn href(base_path: &str, slug: &str) -> String {
    format!("{}/{slug}", base_path.trim_end_matches('/'))
}

/// Convert a request path to a slug.
///
/// Accepts either a bare slug (`guide/install`) or a full path under the
/// base path (`/docs/guide/install/`).
pub(crate) fn request_path_to_slug(path: &str, base_path: &str) -> String {
    let path = path.trim();
    let base = base_path.trim_end_matches('/');

    let rest = if base.is_empty() {
        path
    } else {
        match path.strip_prefix(base) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        }
    };

    rest.trim_matches('/').to_owned()
}
