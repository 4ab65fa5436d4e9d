//! `wiki adjacent` command implementation.

use clap::Args;
use wiki_nav::{FlatEntry, find_adjacent_pages};

use super::context::ContextArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the adjacent command.
#[derive(Args)]
pub(crate) struct AdjacentArgs {
    /// Slug or request path of the current page.
    slug: String,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

impl AdjacentArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.context.load()?;
        let tree = site.tree()?;

        let slug = site.slug_for_path(&self.slug);
        let adjacent = find_adjacent_pages(&tree, &slug);

        if self.json {
            return output.json(&adjacent);
        }

        if adjacent.prev.is_none() && adjacent.next.is_none() && tree.find(&slug).is_none() {
            output.warning(&format!("'{slug}' is not in the navigation tree"));
        }

        let describe = |entry: Option<&FlatEntry>| match entry {
            Some(entry) => format!("{} {}", entry.title, output.dimmed(&site.href(&entry.slug))),
            None => output.dimmed("(none)"),
        };
        output.line(&format!("Previous: {}", describe(adjacent.prev.as_ref())))?;
        output.line(&format!("Next:     {}", describe(adjacent.next.as_ref())))?;
        Ok(())
    }
}
