//! `wiki nav` command implementation.

use clap::Args;
use wiki_nav::NavNode;

use super::context::ContextArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Print the tree as JSON.
    #[arg(long)]
    json: bool,
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.context.load()?;
        let tree = site.tree()?;

        for warning in tree.warnings() {
            output.warning(&format!("Warning: {warning}"));
        }

        if self.json {
            return output.json(&tree);
        }

        let mut lines = Vec::new();
        render_nodes(tree.roots(), 0, &mut lines);
        for (depth, title, slug) in lines {
            output.line(&format!(
                "{}{} {}",
                "  ".repeat(depth),
                title,
                output.dimmed(&format!("({slug})"))
            ))?;
        }
        Ok(())
    }
}

/// Flatten nodes into `(depth, title, slug)` rows in display order.
fn render_nodes<'a>(
    nodes: &'a [NavNode],
    depth: usize,
    out: &mut Vec<(usize, &'a str, &'a str)>,
) {
    for node in nodes {
        out.push((depth, node.title.as_str(), node.slug.as_str()));
        render_nodes(&node.children, depth + 1, out);
    }
}
