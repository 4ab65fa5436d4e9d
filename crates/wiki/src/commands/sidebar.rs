//! `wiki sidebar` command implementation.

use clap::Args;
use wiki_nav::{ActiveState, ExpansionOverrides, NodeKind, SidebarItem, build_sidebar};

use super::context::ContextArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Request path or slug of the page being viewed.
    current_path: String,

    /// Folder slug to force open (repeatable).
    #[arg(long = "open", value_name = "SLUG")]
    open: Vec<String>,

    /// Folder slug to force closed (repeatable).
    #[arg(long = "close", value_name = "SLUG")]
    close: Vec<String>,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Print the sidebar as JSON.
    #[arg(long)]
    json: bool,
}

impl SidebarArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.context.load()?;
        let tree = site.tree()?;

        let overrides = overrides_from(&self.open, &self.close)?;
        let current = site.slug_for_path(&self.current_path);
        let items = build_sidebar(&tree, &current, &overrides, &site.config.site.base_path);

        if self.json {
            return output.json(&items);
        }

        let mut lines = Vec::new();
        render_items(&items, 0, &mut lines);
        for (line, state) in lines {
            let line = match state {
                ActiveState::Active => output.highlighted(&line),
                ActiveState::Ancestor => line,
                ActiveState::Inactive => output.dimmed(&line),
            };
            output.line(&line)?;
        }
        Ok(())
    }
}

/// Collect `--open`/`--close` flags into expansion choices.
fn overrides_from(open: &[String], close: &[String]) -> Result<ExpansionOverrides, CliError> {
    let conflict = open.iter().find(|slug| {
        close
            .iter()
            .any(|c| c.trim_matches('/') == slug.trim_matches('/'))
    });
    if let Some(slug) = conflict {
        return Err(CliError::Validation(format!(
            "'{slug}' cannot be both opened and closed"
        )));
    }

    let mut overrides = ExpansionOverrides::new();
    for slug in open {
        overrides.set(slug.trim_matches('/'), true);
    }
    for slug in close {
        overrides.set(slug.trim_matches('/'), false);
    }
    Ok(overrides)
}

/// Render visible items as indented lines, skipping collapsed subtrees.
fn render_items(items: &[SidebarItem], depth: usize, out: &mut Vec<(String, ActiveState)>) {
    for item in items {
        let marker = match (item.kind, item.expanded) {
            (NodeKind::Leaf, _) => " ",
            (NodeKind::Folder, true) => "v",
            (NodeKind::Folder, false) => ">",
        };
        out.push((
            format!("{}{marker} {}  {}", "  ".repeat(depth), item.title, item.href),
            item.state,
        ));
        if item.expanded {
            render_items(&item.children, depth + 1, out);
        }
    }
}
