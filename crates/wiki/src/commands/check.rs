//! `wiki check` command implementation.

use clap::Args;

use super::context::ContextArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Fail when any document is left out of navigation.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Load all content, build the tree and report warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if content fails to load or the tree cannot be built.
    /// With `--strict`, orphaned documents are an error too.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.context.load()?;

        output.info(&format!(
            "Source directory: {}",
            site.config.docs_resolved.source_dir.display()
        ));

        let tree = site.tree()?;
        let entries = tree.iter().count();

        for warning in tree.warnings() {
            output.warning(&format!("Warning: {warning}"));
        }

        if self.strict && !tree.warnings().is_empty() {
            return Err(CliError::Validation(format!(
                "{} document(s) left out of navigation",
                tree.warnings().len()
            )));
        }

        let summary = format!("{} documents, {entries} navigation entries", site.docs.len());
        if tree.warnings().is_empty() {
            output.success(&summary);
        } else {
            output.warning(&format!("{summary}, {} warning(s)", tree.warnings().len()));
        }
        Ok(())
    }
}
