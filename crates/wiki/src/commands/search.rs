//! `wiki search` command implementation.

use clap::Args;
use wiki_search::Matcher;

use super::context::ContextArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Search text, matched against titles, slugs and descriptions.
    query: String,

    #[command(flatten)]
    pub context: ContextArgs,

    /// Print the results as JSON.
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.context.load()?;

        let matcher = Matcher::new(site.search_config());
        let results = matcher.search(&self.query, &site.docs);

        if self.json {
            return output.json(&results);
        }

        if !results.is_open() {
            output.warning(&format!(
                "Query too short (minimum {} characters)",
                matcher.config().min_query_len
            ));
            return Ok(());
        }

        if results.is_empty() {
            output.info("No results");
            return Ok(());
        }

        for doc in results.documents() {
            output.line(&format!(
                "{}  {}",
                output.highlighted(&doc.title),
                output.dimmed(&site.href(&doc.slug))
            ))?;
            if let Some(description) = &doc.description {
                output.line(&format!("    {description}"))?;
            }
        }
        Ok(())
    }
}
