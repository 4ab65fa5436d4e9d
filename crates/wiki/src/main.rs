//! Wiki CLI - navigation and search over a markdown collection.
//!
//! Provides commands for:
//! - `nav`: Print the navigation tree
//! - `adjacent`: Show previous and next pages for a slug
//! - `sidebar`: Render the sidebar for a request path
//! - `search`: Search titles, slugs and descriptions
//! - `check`: Validate content and report navigation warnings

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AdjacentArgs, CheckArgs, NavArgs, SearchArgs, SidebarArgs};
use output::Output;

/// Wiki - documentation navigation and search.
#[derive(Parser)]
#[command(name = "wiki", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the navigation tree.
    Nav(NavArgs),
    /// Show the previous and next pages for a slug.
    Adjacent(AdjacentArgs),
    /// Render the sidebar as seen from a request path.
    Sidebar(SidebarArgs),
    /// Search document titles, slugs and descriptions.
    Search(SearchArgs),
    /// Load all content and report problems.
    Check(CheckArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Nav(args) => args.context.verbose,
            Self::Adjacent(args) => args.context.verbose,
            Self::Sidebar(args) => args.context.verbose,
            Self::Search(args) => args.context.verbose,
            Self::Check(args) => args.context.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Nav(args) => args.execute(),
        Commands::Adjacent(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Search(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
