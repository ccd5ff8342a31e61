//! doctree CLI - Documentation tree builder.
//!
//! Provides commands for:
//! - `tree`: Print the classified documentation tree
//! - `toc`: Print table-of-contents markup for a selection
//! - `breadcrumbs`: Print breadcrumbs and URLs for a file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BreadcrumbsArgs, TocArgs, TreeArgs};
use output::Output;

/// doctree - Documentation tree builder.
#[derive(Parser)]
#[command(name = "doctree", version, about)]
struct Cli {
    /// Enable verbose output (walk timing and per-directory logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the documentation tree.
    Tree(TreeArgs),
    /// Print table-of-contents markup.
    Toc(TocArgs),
    /// Print breadcrumbs for a file.
    Breadcrumbs(BreadcrumbsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Tree(args) => args.execute(&output),
        Commands::Toc(args) => args.execute(&output),
        Commands::Breadcrumbs(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
