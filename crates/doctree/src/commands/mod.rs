//! CLI command implementations.

pub(crate) mod breadcrumbs;
pub(crate) mod toc;
pub(crate) mod tree;

pub(crate) use breadcrumbs::BreadcrumbsArgs;
pub(crate) use toc::TocArgs;
pub(crate) use tree::TreeArgs;

use std::path::PathBuf;

use clap::Args;
use doctree_config::{CliSettings, Config};
use doctree_core::{DirectoryNode, WalkOptions, build_tree_with};

use crate::error::CliError;

/// Source selection shared by all commands.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover doctree.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long, env = "DOCTREE_SOURCE_DIR")]
    source_dir: Option<PathBuf>,
}

impl SourceArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Walk the configured source directory.
pub(crate) fn build_from_config(config: &Config) -> Result<DirectoryNode, CliError> {
    let options = WalkOptions {
        ignore: config.docs_resolved.ignore_patterns()?,
    };
    Ok(build_tree_with(&config.docs_resolved.source_dir, &options)?)
}
