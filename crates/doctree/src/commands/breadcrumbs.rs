//! `doctree breadcrumbs` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use doctree_core::{DirectoryNode, FileNode, NavError, breadcrumbs, get_url, page_url};
use serde::Serialize;

use super::{SourceArgs, build_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the breadcrumbs command.
#[derive(Args)]
pub(crate) struct BreadcrumbsArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// File to look up (relative to the source directory, or absolute).
    file: PathBuf,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

/// Navigation data for one file.
#[derive(Debug, Serialize)]
struct BreadcrumbsReport {
    /// Ancestor directory names, closest first.
    breadcrumbs: Vec<String>,
    /// Breadcrumbs joined in the order above.
    url: String,
    /// Root-to-leaf URL of the containing directory.
    page_url: String,
}

impl BreadcrumbsArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.source.load_config()?;
        let tree = build_from_config(&config)?;

        let file = find_file(&tree, &self.file)?;
        let crumbs = breadcrumbs(file, &tree)?;
        let report = BreadcrumbsReport {
            url: get_url(&crumbs),
            page_url: page_url(file, &tree)?,
            breadcrumbs: crumbs,
        };

        if self.json {
            output.result(&serde_json::to_string_pretty(&report)?);
        } else {
            output.result(&format!("breadcrumbs: {}", report.breadcrumbs.join(", ")));
            output.result(&format!("url: {}", report.url));
            output.result(&format!("page_url: {}", report.page_url));
        }

        Ok(())
    }
}

/// Locate `path` among the files of `tree`.
///
/// Absolute paths must lie under the tree root; a relative root is made
/// absolute against the working directory before comparing.
fn find_file<'a>(tree: &'a DirectoryNode, path: &Path) -> Result<&'a FileNode, CliError> {
    let rel = if path.is_absolute() {
        let root = std::path::absolute(tree.path())?;
        path.strip_prefix(&root)
            .map_err(|_| NavError::NotUnderRoot {
                file: path.to_path_buf(),
                root: root.clone(),
            })?
    } else {
        path
    };

    tree.find_by_path(rel)
        .and_then(|node| node.as_file())
        .ok_or_else(|| CliError::Validation(format!("Not a file in the tree: {}", path.display())))
}
