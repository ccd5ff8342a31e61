//! `doctree toc` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use doctree_core::{DirectoryNode, NodeId, Selection, TocMarkup, TreeNode, render, toc_items};

use super::{SourceArgs, build_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Selected folder, relative to the source directory.
    #[arg(long)]
    folder: Option<PathBuf>,

    /// Selected file, relative to the source directory.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Print the structured TOC as JSON instead of markup.
    #[arg(long)]
    json: bool,
}

impl TocArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.source.load_config()?;
        let tree = build_from_config(&config)?;

        let selection = Selection {
            folder: self
                .folder
                .as_deref()
                .map(|p| resolve_folder(&tree, p))
                .transpose()?,
            file: self
                .file
                .as_deref()
                .map(|p| resolve_file(&tree, p))
                .transpose()?,
        };
        tracing::debug!(?selection, "Resolved TOC selection");

        let items = toc_items(&tree, &selection);
        if self.json {
            output.result(&serde_json::to_string_pretty(&items)?);
        } else {
            let markup = TocMarkup {
                selected_class: config.toc.selected_class.clone(),
            };
            output.result(&render(&items, &markup).concat());
        }

        Ok(())
    }
}

/// Resolve a relative path to the id of a directory in the tree.
fn resolve_folder(tree: &DirectoryNode, rel: &Path) -> Result<NodeId, CliError> {
    match tree.find_by_path(rel) {
        Some(TreeNode::Directory(dir)) => Ok(dir.id()),
        Some(_) => Err(CliError::Validation(format!(
            "Not a folder: {}",
            rel.display()
        ))),
        None => Err(not_found(rel)),
    }
}

/// Resolve a relative path to the id of a file in the tree.
fn resolve_file(tree: &DirectoryNode, rel: &Path) -> Result<NodeId, CliError> {
    match tree.find_by_path(rel) {
        Some(TreeNode::Directory(_)) => Err(CliError::Validation(format!(
            "Not a file: {}",
            rel.display()
        ))),
        Some(node) => Ok(node.id()),
        None => Err(not_found(rel)),
    }
}

fn not_found(rel: &Path) -> CliError {
    CliError::Validation(format!("No such entry in tree: {}", rel.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_tree() -> (tempfile::TempDir, DirectoryNode) {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("guide")).unwrap();
        fs::write(root.join("guide/setup.md"), "").unwrap();
        let tree = doctree_core::build_tree(root).unwrap();
        (temp_dir, tree)
    }

    #[test]
    fn test_resolve_folder_and_file() {
        let (_dir, tree) = sample_tree();

        let folder = resolve_folder(&tree, Path::new("guide")).unwrap();
        let file = resolve_file(&tree, Path::new("guide/setup.md")).unwrap();

        assert_eq!(folder, tree.children()[0].id());
        assert_eq!(tree.find_by_id(file).unwrap().title(), "setup.md");
    }

    #[test]
    fn test_resolve_rejects_wrong_kind() {
        let (_dir, tree) = sample_tree();

        assert!(resolve_folder(&tree, Path::new("guide/setup.md")).is_err());
        assert!(resolve_file(&tree, Path::new("guide")).is_err());
    }

    #[test]
    fn test_resolve_missing_entry() {
        let (_dir, tree) = sample_tree();

        let err = resolve_file(&tree, Path::new("guide/missing.md")).unwrap_err();

        assert_eq!(err.to_string(), "No such entry in tree: guide/missing.md");
    }
}
