//! `doctree tree` command implementation.

use clap::Args;
use doctree_core::{DirectoryNode, TreeNode};

use super::{SourceArgs, build_from_config};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Print the tree as JSON.
    #[arg(long)]
    json: bool,

    /// Show node ids.
    #[arg(long)]
    ids: bool,
}

impl TreeArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.source.load_config()?;
        let tree = build_from_config(&config)?;

        if self.json {
            output.result(&serde_json::to_string_pretty(&tree)?);
            return Ok(());
        }

        output.result(&output.directory(&format!("{}/", tree.name())));
        for (text, id) in tree_lines(&tree, self.ids) {
            match id {
                Some(id) => output.result(&format!("{text} {}", output.detail(&id))),
                None => output.result(&text),
            }
        }
        output.info(&format!("{} entries", tree.node_count()));

        Ok(())
    }
}

/// Indented listing of the children of `dir`, one line per node.
///
/// Directories end with `/`; files carry their classification. The second
/// element holds the node id when `with_ids` is set.
fn tree_lines(dir: &DirectoryNode, with_ids: bool) -> Vec<(String, Option<String>)> {
    let mut lines = Vec::new();
    push_lines(dir, 1, with_ids, &mut lines);
    lines
}

fn push_lines(
    dir: &DirectoryNode,
    depth: usize,
    with_ids: bool,
    out: &mut Vec<(String, Option<String>)>,
) {
    let indent = "  ".repeat(depth);
    for child in dir.children() {
        let id = with_ids.then(|| format!("[{}]", child.id()));
        match child {
            TreeNode::Directory(sub) => {
                out.push((format!("{indent}{}/", sub.name()), id));
                push_lines(sub, depth + 1, with_ids, out);
            }
            TreeNode::MarkdownPage(file) => {
                out.push((format!("{indent}{} (page)", file.title()), id));
            }
            TreeNode::StaticAsset(file) => {
                out.push((format!("{indent}{} (asset)", file.title()), id));
            }
            TreeNode::LinkPage(file) => {
                out.push((format!("{indent}{} (link)", file.title()), id));
            }
        }
    }
}
