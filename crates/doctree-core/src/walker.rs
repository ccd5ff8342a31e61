//! Directory traversal into a documentation tree.
//!
//! # Architecture
//!
//! [`build_tree`] walks the source directory depth-first in pre-order:
//! - Files of a directory are added first, in the order the filesystem
//!   reports them, each classified by extension
//! - Subdirectories follow, in the same enumeration order, and each one is
//!   fully built before the next sibling is visited
//!
//! Each directory is built by its own recursive call that returns the
//! finished subtree, so the walk holds no shared "current directory" state.
//! Symlinks to directories are skipped, so a link cycle cannot make the walk
//! recurse forever. Symlinks to files are kept and classified by their own
//! name. No sorting is applied; callers that need a stable order across
//! filesystems must sort afterwards.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use glob::Pattern;

use crate::error::TreeError;
use crate::node::{DirectoryNode, FileNode, TreeNode};

/// Options controlling a tree walk.
#[derive(Clone, Debug, Default)]
pub struct WalkOptions {
    /// Base-name patterns to skip (e.g. `.*` for hidden entries).
    ///
    /// Matching entries are skipped before validation, so an ignored file
    /// may contain spaces.
    pub ignore: Vec<Pattern>,
}

impl WalkOptions {
    fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|p| p.matches(name))
    }
}

/// Walk totals reported after a build.
#[derive(Default)]
struct WalkStats {
    directories: usize,
    pages: usize,
    assets: usize,
    ignored: usize,
    symlinks: usize,
}

/// Build a tree from `root` with default options.
///
/// # Errors
///
/// Returns [`TreeError::InvalidFileName`] if any file name contains a space,
/// [`TreeError::NotADirectory`] if `root` is not a directory, and
/// [`TreeError::Io`] for any filesystem error. No partial tree is returned.
pub fn build_tree(root: &Path) -> Result<DirectoryNode, TreeError> {
    build_tree_with(root, &WalkOptions::default())
}

/// Build a tree from `root`, skipping entries matched by `options`.
///
/// # Errors
///
/// Same as [`build_tree`].
pub fn build_tree_with(root: &Path, options: &WalkOptions) -> Result<DirectoryNode, TreeError> {
    let start = Instant::now();

    let metadata = fs::metadata(root).map_err(|e| TreeError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(TreeError::NotADirectory(root.to_path_buf()));
    }

    let mut stats = WalkStats::default();
    let tree = walk_directory(root, options, &mut stats)?;

    tracing::info!(
        root = %root.display(),
        directories = stats.directories,
        pages = stats.pages,
        assets = stats.assets,
        ignored = stats.ignored,
        skipped_symlinks = stats.symlinks,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Tree built"
    );

    Ok(tree)
}

/// Build the subtree rooted at `dir_path`.
fn walk_directory(
    dir_path: &Path,
    options: &WalkOptions,
    stats: &mut WalkStats,
) -> Result<DirectoryNode, TreeError> {
    tracing::debug!(path = %dir_path.display(), "Entering directory");

    let mut node = DirectoryNode::new(dir_path);
    stats.directories += 1;

    let (files, subdirs) = list_entries(dir_path, options, stats)?;

    for path in files {
        let file = TreeNode::classify(FileNode::new(path)?);
        if matches!(file, TreeNode::MarkdownPage(_)) {
            stats.pages += 1;
        } else {
            stats.assets += 1;
        }
        node.push(file);
    }

    for path in subdirs {
        let child = walk_directory(&path, options, stats)?;
        node.push(TreeNode::Directory(child));
    }

    Ok(node)
}

/// Enumerate a directory once, splitting entries into files and
/// subdirectories while keeping enumeration order within each group.
fn list_entries(
    dir_path: &Path,
    options: &WalkOptions,
    stats: &mut WalkStats,
) -> Result<(Vec<PathBuf>, Vec<PathBuf>), TreeError> {
    let entries = fs::read_dir(dir_path).map_err(|e| TreeError::io(dir_path, e))?;

    let mut files = Vec::new();
    let mut subdirs = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| TreeError::io(dir_path, e))?;
        let path = entry.path();

        if options.is_ignored(&entry.file_name().to_string_lossy()) {
            tracing::debug!(path = %path.display(), "Skipping ignored entry");
            stats.ignored += 1;
            continue;
        }

        let file_type = entry.file_type().map_err(|e| TreeError::io(&path, e))?;
        if file_type.is_dir() {
            subdirs.push(path);
        } else if file_type.is_symlink()
            && fs::metadata(&path)
                .map_err(|e| TreeError::io(&path, e))?
                .is_dir()
        {
            tracing::debug!(path = %path.display(), "Skipping symlinked directory");
            stats.symlinks += 1;
        } else {
            files.push(path);
        }
    }

    Ok((files, subdirs))
}
