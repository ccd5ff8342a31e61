//! Tree node types.
//!
//! A documentation tree is an owned tree of [`TreeNode`] variants. Directories
//! own their children top-down; there are no parent back-references, so a
//! finished tree is plain data that can be shared or serialized freely.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::TreeError;
use crate::identity::NodeId;

/// Role of a file within the documentation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Markdown source page (`.md`, any case).
    MarkdownPage,
    /// Any other file (images, downloads, stylesheets).
    StaticAsset,
    /// Explicit navigational link. Never produced by the walker.
    LinkPage,
}

impl Classification {
    /// Classify a file by its extension.
    ///
    /// Returns [`MarkdownPage`](Self::MarkdownPage) for `.md` in any case,
    /// [`StaticAsset`](Self::StaticAsset) otherwise.
    #[must_use]
    pub fn of(path: &Path) -> Self {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        {
            Self::MarkdownPage
        } else {
            Self::StaticAsset
        }
    }
}

/// A single file admitted to the tree.
#[derive(Clone, Debug, Serialize)]
pub struct FileNode {
    id: NodeId,
    path: PathBuf,
    title: String,
}

impl FileNode {
    /// Create a file node with a fresh identifier.
    ///
    /// The title is the base name with every `-` replaced by a space.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidFileName`] if the base name contains a
    /// space or the path has no base name.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, TreeError> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.contains(' '));
        let Some(name) = name else {
            return Err(TreeError::InvalidFileName { path });
        };

        let title = name.replace('-', " ");
        Ok(Self {
            id: NodeId::generate(),
            path,
            title,
        })
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Path of the file on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display title derived from the base name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl PartialEq for FileNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FileNode {}

/// A directory and its children in traversal order.
#[derive(Clone, Debug, Serialize)]
pub struct DirectoryNode {
    id: NodeId,
    path: PathBuf,
    name: String,
    children: Vec<TreeNode>,
}

impl DirectoryNode {
    /// Create an empty directory node with a fresh identifier.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.file_name().map_or_else(
            || path.to_string_lossy().into_owned(),
            |n| n.to_string_lossy().into_owned(),
        );

        Self {
            id: NodeId::generate(),
            path,
            name,
            children: Vec::new(),
        }
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Path of the directory on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory base name (the full path for roots without one).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in insertion (traversal) order.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub(crate) fn push(&mut self, node: TreeNode) {
        self.children.push(node);
    }

    /// Append an explicit link entry.
    ///
    /// This is the only way a [`TreeNode::LinkPage`] enters a tree.
    pub fn push_link(&mut self, file: FileNode) {
        self.children.push(TreeNode::LinkPage(file));
    }

    /// Total number of nodes below this directory.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                TreeNode::Directory(dir) => 1 + dir.node_count(),
                _ => 1,
            })
            .sum()
    }

    /// Markdown pages in pre-order.
    #[must_use]
    pub fn pages(&self) -> Vec<&FileNode> {
        let mut pages = Vec::new();
        self.collect_pages(&mut pages);
        pages
    }

    fn collect_pages<'a>(&'a self, out: &mut Vec<&'a FileNode>) {
        for child in &self.children {
            match child {
                TreeNode::MarkdownPage(file) => out.push(file),
                TreeNode::Directory(dir) => dir.collect_pages(out),
                TreeNode::StaticAsset(_) | TreeNode::LinkPage(_) => {}
            }
        }
    }

    /// Find a descendant by identifier.
    #[must_use]
    pub fn find_by_id(&self, id: NodeId) -> Option<&TreeNode> {
        self.children.iter().find_map(|child| {
            if child.id() == id {
                return Some(child);
            }
            child.as_directory().and_then(|dir| dir.find_by_id(id))
        })
    }

    /// Find a descendant by path relative to this directory.
    ///
    /// Returns `None` for an empty path or one containing anything other
    /// than plain name components.
    #[must_use]
    pub fn find_by_path(&self, rel: &Path) -> Option<&TreeNode> {
        let mut components = rel.components().filter(|c| *c != Component::CurDir);
        let first = components.next()?;
        let mut current = self.child_named(first)?;

        for component in components {
            current = current.as_directory()?.child_named(component)?;
        }
        Some(current)
    }

    fn child_named(&self, component: Component<'_>) -> Option<&TreeNode> {
        let Component::Normal(name) = component else {
            return None;
        };
        self.children
            .iter()
            .find(|child| child.path().file_name() == Some(name))
    }
}

impl PartialEq for DirectoryNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DirectoryNode {}

/// One entry of the documentation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Markdown source page.
    MarkdownPage(FileNode),
    /// Non-markdown file.
    StaticAsset(FileNode),
    /// Explicit navigational link.
    LinkPage(FileNode),
    /// Subdirectory.
    Directory(DirectoryNode),
}

impl TreeNode {
    /// Wrap a file node in the variant matching its extension.
    #[must_use]
    pub fn classify(file: FileNode) -> Self {
        match Classification::of(file.path()) {
            Classification::MarkdownPage => Self::MarkdownPage(file),
            Classification::StaticAsset => Self::StaticAsset(file),
            Classification::LinkPage => Self::LinkPage(file),
        }
    }

    /// Node identifier.
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            Self::MarkdownPage(f) | Self::StaticAsset(f) | Self::LinkPage(f) => f.id(),
            Self::Directory(d) => d.id(),
        }
    }

    /// Node path on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::MarkdownPage(f) | Self::StaticAsset(f) | Self::LinkPage(f) => f.path(),
            Self::Directory(d) => d.path(),
        }
    }

    /// Display title for files, base name for directories.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::MarkdownPage(f) | Self::StaticAsset(f) | Self::LinkPage(f) => f.title(),
            Self::Directory(d) => d.name(),
        }
    }

    /// File classification, `None` for directories.
    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        match self {
            Self::MarkdownPage(_) => Some(Classification::MarkdownPage),
            Self::StaticAsset(_) => Some(Classification::StaticAsset),
            Self::LinkPage(_) => Some(Classification::LinkPage),
            Self::Directory(_) => None,
        }
    }

    /// Inner file node, if this is not a directory.
    #[must_use]
    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Self::MarkdownPage(f) | Self::StaticAsset(f) | Self::LinkPage(f) => Some(f),
            Self::Directory(_) => None,
        }
    }

    /// Inner directory node, if this is a directory.
    #[must_use]
    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            Self::Directory(d) => Some(d),
            _ => None,
        }
    }
}
