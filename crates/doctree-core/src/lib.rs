//! Documentation tree building and navigation for doctree.
//!
//! This crate provides:
//! - [`build_tree`]: Walks a documentation source directory into a typed tree
//! - [`breadcrumbs`]: Ancestor directory names between a file and the root
//! - [`toc`]: Nested table-of-contents markup with selection state
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use doctree_core::{Selection, TocMarkup, build_tree, render, toc_items};
//!
//! let root = build_tree(Path::new("docs"))?;
//!
//! let page = root.find_by_path(Path::new("guide/setup.md")).map(|node| node.id());
//! let selection = Selection { folder: None, file: page };
//!
//! let fragments = render(&toc_items(&root, &selection), &TocMarkup::default());
//! let html = fragments.concat();
//! # Ok(())
//! # }
//! ```

mod breadcrumbs;
mod error;
mod identity;
mod node;
mod toc;
mod walker;

pub use breadcrumbs::{breadcrumbs, breadcrumbs_for_path, get_url, page_url};
pub use error::{NavError, TreeError};
pub use identity::NodeId;
pub use node::{Classification, DirectoryNode, FileNode, TreeNode};
pub use toc::{Selection, TocItem, TocMarkup, escape_html, render, toc, toc_items};
pub use walker::{WalkOptions, build_tree, build_tree_with};
