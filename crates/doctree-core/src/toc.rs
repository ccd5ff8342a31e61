//! Table of contents with selection state.
//!
//! The TOC is built in two steps: [`toc_items`] turns a directory into a
//! nested [`TocItem`] structure, and [`render`] flattens that structure into
//! markup fragments which, concatenated, form a nested list. Only markdown
//! pages and directories appear; static assets and links are skipped.
//!
//! # Example
//!
//! ```
//! use doctree_core::{DirectoryNode, toc};
//!
//! let root = DirectoryNode::new("docs");
//! assert!(toc(&root, None, None).is_empty());
//! ```

use serde::Serialize;

use crate::identity::NodeId;
use crate::node::{DirectoryNode, TreeNode};

/// Currently selected folder and file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected directory.
    pub folder: Option<NodeId>,
    /// Selected file.
    pub file: Option<NodeId>,
}

/// Entry of the structured table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TocItem {
    /// Markdown page.
    Page {
        /// Page id.
        id: NodeId,
        /// Display title.
        title: String,
        /// True if this is the selected file.
        selected: bool,
    },
    /// Directory with its own entries.
    Folder {
        /// Directory id.
        id: NodeId,
        /// Directory name.
        name: String,
        /// True if this is the selected folder.
        selected: bool,
        /// Nested entries.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<TocItem>,
    },
}

/// Markup settings for rendered fragments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocMarkup {
    /// CSS class marking the selected page and folder.
    pub selected_class: String,
}

impl Default for TocMarkup {
    fn default() -> Self {
        Self {
            selected_class: "selected".to_owned(),
        }
    }
}

/// Build the structured TOC for the children of `dir`.
#[must_use]
pub fn toc_items(dir: &DirectoryNode, selection: &Selection) -> Vec<TocItem> {
    dir.children()
        .iter()
        .filter_map(|child| match child {
            TreeNode::MarkdownPage(file) => Some(TocItem::Page {
                id: file.id(),
                title: file.title().to_owned(),
                selected: selection.file == Some(file.id()),
            }),
            TreeNode::Directory(sub) => Some(TocItem::Folder {
                id: sub.id(),
                name: sub.name().to_owned(),
                selected: selection.folder == Some(sub.id()),
                children: toc_items(sub, selection),
            }),
            TreeNode::StaticAsset(_) | TreeNode::LinkPage(_) => None,
        })
        .collect()
}

/// Render TOC items as markup fragments in document order.
///
/// Pages become one `<li>` fragment each. Folders become an opening `<ul>`
/// fragment, the fragments of their entries, and a closing `</ul>`.
#[must_use]
pub fn render(items: &[TocItem], markup: &TocMarkup) -> Vec<String> {
    let mut fragments = Vec::new();
    render_into(items, markup, &mut fragments);
    fragments
}

fn render_into(items: &[TocItem], markup: &TocMarkup, out: &mut Vec<String>) {
    for item in items {
        match item {
            TocItem::Page {
                title, selected, ..
            } => {
                out.push(format!(
                    "<li{}>{}</li>",
                    class_attr(*selected, markup),
                    escape_html(title)
                ));
            }
            TocItem::Folder {
                selected, children, ..
            } => {
                out.push(format!("<ul{}>", class_attr(*selected, markup)));
                render_into(children, markup, out);
                out.push("</ul>".to_owned());
            }
        }
    }
}

fn class_attr(selected: bool, markup: &TocMarkup) -> String {
    if selected {
        format!(" class=\"{}\"", escape_html(&markup.selected_class))
    } else {
        String::new()
    }
}

/// Render the TOC for `dir` with the default markup.
#[must_use]
pub fn toc(
    dir: &DirectoryNode,
    selected_folder: Option<NodeId>,
    selected_file: Option<NodeId>,
) -> Vec<String> {
    let selection = Selection {
        folder: selected_folder,
        file: selected_file,
    };
    render(&toc_items(dir, &selection), &TocMarkup::default())
}

/// Escape special HTML characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
