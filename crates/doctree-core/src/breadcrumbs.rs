//! Breadcrumbs and page URLs.
//!
//! Breadcrumbs are the names of the directories between a file and the tree
//! root, closest ancestor first. The root itself is never included, so a
//! file directly under the root has no breadcrumbs.
//!
//! [`get_url`] joins segments in the order given, which for breadcrumbs is
//! innermost first (`root/a/b/file.md` gives `"b/a"`). Use [`page_url`] for
//! the root-to-leaf form (`"a/b"`).

use std::path::{Component, Path, PathBuf};

use crate::error::NavError;
use crate::node::{DirectoryNode, FileNode};

/// Breadcrumbs for a file node within the tree rooted at `root`.
///
/// # Errors
///
/// Returns [`NavError::NotUnderRoot`] if the file is not below `root`.
pub fn breadcrumbs(file: &FileNode, root: &DirectoryNode) -> Result<Vec<String>, NavError> {
    breadcrumbs_for_path(file.path(), root.path())
}

/// Breadcrumbs for a file path relative to a root path.
///
/// Walks up from the file's directory, collecting directory names until the
/// root is reached. The walk stops at the filesystem root, so a file
/// outside `root` is reported instead of looping.
///
/// Both paths are normalized lexically first (`.` dropped, `..` folded into
/// the preceding component); symlinks are not resolved.
///
/// # Errors
///
/// Returns [`NavError::NotUnderRoot`] if `root` is not an ancestor of `file`.
pub fn breadcrumbs_for_path(file: &Path, root: &Path) -> Result<Vec<String>, NavError> {
    let not_under_root = || NavError::NotUnderRoot {
        file: file.to_path_buf(),
        root: root.to_path_buf(),
    };

    let normalized_file = normalize(file);
    let normalized_root = normalize(root);

    let mut segments = Vec::new();
    let mut current = normalized_file.parent().ok_or_else(not_under_root)?;

    while current != normalized_root {
        let name = current.file_name().ok_or_else(not_under_root)?;
        segments.push(name.to_string_lossy().into_owned());
        current = current.parent().ok_or_else(not_under_root)?;
    }

    Ok(segments)
}

/// Fold `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::CurDir | Component::ParentDir) | None => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

/// Join segments with `/` in the order given.
#[must_use]
pub fn get_url<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/")
}

/// Root-to-leaf URL path of the directory containing `file`.
///
/// # Errors
///
/// Returns [`NavError::NotUnderRoot`] if the file is not below `root`.
pub fn page_url(file: &FileNode, root: &DirectoryNode) -> Result<String, NavError> {
    let mut segments = breadcrumbs(file, root)?;
    segments.reverse();
    Ok(get_url(&segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::walker::build_tree;

    #[test]
    fn test_nested_file_innermost_first() {
        let crumbs =
            breadcrumbs_for_path(Path::new("/docs/a/b/file.md"), Path::new("/docs")).unwrap();

        assert_eq!(crumbs, vec!["b", "a"]);
        assert_eq!(get_url(&crumbs), "b/a");
    }

    #[test]
    fn test_file_in_root_has_no_breadcrumbs() {
        let crumbs = breadcrumbs_for_path(Path::new("/docs/index.md"), Path::new("/docs")).unwrap();

        assert!(crumbs.is_empty());
        assert_eq!(get_url(&crumbs), "");
    }

    #[test]
    fn test_relative_paths() {
        let crumbs = breadcrumbs_for_path(Path::new("docs/guide/setup.md"), Path::new("docs"))
            .unwrap();

        assert_eq!(crumbs, vec!["guide"]);
    }

    #[test]
    fn test_file_outside_root_is_error() {
        let err =
            breadcrumbs_for_path(Path::new("/other/a/file.md"), Path::new("/docs")).unwrap_err();

        assert!(matches!(err, NavError::NotUnderRoot { .. }));
    }

    #[test]
    fn test_relative_file_outside_root_is_error() {
        let err = breadcrumbs_for_path(Path::new("a/file.md"), Path::new("docs")).unwrap_err();

        assert!(matches!(err, NavError::NotUnderRoot { .. }));
    }

    #[test]
    fn test_root_as_file_is_error() {
        let err = breadcrumbs_for_path(Path::new("/"), Path::new("/docs")).unwrap_err();

        assert!(matches!(err, NavError::NotUnderRoot { .. }));
    }

    #[test]
    fn test_get_url_accepts_str_slices() {
        assert_eq!(get_url(&["x", "y", "z"]), "x/y/z");
    }

    #[test]
    fn test_breadcrumbs_and_page_url_from_built_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("a/b/file.md"), "").unwrap();

        let tree = build_tree(root).unwrap();
        let file = tree
            .find_by_path(Path::new("a/b/file.md"))
            .and_then(|node| node.as_file())
            .unwrap();

        assert_eq!(breadcrumbs(file, &tree).unwrap(), vec!["b", "a"]);
        assert_eq!(page_url(file, &tree).unwrap(), "a/b");
    }

    #[test]
    fn test_node_from_other_tree_is_error() {
        let inner = tempfile::tempdir().unwrap();
        let outer = tempfile::tempdir().unwrap();
        fs::write(outer.path().join("page.md"), "").unwrap();

        let tree = build_tree(inner.path()).unwrap();
        let foreign = build_tree(outer.path()).unwrap();
        let file = foreign.children()[0].as_file().unwrap();

        assert!(breadcrumbs(file, &tree).is_err());
        assert!(page_url(file, &tree).is_err());
    }

    #[test]
    fn test_parent_dir_components_are_folded() {
        let crumbs =
            breadcrumbs_for_path(Path::new("/docs/a/../b/file.md"), Path::new("/docs")).unwrap();

        assert_eq!(crumbs, vec!["b"]);
    }

    #[test]
    fn test_cur_dir_and_trailing_parent_in_root() {
        let crumbs = breadcrumbs_for_path(
            Path::new("./docs/guide/./setup.md"),
            Path::new("docs/guide/.."),
        )
        .unwrap();

        assert_eq!(crumbs, vec!["guide"]);
    }

    #[test]
    fn test_parent_dir_escaping_root_is_error() {
        let err = breadcrumbs_for_path(Path::new("/docs/../other/file.md"), Path::new("/docs"))
            .unwrap_err();

        assert!(matches!(err, NavError::NotUnderRoot { .. }));
    }

    #[test]
    fn test_normalize_keeps_leading_parent_dirs() {
        assert_eq!(normalize(Path::new("../a/./b/..")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }
}
