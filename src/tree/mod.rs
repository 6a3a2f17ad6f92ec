//! Recursive directory tree construction.
//!
//! [`TreeBuilder`] materializes a directory's structure into a nested
//! [`DirTree`]. The walk tolerates partial failure: an unreadable directory
//! is treated as empty and the walk continues. That policy is explicit here
//! rather than silent — the recursion threads an error collector, and
//! [`TreeBuilder::build_with_report`] hands the collected failures back to
//! the caller while [`TreeBuilder::build`] routes them to the log.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default bound on recursion depth. Deep enough for any sane project tree;
/// shallow enough to stop a symlink cycle from exhausting the stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// One directory: the file names directly inside it and one child tree per
/// subdirectory. Every node exclusively owns its children; a tree is built
/// fresh on every query and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirTree {
    pub files: Vec<String>,
    pub dirs: Vec<DirTree>,
}

/// A failure tolerated during a walk.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("failed to list directory '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("directory '{path}' exceeds the depth limit of {limit}")]
    DepthLimit { path: PathBuf, limit: usize },
}

/// Builds directory trees with a bounded recursion depth.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    max_depth: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Build the tree rooted at `path`, logging tolerated failures.
    ///
    /// Never fails from the caller's perspective: listing errors yield empty
    /// subtrees, and a nonexistent `path` is created first so the result is
    /// an empty tree rather than an error.
    pub fn build(&self, path: &Path) -> DirTree {
        let (tree, errors) = self.build_with_report(path);
        for err in &errors {
            tracing::warn!(error = %err, root = %path.display(), "directory walk error");
        }
        tree
    }

    /// Build the tree rooted at `path`, returning tolerated failures
    /// alongside the result.
    pub fn build_with_report(&self, path: &Path) -> (DirTree, Vec<WalkError>) {
        let mut errors = Vec::new();

        // A query against a missing path yields an empty tree, with the path
        // left in place afterwards. A creation failure surfaces as the
        // listing failure it causes.
        if let Err(err) = fs::create_dir_all(path) {
            tracing::debug!(error = %err, path = %path.display(), "could not create target path");
        }

        let tree = self.walk(path, 0, &mut errors);
        (tree, errors)
    }

    fn walk(&self, dir: &Path, depth: usize, errors: &mut Vec<WalkError>) -> DirTree {
        let mut node = DirTree::default();

        if depth >= self.max_depth {
            errors.push(WalkError::DepthLimit {
                path: dir.to_path_buf(),
                limit: self.max_depth,
            });
            return node;
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => {
                errors.push(WalkError::Unreadable {
                    path: dir.to_path_buf(),
                    source,
                });
                return node;
            }
        };

        // Listing order is preserved as delivered, never re-sorted.
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    errors.push(WalkError::Unreadable {
                        path: dir.to_path_buf(),
                        source,
                    });
                    continue;
                }
            };

            match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => {
                    node.dirs.push(self.walk(&entry.path(), depth + 1, errors));
                }
                Ok(_) => {
                    node.files
                        .push(entry.file_name().to_string_lossy().into_owned());
                }
                Err(source) => {
                    errors.push(WalkError::Unreadable {
                        path: entry.path(),
                        source,
                    });
                }
            }
        }

        node
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_partitions_files_and_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.txt"), "c").unwrap();

        let tree = TreeBuilder::new().build(dir.path());

        let mut files = tree.files.clone();
        files.sort();
        assert_eq!(files, vec!["a.txt", "b.txt"]);
        assert_eq!(tree.dirs.len(), 1);
        assert_eq!(tree.dirs[0].files, vec!["c.txt"]);
        assert!(tree.dirs[0].dirs.is_empty());
    }

    #[test]
    fn test_nonexistent_path_yields_empty_tree_and_creates_it() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing").join("nested");

        let (tree, errors) = TreeBuilder::new().build_with_report(&target);

        assert_eq!(tree, DirTree::default());
        assert!(errors.is_empty());
        assert!(target.is_dir(), "target path must exist afterwards");
    }

    #[test]
    fn test_empty_directory_yields_empty_tree() {
        let dir = TempDir::new().unwrap();
        let tree = TreeBuilder::new().build(dir.path());
        assert!(tree.files.is_empty());
        assert!(tree.dirs.is_empty());
    }

    #[test]
    fn test_depth_limit_is_reported_not_fatal() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("one").join("two").join("three");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("leaf.txt"), "x").unwrap();

        let (tree, errors) = TreeBuilder::with_max_depth(2).build_with_report(dir.path());

        // one/ is listed normally, two/ hits the limit and comes back empty
        assert_eq!(tree.dirs.len(), 1);
        assert_eq!(tree.dirs[0].dirs.len(), 1);
        assert_eq!(tree.dirs[0].dirs[0], DirTree::default());
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], WalkError::DepthLimit { .. }));
    }

    #[test]
    fn test_serialized_shape_uses_files_and_dirs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("only.txt"), "x").unwrap();

        let tree = TreeBuilder::new().build(dir.path());
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(json["files"], serde_json::json!(["only.txt"]));
        assert_eq!(json["dirs"], serde_json::json!([]));
    }
}
