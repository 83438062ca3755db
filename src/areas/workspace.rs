//! Working tree access
//!
//! The workspace owns path normalization and the working-tree walk. Every
//! path handed to a command is resolved here into a repository-relative
//! [`PathKey`] before anything else looks at it.

use crate::artifacts::index::path_key::PathKey;
use crate::errors::Error;
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    root: Box<Path>,
    git_dir: Box<Path>,
}

impl Workspace {
    pub fn new(root: Box<Path>) -> Self {
        let git_dir = root.join(".git").into_boxed_path();
        Workspace { root, git_dir }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Canonicalize a user-supplied path and check it lives inside the
    /// repository
    ///
    /// The input may be absolute or relative to the current directory. It has
    /// to name an existing filesystem entry; the repository root itself is
    /// accepted and resolves to the root.
    pub fn resolve(&self, input: &str) -> anyhow::Result<PathBuf> {
        let absolute = Path::new(input)
            .canonicalize()
            .map_err(|_| Error::PathNotFound(PathBuf::from(input)))?;

        if !absolute.starts_with(&*self.root) {
            return Err(Error::OutsideRepository(PathBuf::from(input)).into());
        }

        Ok(absolute)
    }

    /// Turn an absolute path inside the repository into its path key
    pub fn relativize(&self, absolute: &Path) -> anyhow::Result<PathKey> {
        let suffix = absolute
            .strip_prefix(&*self.root)
            .map_err(|_| Error::OutsideRepository(absolute.to_path_buf()))?;

        PathKey::from_relative(suffix)
    }

    /// All regular files currently in the working tree
    pub fn list_files(&self) -> anyhow::Result<BTreeSet<PathKey>> {
        self.walk_from(&self.root)
    }

    /// Expand a resolved path into the regular files it covers
    ///
    /// A file yields itself; a directory yields everything under it. Entries
    /// that are neither (symlinks, sockets, devices) yield nothing.
    pub fn collect_files(&self, start: &Path) -> anyhow::Result<BTreeSet<PathKey>> {
        let metadata = std::fs::symlink_metadata(start)
            .with_context(|| format!("cannot stat {}", start.display()))?;

        if metadata.is_dir() {
            return self.walk_from(start);
        }

        let mut files = BTreeSet::new();
        if metadata.is_file() {
            files.insert(self.relativize(start)?);
        }
        Ok(files)
    }

    /// Depth-first walk emitting regular files only
    ///
    /// The repository's own `.git` directory is pruned by comparing absolute
    /// paths, not names, so a directory that merely happens to be called
    /// `.git` deeper in the tree is still walked. Any unreadable directory or
    /// failed stat aborts the walk; partial results are discarded.
    fn walk_from(&self, start: &Path) -> anyhow::Result<BTreeSet<PathKey>> {
        let mut files = BTreeSet::new();

        for entry in WalkDir::new(start)
            .into_iter()
            .filter_entry(|entry| entry.path() != &*self.git_dir)
        {
            let entry = entry.map_err(Error::Walk)?;
            if entry.file_type().is_file() {
                files.insert(self.relativize(entry.path())?);
            }
        }

        Ok(files)
    }
}
