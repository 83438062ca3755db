//! Delegated object store
//!
//! rgit never builds git objects itself. Hashing, tree and commit
//! construction, refs and checkout all go through the [`ObjectStore`]
//! capability, implemented against the real `git` binary by [`GitStore`].
//! The trait keeps the surface narrow so the reconciliation engine can be
//! exercised against an in-memory double instead of a real object database.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::path_key::PathKey;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Capability interface over the external content-addressable store
///
/// Hashes are opaque tokens: the store produces and validates them, the core
/// only compares and persists them.
pub trait ObjectStore {
    /// Hash the blob at a repository-relative path, optionally persisting it
    fn hash_object(&self, key: &PathKey, persist: bool) -> anyhow::Result<ObjectId>;

    /// Build a tree object from the given (sorted) index entries
    fn write_tree(&self, entries: &[IndexEntry]) -> anyhow::Result<ObjectId>;

    /// Create a commit object for a tree, with an optional parent
    fn write_commit(
        &self,
        tree: &ObjectId,
        parent: Option<&ObjectId>,
        message: &str,
    ) -> anyhow::Result<ObjectId>;

    /// The commit HEAD currently resolves to, if any
    fn read_head(&self) -> anyhow::Result<Option<ObjectId>>;

    /// Flat `path -> hash` listing of the tree behind HEAD
    ///
    /// An unborn HEAD yields an empty map.
    fn head_tree(&self) -> anyhow::Result<BTreeMap<PathKey, ObjectId>>;

    /// Name of the current branch, or `"detached"`
    fn current_branch(&self) -> anyhow::Result<String>;

    /// Move the current branch ref to a new commit
    fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()>;

    /// Switch the working tree to a branch or commit
    fn checkout(&self, target: &str) -> anyhow::Result<()>;

    /// Print the branch listing
    fn list_branches(&self) -> anyhow::Result<()>;

    fn create_branch(&self, name: &str) -> anyhow::Result<()>;

    fn delete_branch(&self, name: &str) -> anyhow::Result<()>;

    /// Decorated one-line commit graph, `None` when there is no history
    fn history(&self) -> anyhow::Result<Option<String>>;
}

/// Object store backed by the `git` binary
///
/// Plumbing calls capture stdout with stderr silenced; porcelain delegations
/// (branch listing, checkout) pass the terminal straight through.
#[derive(Debug)]
pub struct GitStore {
    root: Box<Path>,
}

impl GitStore {
    pub fn new(root: Box<Path>) -> Self {
        GitStore { root }
    }

    fn git(&self) -> Command {
        let mut command = Command::new("git");
        command.arg("-C").arg(&*self.root);
        command
    }

    /// Temporary index used to stage entries for `write-tree`
    fn scratch_index_path(&self) -> PathBuf {
        self.root
            .join(".git")
            .join(format!("{}-tmp-{}", super::index::INDEX_FILE_NAME, std::process::id()))
    }

    /// Run a git command, capturing stdout; a non-zero exit yields `None`
    fn capture(mut command: Command) -> anyhow::Result<Option<String>> {
        let output = command
            .stderr(Stdio::null())
            .output()
            .context("failed to invoke git")?;

        if !output.status.success() {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
    }

    /// Run a git command with inherited stdio, reporting only success
    fn passthrough(mut command: Command) -> anyhow::Result<bool> {
        let status = command.status().context("failed to invoke git")?;
        Ok(status.success())
    }

    fn capture_id(command: Command) -> anyhow::Result<Option<ObjectId>> {
        match Self::capture(command)? {
            Some(output) => Ok(Some(ObjectId::try_parse(output.trim())?)),
            None => Ok(None),
        }
    }

    fn stage_into_scratch_index(
        &self,
        scratch: &Path,
        entries: &[IndexEntry],
    ) -> anyhow::Result<ObjectId> {
        let mut clear = self.git();
        clear
            .env("GIT_INDEX_FILE", scratch)
            .args(["read-tree", "--empty"]);
        if Self::capture(clear)?.is_none() {
            return Err(Error::TreeBuild("read-tree --empty failed".to_string()).into());
        }

        for entry in entries {
            let mut stage = self.git();
            stage
                .env("GIT_INDEX_FILE", scratch)
                .args(["update-index", "--add", "--cacheinfo", "100644"])
                .arg(entry.oid.as_ref())
                .arg(entry.key.as_str());
            if Self::capture(stage)?.is_none() {
                return Err(
                    Error::TreeBuild(format!("update-index failed for {}", entry.key)).into(),
                );
            }
        }

        let mut write = self.git();
        write.env("GIT_INDEX_FILE", scratch).arg("write-tree");
        match Self::capture_id(write) {
            Ok(Some(tree)) => Ok(tree),
            _ => Err(Error::TreeBuild("write-tree failed".to_string()).into()),
        }
    }
}

impl ObjectStore for GitStore {
    fn hash_object(&self, key: &PathKey, persist: bool) -> anyhow::Result<ObjectId> {
        let mut command = self.git();
        command.arg("hash-object");
        if persist {
            command.arg("-w");
        }
        command.arg("--").arg(key.as_str());

        Self::capture_id(command)?
            .ok_or_else(|| anyhow::anyhow!("object store failed to hash {}", key))
    }

    fn write_tree(&self, entries: &[IndexEntry]) -> anyhow::Result<ObjectId> {
        let scratch = self.scratch_index_path();
        let tree = self.stage_into_scratch_index(&scratch, entries);

        if let Err(err) = std::fs::remove_file(&scratch)
            && err.kind() != std::io::ErrorKind::NotFound
        {
            return Err(Error::TreeBuild(format!("cannot remove {}", scratch.display())).into());
        }

        tree
    }

    fn write_commit(
        &self,
        tree: &ObjectId,
        parent: Option<&ObjectId>,
        message: &str,
    ) -> anyhow::Result<ObjectId> {
        let mut command = self.git();
        command
            .env("GIT_AUTHOR_NAME", "rgit")
            .env("GIT_AUTHOR_EMAIL", "rgit@local")
            .env("GIT_COMMITTER_NAME", "rgit")
            .env("GIT_COMMITTER_EMAIL", "rgit@local")
            .arg("commit-tree")
            .arg(tree.as_ref());
        if let Some(parent) = parent {
            command.arg("-p").arg(parent.as_ref());
        }
        command.arg("-m").arg(message);

        match Self::capture_id(command) {
            Ok(Some(commit)) => Ok(commit),
            _ => Err(Error::CommitWrite("commit-tree failed".to_string()).into()),
        }
    }

    fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let mut command = self.git();
        command.args(["rev-parse", "--verify", "HEAD"]);

        match Self::capture(command)? {
            Some(output) => Ok(ObjectId::try_parse(output.trim()).ok()),
            None => Ok(None),
        }
    }

    fn head_tree(&self) -> anyhow::Result<BTreeMap<PathKey, ObjectId>> {
        let mut tree = BTreeMap::new();

        if self.read_head()?.is_none() {
            return Ok(tree);
        }

        let mut command = self.git();
        command.args(["ls-tree", "-r", "HEAD"]);
        let listing = Self::capture(command)?
            .ok_or_else(|| anyhow::anyhow!("object store failed to list the HEAD tree"))?;

        let record = regex::Regex::new(r"^(\S+) (\S+) ([0-9a-fA-F]{40})\t(.+)$")?;
        for line in listing.lines() {
            let Some(captures) = record.captures(line) else {
                continue;
            };
            if &captures[2] != "blob" {
                continue;
            }
            let oid = ObjectId::try_parse(&captures[3])?;
            let key = PathKey::parse(&captures[4])?;
            tree.insert(key, oid);
        }

        Ok(tree)
    }

    fn current_branch(&self) -> anyhow::Result<String> {
        let mut command = self.git();
        command.args(["symbolic-ref", "--short", "HEAD"]);

        match Self::capture(command)? {
            Some(output) => Ok(output.trim().to_string()),
            None => Ok("detached".to_string()),
        }
    }

    fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        let mut command = self.git();
        command.args(["update-ref", "HEAD"]).arg(oid.as_ref());
        if Self::capture(command)?.is_none() {
            return Err(Error::RefUpdate(format!("update-ref HEAD {} failed", oid)).into());
        }

        // Keep git's own index in step with the moved HEAD so later delegated
        // checkouts see a clean state. Best effort.
        let mut refresh = self.git();
        refresh.args(["read-tree", "HEAD"]);
        let _ = Self::capture(refresh);

        Ok(())
    }

    fn checkout(&self, target: &str) -> anyhow::Result<()> {
        let mut command = self.git();
        command.arg("checkout").arg(target);
        if !Self::passthrough(command)? {
            return Err(Error::RefUpdate(format!("checkout '{}' failed", target)).into());
        }
        Ok(())
    }

    fn list_branches(&self) -> anyhow::Result<()> {
        let mut command = self.git();
        command.arg("branch");
        if !Self::passthrough(command)? {
            return Err(anyhow::anyhow!("branch listing failed"));
        }
        Ok(())
    }

    fn create_branch(&self, name: &str) -> anyhow::Result<()> {
        let mut command = self.git();
        command.arg("branch").arg(name);
        if !Self::passthrough(command)? {
            return Err(Error::RefUpdate(format!("cannot create branch '{}'", name)).into());
        }
        Ok(())
    }

    fn delete_branch(&self, name: &str) -> anyhow::Result<()> {
        let mut command = self.git();
        command.args(["branch", "-d"]).arg(name);
        if !Self::passthrough(command)? {
            return Err(Error::RefUpdate(format!("cannot delete branch '{}'", name)).into());
        }
        Ok(())
    }

    fn history(&self) -> anyhow::Result<Option<String>> {
        let mut command = self.git();
        command.args(["--no-pager", "log", "--decorate", "--oneline", "--graph"]);

        match Self::capture(command)? {
            Some(output) if !output.trim().is_empty() => Ok(Some(output)),
            _ => Ok(None),
        }
    }
}
