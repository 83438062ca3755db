//! In-memory object store
//!
//! A self-contained [`ObjectStore`] over plain maps, used to exercise the
//! staging and reconciliation logic without a real object database. Blob
//! hashes are genuine git blob digests (`"blob <len>\0" + content`, SHA-1),
//! so hash comparisons behave exactly as they do against the git-backed
//! store. Checkout only moves the branch pointer; the working tree is left
//! alone.

use crate::areas::database::ObjectStore;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::path_key::PathKey;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use anyhow::Context;
use sha1::{Digest, Sha1};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone)]
struct CommitRecord {
    tree: ObjectId,
    parent: Option<ObjectId>,
    message: String,
}

#[derive(Debug, Default)]
struct State {
    blobs: BTreeMap<ObjectId, Vec<u8>>,
    trees: BTreeMap<ObjectId, BTreeMap<PathKey, ObjectId>>,
    commits: BTreeMap<ObjectId, CommitRecord>,
    branches: BTreeMap<String, ObjectId>,
    current: String,
}

#[derive(Debug)]
pub struct MemoryStore {
    root: Box<Path>,
    state: RefCell<State>,
}

impl MemoryStore {
    pub fn new(root: Box<Path>) -> Self {
        let state = State {
            current: "main".to_string(),
            ..State::default()
        };
        MemoryStore {
            root,
            state: RefCell::new(state),
        }
    }

    fn digest(payload: &[u8]) -> anyhow::Result<ObjectId> {
        let mut hasher = Sha1::new();
        hasher.update(payload);
        ObjectId::try_parse(&hex::encode(hasher.finalize()))
    }

    fn blob_digest(content: &[u8]) -> anyhow::Result<ObjectId> {
        let mut payload = format!("blob {}\0", content.len()).into_bytes();
        payload.extend_from_slice(content);
        Self::digest(&payload)
    }
}

impl ObjectStore for MemoryStore {
    fn hash_object(&self, key: &PathKey, persist: bool) -> anyhow::Result<ObjectId> {
        let content = std::fs::read(self.root.join(key.to_path()))
            .with_context(|| format!("cannot read {}", key))?;
        let oid = Self::blob_digest(&content)?;

        if persist {
            self.state.borrow_mut().blobs.insert(oid.clone(), content);
        }

        Ok(oid)
    }

    fn write_tree(&self, entries: &[IndexEntry]) -> anyhow::Result<ObjectId> {
        let mut payload = b"tree\n".to_vec();
        for entry in entries {
            payload.extend_from_slice(entry.to_record().as_bytes());
            payload.push(b'\n');
        }
        let oid = Self::digest(&payload)?;

        let tree = entries
            .iter()
            .map(|entry| (entry.key.clone(), entry.oid.clone()))
            .collect();
        self.state.borrow_mut().trees.insert(oid.clone(), tree);

        Ok(oid)
    }

    fn write_commit(
        &self,
        tree: &ObjectId,
        parent: Option<&ObjectId>,
        message: &str,
    ) -> anyhow::Result<ObjectId> {
        let mut payload = format!("commit {}\n", tree).into_bytes();
        if let Some(parent) = parent {
            payload.extend_from_slice(format!("parent {}\n", parent).as_bytes());
        }
        payload.extend_from_slice(message.as_bytes());
        let oid = Self::digest(&payload)?;

        self.state.borrow_mut().commits.insert(
            oid.clone(),
            CommitRecord {
                tree: tree.clone(),
                parent: parent.cloned(),
                message: message.to_string(),
            },
        );

        Ok(oid)
    }

    fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let state = self.state.borrow();
        Ok(state.branches.get(&state.current).cloned())
    }

    fn head_tree(&self) -> anyhow::Result<BTreeMap<PathKey, ObjectId>> {
        let Some(head) = self.read_head()? else {
            return Ok(BTreeMap::new());
        };

        let state = self.state.borrow();
        let commit = state
            .commits
            .get(&head)
            .ok_or_else(|| anyhow::anyhow!("unknown commit: {}", head))?;
        state
            .trees
            .get(&commit.tree)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown tree: {}", commit.tree))
    }

    fn current_branch(&self) -> anyhow::Result<String> {
        Ok(self.state.borrow().current.clone())
    }

    fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        let mut state = self.state.borrow_mut();
        let current = state.current.clone();
        state.branches.insert(current, oid.clone());
        Ok(())
    }

    fn checkout(&self, target: &str) -> anyhow::Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.branches.contains_key(target) {
            return Err(Error::RefUpdate(format!("unknown branch '{}'", target)).into());
        }
        state.current = target.to_string();
        Ok(())
    }

    fn list_branches(&self) -> anyhow::Result<()> {
        let state = self.state.borrow();
        for name in state.branches.keys() {
            let marker = if *name == state.current { "*" } else { " " };
            println!("{} {}", marker, name);
        }
        Ok(())
    }

    fn create_branch(&self, name: &str) -> anyhow::Result<()> {
        let Some(head) = self.read_head()? else {
            return Err(Error::RefUpdate("no commit to branch from".to_string()).into());
        };
        self.state
            .borrow_mut()
            .branches
            .insert(name.to_string(), head);
        Ok(())
    }

    fn delete_branch(&self, name: &str) -> anyhow::Result<()> {
        let mut state = self.state.borrow_mut();
        if state.current == name {
            return Err(Error::RefUpdate(format!("'{}' is checked out", name)).into());
        }
        if state.branches.remove(name).is_none() {
            return Err(Error::RefUpdate(format!("unknown branch '{}'", name)).into());
        }
        Ok(())
    }

    fn history(&self) -> anyhow::Result<Option<String>> {
        let mut lines = Vec::new();
        let mut cursor = self.read_head()?;

        let state = self.state.borrow();
        while let Some(oid) = cursor {
            let commit = state
                .commits
                .get(&oid)
                .ok_or_else(|| anyhow::anyhow!("unknown commit: {}", oid))?;
            lines.push(format!("* {} {}", oid.short(), commit.message));
            cursor = commit.parent.clone();
        }

        if lines.is_empty() {
            return Ok(None);
        }
        Ok(Some(lines.join("\n") + "\n"))
    }
}
