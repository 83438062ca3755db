//! Staging index (the `rgit-index` file)
//!
//! The index is the durable set of `(path, hash)` pairs destined for the next
//! commit. It lives next to git's own metadata as `.git/rgit-index`.
//!
//! ## File format
//!
//! One record per line, `"<hash> <path>\n"`, sorted ascending byte-wise by
//! path. The file is rewritten in full on every save, so re-saving an
//! unchanged index produces byte-identical output. Records that fail the
//! hash-format check or are missing a field are skipped on load rather than
//! failing the whole index.
//!
//! ## Locking
//!
//! Reads take a shared advisory lock and writes an exclusive one, both scoped
//! to the guard's lifetime. Nothing guards the span between a load and the
//! following save; concurrent invocations can still interleave there.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::path_key::PathKey;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

/// File name of the staging index inside `.git`
pub const INDEX_FILE_NAME: &str = "rgit-index";

/// Staging index store
#[derive(Debug)]
pub struct Index {
    /// Path to the index file (typically `.git/rgit-index`)
    path: Box<Path>,
    /// Staged entries keyed by path
    entries: BTreeMap<PathKey, IndexEntry>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing file is not an error and yields an empty index. Malformed
    /// records are skipped; a later record for the same path replaces an
    /// earlier one.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .map_err(|source| Error::index_io(&self.path, source))?;
        let mut lock = file_guard::lock(&mut file, file_guard::Lock::Shared, 0, 1)
            .map_err(|source| Error::index_io(&self.path, source))?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .map_err(|source| Error::index_io(&self.path, source))?;

        for line in content.lines() {
            if let Some(entry) = IndexEntry::parse_record(line) {
                self.entries.insert(entry.key.clone(), entry);
            }
        }

        Ok(())
    }

    /// Replace-or-insert an entry, keyed by its path
    pub fn upsert(&mut self, entry: IndexEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Overwrite the whole index with a tree snapshot
    ///
    /// Used after commit and checkout to resynchronize the stage with HEAD.
    /// Entries not present in the snapshot are dropped.
    pub fn replace_all(&mut self, tree: BTreeMap<PathKey, ObjectId>) {
        self.entries = tree
            .into_iter()
            .map(|(key, oid)| (key.clone(), IndexEntry::new(key, oid)))
            .collect();
    }

    /// Write the index back to disk, sorted by path
    ///
    /// The file is fully rewritten under an exclusive lock. Any I/O failure
    /// aborts the enclosing command; no partial state is assumed safe.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| Error::index_io(&self.path, source))?;
        let mut lock = file_guard::lock(&mut file, file_guard::Lock::Exclusive, 0, 1)
            .map_err(|source| Error::index_io(&self.path, source))?;

        let file = lock.deref_mut();
        for entry in self.entries.values() {
            writeln!(file, "{}", entry.to_record())
                .map_err(|source| Error::index_io(&self.path, source))?;
        }
        file.flush()
            .map_err(|source| Error::index_io(&self.path, source))?;

        Ok(())
    }

    pub fn entry(&self, key: &PathKey) -> Option<&IndexEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &PathKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
