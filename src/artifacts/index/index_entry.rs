//! Staged index entry
//!
//! One record of the staging index: a path key paired with the content hash
//! the object store reported when the path was staged.
//!
//! ## Record format
//!
//! Each entry persists as one line, `"<hash> <path>"`, with exactly one space
//! between the fields. The path is stored verbatim and may itself contain
//! spaces; parsing splits on the first space only.

use crate::artifacts::index::path_key::PathKey;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    pub key: PathKey,
    pub oid: ObjectId,
}

impl IndexEntry {
    /// Parse a persisted record line
    ///
    /// Returns `None` for records that don't round-trip: missing separator,
    /// malformed hash field, or empty path field. Loading skips such lines
    /// instead of failing the whole index.
    pub fn parse_record(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            return None;
        }

        let (hash, path) = line.split_once(' ')?;
        let oid = ObjectId::try_parse(hash).ok()?;
        let key = PathKey::parse(path).ok()?;

        Some(IndexEntry::new(key, oid))
    }

    /// Render the record line, without the trailing newline
    pub fn to_record(&self) -> String {
        format!("{} {}", self.oid, self.key)
    }
}
