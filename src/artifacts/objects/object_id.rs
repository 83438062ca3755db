//! Object identifier (content hash)
//!
//! Object IDs are 40-character hexadecimal digests handed out by the object
//! store. rgit never looks inside one: it is validated on construction and
//! from then on only compared for equality and persisted.

use crate::artifacts::objects::{OBJECT_ID_LENGTH, OBJECT_ID_SHORT_LENGTH};

/// Validated content hash
///
/// A 40-character hexadecimal string identifying a blob, tree or commit in
/// the delegated object store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: &str) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id.to_string()))
    }

    /// Check whether a string has the shape of an object ID
    pub fn is_valid(id: &str) -> bool {
        id.len() == OBJECT_ID_LENGTH && id.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Abbreviated form used in command output
    pub fn short(&self) -> &str {
        &self.0[..OBJECT_ID_SHORT_LENGTH]
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
