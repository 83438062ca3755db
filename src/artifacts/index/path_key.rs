//! Repository-relative path key
//!
//! Path keys identify staged entries. They are always relative to the
//! repository root, use `/` separators, and are never `.` or empty. Equality
//! and ordering are byte-wise, which is also the order the index is persisted
//! in.

use std::path::{Component, Path, PathBuf};

/// Canonical repository-relative file path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathKey(String);

impl PathKey {
    /// Build a key from a path already made relative to the repository root
    ///
    /// Rejects absolute paths, `.`/`..` components, empty paths and non-UTF-8
    /// names: none of those can identify an index entry.
    pub fn from_relative(path: &Path) -> anyhow::Result<Self> {
        let mut segments = Vec::new();

        for component in path.components() {
            match component {
                Component::Normal(name) => {
                    let name = name
                        .to_str()
                        .ok_or_else(|| anyhow::anyhow!("non-UTF-8 path: {:?}", path))?;
                    segments.push(name);
                }
                _ => return Err(anyhow::anyhow!("invalid path key: {:?}", path)),
            }
        }

        if segments.is_empty() {
            return Err(anyhow::anyhow!("empty path key"));
        }

        Ok(Self(segments.join("/")))
    }

    /// Build a key from the path field of a persisted index record
    ///
    /// Record paths are stored verbatim, so the only requirement here is that
    /// the field is non-empty.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        if raw.is_empty() {
            return Err(anyhow::anyhow!("empty path key"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key as a relative filesystem path, for joining onto the root
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }
}

impl AsRef<str> for PathKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PathKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
