//! Error taxonomy for rgit commands
//!
//! Commands propagate these through `anyhow::Result`, so callers keep the
//! usual `?`-chains while tests can still downcast to a concrete variant.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("not inside an rgit repository (no .git directory found)")]
    NotARepository,

    #[error("path outside repository: {0}")]
    OutsideRepository(PathBuf),

    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("index file {path}: {source}")]
    IndexIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot scan working tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("cannot write tree object: {0}")]
    TreeBuild(String),

    #[error("cannot create commit object: {0}")]
    CommitWrite(String),

    #[error("cannot update ref: {0}")]
    RefUpdate(String),

    #[error("nothing staged")]
    EmptyStage,
}

impl Error {
    pub fn index_io(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::IndexIo {
            path: path.to_path_buf(),
            source,
        }
    }
}
