//! Repository aggregate
//!
//! Wires the areas together for one command invocation: the canonical root,
//! the staging index, the working tree and the delegated object store.

use crate::areas::database::{GitStore, ObjectStore};
use crate::areas::index::{INDEX_FILE_NAME, Index};
use crate::areas::workspace::Workspace;
use crate::errors::Error;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    workspace: Workspace,
    store: Box<dyn ObjectStore>,
}

impl Repository {
    /// Open (or create) a repository rooted at `path`
    ///
    /// Used by `init`, where the directory may not exist yet. Other commands
    /// go through [`Repository::discover`].
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            std::fs::create_dir_all(path)?;
        }
        let root = Path::new(path).canonicalize()?;

        Ok(Self::assemble(root, writer, None))
    }

    /// Locate the repository containing the current directory
    ///
    /// Walks ancestor directories looking for a `.git` directory; failing
    /// that, the command is not running inside a repository.
    pub fn discover(writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let mut cursor = cwd.as_path();

        loop {
            if cursor.join(".git").is_dir() {
                let root = cursor.canonicalize()?;
                return Ok(Self::assemble(root, writer, None));
            }
            cursor = cursor.parent().ok_or(Error::NotARepository)?;
        }
    }

    /// Open a repository against a caller-supplied object store
    ///
    /// This is the seam the engine tests use to swap in the in-memory store.
    pub fn with_store(
        root: PathBuf,
        writer: Box<dyn std::io::Write>,
        store: Box<dyn ObjectStore>,
    ) -> Self {
        Self::assemble(root, writer, Some(store))
    }

    fn assemble(
        root: PathBuf,
        writer: Box<dyn std::io::Write>,
        store: Option<Box<dyn ObjectStore>>,
    ) -> Self {
        let root = root.into_boxed_path();
        let index = Index::new(root.join(".git").join(INDEX_FILE_NAME).into_boxed_path());
        let workspace = Workspace::new(root.clone());
        let store = store.unwrap_or_else(|| Box::new(GitStore::new(root.clone())));

        Repository {
            path: root,
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            workspace,
            store,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn store(&self) -> &dyn ObjectStore {
        self.store.as_ref()
    }

    /// Overwrite the staging index with the tree behind the current HEAD
    ///
    /// Runs after a successful commit or checkout. Staged entries with no
    /// counterpart in HEAD are dropped.
    pub fn resync_index(&self, index: &mut Index) -> anyhow::Result<()> {
        let tree = self.store.head_tree()?;
        index.replace_all(tree);
        index.write_updates()
    }
}
