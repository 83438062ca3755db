use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::Error;
use anyhow::Context;
use std::collections::BTreeSet;
use std::io::Write;

impl Repository {
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        if paths.is_empty() {
            return Err(Error::Usage("expected at least one path".to_string()).into());
        }

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        // Resolve every argument before hashing anything: a single bad path
        // fails the whole command with the index untouched.
        let mut files = BTreeSet::new();
        for path in paths {
            let absolute = self.workspace().resolve(path)?;
            files.extend(self.workspace().collect_files(&absolute)?);
        }

        if files.is_empty() {
            return Err(Error::Usage("no files matched".to_string()).into());
        }

        for key in &files {
            let oid = self
                .store()
                .hash_object(key, true)
                .with_context(|| format!("failed to stage {}", key))?;
            index.upsert(IndexEntry::new(key.clone(), oid));
        }

        index.write_updates()?;

        writeln!(self.writer(), "staged {} file(s)", files.len())?;

        Ok(())
    }
}
