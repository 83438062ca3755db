use crate::areas::repository::Repository;
use crate::errors::Error;
use std::io::Write;

impl Repository {
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let message = message.trim();
        if message.is_empty() {
            return Err(Error::Usage("commit message is required".to_string()).into());
        }

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        if index.is_empty() {
            return Err(Error::EmptyStage.into());
        }

        // Entries iterate sorted by path, which is the order the tree
        // builder expects.
        let entries = index.entries().cloned().collect::<Vec<_>>();
        let tree_id = self.store().write_tree(&entries)?;

        let parent = self.store().read_head()?;
        let commit_id = self.store().write_commit(&tree_id, parent.as_ref(), message)?;
        self.store().update_head(&commit_id)?;

        // The commit is in; a failed resync must not undo it.
        if let Err(err) = self.resync_index(&mut index) {
            eprintln!("warning: failed to sync index with HEAD: {err:#}");
        }

        let branch = self.store().current_branch()?;
        writeln!(
            self.writer(),
            "[{} {}] {}",
            branch,
            commit_id.short(),
            message
        )?;

        Ok(())
    }
}
