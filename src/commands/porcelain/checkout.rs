use crate::areas::repository::Repository;

impl Repository {
    pub async fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        self.store().checkout(target)?;

        // The working tree has already moved; a failed resync leaves a stale
        // stage behind but must not fail the checkout.
        let index = self.index();
        let mut index = index.lock().await;
        if let Err(err) = self.resync_index(&mut index) {
            eprintln!("warning: failed to sync index with HEAD: {err:#}");
        }

        Ok(())
    }
}
