use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

const DEFAULT_BRANCH: &str = "main";

const DEFAULT_CONFIG: &str = "[core]\n\
    \trepositoryformatversion = 0\n\
    \tfilemode = true\n\
    \tbare = false\n\
    \tlogallrefupdates = true\n";

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        let git_dir = self.path().join(".git");
        if git_dir.exists() {
            anyhow::bail!("repository already exists at {}", git_dir.display());
        }

        fs::create_dir_all(git_dir.join("objects"))
            .context("Failed to create .git/objects directory")?;
        fs::create_dir_all(git_dir.join("refs").join("heads"))
            .context("Failed to create .git/refs/heads directory")?;
        fs::create_dir_all(git_dir.join("refs").join("tags"))
            .context("Failed to create .git/refs/tags directory")?;

        fs::write(
            git_dir.join("HEAD"),
            format!("ref: refs/heads/{DEFAULT_BRANCH}\n"),
        )
        .context("Failed to create initial HEAD reference")?;
        fs::write(git_dir.join("config"), DEFAULT_CONFIG)
            .context("Failed to write .git/config")?;
        fs::write(
            git_dir.join("description"),
            "Unnamed repository; edit this file to name it.\n",
        )
        .context("Failed to write .git/description")?;

        let index = self.index();
        let index = index.lock().await;
        fs::write(index.path(), b"").context("Failed to create the staging index file")?;

        writeln!(
            self.writer(),
            "Initialized empty rgit repository in {}",
            git_dir.display()
        )?;

        Ok(())
    }
}
