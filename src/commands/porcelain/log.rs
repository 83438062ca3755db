use crate::areas::repository::Repository;
use crate::artifacts::core::page_output;
use is_terminal::IsTerminal;
use std::io::Write;

impl Repository {
    pub fn log(&self) -> anyhow::Result<()> {
        let Some(history) = self.store().history()? else {
            writeln!(self.writer(), "No commits yet.")?;
            return Ok(());
        };

        if std::io::stdout().is_terminal() {
            page_output(&history)?;
        } else {
            write!(self.writer(), "{}", history)?;
        }

        Ok(())
    }
}
