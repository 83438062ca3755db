use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};
use crate::artifacts::status::status_info::{Status, StatusReport};
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub async fn status(&mut self) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        let report = Status::new(self).initialize(&index)?;

        writeln!(self.writer(), "On branch {}\n", report.branch)?;
        self.print_staged_section(&report)?;
        self.print_unstaged_section(&report)?;
        self.print_untracked_section(&report)?;

        if report.is_clean() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
        }

        Ok(())
    }

    fn print_staged_section(&self, report: &StatusReport) -> anyhow::Result<()> {
        if !report.has_staged_changes() {
            return Ok(());
        }

        writeln!(self.writer(), "Changes to be committed:")?;
        for path in &report.staged_new {
            writeln!(self.writer(), "{}{}", IndexChangeType::Added, path)?;
        }
        for path in &report.staged_modified {
            writeln!(self.writer(), "{}{}", IndexChangeType::Modified, path)?;
        }
        for path in &report.staged_deleted {
            writeln!(self.writer(), "{}{}", IndexChangeType::Deleted, path)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }

    fn print_unstaged_section(&self, report: &StatusReport) -> anyhow::Result<()> {
        if !report.has_unstaged_changes() {
            return Ok(());
        }

        writeln!(self.writer(), "Changes not staged for commit:")?;
        for path in &report.unstaged_modified {
            writeln!(self.writer(), "{}{}", WorkspaceChangeType::Modified, path)?;
        }
        for path in &report.unstaged_deleted {
            writeln!(self.writer(), "{}{}", WorkspaceChangeType::Deleted, path)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }

    fn print_untracked_section(&self, report: &StatusReport) -> anyhow::Result<()> {
        if report.untracked.is_empty() {
            return Ok(());
        }

        writeln!(self.writer(), "Untracked files:")?;
        for path in &report.untracked {
            writeln!(self.writer(), "  {}", path.as_str().red())?;
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
