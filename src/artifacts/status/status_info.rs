use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::index::path_key::PathKey;
use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::BTreeSet;

/// The six change categories of a status run, plus the branch they were
/// computed on
///
/// Categories 1-3 describe the staged axis (index vs HEAD), 4-5 the unstaged
/// axis (working tree vs index), 6 the paths neither side knows about. A path
/// appears at most once per axis; iteration order inside each set is
/// lexicographic.
#[derive(Debug, Clone, Default)]
pub struct StatusReport {
    pub branch: String,
    pub staged_new: BTreeSet<PathKey>,
    pub staged_modified: BTreeSet<PathKey>,
    pub staged_deleted: BTreeSet<PathKey>,
    pub unstaged_modified: BTreeSet<PathKey>,
    pub unstaged_deleted: BTreeSet<PathKey>,
    pub untracked: BTreeSet<PathKey>,
}

impl StatusReport {
    pub fn has_staged_changes(&self) -> bool {
        !(self.staged_new.is_empty()
            && self.staged_modified.is_empty()
            && self.staged_deleted.is_empty())
    }

    pub fn has_unstaged_changes(&self) -> bool {
        !(self.unstaged_modified.is_empty() && self.unstaged_deleted.is_empty())
    }

    pub fn is_clean(&self) -> bool {
        !self.has_staged_changes() && !self.has_unstaged_changes() && self.untracked.is_empty()
    }
}

/// Three-way reconciliation of HEAD tree, staging index and working tree
#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl Status<'_> {
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusReport> {
        let head_tree = self.repository.store().head_tree()?;
        let working_files = self.repository.workspace().list_files()?;
        let inspector = Inspector::new(self.repository);

        let mut report = StatusReport {
            branch: self.repository.store().current_branch()?,
            ..StatusReport::default()
        };

        for entry in index.entries() {
            match inspector.check_staged_against_head(entry, head_tree.get(&entry.key)) {
                IndexChangeType::Added => {
                    report.staged_new.insert(entry.key.clone());
                }
                IndexChangeType::Modified => {
                    report.staged_modified.insert(entry.key.clone());
                }
                IndexChangeType::Deleted | IndexChangeType::None => {}
            }

            match inspector.check_staged_against_workspace(entry)? {
                WorkspaceChangeType::Modified => {
                    report.unstaged_modified.insert(entry.key.clone());
                }
                WorkspaceChangeType::Deleted => {
                    report.unstaged_deleted.insert(entry.key.clone());
                }
                WorkspaceChangeType::None => {}
            }
        }

        for key in head_tree.keys() {
            if !index.contains(key) {
                report.staged_deleted.insert(key.clone());
            }
        }

        for key in &working_files {
            if !index.contains(key) && !head_tree.contains_key(key) {
                report.untracked.insert(key.clone());
            }
        }

        Ok(report)
    }
}
