use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};
use derive_new::new;

/// Per-path comparisons behind the status report
///
/// The two checks are independent axes: a staged entry is compared against
/// the HEAD tree, and separately against what is on disk right now.
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl Inspector<'_> {
    /// Staged axis: how does a staged entry relate to HEAD?
    pub fn check_staged_against_head(
        &self,
        entry: &IndexEntry,
        head: Option<&ObjectId>,
    ) -> IndexChangeType {
        match head {
            None => IndexChangeType::Added,
            Some(head_oid) if head_oid != &entry.oid => IndexChangeType::Modified,
            Some(_) => IndexChangeType::None,
        }
    }

    /// Unstaged axis: how does the working tree relate to a staged entry?
    ///
    /// Re-hashes the file through the object store without persisting it;
    /// this is the only place status touches file contents, and only for
    /// staged paths.
    pub fn check_staged_against_workspace(
        &self,
        entry: &IndexEntry,
    ) -> anyhow::Result<WorkspaceChangeType> {
        let absolute = self.repository.workspace().root().join(entry.key.to_path());
        if !absolute.exists() {
            return Ok(WorkspaceChangeType::Deleted);
        }

        let on_disk = self.repository.store().hash_object(&entry.key, false)?;
        if on_disk != entry.oid {
            Ok(WorkspaceChangeType::Modified)
        } else {
            Ok(WorkspaceChangeType::None)
        }
    }
}
