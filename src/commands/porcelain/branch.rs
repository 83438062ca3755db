use crate::areas::repository::Repository;
use crate::errors::Error;

impl Repository {
    pub fn branch(&self, name: Option<&str>, delete: Option<&str>) -> anyhow::Result<()> {
        match (name, delete) {
            (None, None) => self.store().list_branches(),
            (Some(name), None) => self.store().create_branch(name),
            (None, Some(name)) => self.store().delete_branch(name),
            (Some(_), Some(_)) => Err(Error::Usage(
                "usage: rgit branch [name] | rgit branch -d <name>".to_string(),
            )
            .into()),
        }
    }
}
