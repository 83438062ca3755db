use crate::common::command::{read_index, repository_dir, run_rgit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_missing_path_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_rgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_rgit_command(repository_dir.path(), &["add", "nope.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("path not found"));

    assert_eq!(read_index(repository_dir.path()), "");

    Ok(())
}
