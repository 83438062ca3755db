use crate::common::command::{git_stdout, read_index, repository_dir, run_rgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_single_file_updates_index(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_rgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hi".to_string(),
    ));

    run_rgit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("staged 1 file(s)"));

    let expected_hash = git_stdout(repository_dir.path(), &["hash-object", "a.txt"])
        .trim()
        .to_string();
    assert_eq!(
        read_index(repository_dir.path()),
        format!("{expected_hash} a.txt\n")
    );

    // The blob was persisted into the object store, not just hashed
    let object_type = git_stdout(repository_dir.path(), &["cat-file", "-t", &expected_hash]);
    assert_eq!(object_type.trim(), "blob");

    Ok(())
}
