use crate::common::command::{read_index, repository_dir, run_rgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_path_outside_repository_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_rgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let outside = assert_fs::TempDir::new()?;
    write_file(FileSpec::new(
        outside.path().join("other.txt"),
        "elsewhere".to_string(),
    ));
    let outside_path = outside.path().join("other.txt").display().to_string();

    run_rgit_command(repository_dir.path(), &["add", &outside_path])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("outside repository"));

    assert_eq!(read_index(repository_dir.path()), "");

    Ok(())
}
