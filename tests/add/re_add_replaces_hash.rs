use crate::common::command::{git_stdout, read_index, repository_dir, run_rgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn re_add_replaces_hash(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_rgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "first".to_string(),
    ));
    run_rgit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    let first_index = read_index(repository_dir.path());

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "second".to_string(),
    ));
    run_rgit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    let second_index = read_index(repository_dir.path());
    let expected_hash = git_stdout(repository_dir.path(), &["hash-object", "a.txt"])
        .trim()
        .to_string();

    assert_ne!(first_index, second_index);
    assert_eq!(second_index, format!("{expected_hash} a.txt\n"));

    Ok(())
}
