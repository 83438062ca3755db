use crate::common::command::{read_index, repository_dir, run_rgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_directory_recursively(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_rgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_rgit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("staged 3 file(s)"));

    let index_content = read_index(repository_dir.path());
    let paths = index_content
        .lines()
        .filter_map(|line| line.split_once(' ').map(|(_, path)| path))
        .collect::<Vec<_>>();
    assert_eq!(paths, vec!["1.txt", "a/2.txt", "a/b/3.txt"]);

    Ok(())
}
