use crate::common::command::{read_index, repository_dir, run_rgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_staged_new_files(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_rgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hi".to_string(),
    ));
    run_rgit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    let index_content = read_index(repository_dir.path());
    assert_eq!(index_content.lines().count(), 1);
    assert!(index_content.ends_with(" a.txt\n"));

    let expected_output =
        "On branch main\n\nChanges to be committed:\n  new file:   a.txt\n\n".to_string();
    let output = run_rgit_command(repository_dir.path(), &["status"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
