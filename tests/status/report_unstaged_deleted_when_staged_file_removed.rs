use crate::common::command::{repository_dir, run_rgit_command};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_unstaged_deleted_when_staged_file_removed(
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
        .success();

    delete_path(&repository_dir.path().join("a.txt"));

    // The staged axis still reports the entry as new; the unstaged axis
    // reports the on-disk deletion. The two are independent.
    let expected_output = "On branch main\n\n\
        Changes to be committed:\n  new file:   a.txt\n\n\
        Changes not staged for commit:\n  deleted:    a.txt\n\n"
        .to_string();
    let output = run_rgit_command(repository_dir.path(), &["status"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
