use crate::common::command::{init_repository_dir, run_rgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn move_modified_file_to_staged_after_re_add(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "changed".to_string(),
    ));
    run_rgit_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    let expected_output =
        "On branch main\n\nChanges to be committed:\n  modified:   1.txt\n\n".to_string();
    let output = run_rgit_command(repository_dir.path(), &["status"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
