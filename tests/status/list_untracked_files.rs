use crate::common::command::{init_repository_dir, run_rgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_files(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let content = Words(3..8).fake::<Vec<String>>().join(" ");
    write_file(FileSpec::new(
        repository_dir.path().join("b.txt"),
        content.clone(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("4.txt"),
        content,
    ));

    let expected_output =
        "On branch main\n\nUntracked files:\n  a/4.txt\n  b.txt\n\n".to_string();
    let output = run_rgit_command(repository_dir.path(), &["status"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
