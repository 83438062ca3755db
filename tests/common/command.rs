use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub fn run_rgit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("rgit").expect("Failed to find the rgit binary");
    cmd.current_dir(dir).args(args);
    cmd
}

pub fn rgit_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_rgit_command(dir, &["commit", "-m"]);
    cmd.arg(message);
    cmd
}

/// Inspect repository state through the real git binary
pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .expect("Failed to run git");
    assert!(output.status.success(), "git {:?} failed", args);
    String::from_utf8(output.stdout).expect("git output was not UTF-8")
}

pub fn read_index(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".git").join("rgit-index"))
        .expect("Failed to read the staging index")
}

/// The staging index as git would derive it from HEAD
pub fn index_derived_from_head(dir: &Path) -> String {
    git_stdout(dir, &["ls-tree", "-r", "HEAD"])
        .lines()
        .filter_map(|line| {
            let (meta, path) = line.split_once('\t')?;
            let hash = meta.split_whitespace().nth(2)?;
            Some(format!("{hash} {path}\n"))
        })
        .collect()
}

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_rgit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    let file3 = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    );
    write_file(file3);

    run_rgit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    rgit_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}
