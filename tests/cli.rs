/*!
 * Command-line tests using `--print` so no clipboard is needed
 */

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn setup_project() -> TempDir {
    let temp_dir = tempdir().unwrap();
    fs::create_dir(temp_dir.path().join("src")).unwrap();
    fs::write(temp_dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();
    fs::write(temp_dir.path().join("notes.md"), "# Notes\n\nsome text\n").unwrap();
    fs::write(temp_dir.path().join("logo.png"), [0x89, 0x50, 0x4e, 0x47]).unwrap();
    temp_dir
}

fn contextcopy(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("contextcopy"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_print_files_in_selection_order() {
    let project = setup_project();

    contextcopy(&project)
        .args(["--print", "files", "notes.md", "src/main.rs", "src"])
        .assert()
        .success()
        .stdout(
            "```[notes.md]\n# Notes\n\nsome text\n```\n\n```[src/main.rs]\nfn main() {}\n```\n",
        )
        .stderr(predicate::str::contains(
            "Context Copy: Copied content of 2 file(s) to clipboard.",
        ));
}

#[test]
fn test_skipped_files_are_reported() {
    let project = setup_project();

    contextcopy(&project)
        .args(["--print", "files", "notes.md", "logo.png", "missing.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("```[notes.md]"))
        .stdout(predicate::str::contains("logo.png").not())
        .stderr(predicate::str::contains(
            "Context Copy: Skipped 2 file(s) (1 binary, 1 unreadable/error). \
             Examples: logo.png, missing.txt",
        ));
}

#[test]
fn test_no_valid_files_leaves_stdout_empty() {
    let project = setup_project();

    contextcopy(&project)
        .args(["--print", "files", "logo.png", "src"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "No valid text files found in selection to copy. Skipped 1 file(s)",
        ));
}

#[test]
fn test_empty_selection() {
    let project = setup_project();

    contextcopy(&project)
        .args(["--print", "files"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Context Copy: No files or folders selected.",
        ));
}

#[test]
fn test_paths_from_stdin() {
    let project = setup_project();

    contextcopy(&project)
        .args(["--print", "--quiet", "files", "--stdin"])
        .write_stdin("src/main.rs\n\nnotes.md\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("```[src/main.rs]"))
        .stdout(predicate::str::contains("```[notes.md]"))
        .stderr(predicate::str::contains("Copied content").not());
}

#[test]
fn test_fragment() {
    let project = setup_project();

    contextcopy(&project)
        .args(["--print", "fragment", "notes.md", "--lines", "3:"])
        .assert()
        .success()
        .stdout("```[notes.md:3-3]\nsome text\n```\n");
}

#[test]
fn test_json_report() {
    let project = setup_project();

    contextcopy(&project)
        .args(["--print", "--report", "json", "files", "notes.md"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"included_count\": 1"));
}

#[test]
fn test_invalid_arguments() {
    let project = setup_project();

    contextcopy(&project)
        .args(["fragment", "notes.md", "--lines", "0:2"])
        .assert()
        .failure();

    contextcopy(&project)
        .args(["--root", "does-not-exist", "files", "notes.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project root not found"));

    contextcopy(&project).assert().code(1);
}
