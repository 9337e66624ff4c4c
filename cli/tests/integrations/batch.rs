use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn shunt() -> Command {
    Command::cargo_bin("shunt").unwrap()
}

#[test]
fn test_cli_batch_file() {
    let temp_dir = TempDir::new().unwrap();
    let calc_file = temp_dir.path().join("sums.calc");

    fs::write(
        &calc_file,
        r#"
# warm up
3+4*2
2(3+1)^2

10/4
"#,
    )
    .unwrap();

    shunt()
        .arg("batch")
        .arg(&calc_file)
        .assert()
        .success()
        .stdout("3+4*2 = 11\n2(3+1)^2 = 32\n10/4 = 2.5\n");
}

#[test]
fn test_cli_batch_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();

    fs::write(temp_dir.path().join("a.calc"), "1+1\n").unwrap();
    fs::write(nested.join("b.calc"), "2*3\n").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "not an expression\n").unwrap();

    shunt()
        .arg("batch")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1+1 = 2"))
        .stdout(predicate::str::contains("2*3 = 6"))
        .stdout(predicate::str::contains("not an expression").not());
}

#[test]
fn test_cli_batch_reports_failures() {
    let temp_dir = TempDir::new().unwrap();
    let calc_file = temp_dir.path().join("mixed.calc");

    fs::write(&calc_file, "1+2\n(3\n4*4\n").unwrap();

    shunt()
        .arg("batch")
        .arg(&calc_file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("1+2 = 3"))
        .stdout(predicate::str::contains("4*4 = 16"))
        .stderr(predicate::str::contains("mixed.calc:2"))
        .stderr(predicate::str::contains("1 expression(s) failed"));
}

#[test]
fn test_cli_batch_empty_directory() {
    let temp_dir = TempDir::new().unwrap();

    shunt()
        .arg("batch")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No .calc files found"));
}
