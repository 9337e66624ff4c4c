use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_repl_reads_piped_input_until_quit() {
    let mut cmd = Command::cargo_bin("shunt").unwrap();
    cmd.arg("repl").write_stdin("1+2\n\n2^-2\nq\n4*4\n");

    cmd.assert()
        .success()
        .stdout("= 3\n= 0.25\n");
}

#[test]
fn test_repl_reports_errors_and_continues() {
    let mut cmd = Command::cargo_bin("shunt").unwrap();
    cmd.arg("repl").write_stdin("(3\n5-2\n");

    cmd.assert()
        .success()
        .stdout("= 3\n")
        .stderr(predicate::str::contains("unbalanced parentheses"));
}

#[test]
fn test_repl_help() {
    let mut cmd = Command::cargo_bin("shunt").unwrap();
    cmd.args(["repl", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("q"));
}
