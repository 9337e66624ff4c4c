use assert_cmd::Command;

#[test]
fn test_server_command_help() {
    let mut cmd = Command::cargo_bin("shunt").unwrap();
    cmd.args(["server", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("--host"))
        .stdout(predicates::str::contains("--port"));
}

#[test]
fn test_server_listed_in_help() {
    let mut cmd = Command::cargo_bin("shunt").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("server"))
        .stdout(predicates::str::contains("batch"));
}
