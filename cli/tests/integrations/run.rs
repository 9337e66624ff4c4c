use assert_cmd::Command;
use predicates::prelude::*;

fn shunt() -> Command {
    Command::cargo_bin("shunt").unwrap()
}

#[test]
fn test_cli_eval_simple_expression() {
    shunt()
        .args(["eval", "3+4*2"])
        .assert()
        .success()
        .stdout("= 11\n");
}

#[test]
fn test_cli_eval_raw() {
    shunt()
        .args(["eval", "--raw", "2(3+1)^2"])
        .assert()
        .success()
        .stdout("32\n");
}

#[test]
fn test_cli_eval_leading_sign() {
    shunt()
        .args(["eval", "-r", "-(3+2)"])
        .assert()
        .success()
        .stdout("-5\n");
}

#[test]
fn test_cli_eval_with_precision() {
    shunt()
        .args(["eval", "-r", "-p", "2", "1/3"])
        .assert()
        .success()
        .stdout("0.33\n");
}

#[test]
fn test_cli_eval_exact() {
    shunt()
        .args(["eval", "-r", "--exact", "0.1+0.2"])
        .assert()
        .success()
        .stdout("0.30000000000000004\n");
}

#[test]
fn test_cli_precision_out_of_range() {
    shunt()
        .args(["eval", "-p", "40", "1/3"])
        .assert()
        .failure();
}

#[test]
fn test_cli_eval_trace() {
    shunt()
        .args(["eval", "--trace", "2^3^2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result"))
        .stdout(predicate::str::contains("8"))
        .stdout(predicate::str::ends_with("= 64\n"));
}

#[test]
fn test_cli_eval_division_by_zero() {
    shunt()
        .args(["eval", "-r", "1/0"])
        .assert()
        .success()
        .stdout("Infinity\n");
}

#[test]
fn test_cli_eval_skips_spaces_unless_strict() {
    shunt()
        .args(["eval", "-r", "1 + 1"])
        .assert()
        .success()
        .stdout("2\n");

    shunt()
        .args(["eval", "--strict", "1 + 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected character"));
}

#[test]
fn test_cli_eval_malformed_expression() {
    shunt()
        .args(["eval", "(1+2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unbalanced parentheses"))
        .stderr(predicate::str::contains("add the missing ')'"));
}

#[test]
fn test_cli_eval_nesting_limit() {
    let deep = format!("{}1{}", "(".repeat(150), ")".repeat(150));
    shunt()
        .args(["eval", &deep])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_nesting_depth"));
}

#[test]
fn test_cli_convert() {
    shunt()
        .args(["convert", "(1+2)(3+4)"])
        .assert()
        .success()
        .stdout("1,2,+,3,4,+,*\n");
}

#[test]
fn test_cli_convert_negated_group() {
    shunt()
        .args(["convert", "-(3+2)"])
        .assert()
        .success()
        .stdout("-1,3,2,+,*\n");
}

#[test]
fn test_cli_convert_malformed() {
    shunt()
        .args(["convert", "1+2)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmatched closing parenthesis"));
}

#[test]
fn test_cli_eval_reports_postfix_for_evaluation_errors() {
    shunt()
        .args(["eval", "(*-3)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("in postfix form -3,*"));
}

#[test]
fn test_cli_eval_rejects_literal_beyond_double_range() {
    shunt()
        .args(["eval", &"1".repeat(400)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large to be a number"));
}
