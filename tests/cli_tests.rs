//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn plainquiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("plainquiz").unwrap()
}

#[test]
fn run_fixed_order_session() {
    plainquiz()
        .arg("fixtures/questions.txt")
        .arg("--no-shuffle")
        .write_stdin("2\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1: 3\n2: 4\n3: 5\n"))
        .stdout(predicate::str::contains("💡 Explanation: A major European capital."))
        .stdout(predicate::str::contains("You got 2/2 correct (100%)."));
}

#[test]
fn reprompt_names_range() {
    plainquiz()
        .arg("fixtures/questions.txt")
        .arg("--no-shuffle")
        .write_stdin("abc\n0\n5\n1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a number between 1 and 3.").count(3))
        .stdout(predicate::str::contains("The correct answer was: 4"))
        .stdout(predicate::str::contains("The correct answer was: Paris"))
        .stdout(predicate::str::contains("You got 0/2 correct (0%)."));
}

#[test]
fn seeded_session_completes() {
    plainquiz()
        .args(["fixtures/sample_bank.txt", "--seed", "11"])
        .write_stdin("1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("/3 correct ("));
}

#[test]
fn missing_file_aborts_without_score() {
    plainquiz()
        .arg("fixtures/missing.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Cannot read question file"))
        .stdout(predicate::str::contains("You got").not());
}

#[test]
fn closed_input_aborts() {
    plainquiz()
        .arg("fixtures/questions.txt")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input closed"))
        .stdout(predicate::str::contains("You got").not());
}

#[test]
fn status_summary() {
    plainquiz()
        .args(["fixtures/sample_bank.txt", "--status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Questions: 3"))
        .stdout(predicate::str::contains("Fingerprint: sha256:"))
        .stdout(predicate::str::contains("Answer not among options: 1"));
}

#[test]
fn export_writes_yaml() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("bank.yaml");

    plainquiz()
        .arg("fixtures/questions.txt")
        .arg("--export")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Questions exported to"));

    let yaml = std::fs::read_to_string(&out).unwrap();
    assert!(yaml.contains("prompt: Capital of France?"));
}
