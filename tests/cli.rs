//! CLI integration tests using assert_cmd, driven through `--plain`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn arith_quiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("arith-quiz").unwrap()
}

/// No easy problem has an answer this large, so every attempt misses.
fn always_wrong(answers: usize) -> String {
    "1000\n".repeat(answers)
}

#[test]
fn all_wrong_scores_zero() {
    arith_quiz()
        .args(["--plain", "--difficulty", "easy"])
        .write_stdin(always_wrong(20))
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 10:"))
        .stdout(predicate::str::contains("Question 11:").not())
        .stdout(predicate::str::contains("Try again!"))
        .stdout(predicate::str::contains("Sorry, the correct answer is"))
        .stdout(predicate::str::contains("Your score: 0/100"))
        .stdout(predicate::str::contains("Rank: D"));
}

#[test]
fn invalid_answer_is_reprompted() {
    let mut script = String::from("abc\n");
    script.push_str(&always_wrong(20));

    arith_quiz()
        .args(["--plain", "--difficulty", "1", "--seed", "5"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid number"))
        .stdout(predicate::str::contains("Your score: 0/100"));
}

#[test]
fn menu_rejects_unknown_difficulty() {
    let mut script = String::from("expert\n1\n");
    script.push_str(&always_wrong(20));

    arith_quiz()
        .arg("--plain")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("DIFFICULTY LEVEL"))
        .stdout(predicate::str::contains("unknown difficulty 'expert'"))
        .stdout(predicate::str::contains("Rank: D"));
}

#[test]
fn json_summary_after_game() {
    arith_quiz()
        .args(["--plain", "--json", "--difficulty", "easy"])
        .write_stdin(always_wrong(20))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"difficulty\":\"easy\""))
        .stdout(predicate::str::contains("\"score\":0"))
        .stdout(predicate::str::contains("\"rank\":\"D\""));
}

#[test]
fn json_summary_is_null_without_finished_game() {
    arith_quiz()
        .args(["--plain", "--json", "--difficulty", "easy"])
        .write_stdin("1000\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("null\n"));
}

#[test]
fn same_seed_same_questions() {
    let run = || {
        let output = arith_quiz()
            .args(["--plain", "--difficulty", "advanced", "--seed", "1234"])
            .write_stdin(always_wrong(20))
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn bad_difficulty_flag_fails() {
    arith_quiz()
        .args(["--plain", "--difficulty", "nightmare"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown difficulty 'nightmare'"));
}

#[test]
fn log_file_is_written() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("quiz.log");

    arith_quiz()
        .env_remove("RUST_LOG")
        .args(["--plain", "--difficulty", "moderate", "--log-file"])
        .arg(&log)
        .write_stdin(always_wrong(20))
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("session started"));
    assert!(contents.contains("session finished"));
}
