//! CLI integration tests for print mode using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn latin_quiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("latin-quiz").unwrap()
}

fn print_quiz(args: &[&str]) -> Vec<Value> {
    let output = latin_quiz()
        .arg("--print")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn print_first_declension_quiz() {
    let questions = print_quiz(&[
        "--declensions",
        "1",
        "--cases",
        "nominative,accusative",
        "--length",
        "5",
        "--seed",
        "7",
    ]);

    assert!(!questions.is_empty());
    assert!(questions.len() <= 5);
    for question in &questions {
        assert_eq!(question["declension"], "1");
        let case = question["case"].as_str().unwrap();
        assert!(case == "Nominative" || case == "Accusative");

        let correct = &question["correct_answer"];
        let options = question["options"].as_array().unwrap();
        assert_eq!(options.iter().filter(|o| *o == correct).count(), 1);
    }
}

#[test]
fn print_is_reproducible_with_seed() {
    let args = ["--declensions", "1,2,3,4,5", "--length", "8", "--seed", "99"];
    assert_eq!(print_quiz(&args), print_quiz(&args));
}

#[test]
fn print_word_questions_carry_the_word() {
    let questions = print_quiz(&["--declensions", "3", "--length", "30", "--seed", "4"]);
    let word_questions: Vec<&Value> = questions.iter().filter(|q| q["format"] == 3).collect();
    assert!(!word_questions.is_empty());
    for question in word_questions {
        assert!(question["word"]["word"].is_string());
        assert_eq!(question["word"]["declension"], "3");
    }
}

#[test]
fn missing_data_file_falls_back_to_empty_quiz() {
    latin_quiz()
        .args(["--print", "--data", "/nonexistent/wordref.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"))
        .stderr(predicate::str::contains("empty reference data"));
}

#[test]
fn malformed_data_file_falls_back_to_empty_quiz() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wordref.json");
    std::fs::write(&path, "{ not json").unwrap();

    latin_quiz()
        .arg("--print")
        .arg("--data")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

#[test]
fn custom_data_file_is_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wordref.json");
    std::fs::write(
        &path,
        r#"{
            "declensions": {
                "1": {
                    "Singular": { "Nominative": "a", "Genitive": "ae" },
                    "Plural": { "Nominative": "ae", "Genitive": "arum" }
                }
            },
            "words": { "1": [ { "word": "puell", "gender": "Feminine" } ] }
        }"#,
    )
    .unwrap();

    let questions = {
        let output = latin_quiz()
            .args(["--print", "--cases", "nominative,genitive", "--length", "6", "--seed", "1"])
            .arg("--data")
            .arg(&path)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice::<Vec<Value>>(&output).unwrap()
    };

    assert_eq!(questions.len(), 6);
    for question in &questions {
        if question["format"] == 1 {
            let answer = question["correct_answer"].as_str().unwrap();
            assert!(["a", "ae", "arum"].contains(&answer));
        }
    }
}

#[test]
fn not_applicable_selection_prints_short_quiz() {
    latin_quiz()
        .args([
            "--print",
            "--declensions",
            "4",
            "--cases",
            "locative",
            "--length",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

#[test]
fn rejects_zero_length() {
    latin_quiz()
        .args(["--print", "--length", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quiz length must be at least 1"));
}

#[test]
fn rejects_unknown_declension() {
    latin_quiz()
        .args(["--print", "--declensions", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("declension must be a number from 1 to 5"));
}

#[test]
fn rejects_unknown_case() {
    latin_quiz()
        .args(["--print", "--cases", "instrumental"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown case"));
}
