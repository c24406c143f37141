//! Integration tests for the lexquiz CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn lexquiz() -> Command {
    Command::cargo_bin("lexquiz").unwrap()
}

#[test]
fn generate_produces_a_quiz_with_answer_keys() {
    lexquiz()
        .arg("generate")
        .arg("-m")
        .arg(fixture_path("material.csv"))
        .arg("-s")
        .arg(fixture_path("sources"))
        .arg("-e")
        .arg("1")
        .arg("-i")
        .arg("1")
        .arg("--seed")
        .arg("42")
        .assert()
        .success()
        .stdout(predicate::str::contains("Besides, I think so."))
        .stdout(predicate::str::contains("(Test Book)"))
        .stdout(predicate::str::contains("Answer Keys"))
        .stdout(predicate::str::contains("on one side"));
}

#[test]
fn generate_finds_discontinuous_phrases() {
    lexquiz()
        .arg("generate")
        .arg("-m")
        .arg(fixture_path("material.csv"))
        .arg("-s")
        .arg(fixture_path("sources"))
        .arg("-e")
        .arg("2")
        .arg("-i")
        .arg("1")
        .arg("--seed")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("She talked him into staying."))
        .stdout(predicate::str::contains("persuade someone to do"));
}

#[test]
fn generate_emits_json() {
    lexquiz()
        .arg("generate")
        .arg("-m")
        .arg(fixture_path("material.csv"))
        .arg("-s")
        .arg(fixture_path("sources"))
        .arg("-e")
        .arg("1")
        .arg("-i")
        .arg("1")
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"questions\""))
        .stdout(predicate::str::contains("\"word_indexes\""))
        .stdout(predicate::str::contains("\"reference\": \"Test Book\""));
}

#[test]
fn generate_emits_markdown() {
    lexquiz()
        .arg("generate")
        .arg("-m")
        .arg(fixture_path("material.csv"))
        .arg("-s")
        .arg(fixture_path("sources"))
        .arg("-e")
        .arg("1-2")
        .arg("-i")
        .arg("2")
        .arg("-f")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Answer Keys"))
        .stdout(predicate::str::contains("*Total questions:"));
}

#[test]
fn generate_writes_to_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("quiz.txt");

    lexquiz()
        .arg("generate")
        .arg("-m")
        .arg(fixture_path("material.csv"))
        .arg("-s")
        .arg(fixture_path("sources"))
        .arg("-e")
        .arg("1")
        .arg("-i")
        .arg("1")
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Besides, I think so."));
}

#[test]
fn generate_rejects_a_bad_section_range() {
    lexquiz()
        .arg("generate")
        .arg("-m")
        .arg(fixture_path("material.csv"))
        .arg("-s")
        .arg(fixture_path("sources"))
        .arg("-e")
        .arg("x-y")
        .arg("-i")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--sections"));
}

#[test]
fn coverage_reports_full_coverage() {
    lexquiz()
        .arg("coverage")
        .arg("-m")
        .arg(fixture_path("material.csv"))
        .arg("-s")
        .arg(fixture_path("sources"))
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coverage: 100.00%"));
}

#[test]
fn coverage_lists_uncovered_phrases() {
    lexquiz()
        .arg("coverage")
        .arg("-m")
        .arg(fixture_path("uncoverable.csv"))
        .arg("-s")
        .arg(fixture_path("sources"))
        .arg("-q")
        .arg("--show-uncovered")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coverage: 50.00%"))
        .stdout(predicate::str::contains("Uncovered Phrases"))
        .stdout(predicate::str::contains("hogefuga"));
}

#[test]
fn validate_accepts_aligned_fixtures() {
    lexquiz()
        .arg("validate")
        .arg("-m")
        .arg(fixture_path("material.csv"))
        .arg("-s")
        .arg(fixture_path("sources"))
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Pattern set compiles"))
        .stdout(predicate::str::contains("views are aligned"));
}

#[test]
fn validate_rejects_a_broken_pattern_override() {
    lexquiz()
        .arg("validate")
        .arg("--word-pattern")
        .arg("(")
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Pattern set is invalid"));
}

#[test]
fn validate_rejects_misaligned_views() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("book.txt");
    fs::write(&source, "Ref\nOne. Two. Three.").unwrap();
    fs::write(
        temp_dir.path().join("book.txt.lemmatized"),
        "Ref\none . two three .",
    )
    .unwrap();

    lexquiz()
        .arg("validate")
        .arg("-s")
        .arg(&source)
        .assert()
        .failure()
        .stdout(predicate::str::contains("out of alignment"));
}

#[test]
fn make_derives_the_preprocessed_view() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("book.txt");
    fs::write(&source, "A Book\nhard-\nwrapped “text”").unwrap();

    lexquiz()
        .arg("make")
        .arg("-s")
        .arg(&source)
        .arg("-l")
        .arg("en")
        .arg("-q")
        .assert()
        .success();

    let derived = fs::read_to_string(temp_dir.path().join("book.txt.preprocessed")).unwrap();
    assert_eq!(derived, "A Book\nhardwrapped \"text\"");
}

#[test]
fn list_languages_names_the_presets() {
    lexquiz()
        .arg("list")
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("ojp"));
}

#[test]
fn list_formats_names_the_formatters() {
    lexquiz()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn language_config_file_overrides_patterns() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("lang.toml");
    fs::write(
        &config,
        r#"
[metadata]
code = "en"
name = "English"

[patterns]
word = '''[A-Za-z]+'''
"#,
    )
    .unwrap();

    lexquiz()
        .arg("validate")
        .arg("--language-config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Pattern set compiles"));
}
