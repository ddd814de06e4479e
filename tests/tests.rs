//! Integration tests for `bilingual_wordfreq`.
//
// This suite verifies:
// - Library behavior (end-to-end English/Korean pipelines, stop words, top-N, errors)
// - CLI behavior including export formats and exit codes
//
// Notes:
// - Every test writes its inputs into its own temp dir; no global CWD change.

use std::path::PathBuf;

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serde_json::Value as Json;

use bilingual_wordfreq::{
    Config, Error, KoreanTag, StopWords, analyze_texts, run, stopwords,
};

const ENGLISH: &str = "The fox runs. The fox jumps.\n";
const KOREAN: &str = "고양이는 집에 있다.\n고양이는 밖에 있다.\n";

// --------------------- helpers ---------------------

/// Create a file with content in a temp dir.
fn write_file(dir: &assert_fs::TempDir, name: &str, content: &str) -> PathBuf {
    let f = dir.child(name);
    f.write_str(content).unwrap();
    f.path().to_path_buf()
}

/// Temp dir holding an English text, a Korean text and a Korean stop-word file.
fn inputs(english: &str, korean: &str, korean_stop: &str) -> (assert_fs::TempDir, Config) {
    let td = assert_fs::TempDir::new().unwrap();
    let en = write_file(&td, "en.txt", english);
    let ko = write_file(&td, "ko.txt", korean);
    let stop = write_file(&td, "stopwords_ko.txt", korean_stop);
    (td, Config::new(en, ko, stop))
}

/// Run CLI successfully with the three input paths plus extra args.
fn run_cli_ok(config: &Config, extra: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = assert_cmd::Command::cargo_bin("bilingual_wordfreq").unwrap();
    cmd.arg(&config.english_path)
        .arg(&config.korean_path)
        .arg(&config.korean_stopwords_path)
        .args(extra)
        .assert()
        .success()
}

// --------------------- library tests ---------------------

#[test]
fn lib_fox_scenario_top_one() {
    let mut config = Config::new("unused", "unused", "unused");
    config.top_n = 1;
    let stop_en = StopWords::new(["the"]);
    let report = analyze_texts(ENGLISH, "", &stop_en, &StopWords::default(), &config).unwrap();
    assert_eq!(report.english.len(), 1);
    assert_eq!(report.english[0].word, "fox");
    assert_eq!(report.english[0].count, 2);
    assert!(report.korean_with_josa.is_empty());
    assert!(report.korean_without_josa.is_empty());
}

#[test]
fn lib_run_reads_all_three_files() {
    let (_td, config) = inputs(ENGLISH, KOREAN, "은\n");
    let report = run(&config).expect("run");

    let words: Vec<&str> = report.english.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["fox", "run", "jump"]);

    let cat = report
        .korean_with_josa
        .iter()
        .find(|t| t.word == "고양이")
        .expect("고양이 counted");
    assert_eq!(cat.tag, KoreanTag::Noun);
    assert_eq!(cat.count, 2);

    // "은" is listed but the text uses "는": exact matching keeps it
    let particle = report
        .korean_with_josa
        .iter()
        .find(|t| t.word == "는")
        .expect("는 kept");
    assert_eq!(particle.tag, KoreanTag::Josa);
    assert_eq!(particle.count, 2);

    assert!(report.korean_without_josa.iter().all(|t| t.tag != KoreanTag::Josa));
    assert!(report.korean_without_josa.iter().any(|t| t.word == "고양이"));
}

#[test]
fn lib_korean_stopword_file_removes_exact_matches() {
    let (_td, config) = inputs(ENGLISH, KOREAN, "는 에\n고양이");
    let report = run(&config).expect("run");
    for removed in ["는", "에", "고양이"] {
        assert!(
            !report.korean_with_josa.iter().any(|t| t.word == removed),
            "{removed} should be filtered"
        );
    }
}

#[test]
fn lib_top_n_bounds_every_section() {
    let (_td, mut config) = inputs(
        "alpha beta gamma delta epsilon zeta eta theta",
        "하나 둘 셋 넷 다섯 여섯",
        "",
    );
    config.top_n = 3;
    let report = run(&config).expect("run");
    assert_eq!(report.top_n, 3);
    assert!(report.english.len() <= 3);
    assert!(report.korean_with_josa.len() <= 3);
    assert!(report.korean_without_josa.len() <= 3);
    assert!(
        report
            .english
            .windows(2)
            .all(|pair| pair[0].count >= pair[1].count)
    );
}

#[test]
fn lib_empty_files_give_empty_sections() {
    let (_td, config) = inputs("", "", "");
    let report = run(&config).expect("empty input is not an error");
    assert!(report.english.is_empty());
    assert!(report.korean_with_josa.is_empty());
    assert!(report.korean_without_josa.is_empty());
}

#[test]
fn lib_missing_file_is_io_error() {
    let (td, mut config) = inputs(ENGLISH, KOREAN, "");
    config.korean_path = td.path().join("nope.txt");
    match run(&config) {
        Err(Error::Io { path, .. }) => assert!(path.ends_with("nope.txt")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn lib_invalid_utf8_is_io_error() {
    let td = assert_fs::TempDir::new().unwrap();
    let bad = td.child("bad.txt");
    bad.write_binary(&[0xff, 0xfe, 0xfd]).unwrap();
    let ko = write_file(&td, "ko.txt", KOREAN);
    let stop = write_file(&td, "stop.txt", "");
    let config = Config::new(bad.path(), ko, stop);
    assert!(matches!(run(&config), Err(Error::Io { .. })));
}

#[test]
fn lib_strict_lang_rejects_swapped_files() {
    let (_td, mut config) = inputs(KOREAN, KOREAN, "");
    config.strict_lang = true;
    assert!(matches!(run(&config), Err(Error::Language { .. })));

    // without strict mode the mismatch only warns
    config.strict_lang = false;
    assert!(run(&config).is_ok());
}

#[test]
fn lib_english_stopwords_are_nltk() {
    let stop = stopwords::english();
    assert!(stop.contains("the"));
    assert!(stop.contains("ourselves"));
    assert!(!stop.contains("fox"));
}

// --------------------- CLI tests ---------------------

#[test]
fn cli_nonexistent_path_fails() {
    let mut cmd = assert_cmd::Command::cargo_bin("bilingual_wordfreq").unwrap();
    cmd.args(["/no/such/en.txt", "/no/such/ko.txt", "/no/such/stop.txt"])
        .env("RUST_LOG", "error")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot read").count(1));
}

#[test]
fn cli_missing_arguments_fail() {
    let mut cmd = assert_cmd::Command::cargo_bin("bilingual_wordfreq").unwrap();
    cmd.arg("only_one.txt").assert().failure();
}

#[test]
fn cli_basic_run_txt() {
    let (_td, config) = inputs(ENGLISH, KOREAN, "은");
    run_cli_ok(&config, &[]).stdout(
        predicate::str::contains("Top 10 English words:")
            .and(predicate::str::contains("  fox\t2"))
            .and(predicate::str::contains(
                "Top 10 Korean words with POS tags (including Josa):",
            ))
            .and(predicate::str::contains("  는 (Josa): 2 Times"))
            .and(predicate::str::contains(
                "Top 10 Korean words with POS tags (excluding Josa):",
            ))
            .and(predicate::str::contains("  고양이 (Noun): 2 Times")),
    );
}

#[test]
fn cli_export_json() {
    let (_td, config) = inputs(ENGLISH, KOREAN, "은");
    let out = run_cli_ok(&config, &["--export-format", "json", "--top", "2"])
        .get_output()
        .stdout
        .clone();
    let v: Json = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(v["top_n"], 2);
    assert_eq!(v["english"][0]["word"], "fox");
    assert_eq!(v["english"][0]["count"], 2);
    assert!(v["english"].as_array().unwrap().len() <= 2);
    assert!(
        v["korean_without_josa"]
            .as_array()
            .unwrap()
            .iter()
            .all(|row| row["tag"] != "Josa")
    );
}

#[test]
fn cli_export_csv() {
    let (_td, config) = inputs(ENGLISH, KOREAN, "");
    run_cli_ok(&config, &["--export-format", "csv"]).stdout(
        predicate::str::starts_with("section,word,tag,count\n")
            .and(predicate::str::contains("english,fox,,2")),
    );
}

#[test]
fn cli_no_stem_keeps_bare_predicates() {
    let (_td, config) = inputs(ENGLISH, KOREAN, "");
    run_cli_ok(&config, &["--no-stem", "--export-format", "tsv"]).stdout(
        predicate::str::contains("\t있\t").and(predicate::str::contains("\t있다\t").not()),
    );
}
