use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const LIST_DOC: &str = "infographic list-row-simple-horizontal-arrow
data
  title Test Infographic
  desc This is a test
  items
    - label Step 1
      desc First step
    - label Step 2
      desc Second step
    - label Step 3
      desc Third step
";

fn ifgc() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ifgc"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write_doc(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write input");
    path
}

fn assert_svg(path: &Path) -> String {
    let svg = fs::read_to_string(path).expect("read svg");
    assert!(svg.starts_with("<?xml version=\"1.0\""), "no XML declaration");
    assert!(svg.contains("<svg"), "no root element");
    assert!(svg.trim_end().ends_with("</svg>"), "root not closed");
    assert!(svg.len() > 1000, "svg too small: {} bytes", svg.len());
    svg
}

// ---------------------------------------------------------------------------
// Happy paths
// ---------------------------------------------------------------------------

#[test]
fn renders_file_to_svg() {
    let dir = TempDir::new().unwrap();
    let input = write_doc(dir.path(), "input.ifgc", LIST_DOC);
    let output = dir.path().join("output.svg");

    ifgc()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Rendering infographic"))
        .stdout(contains("Infographic rendered to"));

    let svg = assert_svg(&output);
    assert!(svg.contains("Test Infographic"));
    assert!(svg.contains("Step 1"));
}

#[test]
fn output_defaults_to_input_with_svg_extension() {
    let dir = TempDir::new().unwrap();
    let input = write_doc(dir.path(), "foo.ifgc", LIST_DOC);

    ifgc().arg("--input").arg(&input).assert().success();

    assert_svg(&dir.path().join("foo.svg"));
}

#[test]
fn inline_string_decodes_escaped_newlines() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("inline.svg");

    ifgc()
        .arg("-s")
        .arg(r"infographic list-column-done-list\ndata\n  title Inline\n  items\n    - label X")
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let svg = assert_svg(&output);
    assert!(svg.contains("Inline"));
    assert!(svg.contains(">X<"));
}

#[test]
fn reads_document_from_stdin() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("stdin-test.svg");

    ifgc()
        .arg("-o")
        .arg(&output)
        .write_stdin(
            "infographic list-row-simple-horizontal-arrow\ndata\n  title From Stdin\n  items\n    - label A",
        )
        .assert()
        .success();

    assert!(assert_svg(&output).contains("From Stdin"));
}

#[test]
fn stdin_without_output_writes_fallback_file() {
    let dir = TempDir::new().unwrap();

    ifgc()
        .current_dir(dir.path())
        .args(["-i", "-"])
        .write_stdin(LIST_DOC)
        .assert()
        .success();

    assert_svg(&dir.path().join("out.svg"));
}

#[test]
fn dash_output_streams_svg_to_stdout() {
    let assert = ifgc()
        .args(["-o", "-"])
        .write_stdin(LIST_DOC)
        .assert()
        .success()
        .stderr(contains("Rendering infographic"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.starts_with("<?xml version=\"1.0\""), "stdout must carry only the SVG");
    assert!(stdout.trim_end().ends_with("</svg>"));
    assert!(!stdout.contains("Rendering"));
}

#[test]
fn quiet_suppresses_progress_but_keeps_success_line() {
    let dir = TempDir::new().unwrap();
    let input = write_doc(dir.path(), "quiet-test.ifgc", LIST_DOC);
    let output = dir.path().join("quiet-test.svg");

    ifgc()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(contains("Rendering").not())
        .stdout(contains("Infographic rendered to"));

    assert_svg(&output);
}

#[test]
fn creates_missing_output_directories() {
    let dir = TempDir::new().unwrap();
    let input = write_doc(dir.path(), "test.ifgc", LIST_DOC);
    let output = dir.path().join("subdir").join("nested").join("test.svg");

    ifgc().arg("-i").arg(&input).arg("-o").arg(&output).assert().success();

    assert_svg(&output);
}

#[test]
fn identical_inputs_render_identical_bytes() {
    let dir = TempDir::new().unwrap();
    let input = write_doc(dir.path(), "same.ifgc", LIST_DOC);
    let first = dir.path().join("a.svg");
    let second = dir.path().join("b.svg");

    for output in [&first, &second] {
        ifgc()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(output)
            .args(["--theme", "dark"])
            .assert()
            .success();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn theme_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_doc(dir.path(), "theme-test.ifgc", LIST_DOC);
    let config = dir.path().join("config.json");
    fs::write(&config, r##"{"theme":"dark","background":"#fafafa"}"##).unwrap();
    let output = dir.path().join("theme-test.svg");

    ifgc()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .args(["-t", "hand-drawn"])
        .assert()
        .success();

    let svg = assert_svg(&output);
    assert!(svg.contains("data-theme=\"hand-drawn\""));
    assert!(svg.contains("#fafafa"), "config keys without a flag survive");
}

#[test]
fn background_flag_reaches_renderer() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("bg.svg");

    ifgc()
        .args(["-o"])
        .arg(&output)
        .args(["--background", "#abcdef"])
        .write_stdin(LIST_DOC)
        .assert()
        .success();

    assert!(assert_svg(&output).contains("fill=\"#abcdef\""));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn nonexistent_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("test.svg");

    ifgc()
        .args(["-i", "/nonexistent/file.ifgc", "-o"])
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Input file \"/nonexistent/file.ifgc\" doesn't exist"));

    assert!(!output.exists());
}

#[test]
fn input_and_string_conflict() {
    ifgc()
        .args(["-i", "/nonexistent/file.ifgc", "-s", "infographic x"])
        .assert()
        .failure()
        .stderr(contains("Cannot use both --input and --string"));
}

#[test]
fn whitespace_only_input_fails_for_every_source() {
    let dir = TempDir::new().unwrap();
    let blank = write_doc(dir.path(), "blank.ifgc", "  \n\t\n");

    ifgc()
        .args(["-s", r"  \n  "])
        .assert()
        .failure()
        .stderr(contains("No input data provided"));

    ifgc()
        .arg("-i")
        .arg(&blank)
        .assert()
        .failure()
        .stderr(contains("No input data provided"));

    ifgc()
        .current_dir(dir.path())
        .write_stdin("\n\n")
        .assert()
        .failure()
        .stderr(contains("No input data provided"));

    assert!(!dir.path().join("blank.svg").exists());
    assert!(!dir.path().join("out.svg").exists());
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{ not json").unwrap();

    ifgc()
        .args(["-s", "infographic list-grid-simple"])
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(contains("Configuration file").and(contains("is invalid or doesn't exist")));

    ifgc()
        .args(["-s", "infographic list-grid-simple", "-c", "/nonexistent/config.json"])
        .assert()
        .failure()
        .stderr(contains("/nonexistent/config.json"));
}

#[test]
fn renderer_errors_are_reported() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("never.svg");

    ifgc()
        .args(["-s", r"infographic no-such-template\ndata\n  title X", "-o"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("Failed to render").and(contains("no-such-template")));

    assert!(!output.exists());
}

#[test]
fn invalid_utf8_on_stdin_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    ifgc()
        .current_dir(dir.path())
        .write_stdin(vec![0xff, 0xfe, b'\n'])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Failed to read standard input"));
    assert!(!dir.path().join("out.svg").exists());
}

#[test]
fn quiet_never_hides_errors() {
    ifgc()
        .args(["-q", "-i", "/nonexistent/file.ifgc"])
        .assert()
        .failure()
        .stderr(contains("doesn't exist"));
}
