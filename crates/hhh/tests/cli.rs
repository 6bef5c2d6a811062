//! Integration tests for the hhh command line.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hhh"))
}

const PAGE: &str =
    "<html><head><title>Doc</title></head><body><h2>Hi</h2><p>Text</p></body></html>";

#[test]
fn test_stdin_markdown() {
    cli()
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout("# Doc\n\n## Hi\n\nText\n");
}

#[test]
fn test_dash_reads_stdin() {
    cli()
        .arg("-")
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout("# Doc\n\n## Hi\n\nText\n");
}

#[test]
fn test_html_format() {
    cli()
        .args(["--format", "html"])
        .write_stdin("<body><p>x</p></body>")
        .assert()
        .success()
        .stdout("<body>\n  <p>\n    x\n  </p>\n</body>\n");
}

#[test]
fn test_unknown_format_falls_back_to_html() {
    cli()
        .args(["-f", "xml"])
        .write_stdin("<body><p>x</p></body>")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<body>"));
}

#[test]
fn test_file_input_and_output() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.html");
    let output_path = temp_dir.path().join("out.md");
    fs::write(&input_path, PAGE).unwrap();

    cli()
        .arg(&input_path)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    let output = fs::read_to_string(&output_path).unwrap();
    assert_eq!(output, "# Doc\n\n## Hi\n\nText\n");
}

#[test]
fn test_file_links_resolve_against_file_url() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("page.html");
    fs::write(
        &input_path,
        "<title>Links</title><p>See <a href=\"other.html\">other</a></p>",
    )
    .unwrap();

    cli()
        .arg(&input_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[other](file://"))
        .stdout(predicate::str::contains("other.html) "));
}

#[test]
fn test_article_content_only() {
    cli()
        .write_stdin("<body><nav>menu</nav><article><p>Main</p></article><footer>bye</footer></body>")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main"))
        .stdout(predicate::str::contains("menu").not())
        .stdout(predicate::str::contains("bye").not());
}

#[test]
fn test_failed_target_does_not_stop_batch() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("good.html");
    let missing = temp_dir.path().join("missing.html");
    fs::write(&good, PAGE).unwrap();

    cli()
        .arg(&missing)
        .arg(&good)
        .assert()
        .failure()
        .stdout("# Doc\n\n## Hi\n\nText\n")
        .stderr(predicate::str::contains("1 of 2 targets failed"))
        .stderr(predicate::str::contains("missing.html"));
}

#[test]
fn test_multiple_targets_concatenate() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("a.html");
    let second = temp_dir.path().join("b.html");
    fs::write(&first, "<title>A</title><p>a</p>").unwrap();
    fs::write(&second, "<title>B</title><p>b</p>").unwrap();

    cli()
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout("# A\n\na\n# B\n\nb\n");
}

#[test]
fn test_verbosity_out_of_range() {
    cli()
        .args(["-v", "3"])
        .write_stdin(PAGE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("3"));
}

#[test]
fn test_debug_logs_go_to_stderr() {
    cli()
        .args(["-v", "1"])
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout("# Doc\n\n## Hi\n\nText\n")
        .stderr(predicate::str::contains("parsed command line"));
}
