//! End-to-end tests for the `termtint` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NIDX: &str = "\
foreground #ffffff
background #000000
black #000000
black_bright #555555
red #ff0000
red_bright #ff5555
green #00ff00
green_bright #55ff55
yellow #ffff00
yellow_bright #ffff55
blue #0000ff
blue_bright #5555ff
magenta #ff00ff
magenta_bright #ff55ff
cyan #00ffff
cyan_bright #55ffff
white #c0c0c0
white_bright #ffffff
cursor #e0e0e0
cursor_reverse #202020
";

const GOGH: &str = r##"
name: 'Tomorrow Night'
color_01: '#000000'
color_02: '#cc6666'
color_03: '#b5bd68'
color_04: '#f0c674'
color_05: '#81a2be'
color_06: '#b294bb'
color_07: '#8abeb7'
color_08: '#ffffff'
color_09: '#000000'
color_10: '#cc6666'
color_11: '#b5bd68'
color_12: '#f0c674'
color_13: '#81a2be'
color_14: '#b294bb'
color_15: '#8abeb7'
color_16: '#ffffff'
background: '#1d1f21'
foreground: '#c5c8c6'
cursor: '#c5c8c6'
"##;

fn termtint() -> Command {
    Command::cargo_bin("termtint").unwrap()
}

#[test]
fn test_stdin_to_stdout() {
    termtint()
        .args(["-i", "nidx", "-o", "csv"])
        .write_stdin(NIDX)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "foreground,#ffffff\nbackground,#000000\nblack,#000000\n",
        ))
        .stdout(predicate::str::ends_with("cursor_reverse,#202020\n"));
}

#[test]
fn test_stdin_without_ifmt_fails() {
    termtint()
        .args(["-o", "csv"])
        .write_stdin(NIDX)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "termtint: error: --ifmt must be given when reading stdin",
        ));
}

#[test]
fn test_stdout_without_ofmt_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("theme.nidx");
    fs::write(&input, NIDX).unwrap();

    termtint()
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "--ofmt must be given when writing to stdout",
        ));
}

#[test]
fn test_formats_from_extensions() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("tomorrow.yml");
    let output = temp_dir.path().join("tomorrow.xres");
    fs::write(&input, GOGH).unwrap();

    termtint().arg(&input).arg(&output).assert().success();

    let xres = fs::read_to_string(&output).unwrap();
    assert!(xres.starts_with("! special\n*.foreground:   #c5c8c6\n"));
    assert!(xres.contains("*.color9:       #cc6666"));
}

#[test]
fn test_explicit_format_overrides_extension() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("theme.txt");
    fs::write(&input, NIDX).unwrap();

    termtint()
        .args(["-i", "nidx", "-o", "stconf"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("[256] = \"#000000\",  /* background */"));
}

#[test]
fn test_unknown_extension_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("theme.toml");
    fs::write(&input, NIDX).unwrap();

    termtint()
        .args(["-o", "csv"])
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported input format"));
}

#[test]
fn test_unsupported_ofmt_is_rejected() {
    termtint()
        .args(["-i", "nidx", "-o", "yaml"])
        .write_stdin(NIDX)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format: yaml"));
}

#[test]
fn test_failed_decode_keeps_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.nidx");
    let output = temp_dir.path().join("theme.csv");
    fs::write(&input, NIDX.replace("red #ff0000\n", "")).unwrap();
    fs::write(&output, "keep me\n").unwrap();

    termtint()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing color: red"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me\n");
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("nope.nidx");

    termtint()
        .args(["-o", "csv"])
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn test_osc_output() {
    termtint()
        .args(["-i", "yaml", "-o", "osc"])
        .write_stdin(GOGH)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b]4;0;#000000\x07"))
        .stdout(predicate::str::ends_with("\x1b]12;#c5c8c6\x07"));
}

#[test]
fn test_list_formats() {
    termtint()
        .arg("--list-formats")
        .assert()
        .success()
        .stdout("input: yaml, yml, nidx, stconf, xres, csv\noutput: stconf, nidx, xres, csv, osc\n");
}

#[test]
fn test_logging_goes_to_stderr() {
    termtint()
        .args(["-vv", "-i", "nidx", "-o", "nidx"])
        .write_stdin(NIDX)
        .assert()
        .success()
        .stdout(NIDX);
}
