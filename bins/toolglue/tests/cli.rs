use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::process::Stdio;
use std::time::{Duration, Instant};

fn toolglue() -> Command {
    let mut cmd = Command::cargo_bin("toolglue").unwrap();
    cmd.env_remove("TOOLGLUE_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn gulp_echoes_piped_input() {
    let input = "first line\nsecond – línea 🦀\n";
    toolglue()
        .arg("gulp")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(input);
}

#[test]
fn gulp_with_timeout_reads_closed_pipe() {
    toolglue()
        .args(["gulp", "--timeout", "5000"])
        .write_stdin("quick")
        .assert()
        .success()
        .stdout("quick");
}

#[test]
fn gulp_rejects_invalid_utf8() {
    toolglue()
        .arg("gulp")
        .write_stdin(vec![b'o', b'k', 0xFF])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read piped input"));
}

#[test]
fn gulp_check_refuses_empty_stdin() {
    toolglue()
        .args(["gulp", "--check"])
        .write_stdin("")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("No piped input on stdin"));
}

#[test]
fn gulp_help_warns_about_pipe_size() {
    toolglue()
        .args(["gulp", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("report size 0 for pipes"));
}

#[test]
fn gulp_timeout_with_open_stdin() {
    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("toolglue"))
        .args(["gulp", "--timeout", "50"])
        .env_remove("TOOLGLUE_CONFIG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Hold the write end so the reader never sees end-of-stream.
    let stdin = child.stdin.take().unwrap();
    let start = Instant::now();
    let status = child.wait().unwrap();
    let elapsed = start.elapsed();
    drop(stdin);

    assert_eq!(status.code(), Some(124));
    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
}

#[test]
fn stdin_report_with_piped_input() {
    toolglue()
        .arg("probe")
        .write_stdin("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains("terminal: false\n"))
        .stdout(predicate::str::contains("size: "))
        .stdout(predicate::str::contains("skip read: "));
}

#[test]
fn stdin_report_with_empty_pipe() {
    toolglue()
        .arg("probe")
        .write_stdin("")
        .assert()
        .success()
        .stdout("terminal: false\nsize: 0\nskip read: true\n");
}

#[test]
fn check_flag_required_missing() {
    toolglue()
        .args(["check-flag", "r", "--required"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing required flag: -r"));
}

#[test]
fn check_flag_flag_shaped_argument() {
    toolglue()
        .args(["check-flag", "o", "-x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("flag -o needs a valid argument (not: -x)"));
}

#[test]
fn check_flag_with_value() {
    toolglue()
        .args(["check-flag", "o", "myfile.txt"])
        .assert()
        .success()
        .stdout("-o = myfile.txt\n");
}

#[test]
fn check_flag_optional_absent() {
    toolglue()
        .args(["check-flag", "o"])
        .assert()
        .success()
        .stdout("-o not given\n");
}

#[test]
fn json_error_report() {
    toolglue()
        .args(["--json", "check-flag", "r", "--required"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"code_str\":\"E6004\""));
}

#[test]
fn round_half_up() {
    toolglue().args(["round", "2.5"]).assert().success().stdout("3\n");
    toolglue()
        .args(["round", "3.14159", "--places", "2"])
        .assert()
        .success()
        .stdout("3.14\n");
}

#[test]
fn which_missing_command() {
    toolglue()
        .args(["which", "nonexistent_command_12345"])
        .assert()
        .code(127)
        .stderr(predicate::str::contains("is not installed"));
}

#[test]
fn fmt_disabled_passes_source_through() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[format]\nenabled = false").unwrap();

    toolglue()
        .arg("--config")
        .arg(config.path())
        .arg("fmt")
        .write_stdin("fn main(){}")
        .assert()
        .success()
        .stdout("fn main(){}");
}

#[test]
fn fmt_missing_formatter_keeps_source() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[format]\nprogram = \"nonexistent_rustfmt_12345\"").unwrap();

    toolglue()
        .arg("--config")
        .arg(config.path())
        .arg("fmt")
        .write_stdin("fn main(){}")
        .assert()
        .code(127)
        .stdout("fn main(){}")
        .stderr(predicate::str::contains("Left source unformatted"));
}

#[test]
fn missing_config_file() {
    toolglue()
        .args(["--config", "/nonexistent/toolglue.toml", "info"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn info_reports_word_size() {
    toolglue()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("program: toolglue"))
        .stdout(predicate::str::contains("word size: "))
        .stdout(predicate::str::contains("reported from: run_info() at main.rs["));
}
