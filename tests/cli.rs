//! End-to-end tests for the csv-filter binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn csv_filter() -> Command {
    Command::cargo_bin("csv-filter").unwrap()
}

#[test]
fn test_cut_stdin_to_stdout() {
    csv_filter()
        .args(["cut", "0", "2"])
        .write_stdin("1,2,3\n4,5,6\n")
        .assert()
        .success()
        .stdout("1,3\n4,6\n");
}

#[test]
fn test_cut_alias_and_repeats() {
    csv_filter()
        .args(["c", "1", "1"])
        .write_stdin("a,b\n")
        .assert()
        .success()
        .stdout("b,b\n");
}

#[test]
fn test_cut_out_of_range_emits_nothing() {
    csv_filter()
        .args(["cut", "5"])
        .write_stdin("a,b\nc,d\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_match_filter() {
    csv_filter()
        .args(["match", "1", "foo"])
        .write_stdin("a,foo\nb,bar\n")
        .assert()
        .success()
        .stdout("a,foo\n");
}

#[test]
fn test_prefix_any_by_default() {
    csv_filter()
        .args(["prefix", "0", "x", "1", "z"])
        .write_stdin("xa,q\nya,zz\nya,q\n")
        .assert()
        .success()
        .stdout("xa,q\nya,zz\n");
}

#[test]
fn test_prefix_all_with_flag() {
    csv_filter()
        .args(["-a", "p", "0", "x", "1", "z"])
        .write_stdin("xa,zz\nxa,q\nya,zz\n")
        .assert()
        .success()
        .stdout("xa,zz\n");
}

#[test]
fn test_regex_filter() {
    csv_filter()
        .args(["regexp", "0", "[0-9]{3}"])
        .write_stdin("ab123,1\nab12,2\n")
        .assert()
        .success()
        .stdout("ab123,1\n");
}

#[test]
fn test_custom_delimiter() {
    csv_filter()
        .args(["-d", "|", "cut", "1"])
        .write_stdin("a|b|c\n")
        .assert()
        .success()
        .stdout("b\n");
}

#[test]
fn test_tab_delimiter_escape() {
    csv_filter()
        .args(["-d", "\\t", "cut", "2", "0"])
        .write_stdin("a\tb\tc\n")
        .assert()
        .success()
        .stdout("c\ta\n");
}

#[test]
fn test_single_output() {
    csv_filter()
        .args(["-s", "cut", "0"])
        .write_stdin("\"a,b\",c\n")
        .assert()
        .success()
        .stdout("a,b\n");
}

#[test]
fn test_file_input_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out").join("result.csv");
    fs::write(&input, "a,foo\nb,bar\nc,foo\n").unwrap();

    csv_filter()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["m", "1", "foo"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "a,foo\nc,foo\n");
}

#[test]
fn test_verbose_reports_counts() {
    csv_filter()
        .args(["-v", "cut", "0"])
        .write_stdin("a\nb\n")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("a\nb\n")
        .stderr(predicate::str::contains("Records: 2 in -> 2 out"));
}

#[test]
fn test_unknown_command_fails() {
    csv_filter()
        .args(["sort", "0"])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("unknown command 'sort'"));
}

#[test]
fn test_missing_command_fails() {
    csv_filter().assert().failure();
}

#[test]
fn test_bad_field_index_fails_before_reading() {
    for token in ["-1", "abc"] {
        csv_filter()
            .args(["cut", token])
            .write_stdin("a,b\n")
            .assert()
            .code(2)
            .stdout("")
            .stderr(predicate::str::contains(format!(
                "invalid field index '{token}'"
            )));
    }
}

#[test]
fn test_odd_pair_count_fails() {
    csv_filter()
        .args(["match", "0", "a", "1"])
        .write_stdin("a,b\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("match takes"));
}

#[test]
fn test_bad_regex_fails() {
    csv_filter()
        .args(["regex", "0", "("])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("invalid pattern '('"));
}

#[test]
fn test_bad_delimiter_fails() {
    csv_filter()
        .args(["-d", ";;", "cut", "0"])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--delimiter"));
}

#[test]
fn test_malformed_input_reports_line() {
    csv_filter()
        .args(["cut", "0"])
        .write_stdin("a,b\nc\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error reading line 2"));
}

#[test]
fn test_non_utf8_input_passes_through() {
    csv_filter()
        .args(["cut", "1", "0"])
        .write_stdin(&b"caf\xe9,1\n"[..])
        .assert()
        .success()
        .stdout(&b"1,caf\xe9\n"[..]);
}

#[test]
fn test_single_empty_field_is_blank_line() {
    csv_filter()
        .args(["-s", "cut", "0"])
        .write_stdin(",x\ny,z\n")
        .assert()
        .success()
        .stdout("\ny\n");
}

#[test]
fn test_lone_empty_field_is_quoted() {
    csv_filter()
        .args(["cut", "0"])
        .write_stdin(",x\ny,z\n")
        .assert()
        .success()
        .stdout("\"\"\ny\n");
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");

    csv_filter()
        .arg("-f")
        .arg(&missing)
        .args(["cut", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot open"));
}
