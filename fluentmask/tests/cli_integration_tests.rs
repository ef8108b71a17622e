// fluentmask/tests/cli_integration_tests.rs
//! Command-line integration tests for the `fluentmask` binary.
//!
//! These run the compiled executable through `assert_cmd`, feeding values as
//! arguments or via stdin, and check stdout, stderr and the exit status.
//! `tempfile` provides throwaway YAML definition files.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn fluentmask() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("fluentmask"));
    cmd.env_remove("FLUENTMASK_DEFAULT_CHAR");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_masks_ssn_argument() {
    fluentmask()
        .args(["mask", "-m", "ssn", "123456789"])
        .assert()
        .success()
        .stdout("###-##-6789\n");
}

#[test]
fn test_masks_stdin_lines() {
    fluentmask()
        .args(["mask", "--mask", "phone"])
        .write_stdin("1234567890\n4567890\n12345\n")
        .assert()
        .success()
        .stdout("(123) 456-7890\n456-7890\n12345\n");
}

#[test]
fn test_mask_character_and_format_only_flags() {
    fluentmask()
        .args(["mask", "-m", "ssn", "--char", "*", "123456789"])
        .assert()
        .success()
        .stdout("***-**-6789\n");

    fluentmask()
        .args(["mask", "-m", "ssn", "--format-only", "123456789"])
        .assert()
        .success()
        .stdout("123-45-6789\n");
}

#[test]
fn test_default_char_flag_and_env() {
    fluentmask()
        .args(["--default-char", "x", "mask", "-m", "ein", "123456789"])
        .assert()
        .success()
        .stdout("xx-xxx6789\n");

    fluentmask()
        .env("FLUENTMASK_DEFAULT_CHAR", "*")
        .args(["mask", "-m", "ein", "123456789"])
        .assert()
        .success()
        .stdout("**-***6789\n");
}

#[test]
fn test_malformed_values_are_printed_unchanged() {
    fluentmask()
        .args(["mask", "-m", "ein", "12-345", "not a number"])
        .assert()
        .success()
        .stdout("12-345\nnot a number\n");
}

#[test]
fn test_unknown_mask_fails() {
    fluentmask()
        .args(["mask", "-m", "iban", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown mask 'iban'"));
}

#[test]
fn test_custom_config_adds_masks() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
masks:
  - name: account
    description: "Bank account number"
    filters: [numbers]
    lengths: [8]
    reveal_last: 4
    insert:
      - { index: 4, text: "-" }
"#,
    )?;
    let config = file.path().to_str().unwrap();

    fluentmask()
        .args(["mask", "-m", "account", "--config", config, "1234 5678"])
        .assert()
        .success()
        .stdout("####-5678\n");

    fluentmask()
        .args(["list", "--config", config])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("account\tBank account number\n"))
        .stdout(predicate::str::contains("ssn\tSocial Security Number\n"));
    Ok(())
}

#[test]
fn test_misspelled_config_key_fails_instead_of_leaking() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"masks:\n  - name: account\n    filters: [numbers]\n    reveal: 4\n")?;
    let config = file.path().to_str().unwrap();

    fluentmask()
        .args(["mask", "-m", "account", "--config", config, "12345678"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown field `reveal`"));
    Ok(())
}

#[test]
fn test_debug_logging_hides_raw_values() {
    fluentmask()
        .env_remove("FLUENTMASK_ALLOW_DEBUG_PII")
        .args(["--debug", "mask", "-m", "ssn", "12-34"])
        .assert()
        .success()
        .stdout("12-34\n")
        .stderr(predicate::str::contains("[INFO fluentmask] fluentmask started."))
        .stderr(predicate::str::contains("precondition failed"))
        .stderr(predicate::str::contains("[REDACTED: 5 chars]"))
        .stderr(predicate::str::contains("12-34").not());
}

#[test]
fn test_quiet_suppresses_logs() {
    fluentmask()
        .args(["--quiet", "mask", "-m", "ssn", "123456789"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
