// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for diagnostics on stderr.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// --verbose logs to stderr and leaves stdout untouched
#[test]
fn verbose_logs_to_stderr_only() {
    rot13_cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(DECODED_LINE)
        .stderr(predicates::str::contains("decoded embedded message"));
}

/// ROT13_LOG enables diagnostics without the flag
#[test]
fn env_filter_enables_debug() {
    rot13_cmd()
        .env("ROT13_LOG", "debug")
        .assert()
        .success()
        .stdout(DECODED_LINE)
        .stderr(predicates::str::contains("decoded_len=49"));
}

/// ROT13_LOG overrides --verbose
#[test]
fn env_filter_overrides_verbose() {
    rot13_cmd()
        .arg("-v")
        .env("ROT13_LOG", "error")
        .assert()
        .success()
        .stdout(DECODED_LINE)
        .stderr(predicates::str::is_empty());
}

/// An unparsable filter is reported on stderr; the run still prints and exits 0
#[test]
fn invalid_env_filter_falls_back_to_default() {
    rot13_cmd()
        .env("ROT13_LOG", "rot13=bogus")
        .assert()
        .code(0)
        .stdout(DECODED_LINE)
        .stderr(
            predicates::str::contains("WARN")
                .and(predicates::str::contains("invalid log filter"))
                .and(predicates::str::contains("rot13=bogus")),
        );
}

/// The fallback filter keeps debug events hidden
#[test]
fn invalid_env_filter_with_verbose_stays_quiet() {
    rot13_cmd()
        .arg("--verbose")
        .env("ROT13_LOG", "rot13=bogus")
        .assert()
        .success()
        .stdout(DECODED_LINE)
        .stderr(predicates::str::contains("decoded embedded message").not());
}
