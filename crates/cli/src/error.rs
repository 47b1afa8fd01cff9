// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.
//!
//! The codec itself is total. A bad log filter is recovered from by
//! falling back to the default filter, so the only failure that reaches
//! the exit code is a failed write to stdout.

use std::io;

/// Errors raised while setting up or emitting output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The log filter directive could not be parsed.
    #[error("invalid log filter {directive:?}")]
    InvalidLogFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// Writing the decoded message failed.
    #[error("failed to write output")]
    Output(#[from] io::Error),
}

/// Process exit codes. Clap usage errors exit 2 on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Message decoded and printed.
    Success = 0,
    /// Output could not be written.
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
