// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging on stderr.
//!
//! Stdout is reserved for the decoded message, so the subscriber always
//! writes to stderr. Filter precedence: explicit directive (`--log` or
//! `ROT13_LOG`), then `--verbose`, then the quiet default. An unparsable
//! directive never stops the run; it is reported and replaced by the
//! default.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::error::Error;

/// Filter used when nothing else is requested.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "debug";

/// Build the log filter for the given flags.
pub fn build_filter(verbose: bool, directive: Option<&str>) -> Result<EnvFilter, Error> {
    let directive = match directive {
        Some(d) => d,
        None if verbose => VERBOSE_FILTER,
        None => DEFAULT_FILTER,
    };
    EnvFilter::try_new(directive).map_err(|source| Error::InvalidLogFilter {
        directive: directive.to_string(),
        source,
    })
}

/// Install the global subscriber. Later calls keep the first subscriber.
///
/// Returns the rejected directive's error, if the default filter had to be
/// used instead.
pub fn init(verbose: bool, directive: Option<&str>) -> Option<Error> {
    let (filter, rejected) = match build_filter(verbose, directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
    if let Err(err) = installed {
        tracing::debug!("keeping existing subscriber: {err}");
    }

    if let Some(err) = &rejected {
        let cause = std::error::Error::source(err)
            .map(|source| format!(": {source}"))
            .unwrap_or_default();
        tracing::warn!("{err}{cause}, using {DEFAULT_FILTER:?}");
    }
    rejected
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
