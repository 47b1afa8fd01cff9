// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use clap::Parser;

/// Decodes the embedded ROT13 message and prints it
#[derive(Parser, Debug)]
#[command(name = "rot13")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Log filter directive (overrides --verbose)
    #[arg(long = "log", env = "ROT13_LOG", value_name = "FILTER", hide = true)]
    pub log: Option<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
