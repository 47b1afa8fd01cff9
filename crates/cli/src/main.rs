// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Context;
use clap::Parser;

use rot13::cli::Cli;
use rot13::error::ExitCode;
use rot13::logging;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("rot13: {err:#}");
            ExitCode::InternalError.into()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    // A rejected filter has already been reported on stderr.
    let _rejected = logging::init(cli.verbose, cli.log.as_deref());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    rot13::print_decoded(&mut out).context("failed to print decoded message")?;

    Ok(ExitCode::Success)
}
