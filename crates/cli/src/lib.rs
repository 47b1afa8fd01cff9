// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decodes the embedded ROT13 message.
//!
//! The binary prints [`decoded_message`] on a single stdout line. All
//! diagnostics go to stderr through `tracing`.

pub mod cli;
pub mod codec;
pub mod error;
pub mod logging;

use std::io::Write;

use crate::error::Error;

/// The message shipped with the binary, ROT13-encoded.
pub const ENCODED_MESSAGE: &str = "Pbatenghyngvbaf ba ohvyqvat n pbqr-rqvgvat ntrag!";

/// Plaintext of [`ENCODED_MESSAGE`].
pub fn decoded_message() -> String {
    codec::decode(ENCODED_MESSAGE)
}

/// Write the decoded message as a single line and flush.
pub fn print_decoded(out: &mut impl Write) -> Result<(), Error> {
    let message = decoded_message();
    tracing::debug!(
        encoded_len = ENCODED_MESSAGE.len(),
        decoded_len = message.len(),
        "decoded embedded message"
    );
    writeln!(out, "{message}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
