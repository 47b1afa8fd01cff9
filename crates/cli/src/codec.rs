// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ROT13 over the ASCII Latin alphabet.
//!
//! Uppercase and lowercase letters are shifted 13 places within their own
//! range, wrapping after `Z`/`z`. Everything else passes through. The
//! shift is half the alphabet, so [`decode`] and [`encode`] are the same
//! function and applying either twice yields the input.

const SHIFT: u8 = 13;
const ALPHABET_LEN: u8 = 26;

/// Rotate a single character by 13 places.
///
/// Anything other than an ASCII letter is returned unchanged.
pub fn rotate(c: char) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };
    // Both arms above guarantee `c` is a single ASCII byte.
    let offset = (c as u8 - base + SHIFT) % ALPHABET_LEN;
    char::from(base + offset)
}

/// Decode a ROT13 string.
pub fn decode(input: &str) -> String {
    input.chars().map(rotate).collect()
}

/// Encode a string with ROT13. Same transform as [`decode`].
pub fn encode(input: &str) -> String {
    decode(input)
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
