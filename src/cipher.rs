//! Shift cipher transform
//!
//! Only the 26 ASCII letters take part in the cipher. Whitespace can be
//! dropped on request; every other character (digits, punctuation,
//! accented letters, emoji) passes through untouched.

use serde::{Deserialize, Serialize};

/// Size of the cipher alphabet
pub const ALPHABET_LEN: i64 = 26;

/// Options controlling how a shift is applied to text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Keep the caller's casing preference around for presentation.
    /// Letters always keep their own case through the transform and
    /// frequency scoring is case-insensitive either way.
    pub preserve_case: bool,

    /// Emit whitespace unchanged (true) or drop it from the output (false)
    pub preserve_whitespace: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            preserve_case: false,
            preserve_whitespace: true,
        }
    }
}

impl DecodeOptions {
    /// Options used by the analyzer: whitespace always passes through so
    /// previews stay readable.
    pub fn analysis() -> Self {
        Self::default()
    }
}

/// Normalize any shift into `0..26`.
///
/// Uses Euclidean remainder, so `-3` becomes `23` rather than `-3`.
pub fn normalize_shift(shift: i64) -> u8 {
    // rem_euclid is always in 0..26, the cast cannot truncate
    shift.rem_euclid(ALPHABET_LEN) as u8
}

/// Apply `shift` to every ASCII letter of `text`.
///
/// Positive shifts move forward through the alphabet (`a` + 3 = `d`),
/// negative shifts move backward. Decoding a text that was encoded with
/// shift `k` is `transform(text, -k, ..)`.
pub fn transform(text: &str, shift: i64, options: &DecodeOptions) -> String {
    let shift = normalize_shift(shift);
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            out.push(shift_letter(c, shift));
        } else if c.is_whitespace() {
            if options.preserve_whitespace {
                out.push(c);
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Encode `text` with `shift`.
///
/// Decoding the result is `transform(cipher, -shift, ..)`, or
/// [`decode`] with the same shift.
pub fn encode(text: &str, shift: i64, options: &DecodeOptions) -> String {
    transform(text, shift, options)
}

/// Remove a known `shift` from `text`.
pub fn decode(text: &str, shift: i64, options: &DecodeOptions) -> String {
    // negate after normalizing so i64::MIN cannot overflow
    transform(text, -i64::from(normalize_shift(shift)), options)
}

fn shift_letter(c: char, shift: u8) -> char {
    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
    let offset = c as u8 - base;
    char::from(base + (offset + shift) % ALPHABET_LEN as u8)
}
