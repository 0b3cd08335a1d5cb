// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Small byte-level helpers shared by the ISO 8601 codecs.
//!
//! Everything here works on raw `&[u8]` and never allocates beyond the
//! returned segment list. Callers are expected to have rejected non-ASCII
//! input with [`is_single_byte`] first.

use std::fmt::Display;

/// Left-pad the decimal text of `value` with zeros to at least `width`
/// characters. Sign-aware and never truncates: `pad_zeros(-5, 3) == "-05"`,
/// `pad_zeros(123, 2) == "123"`.
pub(crate) fn pad_zeros<T: Display>(value: T, width: usize) -> String {
    format!("{value:0width$}")
}

/// Split `bytes` at the given ascending `offsets`.
///
/// Returns `None` if an offset is out of bounds or the offsets are not
/// ascending.
pub(crate) fn split_at_offsets<'a>(bytes: &'a [u8], offsets: &[usize]) -> Option<Vec<&'a [u8]>> {
    let mut segments = Vec::with_capacity(offsets.len() + 1);
    let mut start = 0;
    for &offset in offsets {
        if offset < start || offset > bytes.len() {
            return None;
        }
        segments.push(&bytes[start..offset]);
        start = offset;
    }
    segments.push(&bytes[start..]);
    Some(segments)
}

/// Split `bytes` on every byte contained in `delimiters`, keeping each
/// delimiter as its own one-byte segment.
///
/// Empty segments between delimiters are preserved, so `b".5"` split on
/// `b"."` yields `["", ".", "5"]`.
pub(crate) fn split_keep<'a>(bytes: &'a [u8], delimiters: &[u8]) -> Vec<&'a [u8]> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, b) in bytes.iter().enumerate() {
        if delimiters.contains(b) {
            segments.push(&bytes[start..i]);
            segments.push(&bytes[i..=i]);
            start = i + 1;
        }
    }
    segments.push(&bytes[start..]);
    segments
}

/// Parse an optionally signed decimal integer.
///
/// At least one ASCII digit is required and nothing but digits may follow
/// the sign.
pub(crate) fn parse_int(bytes: &[u8]) -> Option<i64> {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut value: i64 = 0;
    for &d in digits {
        value = value.checked_mul(10)?.checked_add(i64::from(d - b'0'))?;
    }
    Some(if negative { -value } else { value })
}

/// Parse the digits following a radix point into a value in `[0, 1)`.
pub(crate) fn parse_fraction(bytes: &[u8]) -> Option<f64> {
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let digits = std::str::from_utf8(bytes).ok()?;
    format!("0.{digits}").parse().ok()
}

/// Whether every byte is a single-byte (ASCII) character.
#[inline]
pub(crate) fn is_single_byte(bytes: &[u8]) -> bool {
    bytes.is_ascii()
}

/// Floor division of `a` by a positive `b`.
#[inline]
pub(crate) const fn floor_div(a: i128, b: i128) -> i128 {
    let q = a / b;
    if a % b < 0 {
        q - 1
    } else {
        q
    }
}
