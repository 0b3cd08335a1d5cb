// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Signed, nanosecond-exact durations.
//!
//! [`Duration`] is the vehicle used to shift a [`Time`](crate::Time) or
//! [`DateTime`](crate::DateTime) by an arbitrary amount, including the
//! correction applied for a parsed UTC offset. It stores whole seconds in an
//! `i64` plus a non-negative sub-second remainder, so its span far exceeds
//! anything the calendar types can represent. Conversion to nanoseconds is
//! always exact in an `i128`.

use crate::constants::{NANOS_PER_SECOND, SECONDS_PER_DAY};
use crate::error::DurationOverflow;
use qtty::{Day, Days, Second, Seconds};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A signed span of time with nanosecond resolution.
///
/// Internally normalised with floor semantics: `nanos` is always in
/// `[0, 1e9)` and `secs` carries the sign, so `-1ns` is stored as
/// `secs = -1, nanos = 999_999_999`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    secs: i64,
    nanos: u32,
}

impl Duration {
    /// The empty duration.
    pub const ZERO: Self = Self { secs: 0, nanos: 0 };

    // ── constructors ──────────────────────────────────────────────────

    /// Build from a nanosecond count.
    ///
    /// Fails if the whole-second part does not fit in an `i64`.
    pub fn from_nanoseconds(nanos: i128) -> Result<Self, DurationOverflow> {
        let per_second = i128::from(NANOS_PER_SECOND);
        let secs = i64::try_from(nanos.div_euclid(per_second)).map_err(|_| DurationOverflow)?;
        // rem_euclid of a positive modulus is in [0, 1e9) and fits a u32.
        let nanos = nanos.rem_euclid(per_second) as u32;
        Ok(Self { secs, nanos })
    }

    /// Build from whole seconds.
    #[inline]
    pub const fn from_seconds(secs: i64) -> Self {
        Self { secs, nanos: 0 }
    }

    /// Build from whole minutes.
    #[inline]
    pub const fn from_minutes(minutes: i32) -> Self {
        Self::from_seconds(minutes as i64 * 60)
    }

    /// Build from whole hours.
    #[inline]
    pub const fn from_hours(hours: i32) -> Self {
        Self::from_seconds(hours as i64 * 3_600)
    }

    /// Build from whole civil days of 86 400 seconds.
    #[inline]
    pub const fn from_days(days: i32) -> Self {
        Self::from_seconds(days as i64 * SECONDS_PER_DAY)
    }

    /// Build from a [`Days`] quantity, rounded to the nearest nanosecond.
    pub fn try_from_days(days: Days) -> Result<Self, DurationOverflow> {
        let nanos = days.to::<Second>().value() * NANOS_PER_SECOND as f64;
        if !nanos.is_finite() || nanos.abs() >= i128::MAX as f64 {
            return Err(DurationOverflow);
        }
        Self::from_nanoseconds(nanos.round() as i128)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Total length in nanoseconds. Never truncates.
    #[inline]
    pub const fn to_nanoseconds(&self) -> i128 {
        self.secs as i128 * NANOS_PER_SECOND as i128 + self.nanos as i128
    }

    /// Whether this duration is strictly negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.secs < 0
    }

    /// Length as a [`Seconds`] quantity (lossy beyond `f64` precision).
    pub fn to_seconds(&self) -> Seconds {
        Seconds::new(self.to_nanoseconds() as f64 / NANOS_PER_SECOND as f64)
    }

    /// Length as a [`Days`] quantity (lossy beyond `f64` precision).
    pub fn to_days(&self) -> Days {
        self.to_seconds().to::<Day>()
    }

    // ── checked arithmetic ────────────────────────────────────────────

    /// Sum of two durations, or `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Self::from_nanoseconds(self.to_nanoseconds() + rhs.to_nanoseconds()).ok()
    }

    /// Difference of two durations, or `None` on overflow.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Self::from_nanoseconds(self.to_nanoseconds() - rhs.to_nanoseconds()).ok()
    }

    /// Negation, or `None` for the single value whose negation overflows.
    pub fn checked_neg(self) -> Option<Self> {
        Self::from_nanoseconds(-self.to_nanoseconds()).ok()
    }
}

// ── Display ───────────────────────────────────────────────────────────────

/// ISO 8601 seconds-only form, e.g. `PT90S`, `-PT0.5S`.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.to_nanoseconds();
        let sign = if total < 0 { "-" } else { "" };
        let magnitude = total.unsigned_abs();
        let per_second = NANOS_PER_SECOND as u128;
        write!(f, "{sign}PT{}", magnitude / per_second)?;
        let frac = magnitude % per_second;
        if frac != 0 {
            let digits = format!("{frac:09}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        f.write_str("S")
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add for Duration {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("duration addition overflowed")
    }
}

impl Sub for Duration {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("duration subtraction overflowed")
    }
}

impl Neg for Duration {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("duration negation overflowed")
    }
}

// ── chrono interop ────────────────────────────────────────────────────────

impl From<chrono::TimeDelta> for Duration {
    fn from(delta: chrono::TimeDelta) -> Self {
        let nanos = i128::from(delta.num_seconds()) * i128::from(NANOS_PER_SECOND)
            + i128::from(delta.subsec_nanos());
        // chrono bounds its deltas to i64 milliseconds, well inside our range.
        Self::from_nanoseconds(nanos).expect("chrono TimeDelta fits in Duration")
    }
}
