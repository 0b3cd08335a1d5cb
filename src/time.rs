// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock time of day with nanosecond resolution.
//!
//! [`Time`] stores its fields compactly (`i8` hour, `u8` minute and second,
//! `u32` nanosecond). Minute, second and nanosecond are always in their
//! canonical ranges. The hour is **signed and not range-restricted**: `-1`
//! means one hour before midnight, `24` the midnight ending the day, `25` one
//! hour into the next day. Such values appear as carries out of arithmetic
//! and are folded back with [`Time::normalize`], or into a date by
//! [`DateTime`](crate::DateTime).
//!
//! All arithmetic runs through a single nanoseconds-since-midnight
//! accumulator, so every unit-wise addition behaves identically for negative
//! deltas and multi-unit overflow.
//!
//! # ISO 8601
//!
//! [`Time::to_iso_string`] always emits the minimal extended form
//! `HH:MM:SS[,f…]`. [`Time::from_iso_bytes`] accepts the basic and extended
//! forms at hour, minute or second granularity, a decimal fraction on the
//! last component (`.` or `,`), an optional leading `T`, and either a
//! trailing `Z` or a numeric offset (`±HH`, `±HHMM`, `±HH:MM`) which is
//! subtracted so that the result is expressed in UTC.

use crate::constants::{
    HOURS_PER_DAY, NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND,
};
use crate::duration::Duration;
use crate::error::Error;
use crate::util::{
    is_single_byte, pad_zeros, parse_fraction, parse_int, split_at_offsets, split_keep,
};
use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A time of day, possibly carrying whole days in a non-canonical hour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time {
    hour: i8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

impl Time {
    /// 00:00:00.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
        nanosecond: 0,
    };

    // ── constructors ──────────────────────────────────────────────────

    /// Build from hour, minute, second and nanosecond.
    ///
    /// Returns `None` unless `minute` and `second` are in `0..=59` and
    /// `nanosecond` in `0..=999_999_999`. The hour is accepted as is.
    #[inline]
    pub const fn from_hmsn(hour: i8, minute: u8, second: u8, nanosecond: u32) -> Option<Self> {
        if minute > 59 || second > 59 || nanosecond >= NANOS_PER_SECOND as u32 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    /// Build from hour, minute and second. See [`Time::from_hmsn`].
    #[inline]
    pub const fn from_hms(hour: i8, minute: u8, second: u8) -> Option<Self> {
        Self::from_hmsn(hour, minute, second, 0)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn hour(&self) -> i8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    pub const fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// Whether the hour lies in `0..=23`.
    #[inline]
    pub const fn is_canonical(&self) -> bool {
        self.hour >= 0 && self.hour < HOURS_PER_DAY as i8
    }

    // ── nanosecond core ───────────────────────────────────────────────

    /// Signed nanoseconds from midnight. Negative for negative hours.
    #[inline]
    pub const fn to_nanos_since_midnight(&self) -> i64 {
        self.hour as i64 * NANOS_PER_HOUR
            + self.minute as i64 * NANOS_PER_MINUTE
            + self.second as i64 * NANOS_PER_SECOND
            + self.nanosecond as i64
    }

    /// Inverse of [`Time::to_nanos_since_midnight`].
    ///
    /// Out-of-range input is decomposed so that minute, second and
    /// nanosecond stay canonical while the hour absorbs the sign and any
    /// whole days: `-123` becomes `-1:59:59.999999877`.
    ///
    /// # Panics
    /// If the resulting hour does not fit in an `i8`.
    #[inline]
    pub fn from_nanos_since_midnight(nanos: i64) -> Self {
        Self::from_wide_nanos(i128::from(nanos))
    }

    pub(crate) fn from_wide_nanos(nanos: i128) -> Self {
        let reduced = nanos.rem_euclid(i128::from(NANOS_PER_DAY)) as i64;
        let minute = (reduced / NANOS_PER_MINUTE) % 60;
        let second = (reduced / NANOS_PER_SECOND) % 60;
        let nanosecond = reduced % NANOS_PER_SECOND;
        let sub_hour = minute * NANOS_PER_MINUTE + second * NANOS_PER_SECOND + nanosecond;
        // Exact: the sub-hour remainder is congruent to `nanos` modulo one hour.
        let hour = (nanos - i128::from(sub_hour)) / i128::from(NANOS_PER_HOUR);
        Self {
            hour: i8::try_from(hour).expect("hour out of range for Time"),
            minute: minute as u8,
            second: second as u8,
            nanosecond: nanosecond as u32,
        }
    }

    /// The canonical representative of the same time of day, with the hour
    /// wrapped into `0..=23` (floor modulo, so `-1` becomes `23`).
    #[inline]
    pub const fn normalize(self) -> Self {
        Self {
            hour: self.hour.rem_euclid(HOURS_PER_DAY as i8),
            ..self
        }
    }

    /// Copy with a different hour.
    #[inline]
    pub(crate) const fn with_hour(self, hour: i8) -> Self {
        Self { hour, ..self }
    }

    // ── unit addition ─────────────────────────────────────────────────
    //
    // None of these normalise: carries accumulate in the hour field.

    /// Add signed nanoseconds.
    ///
    /// # Panics
    /// If the resulting hour does not fit in an `i8`.
    #[inline]
    pub fn add_nanoseconds(self, nanos: i64) -> Self {
        self.add_scaled(nanos, 1)
    }

    /// Add signed seconds. Panics like [`Time::add_nanoseconds`].
    #[inline]
    pub fn add_seconds(self, seconds: i64) -> Self {
        self.add_scaled(seconds, NANOS_PER_SECOND)
    }

    /// Add signed minutes. Panics like [`Time::add_nanoseconds`].
    #[inline]
    pub fn add_minutes(self, minutes: i64) -> Self {
        self.add_scaled(minutes, NANOS_PER_MINUTE)
    }

    /// Add signed hours. Panics like [`Time::add_nanoseconds`].
    #[inline]
    pub fn add_hours(self, hours: i64) -> Self {
        self.add_scaled(hours, NANOS_PER_HOUR)
    }

    fn add_scaled(self, amount: i64, unit: i64) -> Self {
        let delta = i128::from(amount) * i128::from(unit);
        Self::from_wide_nanos(i128::from(self.to_nanos_since_midnight()) + delta)
    }

    /// Shift by a [`Duration`], carrying whole days into the hour.
    ///
    /// # Panics
    /// If the resulting hour does not fit in an `i8`.
    pub fn add_duration(self, duration: Duration) -> Self {
        Self::from_wide_nanos(
            i128::from(self.to_nanos_since_midnight()) + duration.to_nanoseconds(),
        )
    }

    /// Shift back by a [`Duration`]. Panics like [`Time::add_duration`].
    pub fn sub_duration(self, duration: Duration) -> Self {
        Self::from_wide_nanos(
            i128::from(self.to_nanos_since_midnight()) - duration.to_nanoseconds(),
        )
    }

    // ── ISO 8601 ──────────────────────────────────────────────────────

    /// Minimal extended representation: `HH:MM:SS` followed by `,` and the
    /// shortest exact fraction, if any.
    pub fn to_iso_string(&self) -> String {
        format!(
            "{}:{}:{}{}",
            pad_zeros(self.hour, 2),
            pad_zeros(self.minute, 2),
            pad_zeros(self.second, 2),
            fraction_suffix(self.nanosecond)
        )
    }

    /// [`Time::to_iso_string`] as bytes.
    #[inline]
    pub fn to_iso_bytes(&self) -> Vec<u8> {
        self.to_iso_string().into_bytes()
    }

    /// Parse an ISO 8601 time of day.
    ///
    /// Any rejected input yields [`Error::InvalidTimeFormat`].
    pub fn from_iso_bytes(bytes: &[u8]) -> Result<Self, Error> {
        parse_time(bytes).ok_or(Error::InvalidTimeFormat)
    }

    /// Parse from a string. See [`Time::from_iso_bytes`].
    #[inline]
    pub fn from_iso_str(s: &str) -> Result<Self, Error> {
        Self::from_iso_bytes(s.as_bytes())
    }

    // ── chrono interop ────────────────────────────────────────────────

    /// Convert to a `chrono::NaiveTime`. Returns `None` for non-canonical
    /// values, which chrono cannot express.
    pub fn to_naive(&self) -> Option<NaiveTime> {
        if !self.is_canonical() {
            return None;
        }
        NaiveTime::from_hms_nano_opt(
            self.hour as u32,
            self.minute.into(),
            self.second.into(),
            self.nanosecond,
        )
    }
}

/// `,` plus the fewest digits that represent `nanosecond` exactly; empty
/// for zero.
fn fraction_suffix(nanosecond: u32) -> String {
    if nanosecond == 0 {
        return String::new();
    }
    let mut width = 9;
    let mut rest = nanosecond;
    while rest % 10 == 0 {
        rest /= 10;
        width -= 1;
    }
    let mut suffix = format!(",{}", pad_zeros(nanosecond, 9));
    suffix.truncate(width + 1);
    suffix
}

// ═══════════════════════════════════════════════════════════════════════════
// ISO 8601 parser
// ═══════════════════════════════════════════════════════════════════════════

/// The four accepted arrangements of clock, fraction and offset, produced
/// by splitting on `.`, `,`, `+` and `-`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Lexeme<'a> {
    Whole {
        clock: &'a [u8],
    },
    Fractional {
        clock: &'a [u8],
        fraction: &'a [u8],
    },
    WholeOffset {
        clock: &'a [u8],
        sign: Sign,
        offset: &'a [u8],
    },
    FractionalOffset {
        clock: &'a [u8],
        fraction: &'a [u8],
        sign: Sign,
        offset: &'a [u8],
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Sign {
    Plus,
    Minus,
}

impl<'a> Lexeme<'a> {
    fn tokenize(bytes: &'a [u8]) -> Option<Self> {
        let segments = split_keep(bytes, b".,+-");
        let is_radix = |segment: &[u8]| segment == b"." || segment == b",";
        let sign = |segment: &[u8]| match segment {
            b"+" => Some(Sign::Plus),
            b"-" => Some(Sign::Minus),
            _ => None,
        };
        let lexeme = match segments.len() {
            1 => Self::Whole { clock: segments[0] },
            3 if is_radix(segments[1]) => Self::Fractional {
                clock: segments[0],
                fraction: segments[2],
            },
            3 => Self::WholeOffset {
                clock: segments[0],
                sign: sign(segments[1])?,
                offset: segments[2],
            },
            5 if is_radix(segments[1]) => Self::FractionalOffset {
                clock: segments[0],
                fraction: segments[2],
                sign: sign(segments[3])?,
                offset: segments[4],
            },
            _ => return None,
        };
        Some(lexeme)
    }

    const fn has_offset(&self) -> bool {
        matches!(
            self,
            Self::WholeOffset { .. } | Self::FractionalOffset { .. }
        )
    }
}

/// Layouts of the clock part, recognised by length and colon positions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ClockShape {
    /// `HH`
    Hour,
    /// `HHMM`
    HourMinuteBasic,
    /// `HH:MM`
    HourMinuteExtended,
    /// `HHMMSS`
    HourMinuteSecondBasic,
    /// `HH:MM:SS`
    HourMinuteSecondExtended,
}

impl ClockShape {
    fn classify(bytes: &[u8]) -> Option<Self> {
        let shape = match bytes.len() {
            2 => Self::Hour,
            4 => Self::HourMinuteBasic,
            5 if bytes[2] == b':' => Self::HourMinuteExtended,
            6 => Self::HourMinuteSecondBasic,
            8 if bytes[2] == b':' && bytes[5] == b':' => Self::HourMinuteSecondExtended,
            _ => return None,
        };
        Some(shape)
    }

    /// Nanoseconds in one unit of the least significant component present.
    const fn unit(self) -> i64 {
        match self {
            Self::Hour => NANOS_PER_HOUR,
            Self::HourMinuteBasic | Self::HourMinuteExtended => NANOS_PER_MINUTE,
            Self::HourMinuteSecondBasic | Self::HourMinuteSecondExtended => NANOS_PER_SECOND,
        }
    }

    /// Extract `(hour, minute, second)`, missing components being zero.
    fn fields(self, bytes: &[u8]) -> Option<(i64, i64, i64)> {
        match self {
            Self::Hour => Some((digits(bytes)?, 0, 0)),
            Self::HourMinuteBasic => {
                let p = split_at_offsets(bytes, &[2])?;
                Some((digits(p[0])?, digits(p[1])?, 0))
            }
            Self::HourMinuteExtended => {
                let p = split_at_offsets(bytes, &[2, 3])?;
                Some((digits(p[0])?, digits(p[2])?, 0))
            }
            Self::HourMinuteSecondBasic => {
                let p = split_at_offsets(bytes, &[2, 4])?;
                Some((digits(p[0])?, digits(p[1])?, digits(p[2])?))
            }
            Self::HourMinuteSecondExtended => {
                let p = split_at_offsets(bytes, &[2, 3, 5, 6])?;
                Some((digits(p[0])?, digits(p[2])?, digits(p[4])?))
            }
        }
    }
}

/// An unsigned run of ASCII digits.
fn digits(bytes: &[u8]) -> Option<i64> {
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    parse_int(bytes)
}

fn parse_time(bytes: &[u8]) -> Option<Time> {
    if !is_single_byte(bytes) {
        trace!("time rejected: multibyte input");
        return None;
    }
    let zulu = bytes.last() == Some(&b'Z');
    let stripped = bytes.strip_prefix(b"T").unwrap_or(bytes);
    let stripped = stripped.strip_suffix(b"Z").unwrap_or(stripped);

    let Some(lexeme) = Lexeme::tokenize(stripped) else {
        trace!("time rejected: unrecognized layout {:?}", String::from_utf8_lossy(bytes));
        return None;
    };
    if zulu && lexeme.has_offset() {
        trace!("time rejected: both 'Z' and a numeric offset in {:?}", String::from_utf8_lossy(bytes));
        return None;
    }
    match lexeme {
        Lexeme::Whole { clock } => parse_clock(clock).map(|(time, _)| time),
        Lexeme::Fractional { clock, fraction } => parse_fractional(clock, fraction),
        Lexeme::WholeOffset {
            clock,
            sign,
            offset,
        } => {
            let (time, _) = parse_clock(clock)?;
            apply_offset(time, sign, offset)
        }
        Lexeme::FractionalOffset {
            clock,
            fraction,
            sign,
            offset,
        } => {
            let time = parse_fractional(clock, fraction)?;
            apply_offset(time, sign, offset)
        }
    }
}

/// Parse and range-check the clock part.
fn parse_clock(bytes: &[u8]) -> Option<(Time, ClockShape)> {
    let Some(shape) = ClockShape::classify(bytes) else {
        trace!("time rejected: unrecognized clock {:?}", String::from_utf8_lossy(bytes));
        return None;
    };
    let (hour, minute, second) = shape.fields(bytes)?;
    let in_range = match hour {
        0..=23 => minute <= 59 && second <= 59,
        // End-of-day midnight is the only legal use of hour 24.
        24 => minute == 0 && second == 0,
        _ => false,
    };
    if !in_range {
        trace!("time rejected: {hour}:{minute}:{second} out of range");
        return None;
    }
    let time = Time::from_hms(hour as i8, minute as u8, second as u8)?;
    Some((time, shape))
}

/// Parse a clock plus a decimal fraction of its least significant component.
fn parse_fractional(clock: &[u8], fraction: &[u8]) -> Option<Time> {
    let (time, shape) = parse_clock(clock)?;
    let Some(fraction) = parse_fraction(fraction) else {
        trace!("time rejected: bad fraction {:?}", String::from_utf8_lossy(fraction));
        return None;
    };
    let nanos = (fraction * shape.unit() as f64).round() as i64;
    if time.hour() == 24 && nanos != 0 {
        trace!("time rejected: fraction on end-of-day midnight");
        return None;
    }
    let duration = Duration::from_nanoseconds(i128::from(nanos)).ok()?;
    Some(time.add_duration(duration))
}

/// Largest correction applied when shifting west of UTC (stated `-12:00`).
const MAX_CORRECTION: i64 = 12 * NANOS_PER_HOUR;
/// Largest correction applied when shifting east of UTC (stated `+14:00`).
const MIN_CORRECTION: i64 = -14 * NANOS_PER_HOUR;

/// Subtract a stated UTC offset from `time`.
fn apply_offset(time: Time, sign: Sign, offset: &[u8]) -> Option<Time> {
    let (hours, minutes) = match offset.len() {
        2 => (digits(offset)?, 0),
        4 => {
            let p = split_at_offsets(offset, &[2])?;
            (digits(p[0])?, digits(p[1])?)
        }
        5 if offset[2] == b':' => {
            let p = split_at_offsets(offset, &[2, 3])?;
            (digits(p[0])?, digits(p[2])?)
        }
        _ => {
            trace!("time rejected: unrecognized offset {:?}", String::from_utf8_lossy(offset));
            return None;
        }
    };
    if minutes > 59 {
        trace!("time rejected: offset minutes {minutes} out of range");
        return None;
    }
    let magnitude = hours * NANOS_PER_HOUR + minutes * NANOS_PER_MINUTE;
    // Local time ahead of UTC (`+`) is corrected by moving backwards.
    let correction = match sign {
        Sign::Plus => -magnitude,
        Sign::Minus => magnitude,
    };
    if !(MIN_CORRECTION..=MAX_CORRECTION).contains(&correction) {
        trace!("time rejected: offset {hours:02}:{minutes:02} out of range");
        return None;
    }
    let duration = Duration::from_nanoseconds(i128::from(correction)).ok()?;
    Some(time.add_duration(duration))
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso_str(s)
    }
}

impl Add<Duration> for Time {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.add_duration(rhs)
    }
}

impl Add<Time> for Duration {
    type Output = Time;
    #[inline]
    fn add(self, rhs: Time) -> Self::Output {
        rhs.add_duration(self)
    }
}

impl Sub<Duration> for Time {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        self.sub_duration(rhs)
    }
}

/// Leap seconds (chrono's `nanosecond >= 1e9`) saturate to the last
/// nanosecond of the preceding second.
impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as i8,
            minute: time.minute() as u8,
            second: time.second() as u8,
            nanosecond: time.nanosecond().min(NANOS_PER_SECOND as u32 - 1),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_iso_str(&s).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
