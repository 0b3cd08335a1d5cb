// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar dates.
//!
//! [`Date`] is a thin value wrapper over [`chrono::NaiveDate`] that exposes
//! exactly what [`DateTime`](crate::DateTime) needs: construction from the
//! ISO 8601 calendar, ordinal and week forms, conversion to and from
//! nanoseconds since the Unix epoch, calendar-unit addition, and an ISO 8601
//! codec.
//!
//! # Accepted ISO 8601 shapes
//!
//! | Form | Basic | Extended |
//! |------|-------|----------|
//! | calendar | `YYYYMMDD` | `YYYY-MM-DD` |
//! | reduced calendar | — | `YYYY-MM` |
//! | ordinal | `YYYYDDD` | `YYYY-DDD` |
//! | week date | `YYYYWwwD` | `YYYY-Www-D` |
//! | week | `YYYYWww` | `YYYY-Www` |
//! | expanded year | — | `±YYYYYY-MM-DD` |

use crate::constants::NANOS_PER_DAY;
use crate::error::DateFormatError;
use crate::util::{floor_div, is_single_byte, pad_zeros, parse_int, split_at_offsets};
use chrono::{Datelike, Months, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Days from 0001-01-01 (day 1 of the common era) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A calendar date in the proleptic Gregorian calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// 1970-01-01.
    pub const UNIX_EPOCH: Self = match NaiveDate::from_ymd_opt(1970, 1, 1) {
        Some(date) => Self(date),
        None => panic!("1970-01-01 is a valid date"),
    };

    // ── constructors ──────────────────────────────────────────────────

    /// Build from year, month (1–12) and day of month.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Build from year and day of year (1–366).
    pub fn from_yd(year: i32, day_of_year: u32) -> Option<Self> {
        NaiveDate::from_yo_opt(year, day_of_year).map(Self)
    }

    /// Build from ISO week-numbering year, ISO week (1–53) and weekday
    /// (1 = Monday … 7 = Sunday).
    pub fn from_ywd(year: i32, week: u32, weekday: u32) -> Option<Self> {
        let weekday = match weekday {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            7 => Weekday::Sun,
            _ => return None,
        };
        NaiveDate::from_isoywd_opt(year, week, weekday).map(Self)
    }

    /// The Monday of the given ISO week.
    #[inline]
    pub fn from_yw(year: i32, week: u32) -> Option<Self> {
        Self::from_ywd(year, week, 1)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of year, 1-based.
    #[inline]
    pub fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }

    /// ISO 8601 week number.
    #[inline]
    pub fn iso_week(&self) -> u32 {
        self.0.iso_week().week()
    }

    /// ISO weekday number, 1 = Monday … 7 = Sunday.
    #[inline]
    pub fn weekday(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    // ── epoch conversion ──────────────────────────────────────────────

    /// Signed whole days since 1970-01-01.
    #[inline]
    pub fn days_since_epoch(&self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
    }

    /// Nanoseconds from the Unix epoch to the start of this date.
    #[inline]
    pub fn to_nanos_since_epoch(&self) -> i128 {
        i128::from(self.days_since_epoch()) * i128::from(NANOS_PER_DAY)
    }

    /// The date containing the instant `nanos` nanoseconds after the Unix
    /// epoch. Returns `None` outside chrono's representable range.
    pub fn from_nanos_since_epoch(nanos: i128) -> Option<Self> {
        let days = floor_div(nanos, i128::from(NANOS_PER_DAY));
        let from_ce = i32::try_from(days + i128::from(UNIX_EPOCH_DAYS_FROM_CE)).ok()?;
        NaiveDate::from_num_days_from_ce_opt(from_ce).map(Self)
    }

    // ── calendar arithmetic ───────────────────────────────────────────

    /// Add a signed number of days, or `None` if the result is out of range.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let magnitude = chrono::Days::new(days.unsigned_abs());
        if days < 0 {
            self.0.checked_sub_days(magnitude)
        } else {
            self.0.checked_add_days(magnitude)
        }
        .map(Self)
    }

    /// Add a signed number of months, clamping the day to the target month.
    pub fn checked_add_months(self, months: i64) -> Option<Self> {
        let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
        if months < 0 {
            self.0.checked_sub_months(magnitude)
        } else {
            self.0.checked_add_months(magnitude)
        }
        .map(Self)
    }

    /// Add a signed number of years (29 February clamps to 28 February).
    pub fn checked_add_years(self, years: i64) -> Option<Self> {
        self.checked_add_months(years.checked_mul(12)?)
    }

    /// Add a signed number of days.
    ///
    /// # Panics
    /// If the result falls outside the representable calendar range.
    pub fn add_days(self, days: i64) -> Self {
        self.checked_add_days(days)
            .expect("date out of representable range")
    }

    /// Add a signed number of months. See [`Date::checked_add_months`].
    ///
    /// # Panics
    /// If the result falls outside the representable calendar range.
    pub fn add_months(self, months: i64) -> Self {
        self.checked_add_months(months)
            .expect("date out of representable range")
    }

    /// Add a signed number of years. See [`Date::checked_add_years`].
    ///
    /// # Panics
    /// If the result falls outside the representable calendar range.
    pub fn add_years(self, years: i64) -> Self {
        self.checked_add_years(years)
            .expect("date out of representable range")
    }

    // ── ISO 8601 ──────────────────────────────────────────────────────

    /// Extended calendar form, `YYYY-MM-DD`. Years outside `0..=9999` use
    /// the expanded signed six-digit form.
    pub fn to_iso_string(&self) -> String {
        let year = self.year();
        let year = if (0..=9999).contains(&year) {
            pad_zeros(year, 4)
        } else {
            let sign = if year < 0 { '-' } else { '+' };
            format!("{sign}{}", pad_zeros(year.unsigned_abs(), 6))
        };
        format!(
            "{year}-{}-{}",
            pad_zeros(self.month(), 2),
            pad_zeros(self.day(), 2)
        )
    }

    /// [`Date::to_iso_string`] as bytes.
    #[inline]
    pub fn to_iso_bytes(&self) -> Vec<u8> {
        self.to_iso_string().into_bytes()
    }

    /// Parse any of the accepted ISO 8601 date shapes.
    pub fn from_iso_bytes(bytes: &[u8]) -> Result<Self, DateFormatError> {
        if !is_single_byte(bytes) {
            trace!("date rejected: multibyte input");
            return Err(DateFormatError);
        }
        let shape = DateShape::classify(bytes).ok_or_else(|| {
            trace!("date rejected: unrecognized shape {:?}", String::from_utf8_lossy(bytes));
            DateFormatError
        })?;
        let date = shape.build(bytes);
        if date.is_none() {
            trace!("date rejected: fields out of range in {:?}", String::from_utf8_lossy(bytes));
        }
        date.ok_or(DateFormatError)
    }

    /// Parse from a string. See [`Date::from_iso_bytes`].
    #[inline]
    pub fn from_iso_str(s: &str) -> Result<Self, DateFormatError> {
        Self::from_iso_bytes(s.as_bytes())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Lexical shapes
// ═══════════════════════════════════════════════════════════════════════════

/// Recognized date layouts, classified by length and separator positions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DateShape {
    /// `YYYYMMDD`
    CalendarBasic,
    /// `YYYY-MM-DD`
    CalendarExtended,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYYDDD`
    OrdinalBasic,
    /// `YYYY-DDD`
    OrdinalExtended,
    /// `YYYYWwwD`
    WeekDateBasic,
    /// `YYYY-Www-D`
    WeekDateExtended,
    /// `YYYYWww`
    WeekBasic,
    /// `YYYY-Www`
    WeekExtended,
    /// `±YYYYYY-MM-DD`
    Expanded,
}

impl DateShape {
    fn classify(bytes: &[u8]) -> Option<Self> {
        // Digits everywhere except the given separator positions.
        let layout = |separators: &[(usize, u8)]| {
            bytes.iter().enumerate().all(|(i, &b)| {
                match separators.iter().find(|&&(at, _)| at == i) {
                    Some(&(_, sep)) => b == sep,
                    None => b.is_ascii_digit(),
                }
            })
        };
        let shape = match bytes.len() {
            7 if layout(&[(4, b'-')]) => Self::YearMonth,
            7 if layout(&[(4, b'W')]) => Self::WeekBasic,
            7 if layout(&[]) => Self::OrdinalBasic,
            8 if layout(&[(4, b'-'), (5, b'W')]) => Self::WeekExtended,
            8 if layout(&[(4, b'-')]) => Self::OrdinalExtended,
            8 if layout(&[(4, b'W')]) => Self::WeekDateBasic,
            8 if layout(&[]) => Self::CalendarBasic,
            10 if layout(&[(4, b'-'), (5, b'W'), (8, b'-')]) => Self::WeekDateExtended,
            10 if layout(&[(4, b'-'), (7, b'-')]) => Self::CalendarExtended,
            13 if matches!(bytes[0], b'+' | b'-') => {
                let rest = &bytes[1..];
                let ok = rest.iter().enumerate().all(|(i, &b)| match i {
                    6 | 9 => b == b'-',
                    _ => b.is_ascii_digit(),
                });
                if !ok {
                    return None;
                }
                Self::Expanded
            }
            _ => return None,
        };
        Some(shape)
    }

    fn build(self, bytes: &[u8]) -> Option<Date> {
        let int = |segment: &[u8]| parse_int(segment).and_then(|v| u32::try_from(v).ok());
        let year = |segment: &[u8]| parse_int(segment).and_then(|v| i32::try_from(v).ok());
        match self {
            Self::CalendarBasic => {
                let p = split_at_offsets(bytes, &[4, 6])?;
                Date::from_ymd(year(p[0])?, int(p[1])?, int(p[2])?)
            }
            Self::CalendarExtended => {
                let p = split_at_offsets(bytes, &[4, 5, 7, 8])?;
                Date::from_ymd(year(p[0])?, int(p[2])?, int(p[4])?)
            }
            Self::YearMonth => {
                let p = split_at_offsets(bytes, &[4, 5])?;
                Date::from_ymd(year(p[0])?, int(p[2])?, 1)
            }
            Self::OrdinalBasic => {
                let p = split_at_offsets(bytes, &[4])?;
                Date::from_yd(year(p[0])?, int(p[1])?)
            }
            Self::OrdinalExtended => {
                let p = split_at_offsets(bytes, &[4, 5])?;
                Date::from_yd(year(p[0])?, int(p[2])?)
            }
            Self::WeekDateBasic => {
                let p = split_at_offsets(bytes, &[4, 5, 7])?;
                Date::from_ywd(year(p[0])?, int(p[2])?, int(p[3])?)
            }
            Self::WeekDateExtended => {
                let p = split_at_offsets(bytes, &[4, 6, 8, 9])?;
                Date::from_ywd(year(p[0])?, int(p[2])?, int(p[4])?)
            }
            Self::WeekBasic => {
                let p = split_at_offsets(bytes, &[4, 5])?;
                Date::from_yw(year(p[0])?, int(p[2])?)
            }
            Self::WeekExtended => {
                let p = split_at_offsets(bytes, &[4, 6])?;
                Date::from_yw(year(p[0])?, int(p[2])?)
            }
            Self::Expanded => {
                let p = split_at_offsets(bytes, &[7, 8, 10, 11])?;
                Date::from_ymd(year(p[0])?, int(p[2])?, int(p[4])?)
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Default for Date {
    fn default() -> Self {
        Self::UNIX_EPOCH
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for Date {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso_str(s)
    }
}

impl From<NaiveDate> for Date {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<Date> for NaiveDate {
    #[inline]
    fn from(date: Date) -> Self {
        date.0
    }
}

#[cfg(feature = "serde")]
impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_iso_str(&s).map_err(serde::de::Error::custom)
    }
}
