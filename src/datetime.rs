// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Combined calendar date and wall-clock time.
//!
//! [`DateTime`] pairs a [`Date`] with a [`Time`]. The time may transiently
//! carry a non-canonical hour (for example after subtracting a parsed UTC
//! offset); [`DateTime::normalize`] folds such carries into the date so the
//! hour ends up in `0..=23`.
//!
//! Sub-day arithmetic goes through the time's nanoseconds-since-midnight
//! accumulator and carries whole days into the date. Day, month and year
//! arithmetic is delegated to [`Date`] and leaves the time untouched.

use crate::constants::{NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND};
use crate::date::Date;
use crate::duration::Duration;
use crate::error::Error;
use crate::time::Time;
use crate::util::{floor_div, is_single_byte};
use chrono::{NaiveDateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A date and a time of day, without any time zone.
///
/// Values order by the instant they denote, so a non-canonical
/// `2020-01-01T25:00` sorts after `2020-01-02T00:00`. Distinct
/// representations of the same instant are tie-broken by date, then time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// 1970-01-01T00:00:00.
    pub const UNIX_EPOCH: Self = Self {
        date: Date::UNIX_EPOCH,
        time: Time::MIDNIGHT,
    };

    // ── constructors ──────────────────────────────────────────────────

    /// Pair a date and a time as given, without normalising.
    #[inline]
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Build from calendar and clock fields. `None` if any field is out of
    /// range; the hour is taken as is, so call [`DateTime::normalize`] to
    /// fold an hour outside `0..=23` into the date.
    pub fn from_ymdhmsn(
        year: i32,
        month: u32,
        day: u32,
        hour: i8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> Option<Self> {
        let date = Date::from_ymd(year, month, day)?;
        let time = Time::from_hmsn(hour, minute, second, nanosecond)?;
        Some(Self::new(date, time))
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[inline]
    pub const fn time(&self) -> Time {
        self.time
    }

    // ── epoch conversion ──────────────────────────────────────────────

    /// Signed nanoseconds since 1970-01-01T00:00:00.
    pub fn to_nanos_since_epoch(&self) -> i128 {
        self.date.to_nanos_since_epoch() + i128::from(self.time.to_nanos_since_midnight())
    }

    /// Inverse of [`DateTime::to_nanos_since_epoch`]; the result is
    /// canonical. `None` outside the representable calendar range.
    pub fn from_nanos_since_epoch(nanos: i128) -> Option<Self> {
        let day = i128::from(NANOS_PER_DAY);
        let mut time_nanos = nanos % day;
        // Truncating remainder keeps the dividend's sign.
        if time_nanos < 0 {
            time_nanos += day;
        }
        let date = Date::from_nanos_since_epoch(nanos - time_nanos)?;
        let time = Time::from_wide_nanos(time_nanos);
        Some(Self::new(date, time))
    }

    // ── normalisation ─────────────────────────────────────────────────

    /// Fold a non-canonical hour into the date.
    ///
    /// # Panics
    /// If the carried date leaves the representable calendar range.
    pub fn normalize(self) -> Self {
        self.checked_normalize()
            .expect("date-time out of representable range")
    }

    /// [`DateTime::normalize`], or `None` on calendar overflow.
    pub fn checked_normalize(self) -> Option<Self> {
        let hour = self.time.hour();
        Self::new(self.date, self.time.with_hour(0))
            .checked_add_nanoseconds(i128::from(hour) * i128::from(NANOS_PER_HOUR))
    }

    // ── sub-day arithmetic ────────────────────────────────────────────

    /// Add signed nanoseconds, carrying whole days into the date. The
    /// resulting time is always canonical.
    pub fn checked_add_nanoseconds(self, nanos: i128) -> Option<Self> {
        let raw = i128::from(self.time.to_nanos_since_midnight()).checked_add(nanos)?;
        let day = i128::from(NANOS_PER_DAY);
        let carry = i64::try_from(floor_div(raw, day)).ok()?;
        let date = self.date.checked_add_days(carry)?;
        // Reduce before rebuilding so the intermediate hour fits the field.
        let time = Time::from_wide_nanos(raw.rem_euclid(day)).normalize();
        Some(Self::new(date, time))
    }

    /// Add signed nanoseconds. See [`DateTime::checked_add_nanoseconds`].
    ///
    /// # Panics
    /// If the date leaves the representable calendar range.
    #[inline]
    pub fn add_nanoseconds(self, nanos: i64) -> Self {
        self.add_scaled(nanos, 1)
    }

    /// Add signed seconds. Panics like [`DateTime::add_nanoseconds`].
    #[inline]
    pub fn add_seconds(self, seconds: i64) -> Self {
        self.add_scaled(seconds, NANOS_PER_SECOND)
    }

    /// Add signed minutes. Panics like [`DateTime::add_nanoseconds`].
    #[inline]
    pub fn add_minutes(self, minutes: i64) -> Self {
        self.add_scaled(minutes, NANOS_PER_MINUTE)
    }

    /// Add signed hours. Panics like [`DateTime::add_nanoseconds`].
    #[inline]
    pub fn add_hours(self, hours: i64) -> Self {
        self.add_scaled(hours, NANOS_PER_HOUR)
    }

    // Any i64 amount times an i64 unit fits in i128.
    fn add_scaled(self, amount: i64, unit: i64) -> Self {
        self.checked_add_nanoseconds(i128::from(amount) * i128::from(unit))
            .expect("date-time out of representable range")
    }

    // ── calendar arithmetic ───────────────────────────────────────────

    /// Add signed days to the date. See [`Date::add_days`].
    #[inline]
    pub fn add_days(self, days: i64) -> Self {
        Self::new(self.date.add_days(days), self.time)
    }

    /// Add signed months to the date. See [`Date::add_months`].
    #[inline]
    pub fn add_months(self, months: i64) -> Self {
        Self::new(self.date.add_months(months), self.time)
    }

    /// Add signed years to the date. See [`Date::add_years`].
    #[inline]
    pub fn add_years(self, years: i64) -> Self {
        Self::new(self.date.add_years(years), self.time)
    }

    // ── durations ─────────────────────────────────────────────────────

    /// Shift by a [`Duration`], or `None` on calendar overflow.
    pub fn checked_add_duration(self, duration: Duration) -> Option<Self> {
        Self::from_nanos_since_epoch(self.to_nanos_since_epoch() + duration.to_nanoseconds())
    }

    /// Shift back by a [`Duration`], or `None` on calendar overflow.
    pub fn checked_sub_duration(self, duration: Duration) -> Option<Self> {
        Self::from_nanos_since_epoch(self.to_nanos_since_epoch() - duration.to_nanoseconds())
    }

    /// Shift by a [`Duration`]. The result is canonical.
    ///
    /// # Panics
    /// If the result leaves the representable calendar range.
    pub fn add_duration(self, duration: Duration) -> Self {
        self.checked_add_duration(duration)
            .expect("date-time out of representable range")
    }

    /// Shift back by a [`Duration`]. Panics like [`DateTime::add_duration`].
    pub fn sub_duration(self, duration: Duration) -> Self {
        self.checked_sub_duration(duration)
            .expect("date-time out of representable range")
    }

    // ── ISO 8601 ──────────────────────────────────────────────────────

    /// `<date>T<time>`, each part in its minimal extended form.
    pub fn to_iso_string(&self) -> String {
        format!("{}T{}", self.date.to_iso_string(), self.time.to_iso_string())
    }

    /// [`DateTime::to_iso_string`] as bytes.
    pub fn to_iso_bytes(&self) -> Vec<u8> {
        let mut bytes = self.date.to_iso_bytes();
        bytes.push(b'T');
        bytes.extend_from_slice(&self.time.to_iso_bytes());
        bytes
    }

    /// Parse `<date>` or `<date>T<time>`, normalising any hour carried out
    /// of the time (for instance by a UTC offset) into the date.
    ///
    /// Any rejected input yields [`Error::InvalidDateTimeFormat`].
    pub fn from_iso_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if !is_single_byte(bytes) {
            trace!("date-time rejected: multibyte input");
            return Err(Error::InvalidDateTimeFormat);
        }
        let parts: Vec<&[u8]> = bytes.split(|&b| b == b'T').collect();
        match parts.as_slice() {
            [date] => {
                let date = Date::from_iso_bytes(date).map_err(|_| Error::InvalidDateTimeFormat)?;
                Ok(Self::new(date, Time::MIDNIGHT))
            }
            [date, time] => {
                let date = Date::from_iso_bytes(date).map_err(|_| Error::InvalidDateTimeFormat)?;
                let time = Time::from_iso_bytes(time).map_err(|_| Error::InvalidDateTimeFormat)?;
                Self::new(date, time).checked_normalize().ok_or_else(|| {
                    trace!("date-time rejected: carry leaves the calendar range");
                    Error::InvalidDateTimeFormat
                })
            }
            _ => {
                trace!("date-time rejected: {} 'T' designators", parts.len() - 1);
                Err(Error::InvalidDateTimeFormat)
            }
        }
    }

    /// Parse from a string. See [`DateTime::from_iso_bytes`].
    #[inline]
    pub fn from_iso_str(s: &str) -> Result<Self, Error> {
        Self::from_iso_bytes(s.as_bytes())
    }

    // ── chrono interop ────────────────────────────────────────────────

    /// Convert to a `chrono::NaiveDateTime`, normalising first.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let canonical = self.checked_normalize()?;
        Some(NaiveDateTime::new(
            canonical.date.into(),
            canonical.time.to_naive()?,
        ))
    }

    /// Interpret this value as UTC.
    pub fn to_utc(&self) -> Option<chrono::DateTime<Utc>> {
        self.to_naive()
            .map(|naive| chrono::DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
    }

    /// The UTC wall-clock reading of a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: chrono::DateTime<Utc>) -> Self {
        Self::from(datetime.naive_utc())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso_str(s)
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_nanos_since_epoch()
            .cmp(&other.to_nanos_since_epoch())
            .then_with(|| self.date.cmp(&other.date))
            .then_with(|| self.time.cmp(&other.time))
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<Duration> for DateTime {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.add_duration(rhs)
    }
}

impl Add<DateTime> for Duration {
    type Output = DateTime;
    #[inline]
    fn add(self, rhs: DateTime) -> Self::Output {
        rhs.add_duration(self)
    }
}

impl Sub<Duration> for DateTime {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        self.sub_duration(rhs)
    }
}

impl From<NaiveDateTime> for DateTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime.date().into(), datetime.time().into())
    }
}

#[cfg(feature = "serde")]
impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateTime {
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

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::Arbitrary;

    fn dt(y: i32, mo: u32, d: u32, h: i8, mi: u8, s: u8, ns: u32) -> DateTime {
        DateTime::from_ymdhmsn(y, mo, d, h, mi, s, ns).unwrap()
    }

    fn parse(s: &str) -> Result<DateTime, Error> {
        DateTime::from_iso_str(s)
    }

    impl Arbitrary for DateTime {
        fn arbitrary(g: &mut quickcheck::Gen) -> DateTime {
            let days = i64::from(i32::arbitrary(g) % 1_000_000);
            DateTime::new(Date::UNIX_EPOCH.add_days(days), Time::arbitrary(g))
        }
    }

    // ── epoch conversion ──────────────────────────────────────────────

    #[test]
    fn unix_epoch_is_zero() {
        assert_eq!(DateTime::UNIX_EPOCH.to_nanos_since_epoch(), 0);
        assert_eq!(DateTime::from_nanos_since_epoch(0), Some(DateTime::UNIX_EPOCH));
        assert_eq!(DateTime::default(), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn nanos_since_epoch_handles_negative_totals() {
        let before = dt(1969, 12, 31, 23, 59, 59, 999_999_999);
        assert_eq!(before.to_nanos_since_epoch(), -1);
        assert_eq!(DateTime::from_nanos_since_epoch(-1), Some(before));

        let day = i128::from(NANOS_PER_DAY);
        assert_eq!(
            DateTime::from_nanos_since_epoch(-day),
            Some(dt(1969, 12, 31, 0, 0, 0, 0))
        );
        assert_eq!(
            DateTime::from_nanos_since_epoch(-day - 1),
            Some(dt(1969, 12, 30, 23, 59, 59, 999_999_999))
        );
        assert_eq!(DateTime::from_nanos_since_epoch(i128::MAX), None);
    }

    #[test]
    fn non_canonical_hours_count_toward_the_epoch_offset() {
        let carried = DateTime::new(Date::UNIX_EPOCH, Time::from_hms(-1, 0, 0).unwrap());
        assert_eq!(carried.to_nanos_since_epoch(), -i128::from(NANOS_PER_HOUR));
    }

    // ── normalisation ─────────────────────────────────────────────────

    #[test]
    fn normalize_carries_hours_into_the_date() {
        let date = Date::from_ymd(2020, 1, 1).unwrap();
        let late = DateTime::new(date, Time::from_hms(24, 0, 0).unwrap());
        assert_eq!(late.normalize(), dt(2020, 1, 2, 0, 0, 0, 0));

        let early = DateTime::new(date, Time::from_hmsn(-1, 30, 0, 5).unwrap());
        assert_eq!(early.normalize(), dt(2019, 12, 31, 23, 30, 0, 5));

        let far = DateTime::new(date, Time::from_hms(100, 0, 0).unwrap());
        assert_eq!(far.normalize(), dt(2020, 1, 5, 4, 0, 0, 0));

        let canonical = dt(2020, 6, 15, 12, 0, 0, 0);
        assert_eq!(canonical.normalize(), canonical);
    }

    // ── arithmetic ────────────────────────────────────────────────────

    #[test]
    fn sub_day_addition_carries_days() {
        let start = dt(2020, 2, 28, 23, 0, 0, 0);
        assert_eq!(start.add_hours(2), dt(2020, 2, 29, 1, 0, 0, 0));
        assert_eq!(start.add_minutes(60), dt(2020, 2, 29, 0, 0, 0, 0));
        assert_eq!(start.add_seconds(-82_800), dt(2020, 2, 28, 0, 0, 0, 0));
        assert_eq!(
            start.add_nanoseconds(-1),
            dt(2020, 2, 28, 22, 59, 59, 999_999_999)
        );
        assert_eq!(
            dt(2020, 3, 1, 0, 0, 0, 0).add_hours(-49),
            dt(2020, 2, 27, 23, 0, 0, 0)
        );
        assert_eq!(start.add_hours(24 * 400), dt(2021, 4, 3, 23, 0, 0, 0));
    }

    #[test]
    fn large_unit_deltas_scale_without_wrapping() {
        let epoch = DateTime::UNIX_EPOCH;
        let seconds = epoch.add_seconds(10_000_000_000);
        assert_eq!(seconds, epoch + Duration::from_seconds(10_000_000_000));
        assert_eq!(seconds, dt(2286, 11, 20, 17, 46, 40, 0));

        assert_eq!(
            epoch.add_hours(3_000_000),
            epoch + Duration::from_hours(3_000_000)
        );
        assert_eq!(
            epoch.add_minutes(-2_000_000_000),
            epoch - Duration::from_seconds(120_000_000_000)
        );
        assert_eq!(epoch.checked_add_nanoseconds(i128::MAX), None);
    }

    #[test]
    #[should_panic(expected = "date-time out of representable range")]
    fn unit_addition_past_the_calendar_panics() {
        let _ = DateTime::UNIX_EPOCH.add_seconds(i64::MAX);
    }

    #[test]
    fn calendar_addition_leaves_time_alone() {
        let start = dt(2020, 1, 31, 12, 34, 56, 7);
        assert_eq!(start.add_days(1), dt(2020, 2, 1, 12, 34, 56, 7));
        assert_eq!(start.add_months(1), dt(2020, 2, 29, 12, 34, 56, 7));
        assert_eq!(start.add_years(-1), dt(2019, 1, 31, 12, 34, 56, 7));
    }

    #[test]
    fn duration_addition_rolls_over_non_leap_year() {
        let later = DateTime::UNIX_EPOCH + Duration::from_days(365);
        assert_eq!(later, dt(1971, 1, 1, 0, 0, 0, 0));
        assert_eq!(Duration::from_days(365) + DateTime::UNIX_EPOCH, later);
        assert_eq!(later - Duration::from_days(365), DateTime::UNIX_EPOCH);
        assert_eq!(
            DateTime::UNIX_EPOCH - Duration::from_nanoseconds(1).unwrap(),
            dt(1969, 12, 31, 23, 59, 59, 999_999_999)
        );
        assert_eq!(
            DateTime::UNIX_EPOCH.checked_add_duration(Duration::from_seconds(i64::MAX)),
            None
        );
    }

    // ── ISO 8601 ──────────────────────────────────────────────────────

    #[test]
    fn formatting_joins_date_and_time() {
        assert_eq!(DateTime::UNIX_EPOCH.to_iso_string(), "1970-01-01T00:00:00");
        let value = dt(2024, 3, 1, 12, 30, 45, 500_000_000);
        assert_eq!(value.to_iso_string(), "2024-03-01T12:30:45,5");
        assert_eq!(value.to_iso_bytes(), value.to_iso_string().into_bytes());
        assert_eq!(value.to_string(), "2024-03-01T12:30:45,5");
    }

    #[test]
    fn parses_date_only_as_midnight() {
        assert_eq!(parse("2024-03-01"), Ok(dt(2024, 3, 1, 0, 0, 0, 0)));
        assert_eq!(parse("2024-W09-5"), Ok(dt(2024, 3, 1, 0, 0, 0, 0)));
    }

    #[test]
    fn parses_date_and_time_in_any_accepted_form() {
        let expected = dt(2024, 3, 1, 12, 30, 45, 0);
        for s in [
            "2024-03-01T12:30:45",
            "20240301T123045",
            "2024-061T12:30:45Z",
            "2024-03-01T13:30:45+01:00",
            "2024-03-01T07:30:45-0500",
        ] {
            assert_eq!(parse(s), Ok(expected), "{s}");
        }
        assert_eq!(
            parse("2024-03-01T12:30:45,000000005"),
            Ok(dt(2024, 3, 1, 12, 30, 45, 5))
        );
    }

    #[test]
    fn end_of_day_midnight_rolls_into_the_next_date() {
        assert_eq!(parse("2020-12-31T24:00:00"), Ok(dt(2021, 1, 1, 0, 0, 0, 0)));
    }

    #[test]
    fn offsets_crossing_midnight_adjust_the_date() {
        assert_eq!(
            parse("2020-01-01T00:30+01:00"),
            Ok(dt(2019, 12, 31, 23, 30, 0, 0))
        );
        assert_eq!(
            parse("2020-12-31T23:30-01:00"),
            Ok(dt(2021, 1, 1, 0, 30, 0, 0))
        );
        assert_eq!(
            parse("2024-03-01T01:00:00+14:00"),
            Ok(dt(2024, 2, 29, 11, 0, 0, 0))
        );
    }

    #[test]
    fn malformed_input_is_rejected_uniformly() {
        for s in [
            "",
            "T12:00",
            "2024-03-01T",
            "2024-03-01T12:00T",
            "2024-03-01TT12:00",
            "2024-13-01T12:00",
            "2024-03-01T25:00",
            "2024-03-01T12:00+01:00Z",
            "2024-03-01T12:00+15:00",
            "2024-03-01 12:00",
            "2024-03-01T12:00\u{00e9}",
        ] {
            assert_eq!(parse(s), Err(Error::InvalidDateTimeFormat), "{s:?}");
        }
    }

    #[test]
    fn parse_near_calendar_end_does_not_panic() {
        let last = NaiveDateTime::MAX.date();
        let s = format!("{}T24:00", Date::from(last));
        assert_eq!(parse(&s), Err(Error::InvalidDateTimeFormat));
    }

    // ── ordering ──────────────────────────────────────────────────────

    #[test]
    fn ordering_follows_the_instant() {
        let date = Date::from_ymd(2020, 1, 1).unwrap();
        let late = DateTime::new(date, Time::from_hms(25, 0, 0).unwrap());
        let next = dt(2020, 1, 2, 0, 0, 0, 0);
        assert!(late > next);
        assert!(late.normalize() > next);

        let carried = DateTime::new(date, Time::from_hms(24, 0, 0).unwrap());
        assert_ne!(carried, next);
        assert_eq!(carried.to_nanos_since_epoch(), next.to_nanos_since_epoch());
        assert!(carried < next);
    }

    // ── chrono interop ────────────────────────────────────────────────

    #[test]
    fn chrono_roundtrip() {
        let value = dt(2024, 3, 1, 12, 30, 45, 123);
        let naive = value.to_naive().unwrap();
        assert_eq!(DateTime::from(naive), value);

        let utc = value.to_utc().unwrap();
        assert_eq!(utc.timestamp(), 1_709_296_245);
        assert_eq!(DateTime::from_utc(utc), value);

        let carried = DateTime::new(value.date(), Time::from_hms(24, 0, 0).unwrap());
        assert_eq!(
            DateTime::from(carried.to_naive().unwrap()),
            dt(2024, 3, 2, 0, 0, 0, 0)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_iso_strings() {
        let value = dt(2024, 3, 1, 12, 30, 45, 0);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"2024-03-01T12:30:45\"");
        let back: DateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    // ── properties ────────────────────────────────────────────────────

    quickcheck::quickcheck! {
        fn prop_nanos_roundtrip(value: DateTime) -> bool {
            DateTime::from_nanos_since_epoch(value.to_nanos_since_epoch()) == Some(value)
        }

        fn prop_iso_roundtrip(value: DateTime) -> bool {
            DateTime::from_iso_str(&value.to_iso_string()) == Ok(value)
        }

        fn prop_normalize_is_idempotent(value: DateTime, shift: i8) -> bool {
            let carried = DateTime::new(value.date(), value.time().add_hours(i64::from(shift % 64)));
            let once = carried.normalize();
            once.normalize() == once
                && value.normalize() == value
                && once.to_nanos_since_epoch() == carried.to_nanos_since_epoch()
        }

        fn prop_hours_and_duration_agree(value: DateTime, hours: i16) -> bool {
            let via_hours = value.add_hours(i64::from(hours));
            let via_duration = value + Duration::from_hours(i32::from(hours));
            via_hours == via_duration
        }

        fn prop_ordering_matches_nanos(a: DateTime, b: DateTime, shift: i8) -> bool {
            let a = DateTime::new(a.date(), a.time().add_hours(i64::from(shift % 64)));
            let by_nanos = a.to_nanos_since_epoch().cmp(&b.to_nanos_since_epoch());
            by_nanos == Ordering::Equal || a.cmp(&b) == by_nanos
        }
    }
}
