// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed unit conversion factors shared by the time and date-time arithmetic.
//!
//! All values are `i64` so they can be used directly in the 64-bit
//! accumulators of [`Time`](crate::Time) and widened losslessly into the
//! 128-bit accumulators of [`DateTime`](crate::DateTime).

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Nanoseconds in one minute.
pub const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;

/// Nanoseconds in one hour.
pub const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;

/// Nanoseconds in one civil day (no leap seconds).
pub const NANOS_PER_DAY: i64 = HOURS_PER_DAY * NANOS_PER_HOUR;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Hours in one civil day.
pub const HOURS_PER_DAY: i64 = 24;
