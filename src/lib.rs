// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock time and date-time values.
//!
//! This crate provides nanosecond-precision civil time values together with
//! an ISO 8601 codec that accepts the usual surface syntaxes and always
//! prints the minimal canonical form.
//!
//! # Core types
//!
//! - [`Time`] — time of day; the hour may transiently leave `0..=23` to
//!   carry whole days out of arithmetic.
//! - [`DateTime`] — a [`Date`] paired with a [`Time`]; normalisation folds
//!   hour carries into the date.
//! - [`Date`] — proleptic Gregorian calendar date.
//! - [`Duration`] — signed, nanosecond-exact span used for shifting values.
//!
//! # ISO 8601
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `12`, `1230`, `12:30`, `123045`, `12:30:45` | basic / extended clock |
//! | `12:30:45,5`, `12:30.5`, `12.25` | fraction of the last component |
//! | `T…`, `…Z` | time designator, UTC designator |
//! | `…+01:00`, `…-0500`, `…+01` | UTC offset, subtracted on parse |
//! | `24:00:00` | midnight at the end of the day |
//!
//! ```rust
//! use walltime::{DateTime, Time};
//!
//! let t = Time::from_iso_str("12:00:00+01:00").unwrap();
//! assert_eq!(t.to_iso_string(), "11:00:00");
//!
//! let dt = DateTime::from_iso_str("2020-01-01T00:30+01:00").unwrap();
//! assert_eq!(dt.to_string(), "2019-12-31T23:30:00");
//! ```
//!
//! # Features
//!
//! - `serde` — (de)serialise [`Time`], [`DateTime`] and [`Date`] as ISO 8601
//!   strings.
//! - `logging` — emit `trace` records through the `log` crate explaining why
//!   an input was rejected.

#[macro_use]
mod logging;

pub mod constants;
mod date;
mod datetime;
mod duration;
mod error;
mod time;
mod util;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use date::Date;
pub use datetime::DateTime;
pub use duration::Duration;
pub use error::{DateFormatError, DurationOverflow, Error};
pub use time::Time;
