// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! Parsing is deliberately opaque: [`Error`] carries one tag per value type
//! and nothing else. Enable the `logging` feature to get a `trace`-level line
//! describing why a particular input was rejected.

use thiserror::Error;

/// Failure to parse a [`Time`](crate::Time) or [`DateTime`](crate::DateTime).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The input is not an accepted ISO 8601 time of day.
    #[error("invalid time format")]
    InvalidTimeFormat,
    /// The input is not an accepted ISO 8601 date or date-time.
    #[error("invalid date-time format")]
    InvalidDateTimeFormat,
}

/// Failure to parse a [`Date`](crate::Date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("invalid date format")]
pub struct DateFormatError;

/// A [`Duration`](crate::Duration) magnitude exceeded the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("duration out of range")]
pub struct DurationOverflow;
