// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for naive (timezone-free) date and clock handling.
//!
//! Every date in the directory is local to the metro area, so nothing here
//! ever converts between timezones.

use chrono::{Local, NaiveDate, NaiveTime};

/// ISO calendar date format used by the datasets and by every day key.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT).ok()
}

/// Parse an `HH:MM` clock value.
///
/// Hour and minute each fall back to 0 when missing or unparsable; an
/// out-of-range result becomes midnight.
pub fn parse_clock(raw: Option<&str>) -> NaiveTime {
    let mut parts = raw.unwrap_or("").split(':');
    let mut component = || {
        parts
            .next()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(0)
    };
    let hour = component();
    let minute = component();
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Today's date on the local wall clock.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
