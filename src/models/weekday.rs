// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekday + time-of-day value shared by every comparator and the expander.

use chrono::{NaiveTime, Weekday};

use crate::time_utils::parse_clock;

/// Sort rank for a weekday name that is not one of the seven known names.
pub const UNKNOWN_WEEKDAY_RANK: u8 = 99;

const WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Parse a full English weekday name (case-insensitive).
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let name = name.trim();
    WEEKDAY_NAMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, day)| *day)
}

/// Dataset name for a weekday (`"monday"` ... `"sunday"`).
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize].0
}

/// A session's recurrence slot: the weekday it meets on and its raw start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayTime<'a> {
    pub weekday: Option<Weekday>,
    /// Raw `HH:MM` start time, empty when absent.
    pub start_time: &'a str,
}

impl<'a> WeekdayTime<'a> {
    pub fn parse(weekday: &str, start_time: Option<&'a str>) -> Self {
        Self {
            weekday: parse_weekday(weekday),
            start_time: start_time.unwrap_or(""),
        }
    }

    /// Monday=0 .. Sunday=6, unknown weekdays last.
    pub fn rank(&self) -> u8 {
        self.weekday
            .map(|d| d.num_days_from_monday() as u8)
            .unwrap_or(UNKNOWN_WEEKDAY_RANK)
    }

    /// Comparison key: weekday rank, then the start time compared lexically.
    ///
    /// Lexical order is only correct for zero-padded `HH:MM` values; an
    /// absent time sorts first.
    pub fn sort_key(&self) -> (u8, &'a str) {
        (self.rank(), self.start_time)
    }

    /// Clock time the session starts at, midnight when unknown.
    pub fn clock(&self) -> NaiveTime {
        let raw = (!self.start_time.is_empty()).then_some(self.start_time);
        parse_clock(raw)
    }

    /// The `HH` prefix of the start time, used by the hour filter.
    pub fn hour_prefix(&self) -> Option<&'a str> {
        self.start_time.get(..2)
    }
}
