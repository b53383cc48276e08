// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar grid types.

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Half-open day range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Last day inside the range.
    pub fn last_day(&self) -> Option<NaiveDate> {
        if self.is_empty() {
            return None;
        }
        self.end.checked_sub_days(Days::new(1))
    }

    /// Every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|d| *d < self.end)
    }
}

/// One square of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(ts_rs::TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Whether the date belongs to the displayed month (display dimming only).
    pub in_month: bool,
}

/// The 6x7 Monday-first grid for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Day range covered by the grid.
    pub fn range(&self) -> Option<DateRange> {
        let first = self.cells.first()?.date;
        let last = self.cells.last()?.date;
        Some(DateRange::new(first, last.checked_add_days(Days::new(1))?))
    }
}

/// A grid cell with the items placed on its date.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay<T> {
    pub date: NaiveDate,
    pub in_month: bool,
    pub items: Vec<T>,
}

/// A filled month grid.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarView<T> {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay<T>>,
}
