// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Month grid construction.

use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;

use crate::models::calendar::{CalendarCell, CalendarDay, CalendarView, MonthGrid};

/// Cells in a month grid: 6 weeks of 7 days.
pub const GRID_CELLS: usize = 42;

/// The Monday-first 42-day grid around the month containing `today`.
pub fn month_grid(today: NaiveDate) -> MonthGrid {
    let first_of_month = today - Days::new(u64::from(today.day0()));
    let lead = u64::from(first_of_month.weekday().num_days_from_monday());
    let grid_start = first_of_month - Days::new(lead);

    let cells = grid_start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarCell {
            date,
            in_month: date.year() == today.year() && date.month() == today.month(),
        })
        .collect();

    MonthGrid {
        year: today.year(),
        month: today.month(),
        cells,
    }
}

/// Put bucketed items into their cells. Out-of-month cells are filled too.
pub fn fill_grid<T>(grid: &MonthGrid, mut buckets: BTreeMap<NaiveDate, Vec<T>>) -> CalendarView<T> {
    let days = grid
        .cells
        .iter()
        .map(|cell| CalendarDay {
            date: cell.date,
            in_month: cell.in_month,
            items: buckets.remove(&cell.date).unwrap_or_default(),
        })
        .collect();

    CalendarView {
        year: grid.year,
        month: grid.month,
        days,
    }
}
