// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Expansion of weekly sessions into dated occurrences.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::calendar::DateRange;
use crate::models::occurrence::Occurrence;
use crate::models::session::SessionRecord;

const DAYS_PER_WEEK: u64 = 7;

/// Every occurrence of `sessions` inside `range`, ascending by start.
///
/// Sessions whose weekday name is not recognized produce nothing. Equal
/// start instants keep their input order.
pub fn expand_occurrences<'a, I>(sessions: I, range: DateRange) -> Vec<Occurrence<'a>>
where
    I: IntoIterator<Item = &'a SessionRecord>,
{
    let mut occurrences = Vec::new();
    let mut skipped = 0usize;

    for session in sessions {
        let slot = session.weekday_time();
        let Some(weekday) = slot.weekday else {
            skipped += 1;
            continue;
        };
        let time = slot.clock();

        let mut date = first_on_or_after(range.start, weekday);
        while let Some(day) = date.filter(|d| *d < range.end) {
            occurrences.push(Occurrence::new(day.and_time(time), session));
            date = day.checked_add_days(Days::new(DAYS_PER_WEEK));
        }
    }

    occurrences.sort_by_key(|o| o.starts_at);

    tracing::debug!(
        start = %range.start,
        end = %range.end,
        occurrences = occurrences.len(),
        skipped,
        "Expanded sessions"
    );
    occurrences
}

/// First date on or after `start` that falls on `weekday`.
fn first_on_or_after(start: NaiveDate, weekday: chrono::Weekday) -> Option<NaiveDate> {
    let from = u64::from(start.weekday().num_days_from_monday());
    let to = u64::from(weekday.num_days_from_monday());
    let offset = (to + DAYS_PER_WEEK - from) % DAYS_PER_WEEK;
    start.checked_add_days(Days::new(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session(id: &str, weekday: &str, start_time: Option<&str>) -> SessionRecord {
        serde_json::from_value(json!({"id": id, "weekday": weekday, "start_time": start_time}))
            .unwrap()
    }

    #[test]
    fn test_first_on_or_after() {
        // 2024-01-01 is a Monday
        assert_eq!(first_on_or_after(date(2024, 1, 1), Weekday::Mon), Some(date(2024, 1, 1)));
        assert_eq!(first_on_or_after(date(2024, 1, 1), Weekday::Wed), Some(date(2024, 1, 3)));
        assert_eq!(first_on_or_after(date(2024, 1, 4), Weekday::Wed), Some(date(2024, 1, 10)));
    }

    #[test]
    fn test_missing_time_defaults_to_midnight() {
        let s = session("a", "monday", None);
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 8));
        let occurrences = expand_occurrences([&s], range);
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].starts_at, date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_unknown_weekday_skipped() {
        let s = session("a", "someday", Some("18:00"));
        let range = DateRange::new(date(2024, 1, 1), date(2024, 2, 1));
        assert!(expand_occurrences([&s], range).is_empty());
    }

    #[test]
    fn test_merged_output_sorted_by_instant() {
        let evening = session("evening", "monday", Some("19:00"));
        let morning = session("morning", "tuesday", Some("06:30"));
        let early = session("early", "monday", Some("06:00"));
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 8));
        let ids: Vec<_> = expand_occurrences([&evening, &morning, &early], range)
            .into_iter()
            .map(|o| o.session.id.as_str())
            .collect();
        assert_eq!(ids, vec!["early", "evening", "morning"]);
    }

    #[test]
    fn test_empty_range_yields_nothing() {
        let s = session("a", "monday", Some("18:00"));
        let range = DateRange::new(date(2024, 1, 8), date(2024, 1, 1));
        assert!(expand_occurrences([&s], range).is_empty());
    }
}
