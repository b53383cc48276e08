// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Placement of (possibly multi-day) races onto calendar days.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::calendar::DateRange;
use crate::models::race::RaceRecord;
use crate::services::grouping::compare_races_by_name;
use crate::time_utils::parse_iso_date;

/// Map each day in `range` to the races running on it, sorted by name.
///
/// A race covers `start_date..=end_date`; a missing, unparsable or
/// earlier-than-start end date makes it a single-day race. Races without
/// a parsable start date are not placed.
pub fn bucket_races<'a, I>(races: I, range: DateRange) -> BTreeMap<NaiveDate, Vec<&'a RaceRecord>>
where
    I: IntoIterator<Item = &'a RaceRecord>,
{
    let mut buckets: BTreeMap<NaiveDate, Vec<&'a RaceRecord>> = BTreeMap::new();

    for race in races {
        let Some(start) = race.start_date.as_deref().and_then(parse_iso_date) else {
            continue;
        };
        let end = race
            .end_date
            .as_deref()
            .and_then(parse_iso_date)
            .filter(|end| *end >= start)
            .unwrap_or(start);

        let first = start.max(range.start);
        for day in first.iter_days().take_while(|d| *d <= end && *d < range.end) {
            buckets.entry(day).or_default().push(race);
        }
    }

    for bucket in buckets.values_mut() {
        bucket.sort_by(|a, b| compare_races_by_name(a, b));
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn race(value: serde_json::Value) -> RaceRecord {
        serde_json::from_value(value).unwrap()
    }

    fn march() -> DateRange {
        DateRange::new(date(2024, 2, 26), date(2024, 4, 8))
    }

    #[test]
    fn test_multi_day_race_spans_each_day() {
        let r = race(json!({"id": "r", "name": "Trail Days", "start_date": "2024-03-01", "end_date": "2024-03-03"}));
        let buckets = bucket_races([&r], march());
        let days: Vec<_> = buckets.keys().copied().collect();
        assert_eq!(days, vec![date(2024, 3, 1), date(2024, 3, 2), date(2024, 3, 3)]);
    }

    #[test]
    fn test_end_before_start_is_single_day() {
        let r = race(json!({"id": "r", "start_date": "2024-03-05", "end_date": "2024-03-01"}));
        let buckets = bucket_races([&r], march());
        assert_eq!(buckets.len(), 1);
        assert!(buckets.contains_key(&date(2024, 3, 5)));
    }

    #[test]
    fn test_undated_race_not_placed() {
        let r = race(json!({"id": "r", "start_date": "soon"}));
        assert!(bucket_races([&r], march()).is_empty());
    }

    #[test]
    fn test_clipped_to_range() {
        let r = race(json!({"id": "r", "start_date": "2024-02-20", "end_date": "2024-02-27"}));
        let days: Vec<_> = bucket_races([&r], march()).into_keys().collect();
        assert_eq!(days, vec![date(2024, 2, 26), date(2024, 2, 27)]);
    }

    #[test]
    fn test_bucket_sorted_by_name() {
        let b = race(json!({"id": "1", "name": "Zurich Marathon", "start_date": "2024-03-10"}));
        let a = race(json!({"id": "2", "name": "Albis Trail", "start_date": "2024-03-10"}));
        let unnamed = race(json!({"id": "3", "start_date": "2024-03-10"}));
        let buckets = bucket_races([&b, &a, &unnamed], march());
        let ids: Vec<_> = buckets[&date(2024, 3, 10)].iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }
}
