// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filtering and ordering through the loaded directory.

use chrono::Weekday;
use run_directory::models::{DistanceRange, FilterState, RaceType};
use run_directory::services::{filter_sessions, session_matches};
use serde_json::json;

mod common;
use common::{date, fixture_directory, session};

fn ids<'a>(
    items: impl IntoIterator<Item = &'a run_directory::models::SessionRecord>,
) -> Vec<&'a str> {
    items.into_iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn test_list_order_is_weekday_then_time() {
    let dir = fixture_directory();
    let all = dir.filtered_sessions(&FilterState::default());
    assert_eq!(
        ids(all),
        vec![
            "seebach-tue",
            "lakeside-wed",
            "oerlikon-thu",
            "seebach-sat",
            "uetliberg-sun"
        ]
    );
}

#[test]
fn test_inactive_never_visible() {
    let dir = fixture_directory();
    assert!(dir.sessions().iter().all(|s| s.id != "old-friday"));
    assert!(dir.club_options().iter().all(|c| c.slug != "closed-club"));
    // The inactive 50 km session must not stretch the slider
    assert_eq!(dir.distance_bounds().map(|b| b.max_km), Some(15.0));

    let inactive = session(json!({
        "id": "old",
        "club_slug": "closed-club",
        "weekday": "friday",
        "start_time": "18:00",
        "distances_km": [50],
        "active": false
    }));
    let clubs = [None, Some("closed-club".to_string())];
    let weekdays = [None, Some(Weekday::Fri)];
    let hours = [None, Some(18)];
    let ranges = [None, Some(DistanceRange::new(0.0, 100.0))];
    for club in &clubs {
        for weekday in &weekdays {
            for hour in &hours {
                for distance in &ranges {
                    let filter = FilterState {
                        club: club.clone(),
                        weekday: *weekday,
                        hour: *hour,
                        distance: *distance,
                        ..Default::default()
                    };
                    assert!(!session_matches(&inactive, &filter));
                    assert!(filter_sessions([&inactive], &filter).is_empty());
                }
            }
        }
    }
}

#[test]
fn test_filters_combine_with_and() {
    let dir = fixture_directory();
    let filter = FilterState {
        club: Some("seebach-runners".to_string()),
        weekday: Some(Weekday::Sat),
        ..Default::default()
    };
    assert_eq!(ids(dir.filtered_sessions(&filter)), vec!["seebach-sat"]);

    let filter = FilterState {
        club: Some("seebach-runners".to_string()),
        hour: Some(7),
        ..Default::default()
    };
    assert!(dir.filtered_sessions(&filter).is_empty());
}

#[test]
fn test_unknown_distance_passes_every_range() {
    let dir = fixture_directory();
    // oerlikon-thu has no distance at all
    for (min, max) in [(0.0, 100.0), (7.0, 7.0), (1.0, 1.0), (0.0, 0.0)] {
        let filter = FilterState {
            distance: Some(DistanceRange::new(min, max)),
            ..Default::default()
        };
        assert!(ids(dir.filtered_sessions(&filter)).contains(&"oerlikon-thu"));
    }
}

#[test]
fn test_up_to_filter_uses_dataset_minimum() {
    let dir = fixture_directory();
    let filter = FilterState {
        distance: Some(DistanceRange::up_to(8.0, dir.distance_bounds())),
        ..Default::default()
    };
    assert_eq!(
        ids(dir.filtered_sessions(&filter)),
        vec!["seebach-tue", "lakeside-wed", "oerlikon-thu"]
    );
}

#[test]
fn test_races_sorted_with_tba_last() {
    let dir = fixture_directory();
    let filter = FilterState {
        include_past: true,
        ..Default::default()
    };
    let races: Vec<_> = dir
        .filtered_races(&filter, date(2024, 3, 15))
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(
        races,
        vec![
            "winter-cup",
            "trail-weekend",
            "spring-classic",
            "end-of-month",
            "tba"
        ]
    );
}

#[test]
fn test_race_type_and_past_filters() {
    let dir = fixture_directory();
    let city = FilterState {
        race_type: Some(RaceType::City),
        include_past: true,
        ..Default::default()
    };
    let races: Vec<_> = dir
        .filtered_races(&city, date(2024, 3, 15))
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(races, vec!["winter-cup", "spring-classic"]);

    let upcoming: Vec<_> = dir
        .filtered_races(&FilterState::default(), date(2024, 3, 2))
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(upcoming, vec!["trail-weekend", "spring-classic", "end-of-month"]);
}

#[test]
fn test_markers_merge_identical_coordinates() {
    let dir = fixture_directory();
    let markers = dir.markers(&FilterState::default());
    assert_eq!(markers.len(), 3);

    let seebach = markers
        .iter()
        .find(|m| m.lat == 47.4196 && m.lon == 8.5449)
        .expect("Seebach marker");
    assert_eq!(ids(seebach.items.iter().copied()), vec!["seebach-tue", "seebach-sat"]);
}
