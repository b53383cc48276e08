// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field normalization over the three distance encodings and link shapes.

use run_directory::models::{Course, Locale};
use run_directory::services::format::{format_courses_line, race_list_item, session_list_item};
use run_directory::services::{
    extract_distances, format_distances, resolve_external_links, zip_courses,
};
use serde_json::json;

mod common;
use common::{race, session};

#[test]
fn test_three_encodings_agree() {
    let list = session(json!({"id": "a", "distances_km": [5, 10]}));
    let delimited = session(json!({"id": "b", "distances_km": "5, 10"}));
    let scalar = session(json!({"id": "c", "distance_km": 5}));

    assert_eq!(extract_distances(&list), vec![5.0, 10.0]);
    assert_eq!(extract_distances(&delimited), vec![5.0, 10.0]);
    assert_eq!(extract_distances(&scalar), vec![5.0]);
    assert_eq!(format_distances(&list), "5 / 10 km");
    assert_eq!(format_distances(&delimited), format_distances(&list));
}

#[test]
fn test_delimited_round_trip_is_idempotent() {
    for distances in [json!([21.1, 5, 5, 10]), json!("8;3.5;12"), json!(7), json!([])] {
        let original = session(json!({"id": "a", "distances_km": distances}));
        let first = extract_distances(&original);
        let encoded: Vec<String> = first.iter().map(|d| d.to_string()).collect();
        let reparsed = session(json!({"id": "a", "distances_km": encoded.join(";")}));
        assert_eq!(extract_distances(&reparsed), first);
    }
}

#[test]
fn test_instagram_source_rendered_once() {
    let s = session(json!({
        "id": "a",
        "source_url": "https://www.instagram.com/seebach.runners/#",
        "instagram_url": "https://www.instagram.com/seebach.runners"
    }));
    let links = resolve_external_links(&s);
    assert!(links.primary_is_instagram);

    let item = session_list_item(&s, Locale::En);
    assert_eq!(item.links.len(), 1);
    assert_eq!(item.links[0].label, "Instagram");
}

#[test]
fn test_different_links_rendered_twice() {
    let s = session(json!({
        "id": "a",
        "source_url": "https://lakeside.example.ch/runs",
        "instagram_url": "https://www.instagram.com/lakeside"
    }));
    let item = session_list_item(&s, Locale::En);
    let labels: Vec<_> = item.links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Source", "Instagram"]);
}

#[test]
fn test_course_pairing() {
    let r = race(json!({"id": "r", "distances_km": [5, 10, 21], "elevation_gain_m": [100, 250]}));
    assert_eq!(
        zip_courses(&r),
        vec![
            Course {
                distance_km: 5.0,
                elevation_gain_m: Some(100.0)
            },
            Course {
                distance_km: 10.0,
                elevation_gain_m: Some(250.0)
            },
            Course {
                distance_km: 21.0,
                elevation_gain_m: None
            },
        ]
    );
    assert_eq!(
        format_courses_line(&r, 3, Locale::En),
        "5 km (+100 m) · 10 km (+250 m) · 21 km"
    );
}

#[test]
fn test_race_list_item() {
    let r = race(json!({
        "id": "r",
        "name": "Uto Trail Days",
        "start_date": "2026-10-16",
        "end_date": "2026-10-18",
        "distances_km": [12, 24, 48],
        "elevation_gain_m": [500, 1100],
        "website": "https://www.instagram.com/utotraildays/"
    }));
    let item = race_list_item(&r, 2, Locale::De);
    assert_eq!(item.date_range, "2026-10-16 – 2026-10-18");
    assert_eq!(item.courses_line, "12 km (+500 m) · 24 km (+1100 m) · +1 weitere");
    assert_eq!(item.courses.len(), 3);
    assert_eq!(item.links.len(), 1);
}
