// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::NaiveDate;
use run_directory::models::{RaceRecord, SessionRecord};
use run_directory::Directory;

/// Load the fixture datasets.
#[allow(dead_code)]
pub fn fixture_directory() -> Directory {
    Directory::load_from_files("tests/fixtures/sessions.json", "tests/fixtures/races.json")
        .expect("Failed to load fixture datasets")
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[allow(dead_code)]
pub fn session(value: serde_json::Value) -> SessionRecord {
    serde_json::from_value(value).expect("Failed to parse session")
}

#[allow(dead_code)]
pub fn race(value: serde_json::Value) -> RaceRecord {
    serde_json::from_value(value).expect("Failed to parse race")
}
