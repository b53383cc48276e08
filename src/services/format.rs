// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display strings and list items for the presentation layer.

use crate::models::locale::Locale;
use crate::models::occurrence::Occurrence;
use crate::models::race::{Course, RaceRecord};
use crate::models::session::SessionRecord;
use crate::models::view::{RaceListItem, SessionListItem};
use crate::services::normalize::{
    format_distances, maps_url, pace_groups, resolve_external_links, zip_courses,
};

const COURSE_SEPARATOR: &str = " · ";

fn format_course(course: &Course) -> String {
    match course.elevation_gain_m {
        Some(gain) => format!("{} km (+{} m)", course.distance_km, gain),
        None => format!("{} km", course.distance_km),
    }
}

/// Courses joined with `" · "`, showing at most `max_items` and ending in
/// `"+N more"` when some were left out.
pub fn format_courses_line(race: &RaceRecord, max_items: usize, locale: Locale) -> String {
    let courses = zip_courses(race);
    let shown: Vec<String> = courses.iter().take(max_items).map(format_course).collect();
    let hidden = courses.len() - shown.len();

    let mut line = shown.join(COURSE_SEPARATOR);
    if hidden > 0 {
        if !line.is_empty() {
            line.push_str(COURSE_SEPARATOR);
        }
        line.push_str(&format!("+{} {}", hidden, locale.labels().more));
    }
    line
}

/// `"Date TBA"`, `"2024-03-01"` or `"2024-03-01 – 2024-03-03"`.
pub fn format_race_date_range(race: &RaceRecord, locale: Locale) -> String {
    match (race.start_date.as_deref(), race.end_date.as_deref()) {
        (None, _) => locale.labels().date_tba.to_string(),
        (Some(start), Some(end)) if end != start => format!("{} – {}", start, end),
        (Some(start), _) => start.to_string(),
    }
}

/// `"18:30"` or `"18:30–19:30"` when the duration is known.
pub fn format_time_range(occurrence: &Occurrence<'_>) -> String {
    let start = occurrence.starts_at.format("%H:%M");
    match occurrence.ends_at() {
        Some(end) => format!("{}–{}", start, end.format("%H:%M")),
        None => start.to_string(),
    }
}

pub fn session_list_item(session: &SessionRecord, locale: Locale) -> SessionListItem<'_> {
    SessionListItem {
        session,
        weekday_label: session
            .weekday_time()
            .weekday
            .map(|day| locale.weekday_label(day)),
        distances: format_distances(session),
        pace_groups: pace_groups(session),
        links: resolve_external_links(session).labeled(locale),
        maps_url: session
            .coordinate()
            .map(|point| maps_url(point.y(), point.x())),
    }
}

pub fn race_list_item(race: &RaceRecord, max_courses: usize, locale: Locale) -> RaceListItem<'_> {
    RaceListItem {
        race,
        date_range: format_race_date_range(race, locale),
        courses: zip_courses(race),
        courses_line: format_courses_line(race, max_courses, locale),
        links: resolve_external_links(race).labeled(locale),
    }
}
