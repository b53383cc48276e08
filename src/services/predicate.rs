// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record predicates for the active filter state.
//!
//! Every predicate is pure; a record is kept only when all of them pass.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::filter::{DistanceBounds, DistanceRange, FilterState};
use crate::models::race::RaceRecord;
use crate::models::session::SessionRecord;
use crate::models::view::ClubOption;
use crate::services::normalize::extract_distances;
use crate::time_utils::format_iso_date;

pub fn matches_club(session: &SessionRecord, filter: &FilterState) -> bool {
    filter
        .club
        .as_deref()
        .map_or(true, |club| session.club_slug == club)
}

pub fn matches_weekday(session: &SessionRecord, filter: &FilterState) -> bool {
    filter
        .weekday
        .map_or(true, |day| session.weekday_time().weekday == Some(day))
}

pub fn matches_hour(session: &SessionRecord, filter: &FilterState) -> bool {
    match filter.hour_prefix() {
        None => true,
        Some(hour) => session.weekday_time().hour_prefix() == Some(hour.as_str()),
    }
}

/// A record passes when it has no known distance, or when at least one
/// of its distances lies inside the range.
pub fn matches_distance(distances: &[f64], range: Option<&DistanceRange>) -> bool {
    match range {
        None => true,
        Some(_) if distances.is_empty() => true,
        Some(range) => distances.iter().any(|d| range.contains(*d)),
    }
}

/// Full session predicate. Inactive sessions never pass.
pub fn session_matches(session: &SessionRecord, filter: &FilterState) -> bool {
    session.active
        && matches_club(session, filter)
        && matches_weekday(session, filter)
        && matches_hour(session, filter)
        && matches_distance(&extract_distances(session), filter.distance.as_ref())
}

pub fn matches_race_type(race: &RaceRecord, filter: &FilterState) -> bool {
    filter.race_type.map_or(true, |t| race.race_type == t)
}

/// Races whose last day is before `today` are dropped unless past races
/// are included. Undated races only show with past races included.
pub fn matches_upcoming(race: &RaceRecord, filter: &FilterState, today: NaiveDate) -> bool {
    filter.include_past || race.last_day_key() >= format_iso_date(today).as_str()
}

pub fn race_matches(race: &RaceRecord, filter: &FilterState, today: NaiveDate) -> bool {
    matches_race_type(race, filter) && matches_upcoming(race, filter, today)
}

/// Sessions that pass the filter, in source order.
pub fn filter_sessions<'a, I>(sessions: I, filter: &FilterState) -> Vec<&'a SessionRecord>
where
    I: IntoIterator<Item = &'a SessionRecord>,
{
    let matched: Vec<_> = sessions
        .into_iter()
        .filter(|s| session_matches(s, filter))
        .collect();
    tracing::debug!(matched = matched.len(), ?filter, "Filtered sessions");
    matched
}

/// Races that pass the filter, in source order.
pub fn filter_races<'a, I>(races: I, filter: &FilterState, today: NaiveDate) -> Vec<&'a RaceRecord>
where
    I: IntoIterator<Item = &'a RaceRecord>,
{
    let matched: Vec<_> = races
        .into_iter()
        .filter(|r| race_matches(r, filter, today))
        .collect();
    tracing::debug!(matched = matched.len(), %today, "Filtered races");
    matched
}

/// Distinct clubs of the active sessions, sorted by name then slug.
pub fn club_options(sessions: &[SessionRecord]) -> Vec<ClubOption> {
    let unique: BTreeSet<(&str, &str)> = sessions
        .iter()
        .filter(|s| s.active && !s.club_slug.is_empty())
        .map(|s| (s.club_name.as_str(), s.club_slug.as_str()))
        .collect();
    unique
        .into_iter()
        .map(|(name, slug)| ClubOption {
            slug: slug.to_string(),
            name: name.to_string(),
        })
        .collect()
}

/// Distinct `HH` start hours of the active sessions, ascending.
pub fn hour_options(sessions: &[SessionRecord]) -> Vec<u8> {
    let hours: BTreeSet<u8> = sessions
        .iter()
        .filter(|s| s.active)
        .filter_map(|s| s.weekday_time().hour_prefix()?.parse().ok())
        .filter(|h| *h <= 23)
        .collect();
    hours.into_iter().collect()
}

/// Slider bounds: smallest and largest distance across the active sessions.
pub fn distance_bounds(sessions: &[SessionRecord]) -> Option<DistanceBounds> {
    sessions
        .iter()
        .filter(|s| s.active)
        .flat_map(extract_distances)
        .fold(None, |bounds: Option<DistanceBounds>, d| {
            Some(match bounds {
                None => DistanceBounds {
                    min_km: d,
                    max_km: d,
                },
                Some(b) => DistanceBounds {
                    min_km: b.min_km.min(d),
                    max_km: b.max_km.max(d),
                },
            })
        })
}
