// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sort orders and grouping for list, calendar and map presentation.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::models::marker::Marker;
use crate::models::occurrence::Occurrence;
use crate::models::race::RaceRecord;
use crate::models::session::SessionRecord;

/// Primary session order: weekday (Monday first, unknown last), then start time.
pub fn compare_sessions(a: &SessionRecord, b: &SessionRecord) -> Ordering {
    a.weekday_time().sort_key().cmp(&b.weekday_time().sort_key())
}

/// Race list order: by start date, undated ("TBA") races last, then by name.
pub fn compare_races_by_start(a: &RaceRecord, b: &RaceRecord) -> Ordering {
    match (a.start_date.as_deref(), b.start_date.as_deref()) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| compare_races_by_name(a, b))
}

/// Name order within a calendar day; unnamed races compare as "".
pub fn compare_races_by_name(a: &RaceRecord, b: &RaceRecord) -> Ordering {
    a.name.cmp(&b.name)
}

pub fn sort_sessions(sessions: &mut [&SessionRecord]) {
    sessions.sort_by(|a, b| compare_sessions(a, b));
}

pub fn sort_races(races: &mut [&RaceRecord]) {
    races.sort_by(|a, b| compare_races_by_start(a, b));
}

/// Group occurrences by calendar day; each day is ordered by start time
/// (lexical `HH:MM`, untimed first).
pub fn group_by_day<'a, I>(occurrences: I) -> BTreeMap<NaiveDate, Vec<Occurrence<'a>>>
where
    I: IntoIterator<Item = Occurrence<'a>>,
{
    let mut days: BTreeMap<NaiveDate, Vec<Occurrence<'a>>> = BTreeMap::new();
    for occurrence in occurrences {
        days.entry(occurrence.starts_at.date())
            .or_default()
            .push(occurrence);
    }
    for items in days.values_mut() {
        items.sort_by_key(|o| o.session.weekday_time().start_time);
    }
    days
}

/// One marker per exact coordinate, in order of first appearance.
///
/// Coordinates are matched bit-for-bit; no rounding or clustering.
/// Sessions without a coordinate are left off the map.
pub fn group_by_coordinate<'a, I>(sessions: I) -> Vec<Marker<'a>>
where
    I: IntoIterator<Item = &'a SessionRecord>,
{
    let mut index: HashMap<(u64, u64), usize> = HashMap::new();
    let mut markers: Vec<Marker<'a>> = Vec::new();

    for session in sessions {
        let (Some(lat), Some(lon)) = (session.lat, session.lon) else {
            continue;
        };
        let slot = *index.entry((lat.to_bits(), lon.to_bits())).or_insert_with(|| {
            markers.push(Marker {
                lat,
                lon,
                items: Vec::new(),
            });
            markers.len() - 1
        });
        markers[slot].items.push(session);
    }

    for marker in &mut markers {
        sort_sessions(&mut marker.items);
    }
    markers
}
