// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field normalization: distances, courses and external links.

use url::Url;

use crate::models::links::{ExternalLinks, LinkSource};
use crate::models::race::{Course, RaceRecord};
use crate::models::session::SessionRecord;

const INSTAGRAM_HOST_MARKER: &str = "instagram.com";

impl LinkSource for SessionRecord {
    fn primary_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    fn instagram_url(&self) -> Option<&str> {
        self.instagram_url.as_deref()
    }
}

impl LinkSource for RaceRecord {
    fn primary_url(&self) -> Option<&str> {
        self.website.as_deref()
    }

    fn instagram_url(&self) -> Option<&str> {
        self.instagram_url.as_deref()
    }
}

/// Canonical distance list of a session, in kilometers.
pub fn extract_distances(record: &SessionRecord) -> Vec<f64> {
    record.distance.kilometers()
}

/// `"5 / 10 km"`, or an empty string when the session has no distances.
pub fn format_distances(record: &SessionRecord) -> String {
    format_km_list(&extract_distances(record))
}

pub(crate) fn format_km_list(distances: &[f64]) -> String {
    if distances.is_empty() {
        return String::new();
    }
    let joined: Vec<String> = distances.iter().map(|d| d.to_string()).collect();
    format!("{} km", joined.join(" / "))
}

/// Resolve a record's primary and Instagram links.
///
/// The Instagram link falls back to the primary link when that one points
/// at instagram.com.
pub fn resolve_external_links<R: LinkSource + ?Sized>(record: &R) -> ExternalLinks {
    let primary = record.primary_url();
    let instagram = record
        .instagram_url()
        .or_else(|| primary.filter(|url| url.contains(INSTAGRAM_HOST_MARKER)));

    let primary_is_instagram = match (primary, instagram) {
        (Some(p), Some(i)) => same_link(p, i),
        _ => false,
    };

    ExternalLinks {
        primary_url: primary.map(str::to_string),
        instagram_url: instagram.map(str::to_string),
        primary_is_instagram,
    }
}

/// Whether two URLs point at the same page, ignoring the fragment and one
/// trailing slash.
pub fn same_link(a: &str, b: &str) -> bool {
    normalize_link(a) == normalize_link(b)
}

fn normalize_link(raw: &str) -> String {
    let trimmed = raw.trim();
    match Url::parse(trimmed) {
        Ok(mut url) => {
            url.set_fragment(None);
            if let Some(stripped) = url.path().strip_suffix('/').map(str::to_string) {
                url.set_path(&stripped);
            }
            url.to_string()
        }
        Err(_) => trimmed.to_string(),
    }
}

/// Pair each course distance with its elevation gain.
///
/// Pairing uses the original list positions, so a non-numeric entry in
/// one list never shifts the other list's values onto the wrong course.
/// Distances past the end of the elevation list get no elevation.
pub fn zip_courses(race: &RaceRecord) -> Vec<Course> {
    race.distances_km
        .iter()
        .enumerate()
        .filter_map(|(i, distance)| {
            Some(Course {
                distance_km: (*distance)?,
                elevation_gain_m: race.elevation_gain_m.get(i).copied().flatten(),
            })
        })
        .collect()
}

/// Pace groups of a session (`"5:00; 5:30"` → `["5:00", "5:30"]`).
pub fn pace_groups(record: &SessionRecord) -> Vec<&str> {
    record
        .pace_groups_min_per_km
        .as_deref()
        .unwrap_or("")
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Google Maps link for a coordinate.
pub fn maps_url(lat: f64, lon: f64) -> String {
    format!("https://www.google.com/maps?q={},{}", lat, lon)
}
