// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recurring community running session model.

use geo::Point;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::weekday::WeekdayTime;
use crate::value_utils::{coerce_number, identifier, non_blank, split_numbers};

/// Distance specification as found in the dataset.
///
/// Resolved once when a record is deserialized; `kilometers()` turns any
/// variant into the canonical list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DistanceSpec {
    /// Ordered list, already coerced to finite numbers.
    List(Vec<f64>),
    Scalar(f64),
    /// `;`/`,` delimited string, kept raw.
    Delimited(String),
    #[default]
    Unspecified,
}

impl DistanceSpec {
    /// Resolve the dataset's distance fields into one specification.
    ///
    /// A `distances_km` array wins, then a finite number in either field,
    /// then a string in either field.
    pub fn from_fields(list: Option<&Value>, scalar: Option<&Value>) -> Self {
        if let Some(Value::Array(items)) = list {
            return Self::List(items.iter().filter_map(coerce_number).collect());
        }
        let candidates = [list, scalar];
        let number = candidates.iter().flatten().find_map(|v| match v {
            Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
            _ => None,
        });
        if let Some(n) = number {
            return Self::Scalar(n);
        }
        let text = candidates.iter().flatten().find_map(|v| v.as_str());
        match text {
            Some(s) => Self::Delimited(s.to_string()),
            None => Self::Unspecified,
        }
    }

    /// Canonical distances in kilometers, source order, no deduplication.
    pub fn kilometers(&self) -> Vec<f64> {
        match self {
            Self::List(values) => values
                .iter()
                .copied()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .collect(),
            Self::Scalar(n) if n.is_finite() && *n >= 0.0 => vec![*n],
            Self::Scalar(_) | Self::Unspecified => Vec::new(),
            Self::Delimited(raw) => split_numbers(raw),
        }
    }
}

/// A weekly community running session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSessionRecord")]
pub struct SessionRecord {
    pub id: String,
    pub club_slug: String,
    pub club_name: String,
    /// Weekday name as written in the dataset (`"monday"` ... `"sunday"`).
    pub weekday: String,
    /// Local start time, `HH:MM`
    pub start_time: Option<String>,
    pub duration_min: Option<u32>,
    pub location_name: Option<String>,
    /// Latitude; always paired with `lon`.
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(rename = "distances_km")]
    pub distance: DistanceSpec,
    pub pace_groups_min_per_km: Option<String>,
    pub source_url: Option<String>,
    pub instagram_url: Option<String>,
    pub active: bool,
}

impl SessionRecord {
    /// Recurrence slot used for sorting and expansion.
    pub fn weekday_time(&self) -> WeekdayTime<'_> {
        WeekdayTime::parse(&self.weekday, self.start_time.as_deref())
    }

    /// Meeting point as a geographic point (x = lon, y = lat).
    pub fn coordinate(&self) -> Option<Point<f64>> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Point::new(lon, lat)),
            _ => None,
        }
    }
}

/// Wire shape of a session record before field normalization.
#[derive(Deserialize)]
struct RawSessionRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    club_slug: String,
    #[serde(default)]
    club_name: String,
    #[serde(default)]
    weekday: String,
    #[serde(default)]
    start_time: Option<String>,
    #[serde(default)]
    duration_min: Option<Value>,
    #[serde(default)]
    location_name: Option<String>,
    #[serde(default)]
    lat: Option<Value>,
    #[serde(default)]
    lon: Option<Value>,
    #[serde(default)]
    distances_km: Option<Value>,
    #[serde(default)]
    distance_km: Option<Value>,
    #[serde(default)]
    pace_groups_min_per_km: Option<String>,
    #[serde(default)]
    source_url: Option<String>,
    #[serde(default)]
    instagram_url: Option<String>,
    #[serde(default)]
    active: Option<bool>,
}

impl From<RawSessionRecord> for SessionRecord {
    fn from(raw: RawSessionRecord) -> Self {
        let coordinate = |v: Option<&Value>| v.and_then(Value::as_f64).filter(|n| n.is_finite());
        let (lat, lon) = match (coordinate(raw.lat.as_ref()), coordinate(raw.lon.as_ref())) {
            (Some(lat), Some(lon)) => (Some(lat), Some(lon)),
            _ => (None, None),
        };

        let duration_min = raw
            .duration_min
            .as_ref()
            .and_then(coerce_number)
            .filter(|m| *m >= 1.0 && m.fract() == 0.0 && *m <= f64::from(u32::MAX))
            .map(|m| m as u32);

        Self {
            id: identifier(raw.id.as_ref()),
            club_slug: raw.club_slug,
            club_name: raw.club_name,
            weekday: raw.weekday,
            start_time: non_blank(raw.start_time),
            duration_min,
            location_name: non_blank(raw.location_name),
            lat,
            lon,
            distance: DistanceSpec::from_fields(
                raw.distances_km.as_ref(),
                raw.distance_km.as_ref(),
            ),
            pace_groups_min_per_km: non_blank(raw.pace_groups_min_per_km),
            source_url: non_blank(raw.source_url),
            instagram_url: non_blank(raw.instagram_url),
            active: raw.active.unwrap_or(true),
        }
    }
}
