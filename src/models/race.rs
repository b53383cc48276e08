// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-off race model.

use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::value_utils::{identifier, non_blank, positional_numbers};

/// Race category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum RaceType {
    City,
    Mountain,
    #[default]
    Mix,
}

impl RaceType {
    /// Parse a dataset category; absent or unknown categories are `Mix`.
    pub fn from_dataset(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Mountain => "mountain",
            Self::Mix => "mix",
        }
    }
}

impl std::str::FromStr for RaceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "city" => Ok(Self::City),
            "mountain" => Ok(Self::Mountain),
            "mix" => Ok(Self::Mix),
            other => Err(format!("unknown race type: {other}")),
        }
    }
}

/// A dated, possibly multi-day race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRaceRecord")]
pub struct RaceRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub race_type: RaceType,
    /// `YYYY-MM-DD`; absent means the date is still to be announced.
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`; absent means a single-day race.
    pub end_date: Option<String>,
    pub place: Option<String>,
    pub canton: Option<String>,
    /// Course distances by original position; `None` where the entry was not numeric.
    pub distances_km: Vec<Option<f64>>,
    /// Elevation gain paired with `distances_km` by position.
    pub elevation_gain_m: Vec<Option<f64>>,
    pub website: Option<String>,
    pub guide_url: Option<String>,
    pub instagram_url: Option<String>,
}

impl RaceRecord {
    /// Last date the race is on, as a lexically comparable string
    /// (`end_date`, else `start_date`, else empty).
    pub fn last_day_key(&self) -> &str {
        self.end_date
            .as_deref()
            .or(self.start_date.as_deref())
            .unwrap_or("")
    }
}

/// One distance variant of a race.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Course {
    pub distance_km: f64,
    pub elevation_gain_m: Option<f64>,
}

#[derive(Deserialize)]
struct RawRaceRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    race_type: Option<String>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    canton: Option<String>,
    #[serde(default)]
    distances_km: Option<Value>,
    #[serde(default)]
    elevation_gain_m: Option<Value>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    guide_url: Option<String>,
    #[serde(default)]
    instagram_url: Option<String>,
}

impl From<RawRaceRecord> for RaceRecord {
    fn from(raw: RawRaceRecord) -> Self {
        Self {
            id: identifier(raw.id.as_ref()),
            name: raw.name.unwrap_or_default(),
            race_type: RaceType::from_dataset(raw.race_type.as_deref()),
            start_date: non_blank(raw.start_date),
            end_date: non_blank(raw.end_date),
            place: non_blank(raw.place),
            canton: non_blank(raw.canton),
            distances_km: positional_numbers(raw.distances_km.as_ref()),
            elevation_gain_m: positional_numbers(raw.elevation_gain_m.as_ref()),
            website: non_blank(raw.website),
            guide_url: non_blank(raw.guide_url),
            instagram_url: non_blank(raw.instagram_url),
        }
    }
}
