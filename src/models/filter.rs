// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter state handed in by the presentation layer.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::{Validate, ValidationError};

use crate::models::race::RaceType;

/// Inclusive distance window in kilometers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_distance_range"))]
pub struct DistanceRange {
    pub min_km: f64,
    pub max_km: f64,
}

impl DistanceRange {
    pub fn new(min_km: f64, max_km: f64) -> Self {
        Self { min_km, max_km }
    }

    /// Single-bound "up to X km" window; the minimum is the dataset minimum.
    pub fn up_to(max_km: f64, bounds: Option<DistanceBounds>) -> Self {
        let min_km = bounds.map(|b| b.min_km).unwrap_or(0.0);
        Self { min_km, max_km }
    }

    pub fn contains(&self, km: f64) -> bool {
        km >= self.min_km && km <= self.max_km
    }
}

impl PartialEq for DistanceRange {
    fn eq(&self, other: &Self) -> bool {
        self.min_km.to_bits() == other.min_km.to_bits()
            && self.max_km.to_bits() == other.max_km.to_bits()
    }
}

impl Eq for DistanceRange {}

impl Hash for DistanceRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.min_km.to_bits().hash(state);
        self.max_km.to_bits().hash(state);
    }
}

fn validate_distance_range(range: &DistanceRange) -> Result<(), ValidationError> {
    if !range.min_km.is_finite() || !range.max_km.is_finite() {
        return Err(ValidationError::new("distance_not_finite"));
    }
    if range.min_km > range.max_km {
        return Err(ValidationError::new("distance_min_exceeds_max"));
    }
    Ok(())
}

/// Smallest and largest distance offered by the active sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(ts_rs::TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DistanceBounds {
    pub min_km: f64,
    pub max_km: f64,
}

/// The user's current filter selection. Empty fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct FilterState {
    /// Club slug
    pub club: Option<String>,
    pub weekday: Option<Weekday>,
    /// Hour of day the session starts in (0-23)
    #[validate(range(max = 23))]
    pub hour: Option<u8>,
    #[validate(nested)]
    pub distance: Option<DistanceRange>,
    pub race_type: Option<RaceType>,
    /// Keep races whose last day is already over
    #[serde(default)]
    pub include_past: bool,
}

impl FilterState {
    /// The hour filter as the two-digit prefix it is compared against.
    pub fn hour_prefix(&self) -> Option<String> {
        self.hour.map(|h| format!("{h:02}"))
    }
}
