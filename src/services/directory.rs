// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dataset loading and view assembly.
//!
//! `Directory` owns the static session and race snapshots and hands out
//! filtered, expanded and grouped views of them. It never mutates the
//! snapshot after loading.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::models::calendar::CalendarView;
use crate::models::filter::{DistanceBounds, FilterState};
use crate::models::marker::Marker;
use crate::models::occurrence::Occurrence;
use crate::models::race::RaceRecord;
use crate::models::session::SessionRecord;
use crate::models::view::ClubOption;
use crate::services::cache::ViewCache;
use crate::services::calendar::{fill_grid, month_grid};
use crate::services::grouping::{group_by_coordinate, group_by_day, sort_races, sort_sessions};
use crate::services::predicate::{self, session_matches};
use crate::services::race_bucket::bucket_races;
use crate::services::recurrence::expand_occurrences;

/// Loaded directory data.
#[derive(Debug, Default)]
pub struct Directory {
    sessions: Vec<SessionRecord>,
    races: Vec<RaceRecord>,
    version: String,
    cache: ViewCache,
}

impl Directory {
    /// Build a directory from already-parsed records.
    ///
    /// Inactive sessions are dropped here, before any view sees them.
    pub fn new(sessions: Vec<SessionRecord>, races: Vec<RaceRecord>) -> Self {
        let version = match (serde_json::to_vec(&sessions), serde_json::to_vec(&races)) {
            (Ok(s), Ok(r)) => dataset_version(&s, &r),
            _ => String::new(),
        };
        Self::with_version(sessions, races, version)
    }

    fn with_version(sessions: Vec<SessionRecord>, races: Vec<RaceRecord>, version: String) -> Self {
        let total = sessions.len();
        let sessions: Vec<SessionRecord> = sessions.into_iter().filter(|s| s.active).collect();

        tracing::info!(
            sessions = sessions.len(),
            inactive = total - sessions.len(),
            races = races.len(),
            version = %version,
            "Loaded directory"
        );

        Self {
            sessions,
            races,
            version,
            cache: ViewCache::new(),
        }
    }

    /// Load both datasets from JSON files.
    pub fn load_from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        sessions_path: P,
        races_path: Q,
    ) -> Result<Self, DirectoryError> {
        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|e| DirectoryError::IoError {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        };
        let sessions_json = read(sessions_path.as_ref())?;
        let races_json = read(races_path.as_ref())?;
        Self::load_from_json(&sessions_json, &races_json)
    }

    /// Load both datasets from JSON arrays.
    pub fn load_from_json(sessions_json: &str, races_json: &str) -> Result<Self, DirectoryError> {
        let sessions: Vec<SessionRecord> = serde_json::from_str(sessions_json)
            .map_err(|e| DirectoryError::ParseError(format!("sessions: {}", e)))?;
        let races: Vec<RaceRecord> = serde_json::from_str(races_json)
            .map_err(|e| DirectoryError::ParseError(format!("races: {}", e)))?;
        let version = dataset_version(sessions_json.as_bytes(), races_json.as_bytes());
        Ok(Self::with_version(sessions, races, version))
    }

    /// Active sessions, in dataset order.
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn races(&self) -> &[RaceRecord] {
        &self.races
    }

    /// Content hash of the loaded datasets.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn club_options(&self) -> Vec<ClubOption> {
        predicate::club_options(&self.sessions)
    }

    pub fn hour_options(&self) -> Vec<u8> {
        predicate::hour_options(&self.sessions)
    }

    pub fn distance_bounds(&self) -> Option<DistanceBounds> {
        predicate::distance_bounds(&self.sessions)
    }

    /// Sessions matching the filter, in list order (weekday, then time).
    pub fn filtered_sessions(&self, filter: &FilterState) -> Vec<&SessionRecord> {
        let selected = self
            .cache
            .sessions_or_insert_with(&self.version, filter, || {
                self.sessions
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| session_matches(s, filter))
                    .map(|(i, _)| i)
                    .collect()
            });

        let mut sessions: Vec<&SessionRecord> =
            selected.iter().map(|&i| &self.sessions[i]).collect();
        sort_sessions(&mut sessions);
        sessions
    }

    /// Races matching the filter, ordered by start date (undated last).
    pub fn filtered_races(&self, filter: &FilterState, today: NaiveDate) -> Vec<&RaceRecord> {
        let mut races = predicate::filter_races(&self.races, filter, today);
        sort_races(&mut races);
        races
    }

    /// Month grid of session occurrences for the month containing `today`.
    pub fn session_calendar(
        &self,
        filter: &FilterState,
        today: NaiveDate,
    ) -> CalendarView<Occurrence<'_>> {
        let grid = month_grid(today);
        let occurrences = match grid.range() {
            Some(range) => expand_occurrences(self.filtered_sessions(filter), range),
            None => Vec::new(),
        };
        fill_grid(&grid, group_by_day(occurrences))
    }

    /// Month grid of races for the month containing `today`.
    pub fn race_calendar(
        &self,
        filter: &FilterState,
        today: NaiveDate,
    ) -> CalendarView<&RaceRecord> {
        let grid = month_grid(today);
        let buckets = match grid.range() {
            Some(range) => bucket_races(predicate::filter_races(&self.races, filter, today), range),
            None => Default::default(),
        };
        fill_grid(&grid, buckets)
    }

    /// Map markers for the filtered sessions.
    pub fn markers(&self, filter: &FilterState) -> Vec<Marker<'_>> {
        group_by_coordinate(self.filtered_sessions(filter))
    }
}

/// Hex SHA-256 over both raw datasets.
fn dataset_version(sessions: &[u8], races: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sessions);
    hasher.update([0u8]);
    hasher.update(races);
    hex::encode(hasher.finalize())
}

/// Errors from loading the datasets.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Failed to read {path}: {message}")]
    IoError { path: String, message: String },

    #[error("Failed to parse dataset: {0}")]
    ParseError(String),
}
