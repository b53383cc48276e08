// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! List-view items with their display helpers already applied.

use serde::Serialize;

use crate::models::links::LabeledLink;
use crate::models::race::{Course, RaceRecord};
use crate::models::session::SessionRecord;

/// Club dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(ts_rs::TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ClubOption {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionListItem<'a> {
    #[serde(flatten)]
    pub session: &'a SessionRecord,
    /// Localized weekday name
    pub weekday_label: Option<&'static str>,
    /// e.g. "5 / 10 km", empty when unknown
    pub distances: String,
    pub pace_groups: Vec<&'a str>,
    pub links: Vec<LabeledLink>,
    pub maps_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RaceListItem<'a> {
    #[serde(flatten)]
    pub race: &'a RaceRecord,
    /// "Date TBA", a single date, or "start – end"
    pub date_range: String,
    pub courses: Vec<Course>,
    pub courses_line: String,
    pub links: Vec<LabeledLink>,
}
