// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! A recurring session projected onto one concrete date.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::models::session::SessionRecord;

/// One dated instance of a session. Only the expander creates these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Occurrence<'a> {
    /// Local start, no timezone.
    pub starts_at: NaiveDateTime,
    #[serde(flatten)]
    pub session: &'a SessionRecord,
}

impl<'a> Occurrence<'a> {
    pub fn new(starts_at: NaiveDateTime, session: &'a SessionRecord) -> Self {
        Self { starts_at, session }
    }

    /// End of the session when its duration is known.
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.session
            .duration_min
            .map(|m| self.starts_at + Duration::minutes(i64::from(m)))
    }
}
