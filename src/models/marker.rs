// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map marker: every session meeting at one exact coordinate.

use geo::Point;
use serde::Serialize;

use crate::models::session::SessionRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker<'a> {
    pub lat: f64,
    pub lon: f64,
    pub items: Vec<&'a SessionRecord>,
}

impl Marker<'_> {
    pub fn position(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}
