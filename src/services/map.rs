// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GeoJSON export of map markers for the map widget.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::models::marker::Marker;
use crate::services::normalize::maps_url;

/// One Point feature per marker, carrying its sessions as properties.
pub fn markers_geojson(markers: &[Marker<'_>]) -> FeatureCollection {
    let features = markers
        .iter()
        .map(|marker| {
            let position = marker.position();
            let mut properties = JsonObject::new();
            properties.insert(
                "session_ids".to_string(),
                json!(marker.items.iter().map(|s| s.id.as_str()).collect::<Vec<_>>()),
            );
            properties.insert(
                "clubs".to_string(),
                json!(marker
                    .items
                    .iter()
                    .map(|s| s.club_name.as_str())
                    .collect::<Vec<_>>()),
            );
            properties.insert(
                "maps_url".to_string(),
                json!(maps_url(position.y(), position.x())),
            );

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![position.x(), position.y()]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
