// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - filtering, expansion and grouping logic.

pub mod cache;
pub mod calendar;
pub mod directory;
pub mod format;
pub mod grouping;
pub mod map;
pub mod normalize;
pub mod predicate;
pub mod race_bucket;
pub mod recurrence;

pub use cache::ViewCache;
pub use calendar::{fill_grid, month_grid};
pub use directory::{Directory, DirectoryError};
pub use grouping::{compare_races_by_start, compare_sessions, group_by_coordinate, group_by_day};
pub use normalize::{extract_distances, format_distances, resolve_external_links, zip_courses};
pub use predicate::{filter_races, filter_sessions, race_matches, session_matches};
pub use race_bucket::bucket_races;
pub use recurrence::expand_occurrences;
