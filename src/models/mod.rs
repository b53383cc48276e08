// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the directory.

pub mod calendar;
pub mod filter;
pub mod links;
pub mod locale;
pub mod marker;
pub mod occurrence;
pub mod race;
pub mod session;
pub mod view;
pub mod weekday;

pub use calendar::{CalendarCell, CalendarDay, CalendarView, DateRange, MonthGrid};
pub use filter::{DistanceBounds, DistanceRange, FilterState};
pub use links::{ExternalLinks, LabeledLink, LinkSource};
pub use locale::Locale;
pub use marker::Marker;
pub use occurrence::Occurrence;
pub use race::{Course, RaceRecord, RaceType};
pub use session::{DistanceSpec, SessionRecord};
pub use view::{ClubOption, RaceListItem, SessionListItem};
pub use weekday::WeekdayTime;
