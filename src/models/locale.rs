// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display label sets.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

/// Fixed strings the core produces for display.
#[derive(Debug)]
pub struct Labels {
    pub source: &'static str,
    pub instagram: &'static str,
    pub date_tba: &'static str,
    /// Word following the count in "+N more"
    pub more: &'static str,
    pub weekdays: [&'static str; 7],
}

static EN: Labels = Labels {
    source: "Source",
    instagram: "Instagram",
    date_tba: "Date TBA",
    more: "more",
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
};

static DE: Labels = Labels {
    source: "Quelle",
    instagram: "Instagram",
    date_tba: "Datum folgt",
    more: "weitere",
    weekdays: [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::En => &EN,
            Self::De => &DE,
        }
    }

    pub fn weekday_label(self, day: Weekday) -> &'static str {
        self.labels().weekdays[day.num_days_from_monday() as usize]
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}
