// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! External link resolution results.

use serde::{Deserialize, Serialize};

use crate::models::locale::Locale;

/// Records that carry a primary link and an optional Instagram link.
pub trait LinkSource {
    fn primary_url(&self) -> Option<&str>;
    fn instagram_url(&self) -> Option<&str>;
}

/// Resolved links for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLinks {
    pub primary_url: Option<String>,
    pub instagram_url: Option<String>,
    /// The primary link *is* the Instagram link; render it once.
    pub primary_is_instagram: bool,
}

/// A link ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(ts_rs::TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LabeledLink {
    pub label: String,
    pub url: String,
}

impl ExternalLinks {
    /// Links to render, in order.
    pub fn labeled(&self, locale: Locale) -> Vec<LabeledLink> {
        let labels = locale.labels();
        let link = |label: &str, url: &str| LabeledLink {
            label: label.to_string(),
            url: url.to_string(),
        };

        if self.primary_is_instagram {
            return self
                .instagram_url
                .as_deref()
                .map(|url| link(labels.instagram, url))
                .into_iter()
                .collect();
        }

        let primary = self.primary_url.as_deref().map(|url| link(labels.source, url));
        let instagram = self
            .instagram_url
            .as_deref()
            .map(|url| link(labels.instagram, url));
        primary.into_iter().chain(instagram).collect()
    }
}
