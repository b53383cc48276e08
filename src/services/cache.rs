// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Memoization of filter results.
//!
//! Filtering is deterministic, so a result keyed by the dataset version and
//! the filter state never goes stale.

use dashmap::DashMap;
use std::sync::Arc;

use crate::models::filter::FilterState;

type CacheKey = (String, FilterState);

/// Cached session selections (indices into the directory's session list).
#[derive(Debug, Default)]
pub struct ViewCache {
    sessions: DashMap<CacheKey, Arc<Vec<usize>>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached selection or compute and store it.
    pub fn sessions_or_insert_with<F>(
        &self,
        dataset_version: &str,
        filter: &FilterState,
        compute: F,
    ) -> Arc<Vec<usize>>
    where
        F: FnOnce() -> Vec<usize>,
    {
        let key = (dataset_version.to_string(), filter.clone());
        if let Some(hit) = self.sessions.get(&key) {
            tracing::trace!(?filter, "View cache hit");
            return Arc::clone(hit.value());
        }
        let computed = Arc::new(compute());
        self.sessions.insert(key, computed.clone());
        computed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn clear(&self) {
        self.sessions.clear();
    }
}
