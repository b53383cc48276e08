// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Run-Directory: community running sessions and races for one metro area
//!
//! This crate turns the static session and race datasets into the list,
//! calendar and map views of the directory: field normalization, filter
//! predicates, weekly recurrence expansion, multi-day race placement and
//! the sort orders used by every view.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod value_utils;

pub use services::Directory;
