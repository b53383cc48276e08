// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types for the command-line front end.
//!
//! The core never fails on bad data; errors only come from configuration,
//! dataset loading and user-supplied filters.

use crate::config::ConfigError;
use crate::services::DirectoryError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dataset error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::InvalidFilter(errors.to_string())
    }
}

impl AppError {
    /// Process exit code for this error (sysexits-style).
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidFilter(_) => 64,
            AppError::Directory(DirectoryError::ParseError(_)) => 65,
            AppError::Directory(DirectoryError::IoError { .. }) => 66,
            AppError::Config(_) => 78,
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                70
            }
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
