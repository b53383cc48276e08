// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use run_directory::config::ConfigError;
use run_directory::error::AppError;
use run_directory::models::{DistanceRange, FilterState};
use run_directory::services::DirectoryError;
use validator::Validate;

#[test]
fn test_exit_codes() {
    let err = AppError::InvalidFilter("unknown weekday: funday".to_string());
    assert_eq!(err.exit_code(), 64);

    let err = AppError::from(DirectoryError::ParseError("sessions: eof".to_string()));
    assert_eq!(err.exit_code(), 65);

    let err = AppError::from(DirectoryError::IoError {
        path: "data/sessions.json".to_string(),
        message: "not found".to_string(),
    });
    assert_eq!(err.exit_code(), 66);

    let err = AppError::from(ConfigError::Invalid {
        var: "DIRECTORY_TODAY",
        value: "tomorrow".to_string(),
    });
    assert_eq!(err.exit_code(), 78);
}

#[test]
fn test_validation_errors_become_invalid_filter() {
    let filter = FilterState {
        distance: Some(DistanceRange::new(20.0, 5.0)),
        ..Default::default()
    };
    let err = AppError::from(filter.validate().unwrap_err());
    assert!(matches!(err, AppError::InvalidFilter(_)));
    assert!(err.to_string().starts_with("Invalid filter"));
}
