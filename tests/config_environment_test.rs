// ABOUTME: Tests for environment-driven tracker configuration
// ABOUTME: Goal and trend overrides, validation failures and environment parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrition_tracker::config::{Environment, TrackerConfig};
use nutrition_tracker::errors::ErrorCode;
use nutrition_tracker::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const VARS: [&str; 6] = [
    "NUTRITION_GOAL_CALORIES",
    "NUTRITION_GOAL_PROTEIN",
    "NUTRITION_TREND_DAYS",
    "NUTRITION_INSIGHT_CALORIE_DEFICIT_RATIO",
    "ENVIRONMENT",
    "LOG_FORMAT",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    );
    assert!(Environment::Testing.is_testing());
}

#[test]
#[serial]
fn test_defaults_without_overrides() {
    clear_vars();
    let config = TrackerConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert!((config.default_goals.calories - 2000.0).abs() < f64::EPSILON);
    assert_eq!(config.trend_days, 7);
}

#[test]
#[serial]
fn test_goal_and_trend_overrides() {
    clear_vars();
    env::set_var("NUTRITION_GOAL_CALORIES", "1800");
    env::set_var("NUTRITION_GOAL_PROTEIN", " 120.5 ");
    env::set_var("NUTRITION_TREND_DAYS", "14");
    env::set_var("ENVIRONMENT", "production");
    let config = TrackerConfig::from_env();
    clear_vars();

    let config = config.unwrap();
    assert!((config.default_goals.calories - 1800.0).abs() < f64::EPSILON);
    assert!((config.default_goals.protein - 120.5).abs() < f64::EPSILON);
    assert_eq!(config.trend_days, 14);
    assert!(config.environment.is_production());
}

#[test]
#[serial]
fn test_invalid_values_are_config_errors() {
    clear_vars();
    for (var, value) in [
        ("NUTRITION_GOAL_CALORIES", "lots"),
        ("NUTRITION_GOAL_PROTEIN", "-10"),
        ("NUTRITION_TREND_DAYS", "0"),
        ("NUTRITION_TREND_DAYS", "45"),
        ("NUTRITION_INSIGHT_CALORIE_DEFICIT_RATIO", "1.5"),
    ] {
        env::set_var(var, value);
        let result = TrackerConfig::from_env();
        env::remove_var(var);

        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{var}={value}");
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_vars();
    env::set_var("LOG_FORMAT", "json");
    let config = LoggingConfig::from_env();
    env::set_var("LOG_FORMAT", "yaml");
    let fallback = LoggingConfig::from_env();
    clear_vars();

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(fallback.format, LogFormat::Pretty);
}
