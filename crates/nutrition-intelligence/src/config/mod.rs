// ABOUTME: Intelligence configuration for the insight rule engine
// ABOUTME: Threshold defaults, validation and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

//! Intelligence Configuration Module
//!
//! Thresholds used by the insight rules are plain data with defaults,
//! overridable from the environment and validated before use. There is no
//! global instance: callers load a config and hand it to the engine.

/// Configuration error types
pub mod error;
/// Insight rule thresholds
pub mod insight_rules;

pub use error::ConfigError;
pub use insight_rules::InsightRulesConfig;

use std::env;
use std::str::FromStr;

/// Overwrite `target` with the parsed value of `env_var_name` when it is set
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the variable is set but does not parse
pub fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(env_var_name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
    }
    Ok(())
}
