// ABOUTME: Configuration module for the nutrition tracker
// ABOUTME: Re-exports the environment-driven tracker configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

//! Configuration for the nutrition tracker
//!
//! - **Environment**: deployment environment, default goals, trend window and
//!   insight thresholds loaded from environment variables
//!
//! Configuration is loaded explicitly and passed to the components that need
//! it; there is no process-wide instance.

/// Environment and tracker configuration
pub mod environment;

pub use environment::{Environment, TrackerConfig};
