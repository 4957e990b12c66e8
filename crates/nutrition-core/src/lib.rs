// ABOUTME: Core types and constants for the nutrition tracker
// ABOUTME: Foundation crate with error handling, data models and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Tracker Contributors

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! tracker. It changes rarely, so the intelligence crate and the tracker
//! library build on top of it without recompiling it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default goals, energy factors, status thresholds
//! - **models**: Nutrients, food items, log entries, goals and daily totals

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
