//! Core domain logic for covgate
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`CoverageMap`, `Violation`, `LimitChange`)
//! - `services/` - Comparison and limit raising
//! - `ports/` - Trait definitions for the limits store and coverage source

pub mod models;
pub mod ports;
pub mod services;
