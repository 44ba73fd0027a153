//! # Constants and type definitions for helioplot
//!
//! This module centralizes the **numeric constants** and **common type
//! definitions** used throughout the `helioplot` library.
//!
//! ## Overview
//!
//! - Time conversions and sampling bounds
//! - Grid reduction parameters (contour level count, clip factor)
//! - Core type aliases used across the crate
//!
//! These definitions are used by the separation sampler, the porkchop grid
//! reducer, and the ingestion helpers.

// -------------------------------------------------------------------------------------------------
// Time and sampling
// -------------------------------------------------------------------------------------------------

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Smallest accepted sampling cadence, in days.
///
/// Requested step sizes below this are floored to it, which rules out zero
/// or negative steps turning the epoch grid into an endless loop.
pub const MIN_STEP_DAYS: f64 = 0.01;

/// Default sampling cadence for separation series, in days
pub const DEFAULT_STEP_DAYS: f64 = 5.0;

// -------------------------------------------------------------------------------------------------
// Grid reduction
// -------------------------------------------------------------------------------------------------

/// Number of evenly spaced contour level boundaries derived from a reduced
/// grid, inclusive of both range ends
pub const CONTOUR_LEVELS: usize = 30;

/// Default multiplicative ceiling applied to the grid minimum when clipping
/// outliers (`limit = zmin * factor`)
pub const DEFAULT_HIGH_CLIP_FACTOR: f64 = 4.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in kilometers
pub type Kilometer = f64;
/// Duration in days
pub type Days = f64;
