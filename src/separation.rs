//! # Body-to-body separation sampling
//!
//! This module samples the Euclidean separation between two catalog bodies
//! over a fixed-step epoch grid. Positions come from an injected
//! [`PositionProvider`](crate::ephemeris::PositionProvider); both bodies are
//! queried in the provider's common frame and origin, so the norm of the
//! position difference is the physical separation.
//!
//! ## Overview
//! -----------------
//! [`sample_separation`] builds the epoch grid with
//! [`time::epoch_grid`](crate::time::epoch_grid), performs one position
//! lookup per body per epoch, and returns a [`SampleSeries`]: parallel
//! epoch/distance vectors, strictly increasing in epoch, immutable once
//! produced. [`SampleSeries::extrema`] finds the minimum and maximum
//! separation for later annotation, resolving ties to the first occurrence
//! in epoch order.
//!
//! ## Units & Conventions
//! -----------------
//! - Distances carry the provider's length unit (kilometers for
//!   SPICE-backed providers).
//! - Epoch-grid semantics (step floor, window-edge overshoot) are those of
//!   [`time::epoch_grid`](crate::time::epoch_grid).
//!
//! A failed position lookup at any epoch fails the whole sample; no partial
//! series is returned.

use hifitime::Epoch;

use crate::constants::{Days, Kilometer};
use crate::ephemeris::PositionProvider;
use crate::helioplot_errors::HelioplotError;
use crate::time::epoch_grid;

/// One (epoch, distance) sample of a separation series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub epoch: Epoch,
    pub distance: Kilometer,
}

/// First-occurrence minimum and maximum of a [`SampleSeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesExtrema {
    pub min: SeriesPoint,
    pub max: SeriesPoint,
}

/// Separation distances between two bodies over a fixed-step epoch grid.
///
/// Epochs and distances are parallel vectors of equal length; epochs are
/// strictly increasing and duplicate-free by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    epochs: Vec<Epoch>,
    distances: Vec<Kilometer>,
}

impl SampleSeries {
    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    pub fn epochs(&self) -> &[Epoch] {
        &self.epochs
    }

    pub fn distances(&self) -> &[Kilometer] {
        &self.distances
    }

    /// Iterate over the series as (epoch, distance) points, in epoch order.
    pub fn iter(&self) -> impl Iterator<Item = SeriesPoint> + '_ {
        self.epochs
            .iter()
            .zip(self.distances.iter())
            .map(|(&epoch, &distance)| SeriesPoint { epoch, distance })
    }

    /// Minimum and maximum separation of the series.
    ///
    /// Ties resolve to the first occurrence in epoch order. Returns `None`
    /// for an empty series.
    pub fn extrema(&self) -> Option<SeriesExtrema> {
        let mut points = self.iter();
        let first = points.next()?;

        let mut min = first;
        let mut max = first;
        for point in points {
            if point.distance < min.distance {
                min = point;
            }
            if point.distance > max.distance {
                max = point;
            }
        }
        Some(SeriesExtrema { min, max })
    }
}

/// Sample the separation between `target` and `observer` over `[start, end]`.
///
/// One provider call per body per epoch; the separation is the Euclidean
/// norm of the position difference in the provider's frame and origin.
///
/// Arguments
/// ---------
/// * `provider`: position source for both bodies (common frame and origin)
/// * `target`: provider-native identifier of the first body
/// * `observer`: provider-native identifier of the second body
/// * `start`: first epoch of the window
/// * `end`: last epoch of the window, must be strictly after `start`
/// * `step_days`: sampling cadence in days, floored at
///   [`MIN_STEP_DAYS`](crate::constants::MIN_STEP_DAYS)
///
/// Return
/// ------
/// * The sampled [`SampleSeries`], or [`HelioplotError::InvalidRange`] /
///   [`HelioplotError::PositionLookupFailed`].
pub fn sample_separation(
    provider: &impl PositionProvider,
    target: &str,
    observer: &str,
    start: Epoch,
    end: Epoch,
    step_days: Days,
) -> Result<SampleSeries, HelioplotError> {
    let epochs = epoch_grid(start, end, step_days)?;

    let mut distances = Vec::with_capacity(epochs.len());
    for &epoch in &epochs {
        let target_pos = provider.position(target, epoch)?;
        let observer_pos = provider.position(observer, epoch)?;
        distances.push((target_pos - observer_pos).norm());
    }

    Ok(SampleSeries { epochs, distances })
}
