//! # Porkchop grid reduction
//!
//! This module turns the raw output of a transfer sweep, an irregular table
//! of (depart epoch, arrive epoch, feasible flag, cost) rows, into the
//! dense, bounded form a contour renderer consumes.
//!
//! ## Overview
//! -----------------
//! [`reduce`] runs a strictly sequential pipeline over an immutable row
//! snapshot:
//!
//! 1. **Filter**: infeasible rows are discarded.
//! 2. **Fold**: duplicate (depart, arrive) pairs keep their minimum cost.
//! 3. **Densify**: folded samples are pivoted into a rectangular
//!    `[arrive][depart]` matrix over the sorted distinct epoch axes;
//!    all-absent rows and columns are trimmed.
//! 4. **Clip**: present values above `zmin * high_clip_factor` are clamped,
//!    bounding the dynamic range against near-singular transfer geometries
//!    without discarding data points.
//! 5. **Levels**: exactly [`CONTOUR_LEVELS`] evenly spaced boundaries over
//!    the clipped range.
//! 6. **Locate**: the globally cheapest feasible row, taken from the raw
//!    pre-fold data so the marked minimum is exact even when clipping
//!    altered displayed magnitudes.
//!
//! The pipeline either returns a complete [`Reduction`] or a typed failure;
//! no partial results.
//!
//! ## See also
//! ------------
//! * [`csv_reader`] – Ingestion of raw sweep rows from CSV.

pub mod csv_reader;

use std::collections::{BTreeMap, BTreeSet};

use hifitime::Epoch;
use itertools::{Itertools, MinMaxResult};

use crate::constants::CONTOUR_LEVELS;
use crate::helioplot_errors::HelioplotError;

/// One observed transfer-sweep row.
///
/// Rows are independent; several rows may share a (depart, arrive) pair with
/// different costs (feasibility reruns), in which case the minimum wins at
/// fold time. The cost is an opaque metric value (Δv, C3, …) selected at
/// ingestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRow {
    pub depart: Epoch,
    pub arrive: Epoch,
    pub feasible: bool,
    pub cost: f64,
}

/// Dense transfer-cost matrix over sorted distinct epoch axes.
///
/// Cells are stored row-major by arrival; an absent cell means no feasible
/// finite sample exists for that (arrive, depart) pair. At least one cell is
/// present, and no row or column is entirely absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CostGrid {
    depart_epochs: Vec<Epoch>,
    arrive_epochs: Vec<Epoch>,
    cells: Vec<Option<f64>>,
}

impl CostGrid {
    /// Number of depart-epoch columns.
    pub fn width(&self) -> usize {
        self.depart_epochs.len()
    }

    /// Number of arrive-epoch rows.
    pub fn height(&self) -> usize {
        self.arrive_epochs.len()
    }

    /// Sorted distinct departure epochs (column axis).
    pub fn depart_epochs(&self) -> &[Epoch] {
        &self.depart_epochs
    }

    /// Sorted distinct arrival epochs (row axis).
    pub fn arrive_epochs(&self) -> &[Epoch] {
        &self.arrive_epochs
    }

    /// Cost of the cell at (arrive row, depart column), if present.
    pub fn cell(&self, arrive_idx: usize, depart_idx: usize) -> Option<f64> {
        if arrive_idx >= self.height() || depart_idx >= self.width() {
            return None;
        }
        self.cells[arrive_idx * self.width() + depart_idx]
    }

    /// One arrival row of cells, in depart-epoch order.
    pub fn row(&self, arrive_idx: usize) -> &[Option<f64>] {
        let width = self.width();
        &self.cells[arrive_idx * width..(arrive_idx + 1) * width]
    }

    /// Iterate over all present cell values, row by row.
    pub fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }
}

/// Value bounds all contouring and coloring operate within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRange {
    pub low: f64,
    pub high: f64,
}

impl ClipRange {
    /// Clamp a value into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.low, self.high)
    }
}

/// The globally cheapest feasible transfer of the raw input rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumPoint {
    pub depart: Epoch,
    pub arrive: Epoch,
    pub cost: f64,
}

/// Complete output of one grid reduction, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub grid: CostGrid,
    pub clip: ClipRange,
    /// Exactly [`CONTOUR_LEVELS`] evenly spaced boundaries spanning
    /// `[clip.low, clip.high]`, inclusive of both ends.
    pub levels: Vec<f64>,
    pub minimum: MinimumPoint,
}

/// Reduce raw transfer-sweep rows into a dense, clipped, contoured grid.
///
/// Arguments
/// ---------
/// * `rows`: immutable snapshot of sweep rows, in any order
/// * `high_clip_factor`: multiplicative ceiling over the grid minimum,
///   floored at 1.0
///
/// Return
/// ------
/// * A [`Reduction`], or one of the terminal failures:
///   [`HelioplotError::EmptyInput`] (no feasible rows),
///   [`HelioplotError::EmptyGrid`] (nothing survives densification),
///   [`HelioplotError::DegenerateRange`] (no usable value range).
pub fn reduce(rows: &[GridRow], high_clip_factor: f64) -> Result<Reduction, HelioplotError> {
    let feasible: Vec<&GridRow> = rows.iter().filter(|row| row.feasible).collect();
    if feasible.is_empty() {
        return Err(HelioplotError::EmptyInput);
    }

    // Fold duplicates: the cheapest solution for a pair wins. A non-finite
    // cost never displaces a finite one.
    let mut folded: BTreeMap<(Epoch, Epoch), f64> = BTreeMap::new();
    for row in &feasible {
        let slot = folded.entry((row.depart, row.arrive)).or_insert(row.cost);
        if !slot.is_finite() || row.cost < *slot {
            *slot = row.cost;
        }
    }

    let mut grid = densify(&folded);
    trim_absent(&mut grid);
    if grid.width() == 0 || grid.height() == 0 {
        return Err(HelioplotError::EmptyGrid);
    }

    let (zmin, mut zmax) = match grid.present_values().minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => return Err(HelioplotError::EmptyGrid),
        MinMaxResult::OneElement(value) => (value, value),
        MinMaxResult::MinMax(low, high) => (low, high),
    };

    // zmin stays the pre-clip grid minimum; it is never re-derived from the
    // clamped set.
    let limit = zmin * high_clip_factor.max(1.0);
    if zmax > limit {
        for cell in grid.cells.iter_mut() {
            if let Some(value) = cell {
                *value = value.clamp(zmin, limit);
            }
        }
        zmax = limit;
    }
    if !zmin.is_finite() || !zmax.is_finite() || zmin >= zmax {
        return Err(HelioplotError::DegenerateRange { zmin, zmax });
    }

    let minimum = locate_minimum(&feasible).ok_or(HelioplotError::EmptyGrid)?;

    Ok(Reduction {
        grid,
        clip: ClipRange {
            low: zmin,
            high: zmax,
        },
        levels: contour_levels(zmin, zmax),
        minimum,
    })
}

/// Pivot folded samples into a dense `[arrive][depart]` matrix.
///
/// Axes are the sorted distinct epochs of the folded keys; only finite costs
/// become present cells.
fn densify(folded: &BTreeMap<(Epoch, Epoch), f64>) -> CostGrid {
    let depart_epochs: Vec<Epoch> = folded
        .keys()
        .map(|&(depart, _)| depart)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let arrive_epochs: Vec<Epoch> = folded
        .keys()
        .map(|&(_, arrive)| arrive)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut cells = vec![None; depart_epochs.len() * arrive_epochs.len()];
    for (&(depart, arrive), &cost) in folded {
        if !cost.is_finite() {
            continue;
        }
        let (Ok(depart_idx), Ok(arrive_idx)) = (
            depart_epochs.binary_search(&depart),
            arrive_epochs.binary_search(&arrive),
        ) else {
            continue;
        };
        cells[arrive_idx * depart_epochs.len() + depart_idx] = Some(cost);
    }

    CostGrid {
        depart_epochs,
        arrive_epochs,
        cells,
    }
}

/// Drop rows and columns containing only absent cells.
///
/// Sparse or irregular coverage at the sweep edges can leave axis values
/// whose every folded sample was non-finite; they carry no contourable data.
fn trim_absent(grid: &mut CostGrid) {
    let width = grid.width();
    let height = grid.height();

    let keep_rows: Vec<bool> = (0..height)
        .map(|arrive| (0..width).any(|depart| grid.cells[arrive * width + depart].is_some()))
        .collect();
    let keep_cols: Vec<bool> = (0..width)
        .map(|depart| (0..height).any(|arrive| grid.cells[arrive * width + depart].is_some()))
        .collect();
    if keep_rows.iter().all(|&keep| keep) && keep_cols.iter().all(|&keep| keep) {
        return;
    }

    let mut cells = Vec::new();
    for (arrive, &keep_row) in keep_rows.iter().enumerate() {
        if !keep_row {
            continue;
        }
        for (depart, &keep_col) in keep_cols.iter().enumerate() {
            if keep_col {
                cells.push(grid.cells[arrive * width + depart]);
            }
        }
    }

    grid.depart_epochs = grid
        .depart_epochs
        .iter()
        .zip(&keep_cols)
        .filter(|(_, &keep)| keep)
        .map(|(&epoch, _)| epoch)
        .collect();
    grid.arrive_epochs = grid
        .arrive_epochs
        .iter()
        .zip(&keep_rows)
        .filter(|(_, &keep)| keep)
        .map(|(&epoch, _)| epoch)
        .collect();
    grid.cells = cells;
}

/// Evenly spaced level boundaries over `[zmin, zmax]`, both ends included.
fn contour_levels(zmin: f64, zmax: f64) -> Vec<f64> {
    let last = (CONTOUR_LEVELS - 1) as f64;
    (0..CONTOUR_LEVELS)
        .map(|i| {
            let t = i as f64 / last;
            (1.0 - t) * zmin + t * zmax
        })
        .collect()
}

/// Globally cheapest feasible row, first occurrence on ties.
fn locate_minimum(feasible: &[&GridRow]) -> Option<MinimumPoint> {
    let mut best: Option<&GridRow> = None;
    for &row in feasible {
        if !row.cost.is_finite() {
            continue;
        }
        match best {
            Some(current) if row.cost >= current.cost => {}
            _ => best = Some(row),
        }
    }
    best.map(|row| MinimumPoint {
        depart: row.depart,
        arrive: row.arrive,
        cost: row.cost,
    })
}
