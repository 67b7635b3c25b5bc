//! Numerical fault accounting and grid aggregates
//!
//! The kernel never aborts a timestep over a numerical fault; it counts
//! them here and the orchestrator reports the totals once per step
//! (warn log, or an error in strict mode). Counters are atomic so the
//! parallel passes can bump them without coordination.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::spatial::grid::FluidGrid;

/// Per-step fault counters, bumped from parallel passes.
#[derive(Debug, Default)]
pub struct FaultCounters {
    ratio_out_of_range: AtomicU64,
    ratio_sum_mismatch: AtomicU64,
    negative_mass: AtomicU64,
}

impl FaultCounters {
    #[inline]
    pub fn record_ratio_out_of_range(&self) {
        self.ratio_out_of_range.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_ratio_sum_mismatch(&self) {
        self.ratio_sum_mismatch.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_negative_mass(&self) {
        self.negative_mass.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot and reset, called once per step.
    pub fn take(&self) -> FaultReport {
        FaultReport {
            ratio_out_of_range: self.ratio_out_of_range.swap(0, Ordering::Relaxed),
            ratio_sum_mismatch: self.ratio_sum_mismatch.swap(0, Ordering::Relaxed),
            negative_mass: self.negative_mass.swap(0, Ordering::Relaxed),
        }
    }
}

/// Snapshot of one step's fault counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FaultReport {
    /// Bilinear ratios outside [0, 1].
    pub ratio_out_of_range: u64,
    /// Ratio quadruples whose sum strayed beyond the tolerance.
    pub ratio_sum_mismatch: u64,
    /// Cells whose mass would have dropped below zero.
    pub negative_mass: u64,
}

impl FaultReport {
    pub fn is_clean(&self) -> bool {
        self.ratio_out_of_range == 0 && self.ratio_sum_mismatch == 0 && self.negative_mass == 0
    }

    pub fn total(&self) -> u64 {
        self.ratio_out_of_range + self.ratio_sum_mismatch + self.negative_mass
    }
}

impl fmt::Display for FaultReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ratio_out_of_range={} ratio_sum_mismatch={} negative_mass={}",
            self.ratio_out_of_range, self.ratio_sum_mismatch, self.negative_mass
        )
    }
}

// === Grid aggregates ===
//
// Whole-grid sums used by conservation checks and by hosts that chart
// simulation health over time.

pub fn total_mass(grid: &FluidGrid) -> f64 {
    grid.mass.iter().sum()
}

pub fn total_heat(grid: &FluidGrid) -> f64 {
    grid.heat.iter().sum()
}

/// Kinetic energy 0.5 * sum(m * v^2) over all cells.
pub fn kinetic_energy(grid: &FluidGrid) -> f64 {
    (0..grid.size())
        .map(|i| {
            let vx = grid.velocity_x(i);
            let vy = grid.velocity_y(i);
            0.5 * grid.mass[i] * (vx * vx + vy * vy)
        })
        .sum()
}
