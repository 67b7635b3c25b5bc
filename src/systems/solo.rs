//! Solo effects - forces a cell derives from its own state alone
//!
//! Independent across cells: each cell reads only itself and records only
//! into its own force ledger, so the pass parallelizes with no shared
//! writes. The force law is a configuration policy, not a hardcoded rule.

use rayon::prelude::*;

use crate::domain::config::{KernelConfig, SoloForceLaw};
use crate::spatial::grid::FluidGrid;

/// Solo-effects phase: apply the configured force law to every cell.
pub fn apply_solo_effects(grid: &mut FluidGrid, config: &KernelConfig) {
    let g = config.gravitational_constant;

    match config.solo_force {
        SoloForceLaw::Gravity => {
            (grid.mass.par_iter(), grid.pending_force_y.par_iter_mut())
                .into_par_iter()
                .for_each(|(mass, pending)| {
                    if *mass > 0.0 {
                        *pending -= g * *mass;
                    }
                });
        }
        SoloForceLaw::Buoyancy => {
            let ambient = config.ambient_temperature;
            // F_y = G * m * (T - ambient), written as G * (heat - m * ambient)
            // since heat = m * T.
            (grid.mass.par_iter(), grid.heat.par_iter(), grid.pending_force_y.par_iter_mut())
                .into_par_iter()
                .for_each(|(mass, heat, pending)| {
                    if *mass > 0.0 {
                        *pending += g * (*heat - *mass * ambient);
                    }
                });
        }
    }
}
