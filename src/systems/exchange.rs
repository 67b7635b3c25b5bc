//! Neighbor interactions - pairwise diffusion across cardinal adjacencies
//!
//! Four directional passes. Every adjacency is evaluated from both
//! endpoints, but each endpoint records only the effect on itself, so the
//! pass is free of cross-cell writes and parallelizes by row. Pair totals
//! come out identical to a formulation where the hotter/denser side wrote
//! both ledgers.
//!
//! Heat: Newton's-law-of-cooling style conduction, capped by the
//! 4-neighbor divisor so a cell cannot shed more than its full heat in
//! one step. https://en.wikipedia.org/wiki/Newton%27s_law_of_cooling
//!
//! Force: higher-pressure neighbors push this cell away along the
//! connecting axis, with ideal-gas pressure p = k * m * T.

use rayon::prelude::*;

use crate::domain::config::{KernelConfig, FUZZ, MAX_NEIGHBORS};
use crate::spatial::grid::{Direction, FluidGrid};

/// Neighbor-interactions phase.
pub fn apply_neighbor_interactions(grid: &mut FluidGrid, config: &KernelConfig) {
    let width = grid.width() as i64;
    let height = grid.height() as i64;
    let w = grid.width() as usize;
    let conductivity = config.conductivity;
    let gas_constant = config.gas_constant;

    let mass = &grid.mass;
    let heat = &grid.heat;
    let temperature = |i: usize| if mass[i] <= 0.0 { 0.0 } else { heat[i] / mass[i] };
    let pressure = |i: usize| gas_constant * mass[i] * temperature(i);

    (
        grid.pending_heat.par_chunks_mut(w),
        grid.pending_force_x.par_chunks_mut(w),
        grid.pending_force_y.par_chunks_mut(w),
    )
        .into_par_iter()
        .enumerate()
        .for_each(|(y, (pending_heat, pending_force_x, pending_force_y))| {
            for x in 0..w {
                let i = y * w + x;
                let temp_i = temperature(i);
                let pressure_i = pressure(i);

                for direction in Direction::ALL {
                    let (ox, oy) = direction.offset();
                    let nx = x as i64 + ox;
                    let ny = y as i64 + oy;
                    if nx < 0 || ny < 0 || nx >= width || ny >= height {
                        continue; // border cells simply have fewer pairs
                    }
                    let n = ny as usize * w + nx as usize;

                    // Conduction: the hotter side's mass sets the rate, and
                    // each endpoint books its own half of the pair.
                    let diff = temp_i - temperature(n);
                    if diff > FUZZ {
                        pending_heat[x] -= mass[i] * diff * conductivity / MAX_NEIGHBORS;
                    } else if diff < -FUZZ {
                        pending_heat[x] += mass[n] * -diff * conductivity / MAX_NEIGHBORS;
                    }

                    // Pressure: a denser/hotter neighbor pushes this cell
                    // away from it along the shared axis.
                    let pressure_diff = pressure(n) - pressure_i;
                    if pressure_diff > 0.0 {
                        pending_force_x[x] -= ox as f64 * pressure_diff;
                        pending_force_y[x] -= oy as f64 * pressure_diff;
                    }
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::KernelConfig;
    use crate::systems::diagnostics::total_heat;

    #[test]
    fn conduction_conserves_heat_and_stays_symmetric() {
        let config = KernelConfig::default();
        let mut grid = FluidGrid::new(3, 3, 10.0, 10.0).unwrap();
        grid.set_temperature(1, 1, 40.0);
        let before = total_heat(&grid);

        apply_neighbor_interactions(&mut grid, &config);
        grid.finalize_heat();

        let after = total_heat(&grid);
        assert!((before - after).abs() < FUZZ, "heat drifted: {before} -> {after}");

        // The four cardinal neighbors of the hot center heated identically.
        let up = grid.temperature_at(1, 2);
        assert_eq!(grid.temperature_at(1, 0), up);
        assert_eq!(grid.temperature_at(0, 1), up);
        assert_eq!(grid.temperature_at(2, 1), up);
        assert!(up > 10.0);

        // Corners are diagonal, so they stay untouched.
        assert_eq!(grid.temperature_at(0, 0), 10.0);
        assert_eq!(grid.temperature_at(2, 2), 10.0);
    }

    #[test]
    fn no_exchange_at_equal_temperature() {
        let config = KernelConfig::default();
        let mut grid = FluidGrid::new(2, 1, 10.0, 10.0).unwrap();
        apply_neighbor_interactions(&mut grid, &config);
        grid.finalize_heat();
        assert_eq!(grid.temperature_at(0, 0), 10.0);
        assert_eq!(grid.temperature_at(1, 0), 10.0);
    }

    #[test]
    fn pressure_pushes_away_from_dense_cell() {
        let config = KernelConfig::default();
        let mut grid = FluidGrid::new(3, 1, 10.0, 10.0).unwrap();
        grid.set_mass(1, 0, 40.0);
        grid.set_temperature(1, 0, 10.0);

        apply_neighbor_interactions(&mut grid, &config);

        // Left neighbor pushed further left, right neighbor further right.
        assert!(grid.pending_force_x[grid.index(0, 0)] < 0.0);
        assert!(grid.pending_force_x[grid.index(2, 0)] > 0.0);
        // The dense cell itself feels no push from its lighter neighbors.
        assert_eq!(grid.pending_force_x[grid.index(1, 0)], 0.0);
        // Nothing vertical in a one-row grid.
        assert_eq!(grid.pending_force_y[grid.index(0, 0)], 0.0);
    }

    #[test]
    fn ledger_only_no_state_change_before_finalize() {
        let config = KernelConfig::default();
        let mut grid = FluidGrid::new(3, 3, 10.0, 10.0).unwrap();
        grid.set_temperature(1, 1, 40.0);
        grid.set_mass(1, 2, 40.0);

        let mass_before = grid.mass.clone();
        let heat_before = grid.heat.clone();
        let force_before = grid.force_x.clone();

        apply_neighbor_interactions(&mut grid, &config);

        assert_eq!(grid.mass, mass_before);
        assert_eq!(grid.heat, heat_before);
        assert_eq!(grid.force_x, force_before);
    }
}
