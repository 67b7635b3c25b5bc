//! Mass-transfer finalize and apply
//!
//! Finalize walks every source cell's accumulated transfer requests and
//! turns the relative ratios into absolute parcels. A source asked for
//! more than 100% of itself has every request rescaled by the total, so
//! it ships exactly its own contents; a source asked for less ships the
//! full requested fractions unscaled (scaling those up would manufacture
//! motion that was never requested). Parcels carry the source's
//! temperature, momentum and ink color.
//!
//! Apply then folds the parcels into live state, one cell at a time, so
//! it parallelizes freely.

use rayon::prelude::*;

use crate::domain::config::FUZZ;
use crate::spatial::grid::{FluidGrid, TransferTable};
use crate::systems::diagnostics::FaultCounters;

/// Mass-transfer finalize phase: convert each source's accumulated
/// ratios into parcel ledger entries on the source and its targets.
///
/// Sequential by design: parcels touch both endpoints of every transfer,
/// and this single-threaded walk is the race-free reduction that pairs
/// with the parallel share computation before it.
pub fn finalize_mass_transfers(grid: &mut FluidGrid, table: &TransferTable) {
    for source in 0..grid.size() {
        let records = table.records(source);
        if records.is_empty() {
            continue;
        }
        let mass = grid.mass[source];
        if mass <= 0.0 {
            continue; // nothing to ship
        }

        let temperature = grid.temperature(source);
        let velocity_x = grid.velocity_x(source);
        let velocity_y = grid.velocity_y(source);
        let color = grid.colors[source];

        let total: f64 = records.iter().map(|r| r.ratio).sum();
        let scale = if total > 1.0 { 1.0 / total } else { 1.0 };

        for record in records {
            let moved = mass * record.ratio * scale;
            if moved <= 0.0 {
                continue;
            }
            let target = record.target as usize;

            grid.parcel_mass[source] -= moved;
            grid.parcel_heat[source] -= moved * temperature;
            grid.parcel_force_x[source] -= moved * velocity_x;
            grid.parcel_force_y[source] -= moved * velocity_y;

            grid.parcel_mass[target] += moved;
            grid.parcel_heat[target] += moved * temperature;
            grid.parcel_force_x[target] += moved * velocity_x;
            grid.parcel_force_y[target] += moved * velocity_y;
            grid.parcel_color[target].accumulate(color, moved);
            grid.parcel_color_mass[target] += moved;
        }
    }
}

/// Mass-apply phase: land every parcel. Mass that would go negative past
/// the fuzz is a counted fault and clamps to zero; a cell dropping to
/// zero mass loses its heat and force with it.
pub fn apply_mass_transfers(grid: &mut FluidGrid, faults: &FaultCounters) {
    (
        grid.mass.par_iter_mut(),
        grid.heat.par_iter_mut(),
        grid.force_x.par_iter_mut(),
        grid.force_y.par_iter_mut(),
        grid.colors.par_iter_mut(),
        grid.parcel_mass.par_iter_mut(),
        grid.parcel_heat.par_iter_mut(),
        grid.parcel_force_x.par_iter_mut(),
        grid.parcel_force_y.par_iter_mut(),
        grid.parcel_color.par_iter_mut(),
        grid.parcel_color_mass.par_iter_mut(),
    )
        .into_par_iter()
        .for_each(|(mass, heat, force_x, force_y, color, p_mass, p_heat, p_fx, p_fy, p_color, p_color_mass)| {
            let new_mass = *mass + *p_mass;
            if new_mass < -FUZZ {
                faults.record_negative_mass();
            }
            if new_mass <= FUZZ {
                *mass = 0.0;
                *heat = 0.0;
                *force_x = 0.0;
                *force_y = 0.0;
            } else {
                *mass = new_mass;
                *heat += *p_heat;
                *force_x += *p_fx;
                *force_y += *p_fy;
                if *p_color_mass > 0.0 {
                    let arriving = p_color.scaled(1.0 / *p_color_mass);
                    *color = color.blend(arriving, *p_color_mass / new_mass);
                }
            }

            *p_mass = 0.0;
            *p_heat = 0.0;
            *p_fx = 0.0;
            *p_fy = 0.0;
            *p_color = Default::default();
            *p_color_mass = 0.0;
        });
}
