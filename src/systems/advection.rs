//! Advection - semi-Lagrangian transport along each cell's own velocity
//!
//! Forward pass: project a cell one step along its velocity and split the
//! landing point across up to four destination cells by bilinear area
//! weighting. Reverse pass: the same math on the negated velocity finds
//! the cells that would have flowed into this one, and registers pulls
//! from them. https://en.wikipedia.org/wiki/Bilinear_interpolation
//!
//! Both passes only fill the cell's own slot in the transfer table; the
//! table's scatter pass routes reverse shares to their origins afterwards.

use rayon::prelude::*;

use crate::domain::config::{CELL_AREA, RATIO_TOLERANCE, SPACE};
use crate::spatial::grid::{clamped_index, FluidGrid, ShareSet, TransferTable};
use crate::systems::diagnostics::FaultCounters;

/// Advection phase: compute forward and reverse shares for every cell.
/// Cells with exactly zero velocity on both axes are skipped outright.
pub fn register_advection(grid: &FluidGrid, table: &mut TransferTable, faults: &FaultCounters) {
    let width = grid.width();
    let height = grid.height();
    let w = width as usize;
    let mass = &grid.mass;
    let force_x = &grid.force_x;
    let force_y = &grid.force_y;

    (table.forward.par_chunks_mut(w), table.reverse.par_chunks_mut(w))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, (forward_row, reverse_row))| {
            for x in 0..w {
                let i = y * w + x;
                forward_row[x].clear();
                reverse_row[x].clear();

                let m = mass[i];
                if m <= 0.0 {
                    continue;
                }
                let dx = force_x[i] / m;
                let dy = force_y[i] / m;
                if dx == 0.0 && dy == 0.0 {
                    continue;
                }

                bilinear_shares(width, height, x as u32, y as u32, dx, dy, i, faults, &mut forward_row[x]);
                bilinear_shares(width, height, x as u32, y as u32, -dx, -dy, i, faults, &mut reverse_row[x]);
            }
        });
}

/// Split the displacement (dx, dy) from cell (x, y) across the four cells
/// around the displaced point. Each ratio is the area of the opposite
/// sub-rectangle over the cell area, so a valid quadruple sums to 1 with
/// every entry in [0, 1]; anything else is a counted fault.
///
/// Targets past the border clamp to the nearest edge cell, and shares that
/// clamp back onto the source cell are dropped.
pub(crate) fn bilinear_shares(
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    dx: f64,
    dy: f64,
    source: usize,
    faults: &FaultCounters,
    out: &mut ShareSet,
) {
    let x_offset = dx.trunc() as i64 / SPACE as i64;
    let y_offset = dy.trunc() as i64 / SPACE as i64;
    let dx_positive = dx > 0.0;
    let dy_positive = dy > 0.0;

    let t1x = lesser_target_index(x, x_offset, dx_positive);
    let t1y = lesser_target_index(y, y_offset, dy_positive);
    let t2x = t1x + 1;
    let t2y = t1y + 1;

    // Position of the displaced point inside its destination cell.
    let x_pos = if dx_positive { dx % SPACE } else { SPACE + dx % SPACE };
    let y_pos = if dy_positive { dy % SPACE } else { SPACE + dy % SPACE };

    let bottom_left = (SPACE - x_pos) * (SPACE - y_pos) / CELL_AREA;
    let bottom_right = x_pos * (SPACE - y_pos) / CELL_AREA;
    let top_left = (SPACE - x_pos) * y_pos / CELL_AREA;
    let top_right = x_pos * y_pos / CELL_AREA;

    let sum = bottom_left + bottom_right + top_left + top_right;
    if !((sum - 1.0).abs() <= RATIO_TOLERANCE) {
        faults.record_ratio_sum_mismatch();
    }

    let shares = [
        ((t1x, t1y), bottom_left),
        ((t2x, t1y), bottom_right),
        ((t1x, t2y), top_left),
        ((t2x, t2y), top_right),
    ];
    for ((tx, ty), ratio) in shares {
        if !(0.0..=1.0).contains(&ratio) {
            faults.record_ratio_out_of_range();
            continue;
        }
        if ratio == 0.0 {
            continue;
        }
        let target = clamped_index(width, height, tx, ty);
        if target == source {
            continue; // no transfers to self
        }
        out.push(target as u32, ratio);
    }
}

/// Index of the lesser (bottom/left) cell of the destination pair along
/// one axis.
#[inline]
fn lesser_target_index(index: u32, offset: i64, direction_positive: bool) -> i64 {
    index as i64 + offset + if direction_positive { 0 } else { -1 }
}
