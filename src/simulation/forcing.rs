//! Forcing provider contract
//!
//! An injected collaborator invoked once per timestep, before any physics
//! phase runs. It may mutate any cell's mass, heat, velocity or color
//! through the grid's public API; the kernel observes no return value.

use crate::spatial::grid::FluidGrid;

pub trait Forcing: Send {
    fn apply(&mut self, grid: &mut FluidGrid, step: u64);
}

/// Plain closures work as forcing providers.
impl<F> Forcing for F
where
    F: FnMut(&mut FluidGrid, u64) + Send,
{
    fn apply(&mut self, grid: &mut FluidGrid, step: u64) {
        self(grid, step)
    }
}
