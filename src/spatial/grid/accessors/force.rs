use rayon::prelude::*;

use super::super::FluidGrid;

impl FluidGrid {
    // === Force / velocity access ===
    //
    // Velocity is derived: deltaX = forceX / mass. A massless cell does
    // not move no matter how much force its ledger has absorbed.
    #[inline]
    pub fn velocity_x(&self, idx: usize) -> f64 {
        if self.mass[idx] <= 0.0 {
            0.0
        } else {
            self.force_x[idx] / self.mass[idx]
        }
    }

    #[inline]
    pub fn velocity_y(&self, idx: usize) -> f64 {
        if self.mass[idx] <= 0.0 {
            0.0
        } else {
            self.force_y[idx] / self.mass[idx]
        }
    }

    #[inline]
    pub fn velocity_x_at(&self, x: u32, y: u32) -> f64 {
        self.velocity_x(self.index(x, y))
    }

    #[inline]
    pub fn velocity_y_at(&self, x: u32, y: u32) -> f64 {
        self.velocity_y(self.index(x, y))
    }

    /// Direct velocity write; stored as force against current mass.
    pub fn set_velocity(&mut self, x: u32, y: u32, velocity_x: f64, velocity_y: f64) {
        let idx = self.index(x, y);
        self.force_x[idx] = velocity_x * self.mass[idx];
        self.force_y[idx] = velocity_y * self.mass[idx];
    }

    /// Ledgered force contribution, applied at the force-finalize phase.
    #[inline]
    pub fn record_force_change(&mut self, x: u32, y: u32, delta_force_x: f64, delta_force_y: f64) {
        let idx = self.index(x, y);
        self.pending_force_x[idx] += delta_force_x;
        self.pending_force_y[idx] += delta_force_y;
    }

    /// Force-finalize phase: flush pending forces into stored force.
    /// Cell-local, so it runs fully parallel.
    pub fn finalize_force(&mut self) {
        (
            self.force_x.par_iter_mut(),
            self.pending_force_x.par_iter_mut(),
            self.force_y.par_iter_mut(),
            self.pending_force_y.par_iter_mut(),
        )
            .into_par_iter()
            .for_each(|(fx, pfx, fy, pfy)| {
                *fx += *pfx;
                *pfx = 0.0;
                *fy += *pfy;
                *pfy = 0.0;
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_derives_from_force_and_mass() {
        let mut grid = FluidGrid::new(2, 2, 10.0, 10.0).unwrap();
        grid.set_velocity(0, 0, 3.0, -1.5);
        assert_eq!(grid.velocity_x_at(0, 0), 3.0);
        assert_eq!(grid.velocity_y_at(0, 0), -1.5);
        assert_eq!(grid.force_x[0], 30.0);
    }

    #[test]
    fn massless_cell_never_moves() {
        let mut grid = FluidGrid::new(2, 2, 0.0, 0.0).unwrap();
        grid.record_force_change(0, 0, 5.0, 5.0);
        grid.finalize_force();
        assert_eq!(grid.force_x[0], 5.0);
        assert_eq!(grid.velocity_x_at(0, 0), 0.0);
    }

    #[test]
    fn pending_force_lands_only_at_finalize() {
        let mut grid = FluidGrid::new(2, 2, 10.0, 10.0).unwrap();
        grid.record_force_change(1, 1, 20.0, -10.0);
        assert_eq!(grid.velocity_x_at(1, 1), 0.0);
        grid.finalize_force();
        assert_eq!(grid.velocity_x_at(1, 1), 2.0);
        assert_eq!(grid.velocity_y_at(1, 1), -1.0);
    }
}
