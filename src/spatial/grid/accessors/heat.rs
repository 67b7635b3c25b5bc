use rayon::prelude::*;

use super::super::FluidGrid;

impl FluidGrid {
    // === Heat / temperature access ===
    #[inline]
    pub fn heat_at(&self, x: u32, y: u32) -> f64 {
        self.heat[self.index(x, y)]
    }

    /// Temperature of the cell at a raw index. Massless cells read as 0.
    #[inline]
    pub fn temperature(&self, idx: usize) -> f64 {
        if self.mass[idx] <= 0.0 {
            0.0
        } else {
            self.heat[idx] / self.mass[idx]
        }
    }

    #[inline]
    pub fn temperature_at(&self, x: u32, y: u32) -> f64 {
        self.temperature(self.index(x, y))
    }

    /// Direct temperature write; heat is rescaled against current mass.
    #[inline]
    pub fn set_temperature(&mut self, x: u32, y: u32, temperature: f64) {
        let idx = self.index(x, y);
        self.heat[idx] = temperature * self.mass[idx];
    }

    /// Immediate heat injection (forcing scripts).
    #[inline]
    pub fn add_heat(&mut self, x: u32, y: u32, delta_heat: f64) {
        let idx = self.index(x, y);
        self.heat[idx] += delta_heat;
    }

    /// Ledgered heat contribution, applied at the heat-finalize phase.
    #[inline]
    pub fn record_heat_change(&mut self, x: u32, y: u32, delta_heat: f64) {
        let idx = self.index(x, y);
        self.pending_heat[idx] += delta_heat;
    }

    /// Heat-finalize phase: flush pending heat into stored heat.
    /// Cell-local, so it runs fully parallel.
    pub fn finalize_heat(&mut self) {
        (self.heat.par_iter_mut(), self.pending_heat.par_iter_mut())
            .into_par_iter()
            .for_each(|(heat, pending)| {
                *heat += *pending;
                *pending = 0.0;
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_is_heat_over_mass() {
        let mut grid = FluidGrid::new(2, 2, 10.0, 10.0).unwrap();
        assert_eq!(grid.temperature_at(0, 0), 10.0);
        grid.add_heat(0, 0, 100.0);
        assert_eq!(grid.temperature_at(0, 0), 20.0);
    }

    #[test]
    fn massless_cell_reads_zero_temperature() {
        let mut grid = FluidGrid::new(2, 2, 0.0, 0.0).unwrap();
        grid.add_heat(0, 0, 50.0);
        assert_eq!(grid.temperature_at(0, 0), 0.0);
        assert_eq!(grid.heat_at(0, 0), 50.0);
    }

    #[test]
    fn pending_heat_lands_only_at_finalize() {
        let mut grid = FluidGrid::new(2, 2, 10.0, 10.0).unwrap();
        grid.record_heat_change(1, 0, 30.0);
        assert_eq!(grid.heat_at(1, 0), 100.0);
        grid.finalize_heat();
        assert_eq!(grid.heat_at(1, 0), 130.0);
        // Ledger cleared
        grid.finalize_heat();
        assert_eq!(grid.heat_at(1, 0), 130.0);
    }
}
