use crate::domain::color::Rgba;

use super::super::FluidGrid;

impl FluidGrid {
    // === Mass access ===
    #[inline]
    pub fn mass_at(&self, x: u32, y: u32) -> f64 {
        self.mass[self.index(x, y)]
    }

    /// Direct mass write. Negative values clamp to zero.
    #[inline]
    pub fn set_mass(&mut self, x: u32, y: u32, mass: f64) {
        let idx = self.index(x, y);
        self.mass[idx] = mass.max(0.0);
    }

    /// Record an incoming mass parcel. The mass arrives with its own
    /// temperature, velocity and ink color, and lands together with all
    /// other parcels at the mass-apply phase of the current step.
    pub fn add_mass(&mut self, x: u32, y: u32, mass: f64, temperature: f64, color: Rgba, velocity_x: f64, velocity_y: f64) {
        if mass <= 0.0 {
            return;
        }
        let idx = self.index(x, y);
        self.parcel_mass[idx] += mass;
        self.parcel_heat[idx] += mass * temperature;
        self.parcel_force_x[idx] += mass * velocity_x;
        self.parcel_force_y[idx] += mass * velocity_y;
        self.parcel_color[idx].accumulate(color, mass);
        self.parcel_color_mass[idx] += mass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_mass_clamps_negative() {
        let mut grid = FluidGrid::new(2, 2, 10.0, 10.0).unwrap();
        grid.set_mass(0, 0, -5.0);
        assert_eq!(grid.mass_at(0, 0), 0.0);
    }

    #[test]
    fn add_mass_stays_pending_until_applied() {
        let mut grid = FluidGrid::new(2, 2, 0.0, 0.0).unwrap();
        grid.add_mass(1, 1, 2.0, 40.0, Rgba::RED, 0.0, 1.0);
        // Nothing observable yet: the parcel is only a ledger entry.
        assert_eq!(grid.mass_at(1, 1), 0.0);
        let idx = grid.index(1, 1);
        assert_eq!(grid.parcel_mass[idx], 2.0);
        assert_eq!(grid.parcel_heat[idx], 80.0);
        assert_eq!(grid.parcel_force_y[idx], 2.0);
    }

    #[test]
    fn add_mass_ignores_non_positive() {
        let mut grid = FluidGrid::new(2, 2, 0.0, 0.0).unwrap();
        grid.add_mass(0, 0, 0.0, 40.0, Rgba::RED, 0.0, 0.0);
        grid.add_mass(0, 0, -1.0, 40.0, Rgba::RED, 0.0, 0.0);
        assert_eq!(grid.parcel_mass[0], 0.0);
    }
}
