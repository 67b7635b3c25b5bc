//! Velocity-driven scenarios

use crate::domain::color::Rgba;
use crate::simulation::forcing::Forcing;
use crate::spatial::grid::FluidGrid;

/// Steady horizontal wind blown in at two cells on the left edge.
pub struct Breeze {
    pub speed: f64,
}

impl Default for Breeze {
    fn default() -> Self {
        Self { speed: 3.0 }
    }
}

impl Forcing for Breeze {
    fn apply(&mut self, grid: &mut FluidGrid, _step: u64) {
        let y = grid.height() * 2 / 3;
        grid.set_velocity(0, y, self.speed, 0.0);
        grid.set_color(0, y, Rgba::WHITE);
        if y + 1 < grid.height() {
            grid.set_velocity(0, y + 1, self.speed, 0.0);
            grid.set_color(0, y + 1, Rgba::WHITE);
        }
    }
}

/// Opposed shear streams: cool mass drifting left along the bottom third
/// from the right edge, wind blowing right along the top third from the
/// left edge.
/// https://en.wikipedia.org/wiki/Kelvin%E2%80%93Helmholtz_instability
pub struct KelvinHelmholtz {
    pub stream_mass: f64,
    pub stream_temperature: f64,
    pub stream_speed: f64,
    pub wind_speed: f64,
}

impl Default for KelvinHelmholtz {
    fn default() -> Self {
        Self { stream_mass: 2.0, stream_temperature: 1.0, stream_speed: 2.0, wind_speed: 3.0 }
    }
}

impl Forcing for KelvinHelmholtz {
    fn apply(&mut self, grid: &mut FluidGrid, _step: u64) {
        let right = grid.width() - 1;
        for y in 0..grid.height() {
            if y < grid.height() / 3 {
                grid.add_mass(right, y, self.stream_mass, self.stream_temperature, Rgba::BLUE, -self.stream_speed, 0.0);
            } else if y > grid.height() * 2 / 3 {
                grid.set_velocity(0, y, self.wind_speed, 0.0);
                grid.set_color(0, y, Rgba::WHITE);
            }
        }
    }
}
