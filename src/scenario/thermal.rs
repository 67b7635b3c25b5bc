//! Heat-driven scenarios

use crate::domain::color::Rgba;
use crate::simulation::forcing::Forcing;
use crate::spatial::grid::FluidGrid;

/// Continuous heat injection into three cells at the bottom center,
/// tinted so the rising plume is visible.
pub struct HeatPlume {
    pub center_heat: f64,
    pub flank_heat: f64,
}

impl Default for HeatPlume {
    fn default() -> Self {
        Self { center_heat: 40.0, flank_heat: 35.0 }
    }
}

impl Forcing for HeatPlume {
    fn apply(&mut self, grid: &mut FluidGrid, _step: u64) {
        if grid.width() < 3 {
            return;
        }
        let center = grid.width() / 2;
        grid.add_heat(center - 1, 0, self.flank_heat);
        grid.set_color(center - 1, 0, Rgba::ORANGE_RED);
        grid.add_heat(center, 0, self.center_heat);
        grid.set_color(center, 0, Rgba::RED);
        grid.add_heat(center + 1, 0, self.flank_heat);
        grid.set_color(center + 1, 0, Rgba::ORANGE_RED);
    }
}

/// A candle: hot mass fed in at the bottom center with a little upward
/// velocity already on it.
pub struct Candle {
    pub core_mass: f64,
    pub flank_mass: f64,
    pub core_temperature: f64,
    pub flank_temperature: f64,
}

impl Default for Candle {
    fn default() -> Self {
        Self { core_mass: 20.0, flank_mass: 12.0, core_temperature: 40.0, flank_temperature: 35.0 }
    }
}

impl Forcing for Candle {
    fn apply(&mut self, grid: &mut FluidGrid, _step: u64) {
        if grid.width() < 3 {
            return;
        }
        let center = grid.width() / 2;
        grid.add_mass(center - 1, 0, self.flank_mass, self.flank_temperature, Rgba::ORANGE_RED, 0.0, 1.0);
        grid.add_mass(center, 0, self.core_mass, self.core_temperature, Rgba::RED, 0.0, 1.0);
        grid.add_mass(center + 1, 0, self.flank_mass, self.flank_temperature, Rgba::ORANGE_RED, 0.0, 1.0);
    }
}

/// Rayleigh-Benard style floor: the whole bottom row is held hot.
/// https://en.wikipedia.org/wiki/Rayleigh%E2%80%93B%C3%A9nard_convection
pub struct Hotplate {
    pub temperature: f64,
}

impl Default for Hotplate {
    fn default() -> Self {
        Self { temperature: 20.0 }
    }
}

impl Forcing for Hotplate {
    fn apply(&mut self, grid: &mut FluidGrid, _step: u64) {
        for x in 0..grid.width() {
            grid.set_temperature(x, 0, self.temperature);
        }
    }
}

/// Counterpart to [`Hotplate`]: the top row is held cold.
pub struct CooledCeiling {
    pub temperature: f64,
}

impl Default for CooledCeiling {
    fn default() -> Self {
        Self { temperature: 5.0 }
    }
}

impl Forcing for CooledCeiling {
    fn apply(&mut self, grid: &mut FluidGrid, _step: u64) {
        let top = grid.height() - 1;
        for x in 0..grid.width() {
            grid.set_temperature(x, top, self.temperature);
        }
    }
}

/// A burst of very hot mass at one point for the first few steps.
pub struct Explosion {
    pub x: u32,
    pub y: u32,
    pub mass: f64,
    pub temperature: f64,
    pub duration: u64,
}

impl Explosion {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y, mass: 1000.0, temperature: 100.0, duration: 3 }
    }
}

impl Forcing for Explosion {
    fn apply(&mut self, grid: &mut FluidGrid, step: u64) {
        if step < self.duration {
            grid.add_mass(self.x, self.y, self.mass, self.temperature, Rgba::RED, 0.0, 0.0);
        }
    }
}
