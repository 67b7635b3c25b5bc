use crate::domain::color::Rgba;
use crate::domain::config::{KernelConfig, SoloForceLaw};
use crate::domain::error::KernelError;
use crate::spatial::grid::FluidGrid;

use super::forcing::Forcing;
use super::{StepReport, UniverseCore};

/// Public simulation kernel.
///
/// Owns the grid exclusively while a timestep runs; between timesteps
/// readers (renderers, probes) may inspect it through [`Universe::grid`].
pub struct Universe {
    core: UniverseCore,
}

impl Universe {
    /// Create a universe with default configuration.
    pub fn new(width: u32, height: u32) -> Result<Self, KernelError> {
        Ok(Self { core: UniverseCore::new(width, height)? })
    }

    pub fn with_config(width: u32, height: u32, config: KernelConfig) -> Result<Self, KernelError> {
        Ok(Self { core: UniverseCore::with_config(width, height, config)? })
    }

    /// Create a universe from a JSON configuration document.
    pub fn with_config_json(width: u32, height: u32, json: &str) -> Result<Self, KernelError> {
        let config = KernelConfig::from_json(json)?;
        Self::with_config(width, height, config)
    }

    pub fn width(&self) -> u32 { self.core.width() }

    pub fn height(&self) -> u32 { self.core.height() }

    /// Number of completed timesteps.
    pub fn step_index(&self) -> u64 { self.core.step_index() }

    pub fn config(&self) -> &KernelConfig { self.core.config() }

    pub fn grid(&self) -> &FluidGrid { self.core.grid() }

    pub fn grid_mut(&mut self) -> &mut FluidGrid { self.core.grid_mut() }

    /// Install the forcing provider invoked before each timestep.
    pub fn set_forcing(&mut self, forcing: impl Forcing + 'static) {
        self.core.set_forcing(Box::new(forcing));
    }

    pub fn clear_forcing(&mut self) {
        self.core.clear_forcing();
    }

    pub fn set_ambient_temperature(&mut self, temperature: f64) {
        self.core.set_ambient_temperature(temperature);
    }

    pub fn set_solo_force(&mut self, law: SoloForceLaw) {
        self.core.set_solo_force(law);
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.core.set_strict(strict);
    }

    /// Advance the simulation by one timestep.
    pub fn advance_timestep(&mut self) -> Result<StepReport, KernelError> {
        self.core.advance_timestep()
    }

    // === Cell commands (forcing scripts and hosts) ===

    pub fn add_mass(&mut self, x: u32, y: u32, mass: f64, temperature: f64, color: Rgba, velocity_x: f64, velocity_y: f64) {
        self.core.grid_mut().add_mass(x, y, mass, temperature, color, velocity_x, velocity_y);
    }

    pub fn add_heat(&mut self, x: u32, y: u32, delta_heat: f64) {
        self.core.grid_mut().add_heat(x, y, delta_heat);
    }

    pub fn set_temperature(&mut self, x: u32, y: u32, temperature: f64) {
        self.core.grid_mut().set_temperature(x, y, temperature);
    }

    pub fn set_velocity(&mut self, x: u32, y: u32, velocity_x: f64, velocity_y: f64) {
        self.core.grid_mut().set_velocity(x, y, velocity_x, velocity_y);
    }

    pub fn set_color(&mut self, x: u32, y: u32, color: Rgba) {
        self.core.grid_mut().set_color(x, y, color);
    }

    // === Aggregates ===

    pub fn total_mass(&self) -> f64 { self.core.total_mass() }

    pub fn total_heat(&self) -> f64 { self.core.total_heat() }

    pub fn kinetic_energy(&self) -> f64 { self.core.kinetic_energy() }
}
