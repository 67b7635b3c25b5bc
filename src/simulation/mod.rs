//! Universe - simulation kernel orchestration
//!
//! Refactored for SOLID principles:
//! - Single Responsibility: the kernel only orchestrates; every physics
//!   pass lives in systems/
//! - Open/Closed: forcing providers and the solo force law are injected,
//!   not hardcoded
//!
//! The kernel has exactly one operational state: ready to advance. Each
//! `advance_timestep` call runs the full phase pipeline to completion;
//! between calls external readers may inspect the grid freely.

use crate::domain::config::{KernelConfig, SoloForceLaw};
use crate::domain::error::KernelError;
use crate::spatial::grid::{FluidGrid, TransferTable};
use crate::systems::diagnostics::{self, FaultCounters, FaultReport};

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
mod facade;
pub mod forcing;

pub use facade::Universe;

use forcing::Forcing;

/// Outcome of one completed timestep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Index of the step that just ran.
    pub step: u64,
    /// Numerical faults counted during the step.
    pub faults: FaultReport,
}

/// The simulation kernel core
pub struct UniverseCore {
    config: KernelConfig,
    grid: FluidGrid,
    transfers: TransferTable,
    faults: FaultCounters,
    forcing: Option<Box<dyn Forcing>>,

    // State
    step: u64,
}

impl UniverseCore {
    /// Create a kernel over a fresh grid with default configuration.
    pub fn new(width: u32, height: u32) -> Result<Self, KernelError> {
        init::create_universe_core(width, height, KernelConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: KernelConfig) -> Result<Self, KernelError> {
        init::create_universe_core(width, height, config)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn step_index(&self) -> u64 { self.step }

    pub fn grid(&self) -> &FluidGrid { &self.grid }

    pub fn grid_mut(&mut self) -> &mut FluidGrid { &mut self.grid }

    pub fn config(&self) -> &KernelConfig { &self.config }

    pub fn set_forcing(&mut self, forcing: Box<dyn Forcing>) {
        settings::set_forcing(self, forcing);
    }

    pub fn clear_forcing(&mut self) {
        settings::clear_forcing(self);
    }

    pub fn set_ambient_temperature(&mut self, temperature: f64) {
        settings::set_ambient_temperature(self, temperature);
    }

    pub fn set_solo_force(&mut self, law: SoloForceLaw) {
        settings::set_solo_force(self, law);
    }

    pub fn set_strict(&mut self, strict: bool) {
        settings::set_strict(self, strict);
    }

    /// Advance the simulation by one timestep.
    ///
    /// Deterministic given the grid state and the forcing provider; in
    /// strict mode a step that counted numerical faults returns an error
    /// after completing (the grid is still in its post-step state).
    pub fn advance_timestep(&mut self) -> Result<StepReport, KernelError> {
        let report = step::step(self);
        if self.config.strict && !report.faults.is_clean() {
            return Err(KernelError::ConservationFault { step: report.step, report: report.faults });
        }
        Ok(report)
    }

    // === Aggregates for hosts and tests ===

    pub fn total_mass(&self) -> f64 {
        diagnostics::total_mass(&self.grid)
    }

    pub fn total_heat(&self) -> f64 {
        diagnostics::total_heat(&self.grid)
    }

    pub fn kinetic_energy(&self) -> f64 {
        diagnostics::kinetic_energy(&self.grid)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
