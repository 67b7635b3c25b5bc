//! Fluidica Engine - Eulerian grid fluid simulation kernel
//!
//! A fixed grid of fluid cells (mass, heat, force, color) advanced one
//! timestep at a time by an ordered phase pipeline: external forcing,
//! solo effects, neighbor interactions, ledger finalization, bilinear
//! advection, and mass application.
//!
//! Architecture:
//! - domain/     - Value types, configuration, errors
//! - spatial/    - Position type and the SoA cell grid
//! - systems/    - Physics passes and diagnostics
//! - simulation/ - Orchestration only
//! - scenario/   - Scripted forcing providers

pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod scenario;

// Compatibility re-exports (keeps embedding paths short)
pub use domain::color::Rgba;
pub use domain::config::{KernelConfig, SoloForceLaw};
pub use domain::error::KernelError;
pub use simulation::forcing::Forcing;
pub use simulation::{StepReport, Universe};
pub use spatial::grid::{Direction, FluidGrid};
pub use spatial::position::Position;
pub use systems::diagnostics::FaultReport;

/// Get engine version
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
