//! Scenario - scripted forcing providers
//!
//! Canned [`Forcing`](crate::simulation::forcing::Forcing) implementations
//! that drive classic demonstrations through the grid's public mutation
//! API. The kernel knows nothing about them; a host picks one (or writes
//! its own closure) and installs it on the universe.

mod thermal;
mod wind;

pub use thermal::{Candle, CooledCeiling, Explosion, HeatPlume, Hotplate};
pub use wind::{Breeze, KelvinHelmholtz};
