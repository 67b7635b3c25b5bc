//! FluidGrid - Structure of Arrays (SoA) for cache-friendly cell storage
//!
//! Instead of: Vec<Cell>            // poor cache behavior, scattered reads
//! We have:    mass[], heat[], ...  // linear memory, one array per field
//!
//! Each cell carries its live state (mass, heat, force, color) plus a
//! pending ledger. Physics passes only ever record into ledgers; the
//! finalize phases flush them, so the order in which contributions arrive
//! within a phase cannot change the outcome.

use crate::domain::config::KernelConfig;
use crate::domain::color::Rgba;
use crate::domain::error::KernelError;

mod indexing;
mod accessors;
mod transfer_table;

pub use indexing::Direction;
pub(crate) use indexing::clamped_index;
pub use transfer_table::{ShareSet, TransferRecord, TransferTable, STENCIL};

/// SoA grid - all cell data in separate arrays
pub struct FluidGrid {
    width: u32,
    height: u32,
    size: usize,

    // Live state - each property in its own contiguous array
    pub mass: Vec<f64>,
    pub heat: Vec<f64>, // total heat; temperature = heat / mass
    pub force_x: Vec<f64>,
    pub force_y: Vec<f64>,
    pub colors: Vec<Rgba>,

    // Pending ledger: diffusive heat and forces, flushed by the finalize
    // phases once per step
    pub pending_heat: Vec<f64>,
    pub pending_force_x: Vec<f64>,
    pub pending_force_y: Vec<f64>,

    // Pending ledger: mass parcels. A parcel carries the heat, momentum
    // and (mass-premultiplied) color of the mass that moves with it, and
    // the whole group applies in the mass-apply phase.
    pub parcel_mass: Vec<f64>,
    pub parcel_heat: Vec<f64>,
    pub parcel_force_x: Vec<f64>,
    pub parcel_force_y: Vec<f64>,
    pub parcel_color: Vec<Rgba>,
    pub parcel_color_mass: Vec<f64>,
}

impl FluidGrid {
    /// Create a grid with every cell at the given default mass and
    /// temperature, zero velocity and transparent color.
    pub fn new(width: u32, height: u32, default_mass: f64, default_temperature: f64) -> Result<Self, KernelError> {
        if width == 0 || height == 0 {
            return Err(KernelError::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize);
        let mass = default_mass.max(0.0);

        Ok(Self {
            width,
            height,
            size,
            mass: vec![mass; size],
            heat: vec![mass * default_temperature; size],
            force_x: vec![0.0; size],
            force_y: vec![0.0; size],
            colors: vec![Rgba::TRANSPARENT; size],
            pending_heat: vec![0.0; size],
            pending_force_x: vec![0.0; size],
            pending_force_y: vec![0.0; size],
            parcel_mass: vec![0.0; size],
            parcel_heat: vec![0.0; size],
            parcel_force_x: vec![0.0; size],
            parcel_force_y: vec![0.0; size],
            parcel_color: vec![Rgba::TRANSPARENT; size],
            parcel_color_mass: vec![0.0; size],
        })
    }

    pub fn from_config(width: u32, height: u32, config: &KernelConfig) -> Result<Self, KernelError> {
        Self::new(width, height, config.default_mass, config.default_temperature)
    }
}
