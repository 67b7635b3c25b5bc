//! Kernel configuration and physical constants
//!
//! Cell geometry and numerical epsilons are fixed constants; everything a
//! host application may want to tune lives in [`KernelConfig`], which is
//! serde-backed so hosts can ship configs as JSON.

use serde::{Deserialize, Serialize};

/// Spacing between cell centers. Cells sit on a fixed grid, so every
/// derived spatial position is a multiple of this.
pub const SPACE: f64 = 5.0;

/// Area of one cell. Bilinear transfer ratios are sub-rectangle areas
/// divided by this.
pub const CELL_AREA: f64 = SPACE * SPACE;

/// Numerical fuzz used when comparing masses and temperatures.
pub const FUZZ: f64 = 1e-7;

/// Allowed deviation of a bilinear ratio set from an exact 1.0 sum.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Maximum number of immediate neighbors a cell exchanges with.
/// Dividing pairwise transfers by this guarantees a cell never sheds more
/// than 100% of a quantity across all interactions in one step.
pub const MAX_NEIGHBORS: f64 = 4.0;

/// Force law applied to each cell from its own state alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoloForceLaw {
    /// Uniform downward pull: `F_y = -G * mass`.
    Gravity,
    /// Temperature-differential lift: `F_y = G * mass * (T - T_ambient)`.
    /// Hot cells rise, cold cells sink.
    Buoyancy,
}

/// Tunable kernel parameters.
///
/// `Default` gives the reference values; deserialization fills missing
/// fields from those defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Scale of the solo force law.
    pub gravitational_constant: f64,
    /// Ideal-gas style constant: pressure = gas_constant * mass * temperature.
    pub gas_constant: f64,
    /// Thermal conductivity for pairwise heat diffusion.
    pub conductivity: f64,
    /// Reference temperature for buoyancy.
    pub ambient_temperature: f64,
    /// Mass every cell starts with.
    pub default_mass: f64,
    /// Temperature every cell starts with.
    pub default_temperature: f64,
    /// Which solo force law to run in the solo-effects phase.
    pub solo_force: SoloForceLaw,
    /// When true, a timestep with numerical faults returns an error
    /// instead of a warning report.
    pub strict: bool,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 1e-4,
            gas_constant: 0.02,
            conductivity: 1e-4,
            ambient_temperature: 10.0,
            default_mass: 10.0,
            default_temperature: 10.0,
            solo_force: SoloForceLaw::Buoyancy,
            strict: false,
        }
    }
}

impl KernelConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_json() {
        let config = KernelConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = KernelConfig::from_json(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = KernelConfig::from_json(r#"{"strict": true, "solo_force": "gravity"}"#).unwrap();
        assert!(config.strict);
        assert_eq!(config.solo_force, SoloForceLaw::Gravity);
        assert_eq!(config.default_mass, KernelConfig::default().default_mass);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(KernelConfig::from_json("{not json}").is_err());
    }
}
