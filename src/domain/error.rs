//! Kernel error taxonomy
//!
//! Only setup problems are fatal. Numerical faults during a timestep are
//! counted and reported; they become errors only under strict mode.

use thiserror::Error;

use crate::systems::diagnostics::FaultReport;

#[derive(Debug, Error)]
pub enum KernelError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid kernel config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Strict mode only: a timestep produced conservation faults.
    #[error("conservation faults in step {step}: {report}")]
    ConservationFault { step: u64, report: FaultReport },
}
