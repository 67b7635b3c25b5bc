use crate::domain::config::KernelConfig;
use crate::domain::error::KernelError;
use crate::spatial::grid::{FluidGrid, TransferTable};
use crate::systems::diagnostics::FaultCounters;

use super::UniverseCore;

pub(super) fn create_universe_core(width: u32, height: u32, config: KernelConfig) -> Result<UniverseCore, KernelError> {
    let grid = FluidGrid::from_config(width, height, &config)?;
    let size = grid.size();
    Ok(UniverseCore {
        config,
        grid,
        transfers: TransferTable::new(size),
        faults: FaultCounters::default(),
        forcing: None,
        step: 0,
    })
}
