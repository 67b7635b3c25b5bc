//! One timestep of the phase pipeline
//!
//! Phase order is load-bearing. Every phase runs over the whole grid
//! before the next begins (each call below returns only once its parallel
//! pass has joined, which is the full-grid barrier), and the finalize
//! phases must see every ledger contribution from the phases before them:
//!
//! 1. forcing              - injected provider mutates the grid
//! 2. solo effects         - own-state forces into own ledger
//! 3. neighbor exchange    - pairwise diffusion into own ledger
//! 4. heat finalize        - ledger -> heat
//! 5. force finalize       - ledger -> force (velocity)
//! 6. advection            - forward/reverse share registration
//! 7. transfer finalize    - scatter + ratios -> absolute parcels
//! 8. mass apply           - parcels -> mass/heat/momentum/color

use crate::systems::{advection, exchange, solo, transfer};

use super::{StepReport, UniverseCore};

pub(super) fn step(core: &mut UniverseCore) -> StepReport {
    if let Some(forcing) = core.forcing.as_mut() {
        forcing.apply(&mut core.grid, core.step);
    }

    solo::apply_solo_effects(&mut core.grid, &core.config);
    exchange::apply_neighbor_interactions(&mut core.grid, &core.config);

    core.grid.finalize_heat();
    core.grid.finalize_force();

    advection::register_advection(&core.grid, &mut core.transfers, &core.faults);
    core.transfers.scatter();
    transfer::finalize_mass_transfers(&mut core.grid, &core.transfers);
    transfer::apply_mass_transfers(&mut core.grid, &core.faults);

    let faults = core.faults.take();
    if !faults.is_clean() {
        log::warn!("numerical faults in step {}: {}", core.step, faults);
    }

    let report = StepReport { step: core.step, faults };
    core.step += 1;
    report
}
