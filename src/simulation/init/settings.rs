use crate::domain::config::SoloForceLaw;

use super::forcing::Forcing;
use super::UniverseCore;

pub(super) fn set_forcing(core: &mut UniverseCore, forcing: Box<dyn Forcing>) {
    core.forcing = Some(forcing);
}

pub(super) fn clear_forcing(core: &mut UniverseCore) {
    core.forcing = None;
}

pub(super) fn set_ambient_temperature(core: &mut UniverseCore, temperature: f64) {
    core.config.ambient_temperature = temperature;
}

pub(super) fn set_solo_force(core: &mut UniverseCore, law: SoloForceLaw) {
    core.config.solo_force = law;
}

pub(super) fn set_strict(core: &mut UniverseCore, strict: bool) {
    core.config.strict = strict;
}
