use super::*;
use crate::domain::color::Rgba;
use crate::domain::config::FUZZ;

fn settled_config() -> KernelConfig {
    // Empty, ambient-temperature grid: nothing should move on its own.
    KernelConfig { default_mass: 0.0, default_temperature: 10.0, ..KernelConfig::default() }
}

#[test]
fn step_counter_increments_per_timestep() {
    let mut core = UniverseCore::new(4, 4).unwrap();
    assert_eq!(core.step_index(), 0);
    core.advance_timestep().unwrap();
    core.advance_timestep().unwrap();
    assert_eq!(core.step_index(), 2);
}

#[test]
fn forcing_sees_the_running_step_index() {
    let mut core = UniverseCore::new(2, 2).unwrap();
    core.set_forcing(Box::new(|grid: &mut FluidGrid, step: u64| {
        grid.add_heat(0, 0, step as f64);
    }));
    let heat_before = core.total_heat();
    for _ in 0..3 {
        core.advance_timestep().unwrap();
    }
    // 0 + 1 + 2 heat injected across three steps; diffusion and advection
    // spread it around but the total stays accounted for.
    assert!((core.total_heat() - heat_before - 3.0).abs() < 1e-9);
}

#[test]
fn equilibrium_grid_is_a_fixed_point() {
    // Uniform mass at ambient temperature, zero velocity, no forcing.
    let mut core = UniverseCore::new(6, 6).unwrap();
    let mass_before = core.grid().mass.clone();
    let heat_before = core.grid().heat.clone();

    for _ in 0..5 {
        let report = core.advance_timestep().unwrap();
        assert!(report.faults.is_clean());
    }

    assert_eq!(core.grid().mass, mass_before);
    assert_eq!(core.grid().heat, heat_before);
}

#[test]
fn injected_plume_spreads_on_the_second_step() {
    // 1x3 column, empty grid. Mass injected into the center at +30 over
    // ambient: step one lands the parcel, step two advects upward via the
    // buoyancy the temperature differential established.
    let mut core = UniverseCore::with_config(1, 3, settled_config()).unwrap();
    let ambient = core.config().ambient_temperature;
    core.set_forcing(Box::new(move |grid: &mut FluidGrid, step: u64| {
        if step == 0 {
            grid.add_mass(0, 1, 2.0, ambient + 30.0, Rgba::RED, 0.0, 0.0);
        }
    }));

    core.advance_timestep().unwrap();
    assert_eq!(core.grid().mass_at(0, 1), 2.0);
    assert_eq!(core.grid().mass_at(0, 0), 0.0);
    assert_eq!(core.grid().mass_at(0, 2), 0.0);
    assert_eq!(core.grid().velocity_y_at(0, 1), 0.0);

    core.advance_timestep().unwrap();
    // Hot center now rises; the cell above received mass through advection.
    assert!(core.grid().mass_at(0, 2) > 0.0, "no mass reached the upper neighbor");
    assert!(core.grid().mass_at(0, 1) < 2.0);
    assert!((core.total_mass() - 2.0).abs() < FUZZ);
}

#[test]
fn strict_mode_surfaces_numerical_faults() {
    let mut core = UniverseCore::new(3, 3).unwrap();
    core.set_strict(true);
    // NaN velocity poisons the bilinear ratios, which must be reported.
    core.grid_mut().set_velocity(1, 1, f64::NAN, 0.0);

    let err = core.advance_timestep().unwrap_err();
    match err {
        KernelError::ConservationFault { step, report } => {
            assert_eq!(step, 0);
            assert!(report.total() > 0);
        }
        other => panic!("unexpected error: {other}"),
    }

    // Default mode keeps running and just reports.
    core.set_strict(false);
    core.grid_mut().set_velocity(1, 1, f64::NAN, 0.0);
    let report = core.advance_timestep().unwrap();
    assert!(report.faults.total() > 0);
}

#[test]
fn mass_balance_matches_forcing_injection_exactly() {
    let mut core = UniverseCore::with_config(4, 4, settled_config()).unwrap();
    core.set_forcing(Box::new(|grid: &mut FluidGrid, _step: u64| {
        grid.add_mass(2, 0, 1.5, 25.0, Rgba::ORANGE_RED, 0.0, 0.0);
    }));

    for steps in 1..=10u64 {
        let report = core.advance_timestep().unwrap();
        assert!(report.faults.is_clean());
        let expected = 1.5 * steps as f64;
        assert!(
            (core.total_mass() - expected).abs() < 1e-6,
            "step {steps}: total {} vs injected {expected}",
            core.total_mass()
        );
    }
}
