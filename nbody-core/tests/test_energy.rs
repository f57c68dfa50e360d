//! Energy diagnostic and near-conservation

use nbody_core::diagnostics::{kinetic_energy, potential_energy, total_energy};
use nbody_core::tests::test_helpers::{approx_eq, offset_system, run_steps};
use nbody_core::{jovian_system, EnergyReport, DEFAULT_DT};

#[test]
fn test_reference_initial_energy() {
    let system = offset_system(jovian_system());
    let e = system.energy();
    assert!(approx_eq(e, -0.169075164, 1e-9), "initial energy {:.12}", e);
}

#[test]
fn test_reference_energy_after_1000_steps() {
    let mut system = offset_system(jovian_system());
    run_steps(&mut system, 1000, DEFAULT_DT);
    let e = system.energy();
    assert!(approx_eq(e, -0.169087605, 1e-9), "final energy {:.12}", e);
}

#[test]
fn test_energy_drift_is_bounded() {
    let mut system = offset_system(jovian_system());
    let before = system.energy();
    run_steps(&mut system, 1000, DEFAULT_DT);
    let after = system.energy();

    let drift = (after - before).abs();
    assert!(drift < 1e-4, "energy drifted by {:e}", drift);
    assert!(drift > 0.0, "semi-implicit Euler is not exactly conservative");
}

#[test]
fn test_energy_does_not_mutate() {
    let system = offset_system(jovian_system());
    let snapshot = system.bodies().to_vec();
    let e1 = system.energy();
    let e2 = system.energy();
    assert_eq!(e1.to_bits(), e2.to_bits());
    assert_eq!(system.bodies(), snapshot.as_slice());
}

#[test]
fn test_unordered_pairs_match_halved_ordered_sum() {
    let bodies = offset_system(jovian_system()).bodies().to_vec();

    let mut ordered = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for (j, b) in bodies.iter().enumerate() {
            if i != j {
                ordered -= a.mass * b.mass / a.pos.distance(b.pos);
            }
        }
    }

    assert!(approx_eq(potential_energy(&bodies), ordered / 2.0, 1e-14));
    assert!(approx_eq(
        total_energy(&bodies),
        kinetic_energy(&bodies) + ordered / 2.0,
        1e-14
    ));
}

#[test]
fn test_report_breakdown_is_consistent() {
    let system = offset_system(jovian_system());
    let report = EnergyReport::measure(system.bodies());

    assert!(report.kinetic > 0.0);
    assert!(report.potential < 0.0);
    assert_eq!(report.total, report.kinetic + report.potential);
    assert_eq!(report.total, system.energy());
}
