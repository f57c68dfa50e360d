//! Determinism tests - the same configuration produces identical outputs

use nbody_core::{run_simulation, SimulationConfig};

#[test]
fn test_repeated_runs_are_bit_identical() {
    let results: Vec<_> = (0..5)
        .map(|_| run_simulation(SimulationConfig::new(500)).expect("Run failed"))
        .collect();

    for (i, r) in results.iter().enumerate().skip(1) {
        assert_eq!(
            r.initial_energy.to_bits(),
            results[0].initial_energy.to_bits(),
            "run {} initial energy differs",
            i
        );
        assert_eq!(
            r.final_energy.to_bits(),
            results[0].final_energy.to_bits(),
            "run {} final energy differs",
            i
        );
    }
}

#[test]
fn test_zero_steps_is_a_no_op() {
    let result = run_simulation(SimulationConfig::new(0)).expect("Run failed");
    assert_eq!(result.steps, 0);
    assert_eq!(result.initial_energy.to_bits(), result.final_energy.to_bits());
    assert_eq!(result.energy_drift(), 0.0);
}

#[test]
fn test_split_runs_match_single_run() {
    // Initial energy never depends on the step count.
    let short = run_simulation(SimulationConfig::new(10)).expect("Run failed");
    let long = run_simulation(SimulationConfig::new(1000)).expect("Run failed");
    assert_eq!(short.initial_energy.to_bits(), long.initial_energy.to_bits());
}
