//! Energy diagnostics and error reporting
//!
//! Total mechanical energy is the conserved quantity used to judge an
//! integration run: it should drift only by truncation error.

use crate::engine::Body;
use crate::integrator::pairs;

/// Kinetic energy `sum(0.5 * m * |v|^2)`
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass * b.vel.length_squared())
        .sum()
}

/// Gravitational potential energy, one term per unordered pair
pub fn potential_energy(bodies: &[Body]) -> f64 {
    let mut e = 0.0;
    for (i, j) in pairs(bodies.len()) {
        let r = bodies[i].pos.distance(bodies[j].pos);
        e -= bodies[i].mass * bodies[j].mass / r;
    }
    e
}

/// Kinetic plus potential energy
pub fn total_energy(bodies: &[Body]) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies)
}

/// Energy breakdown of one state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

impl EnergyReport {
    pub fn measure(bodies: &[Body]) -> Self {
        let kinetic = kinetic_energy(bodies);
        let potential = potential_energy(bodies);
        let report = Self {
            kinetic,
            potential,
            total: kinetic + potential,
        };
        if !report.total.is_finite() {
            log::warn!("energy is not finite: {:?}", report);
        }
        report
    }
}

/// Format a runtime error for display
pub fn format_runtime_error(error: &dyn std::error::Error) -> String {
    format!("Runtime error: {}", error)
}
