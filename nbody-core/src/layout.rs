//! Struct-of-arrays rendition of the kernel
//!
//! Same pair order and operation grouping as `integrator::step` and
//! `diagnostics::total_energy`, only the storage differs: one column per
//! attribute instead of one record per body.

use crate::engine::{check_time_step, Body, SimulationError};
use crate::integrator::pairs;
use glam::DVec3;

/// Columns always have one entry per body; they are only reachable through
/// read-only slices so they cannot fall out of step with each other.
#[derive(Debug, Clone)]
pub struct ColumnarSystem {
    positions: Vec<[f64; 3]>,
    velocities: Vec<[f64; 3]>,
    masses: Vec<f64>,
    momentum_offset: bool,
    steps_taken: u64,
}

#[inline(always)]
fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline(always)]
fn norm_squared(a: [f64; 3]) -> f64 {
    a[0] * a[0] + a[1] * a[1] + a[2] * a[2]
}

impl ColumnarSystem {
    pub fn from_bodies(bodies: &[Body]) -> Result<Self, SimulationError> {
        if bodies.is_empty() {
            return Err(SimulationError::EmptySystem);
        }
        let mut system = ColumnarSystem {
            positions: Vec::with_capacity(bodies.len()),
            velocities: Vec::with_capacity(bodies.len()),
            masses: Vec::with_capacity(bodies.len()),
            momentum_offset: false,
            steps_taken: 0,
        };
        for (index, b) in bodies.iter().enumerate() {
            if !(b.mass.is_finite() && b.mass > 0.0) {
                return Err(SimulationError::NonPositiveMass {
                    index,
                    mass: b.mass,
                });
            }
            system.positions.push(b.pos.to_array());
            system.velocities.push(b.vel.to_array());
            system.masses.push(b.mass);
        }
        Ok(system)
    }

    pub fn to_bodies(&self) -> Vec<Body> {
        self.positions
            .iter()
            .zip(&self.velocities)
            .zip(&self.masses)
            .map(|((p, v), m)| Body::new(DVec3::from_array(*p), DVec3::from_array(*v), *m))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// Never true: construction rejects an empty body set
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    pub fn velocities(&self) -> &[[f64; 3]] {
        &self.velocities
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn total_momentum(&self) -> [f64; 3] {
        let mut p = [0.0; 3];
        for (v, m) in self.velocities.iter().zip(&self.masses) {
            for d in 0..3 {
                p[d] += v[d] * m;
            }
        }
        p
    }

    /// Columnar counterpart of `System::initialize_momentum`, with the same guard
    pub fn offset_momentum(&mut self) -> Result<(), SimulationError> {
        if self.momentum_offset {
            return Err(SimulationError::MomentumAlreadyOffset);
        }
        if self.steps_taken > 0 {
            return Err(SimulationError::MomentumAfterAdvance {
                steps: self.steps_taken,
            });
        }
        let p = self.total_momentum();
        let m0 = self.masses[0];
        for d in 0..3 {
            self.velocities[0][d] -= p[d] / m0;
        }
        self.momentum_offset = true;
        Ok(())
    }

    /// Columnar counterpart of `System::advance`, rejecting the same time steps
    pub fn advance(&mut self, dt: f64) -> Result<(), SimulationError> {
        check_time_step(dt)?;
        for (i, j) in pairs(self.len()) {
            let d = sub(self.positions[i], self.positions[j]);
            let r = norm_squared(d).sqrt();
            let mag = dt / (r * r * r);

            let kick_i = self.masses[j] * mag;
            let kick_j = self.masses[i] * mag;
            for k in 0..3 {
                self.velocities[i][k] -= d[k] * kick_i;
                self.velocities[j][k] += d[k] * kick_j;
            }
        }

        for (p, v) in self.positions.iter_mut().zip(&self.velocities) {
            for k in 0..3 {
                p[k] += v[k] * dt;
            }
        }
        self.steps_taken += 1;
        Ok(())
    }

    pub fn energy(&self) -> f64 {
        let kinetic: f64 = self
            .velocities
            .iter()
            .zip(&self.masses)
            .map(|(v, m)| 0.5 * m * norm_squared(*v))
            .sum();

        let mut potential = 0.0;
        for (i, j) in pairs(self.len()) {
            let r = norm_squared(sub(self.positions[i], self.positions[j])).sqrt();
            potential -= self.masses[i] * self.masses[j] / r;
        }

        kinetic + potential
    }
}
