use crate::diagnostics::total_energy;
use crate::integrator::step;
use glam::DVec3;
use thiserror::Error;

/// Errors raised while building or driving a simulation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("a system needs at least one body")]
    EmptySystem,
    #[error("body {index} has mass {mass}, masses must be positive and finite")]
    NonPositiveMass { index: usize, mass: f64 },
    #[error("momentum offset has already been applied to this system")]
    MomentumAlreadyOffset,
    #[error("momentum offset requested after {steps} step(s) were taken")]
    MomentumAfterAdvance { steps: u64 },
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
}

/// Reject time steps that are not strictly positive and finite
pub fn check_time_step(dt: f64) -> Result<(), SimulationError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidTimeStep(dt))
    }
}

/// A point mass in the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: DVec3,
    pub vel: DVec3,
    pub mass: f64,
}

impl Body {
    pub fn new(pos: DVec3, vel: DVec3, mass: f64) -> Self {
        Self { pos, vel, mass }
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> DVec3 {
        self.vel * self.mass
    }
}

/// The ordered body set and its lifecycle state.
///
/// Body order is significant: index 0 is the reference body that absorbs the
/// momentum offset, and every pairwise loop walks the bodies in this order.
#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>,
    momentum_offset: bool,
    steps_taken: u64,
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Result<Self, SimulationError> {
        if bodies.is_empty() {
            return Err(SimulationError::EmptySystem);
        }
        if let Some((index, body)) = bodies
            .iter()
            .enumerate()
            .find(|(_, b)| !(b.mass.is_finite() && b.mass > 0.0))
        {
            return Err(SimulationError::NonPositiveMass {
                index,
                mass: body.mass,
            });
        }

        log::debug!("built system with {} bodies", bodies.len());

        Ok(Self {
            bodies,
            momentum_offset: false,
            steps_taken: 0,
        })
    }

    /// Cancel the net momentum of the system by adjusting the velocity of body 0.
    ///
    /// For a reference body initially at rest this is `v0 = -P / m0`.
    ///
    /// Only valid once, before the first `advance`: the offset is computed from
    /// the other bodies' initial velocities, so applying it later (or twice)
    /// would yield a wrong trajectory. Both misuses are rejected and leave the
    /// state untouched.
    pub fn initialize_momentum(&mut self) -> Result<(), SimulationError> {
        if self.momentum_offset {
            return Err(SimulationError::MomentumAlreadyOffset);
        }
        if self.steps_taken > 0 {
            return Err(SimulationError::MomentumAfterAdvance {
                steps: self.steps_taken,
            });
        }

        let p = self.total_momentum();
        let reference = &mut self.bodies[0];
        reference.vel -= p / reference.mass;
        self.momentum_offset = true;

        log::debug!(
            "offset momentum {:?} onto body 0, new velocity {:?}",
            p,
            reference.vel
        );
        Ok(())
    }

    /// Advance the whole system by one step of `dt`.
    ///
    /// A non-positive or non-finite `dt` is rejected before any body moves.
    pub fn advance(&mut self, dt: f64) -> Result<(), SimulationError> {
        check_time_step(dt)?;
        step(&mut self.bodies, dt);
        self.steps_taken += 1;
        Ok(())
    }

    /// Total mechanical energy (kinetic + potential) of the current state
    pub fn energy(&self) -> f64 {
        total_energy(&self.bodies)
    }

    pub fn total_momentum(&self) -> DVec3 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn is_momentum_offset(&self) -> bool {
        self.momentum_offset
    }
}
