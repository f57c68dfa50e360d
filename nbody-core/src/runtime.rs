use crate::diagnostics::EnergyReport;
use crate::engine::{check_time_step, Body, SimulationError, System};
use crate::scenario::{jovian_system, BodyName, DEFAULT_DT};

/// How long and how finely to integrate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub steps: u64,
    pub dt: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            dt: DEFAULT_DT,
        }
    }
}

impl SimulationConfig {
    pub fn new(steps: u64) -> Self {
        Self {
            steps,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        check_time_step(self.dt)
    }
}

/// Energies measured around an integration run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub initial_energy: f64,
    pub final_energy: f64,
    pub steps: u64,
}

impl SimulationResult {
    pub fn energy_drift(&self) -> f64 {
        self.final_energy - self.initial_energy
    }
}

/// A momentum-offset system ready to be stepped
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub system: System,
    pub config: SimulationConfig,
    pub current_step: u64,
}

impl SimulationContext {
    pub fn is_finished(&self) -> bool {
        self.current_step >= self.config.steps
    }
}

/// Build the system and apply the momentum offset
pub fn build_simulation_context(
    config: SimulationConfig,
    bodies: Vec<Body>,
) -> Result<SimulationContext, SimulationError> {
    config.validate()?;
    let mut system = System::new(bodies)?;
    system.initialize_momentum()?;

    Ok(SimulationContext {
        system,
        config,
        current_step: 0,
    })
}

/// Step the simulation forward by a single dt
pub fn step_simulation(ctx: &mut SimulationContext) -> Result<(), SimulationError> {
    ctx.system.advance(ctx.config.dt)?;
    ctx.current_step += 1;
    log::trace!("step {}/{}", ctx.current_step, ctx.config.steps);
    Ok(())
}

/// Run the reference Jovian configuration
pub fn run_simulation(config: SimulationConfig) -> Result<SimulationResult, SimulationError> {
    integrate(config, jovian_system(), Some(&BodyName::ALL[..]))
}

/// Offset momentum, measure energy, advance `config.steps` times, measure again
pub fn run_with_bodies(
    config: SimulationConfig,
    bodies: Vec<Body>,
) -> Result<SimulationResult, SimulationError> {
    integrate(config, bodies, None)
}

// Bodies are labelled by name only when the names are known to match them.
fn body_label(names: Option<&[BodyName]>, index: usize) -> String {
    match names.and_then(|n| n.get(index)) {
        Some(name) => name.to_string(),
        None => format!("body {}", index),
    }
}

fn integrate(
    config: SimulationConfig,
    bodies: Vec<Body>,
    names: Option<&[BodyName]>,
) -> Result<SimulationResult, SimulationError> {
    let mut ctx = build_simulation_context(config, bodies)?;

    let before = EnergyReport::measure(ctx.system.bodies());
    log::debug!("initial energy {:?}", before);

    while !ctx.is_finished() {
        step_simulation(&mut ctx)?;
    }

    let after = EnergyReport::measure(ctx.system.bodies());
    log::debug!(
        "final energy {:?} after {} steps (drift {:e})",
        after,
        ctx.current_step,
        after.total - before.total
    );
    if log::log_enabled!(log::Level::Trace) {
        for (i, body) in ctx.system.bodies().iter().enumerate() {
            log::trace!("{} at {:?}", body_label(names, i), body.pos);
        }
    }

    Ok(SimulationResult {
        initial_energy: before.total,
        final_energy: after.total,
        steps: ctx.current_step,
    })
}
