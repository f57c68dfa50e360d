pub mod diagnostics;
pub mod engine;
pub mod integrator;
pub mod layout;
pub mod runtime;
pub mod scenario;

pub use diagnostics::{format_runtime_error, EnergyReport};
pub use engine::{check_time_step, Body, SimulationError, System};
pub use layout::ColumnarSystem;
pub use runtime::{
    build_simulation_context, run_simulation, run_with_bodies, step_simulation,
    SimulationConfig, SimulationContext, SimulationResult,
};
pub use scenario::{jovian_system, BodyName, DAYS_PER_YEAR, DEFAULT_DT, SOLAR_MASS};
