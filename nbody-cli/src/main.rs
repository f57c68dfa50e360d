use clap::Parser;
use nbody_core::{format_runtime_error, run_simulation, SimulationConfig};

#[derive(Parser)]
#[command(name = "nbody")]
#[command(
    about = "Integrate the Jovian planets and report total energy before and after",
    long_about = None
)]
struct Cli {
    /// Number of 0.01-year steps to take
    iterations: u64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.iterations) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(iterations: u64) -> Result<(), Box<dyn std::error::Error>> {
    let result = run_simulation(SimulationConfig::new(iterations)).map_err(|e| {
        log::error!("{}", format_runtime_error(&e));
        e
    })?;

    println!("{:.9}", result.initial_energy);
    println!("{:.9}", result.final_energy);

    Ok(())
}
