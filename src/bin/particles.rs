use std::process::ExitCode;

use particle_plot::particles::{self, SimulationParams};

/// Fixes the RNG seed when set, for reproducible runs.
const SEED_VAR: &str = "PARTICLES_SEED";

fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_VAR).ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("ignoring {SEED_VAR}={raw:?}: {e}");
            None
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let params = SimulationParams {
        seed: seed_from_env(),
        ..Default::default()
    };

    match particles::run(params) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
