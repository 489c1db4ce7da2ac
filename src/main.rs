//! Wallbounce entry point
//!
//! Resolves the config and seed, builds the scene, and runs it to an
//! outcome. The only argument is an optional JSON config path.

use std::path::Path;
use std::process::ExitCode;

use wallbounce::render::TraceRenderer;
use wallbounce::settings::SimConfig;
use wallbounce::sim::{Outcome, Scene};

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SimConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("wallbounce starting with seed {seed}");

    let mut scene = match Scene::initialize(&config, seed, TraceRenderer) {
        Ok(scene) => scene,
        Err(err) => {
            log::error!("failed to set up scene: {err}");
            return ExitCode::FAILURE;
        }
    };

    match scene.run_until_coincidence_or_budget() {
        Ok(Outcome::Coincidence) => {
            log::info!(
                "movers met after {} bounce(s)",
                scene.bounces_taken(config.bounce_budget)
            );
            ExitCode::SUCCESS
        }
        Ok(Outcome::BudgetExhausted) => {
            log::info!("no meeting within {} bounces", config.bounce_budget);
            ExitCode::SUCCESS
        }
        Ok(Outcome::RendererClosed) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("simulation aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
