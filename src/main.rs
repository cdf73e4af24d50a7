//! Skyflap headless runner
//!
//! Drives the engine at the reference cadence with a simple autopilot, logs
//! the event stream and prints the final snapshot as JSON.
//!
//! Usage: `skyflap [config.json] [--seed N] [--ticks N] [--difficulty NAME]`

use skyflap::consts::SIM_DT;
use skyflap::sim::{Command, Engine, GameEvent, GamePhase, autopilot};
use skyflap::{ConfigError, DifficultyPolicy, EngineConfig};

/// Command line options
struct Options {
    config_path: Option<String>,
    seed: u64,
    ticks: u64,
    difficulty: Option<DifficultyPolicy>,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Self {
        let mut options = Self {
            config_path: None,
            seed: 0x5EED,
            ticks: 3000,
            difficulty: None,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => match args.next().and_then(|v| v.parse().ok()) {
                    Some(seed) => options.seed = seed,
                    None => log::warn!("--seed expects a number"),
                },
                "--ticks" => match args.next().and_then(|v| v.parse().ok()) {
                    Some(ticks) => options.ticks = ticks,
                    None => log::warn!("--ticks expects a number"),
                },
                "--difficulty" => {
                    let name = args.next().unwrap_or_default();
                    options.difficulty = DifficultyPolicy::from_name(&name);
                    if options.difficulty.is_none() {
                        log::warn!("Unknown difficulty '{}', using config value", name);
                    }
                }
                path => options.config_path = Some(path.to_string()),
            }
        }
        options
    }
}

fn main() -> Result<(), ConfigError> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse(std::env::args().skip(1));
    let mut config = match &options.config_path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(difficulty) = options.difficulty {
        config.difficulty = difficulty;
    }

    let mut engine = Engine::new(config, options.seed)?;
    log::info!("Skyflap starting with seed {}", options.seed);

    engine.push(Command::Jump);
    for tick in 0..options.ticks {
        for event in engine.tick(SIM_DT) {
            match event {
                GameEvent::Scored => log::info!("[{}] Scored ({})", tick, engine.state().score),
                GameEvent::GameOver { score, level } => {
                    log::info!("[{}] Game over: score {}, level {}", tick, score, level)
                }
                other => log::info!("[{}] {:?}", tick, other),
            }
        }
        if engine.phase() == GamePhase::Over {
            break;
        }
        if autopilot::should_jump(engine.state(), engine.config(), SIM_DT) {
            engine.push(Command::Jump);
        }
    }

    let state = engine.state();
    log::info!(
        "Finished after {} ticks ({:.1}s): score {}, level {}, lives {}",
        state.time_ticks,
        state.elapsed_secs(),
        state.score,
        state.level,
        state.lives
    );
    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}
