//! Skyflap - a side-scrolling gap-dodging arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacles, judge, lives)
//! - `config`: Engine configuration, presets and validation
//! - `error`: Configuration errors
//!
//! Rendering, audio and input wiring live in the host. The host calls
//! [`sim::advance`] (or [`Engine::advance`]) once per frame and renders the
//! returned [`sim::GameState`].

pub mod config;
pub mod error;
pub mod sim;

pub use config::{DifficultyPolicy, EngineConfig, JudgeTiming, LifeLossPolicy};
pub use error::ConfigError;
pub use sim::{Command, Engine, GameEvent, GamePhase, GameState, InputQueue, TickInput};

/// Game configuration constants
pub mod consts {
    /// Reference tick rate (ticks per second)
    pub const TICK_HZ: f32 = 50.0;
    /// One reference frame. Per-tick speeds are expressed in units per frame.
    pub const SIM_DT: f32 = 1.0;

    /// Playfield defaults
    pub const PLAYFIELD_WIDTH: f32 = 500.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    /// Avatar defaults
    pub const AVATAR_X: f32 = 50.0;
    pub const AVATAR_WIDTH: f32 = 38.0;
    pub const AVATAR_HEIGHT: f32 = 28.0;
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_IMPULSE: f32 = -8.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    pub const OBSTACLE_SPEED: f32 = 2.0;
    pub const MAX_OBSTACLE_SPEED: f32 = 5.0;
    /// Distance the newest obstacle must travel before the next one spawns
    pub const SPAWN_THRESHOLD: f32 = 200.0;
    pub const MIN_OBSTACLE_CLEARANCE: f32 = 60.0;
    /// Keep gaps at least this far from the top and bottom edges
    pub const GAP_MARGIN: f32 = 50.0;
    pub const INITIAL_GAP: f32 = 150.0;
    pub const MIN_GAP: f32 = 100.0;

    /// Clouds
    pub const DECORATION_SPAWN_CHANCE: f64 = 0.02;
    pub const DECORATION_SPAWN_OFFSET: f32 = 50.0;
    pub const DECORATION_CULL_X: f32 = -100.0;
}

/// Convert a sum of reference frames into simulated seconds
#[inline]
pub fn frames_to_secs(frames: f64) -> f64 {
    frames / consts::TICK_HZ as f64
}
