//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only, derived per tick from the state
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod decor;
pub mod difficulty;
pub mod engine;
pub mod input;
pub mod judge;
pub mod kinematics;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use difficulty::DifficultyParams;
pub use engine::Engine;
pub use input::{Command, InputQueue, TickInput};
pub use judge::{Rect, Verdict, judge};
pub use kinematics::{Motion, integrate};
pub use state::{Avatar, Decoration, GameEvent, GamePhase, GameState, Obstacle, Playfield};
pub use tick::{TickOutcome, advance, apply_resize, tick};
