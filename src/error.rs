//! Configuration errors
//!
//! Gameplay failures (collisions, leaving the playfield) are game events,
//! not errors. The only thing that can go wrong is a bad configuration.

use thiserror::Error;

/// Errors raised when validating or loading an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("jump impulse must point upward (negative), got {0}")]
    JumpNotUpward(f32),
    #[error("initial lives must be at least 1")]
    NoLives,
    #[error("score step interval must be at least 1")]
    ZeroScoreInterval,
    #[error("min gap {min_gap} exceeds initial gap {initial_gap}")]
    GapRange { min_gap: f32, initial_gap: f32 },
    #[error("max obstacle speed {max} is below initial speed {initial}")]
    SpeedRange { initial: f32, max: f32 },
    #[error("gap of {gap} with margin {margin} does not fit a playfield {height} high")]
    GapDoesNotFit { gap: f32, margin: f32, height: f32 },
    #[error("avatar ({width}x{height}) does not fit the {field_width}x{field_height} playfield")]
    AvatarDoesNotFit {
        width: f32,
        height: f32,
        field_width: f32,
        field_height: f32,
    },
    #[error("spawn threshold {threshold} must be at least {minimum} (obstacle width + clearance)")]
    SpawnSpacing { threshold: f32, minimum: f32 },
    #[error("decoration spawn chance must be within [0, 1], got {0}")]
    SpawnChance(f64),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
