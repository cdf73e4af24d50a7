//! Difficulty levers
//!
//! Two independent levers, either of which the [`DifficultyPolicy`] may
//! switch off: the gap narrows in steps as score climbs, and obstacle speed
//! ramps on a fixed simulated-time interval.

use crate::config::{DifficultyPolicy, EngineConfig};

/// Parameters the obstacle manager needs for the current tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyParams {
    pub gap_size: f32,
    pub speed: f32,
    pub level: u32,
}

/// Number of gap-narrowing steps reached at `score`
pub fn score_tier(policy: DifficultyPolicy, score: u32, interval: u32) -> u32 {
    if policy.narrows_gap() && interval > 0 {
        score / interval
    } else {
        0
    }
}

/// Number of speed ramps reached after `elapsed_secs` of play
pub fn time_tier(policy: DifficultyPolicy, elapsed_secs: f64, interval_secs: f32) -> u32 {
    if policy.ramps_speed() && interval_secs > 0.0 {
        (elapsed_secs / interval_secs as f64).floor() as u32
    } else {
        0
    }
}

/// Gap size for a new obstacle
pub fn gap_size(config: &EngineConfig, score: u32) -> f32 {
    let tier = score_tier(config.difficulty, score, config.score_step_interval);
    (config.initial_gap - config.gap_decrease_step * tier as f32).max(config.min_gap)
}

/// Horizontal obstacle speed
pub fn obstacle_speed(config: &EngineConfig, elapsed_secs: f64) -> f32 {
    let tier = time_tier(
        config.difficulty,
        elapsed_secs,
        config.speed_ramp_interval_secs,
    );
    (config.initial_obstacle_speed + config.speed_ramp_step * tier as f32)
        .min(config.max_obstacle_speed)
}

/// Evaluate both levers for the given progress
pub fn params(config: &EngineConfig, score: u32, elapsed_secs: f64) -> DifficultyParams {
    let level = 1
        + score_tier(config.difficulty, score, config.score_step_interval)
        + time_tier(
            config.difficulty,
            elapsed_secs,
            config.speed_ramp_interval_secs,
        );
    DifficultyParams {
        gap_size: gap_size(config, score),
        speed: obstacle_speed(config, elapsed_secs),
        level,
    }
}
