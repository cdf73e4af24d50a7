//! Engine configuration
//!
//! Supplied once at engine construction. Loadable from JSON; missing fields
//! fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Which difficulty levers are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPolicy {
    /// Gap and speed stay at their initial values
    None,
    /// Gap narrows as the score climbs
    ScoreBased,
    /// Obstacle speed ramps up with simulated time
    TimeBased,
    /// Both levers
    #[default]
    Combined,
}

impl DifficultyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPolicy::None => "None",
            DifficultyPolicy::ScoreBased => "ScoreBased",
            DifficultyPolicy::TimeBased => "TimeBased",
            DifficultyPolicy::Combined => "Combined",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Some(DifficultyPolicy::None),
            "score" | "scorebased" => Some(DifficultyPolicy::ScoreBased),
            "time" | "timebased" => Some(DifficultyPolicy::TimeBased),
            "combined" | "both" => Some(DifficultyPolicy::Combined),
            _ => None,
        }
    }

    /// Whether the gap shrinks with score
    pub fn narrows_gap(&self) -> bool {
        matches!(self, DifficultyPolicy::ScoreBased | DifficultyPolicy::Combined)
    }

    /// Whether obstacle speed ramps with time
    pub fn ramps_speed(&self) -> bool {
        matches!(self, DifficultyPolicy::TimeBased | DifficultyPolicy::Combined)
    }
}

/// What happens to the avatar after a life is lost (and lives remain)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LifeLossPolicy {
    /// Move the avatar back to the vertical centre of the playfield
    #[default]
    RecenterAvatar,
    /// Leave the avatar where it was (velocity is still zeroed)
    KeepPosition,
}

/// When the judge runs relative to obstacle movement within a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JudgeTiming {
    /// Move obstacles, then judge against the new positions
    #[default]
    AfterMove,
    /// Judge against the positions from the previous tick, then move
    BeforeMove,
}

/// Full engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Avatar ===
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Velocity set by a jump (negative = upward)
    pub jump_impulse: f32,
    /// Fixed horizontal position of the avatar's left edge
    pub avatar_x: f32,
    pub avatar_width: f32,
    pub avatar_height: f32,

    // === Lives ===
    pub initial_lives: u32,
    pub life_loss: LifeLossPolicy,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub initial_gap: f32,
    pub min_gap: f32,
    pub gap_decrease_step: f32,
    pub score_step_interval: u32,
    pub gap_margin: f32,
    pub spawn_threshold: f32,
    pub min_obstacle_clearance: f32,
    pub initial_obstacle_speed: f32,
    pub max_obstacle_speed: f32,
    pub speed_ramp_step: f32,
    pub speed_ramp_interval_secs: f32,
    pub difficulty: DifficultyPolicy,
    pub judge_timing: JudgeTiming,

    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Decoration ===
    pub decoration_spawn_chance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            avatar_x: AVATAR_X,
            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,

            initial_lives: 3,
            life_loss: LifeLossPolicy::RecenterAvatar,

            obstacle_width: OBSTACLE_WIDTH,
            initial_gap: INITIAL_GAP,
            min_gap: MIN_GAP,
            gap_decrease_step: 10.0,
            score_step_interval: 5,
            gap_margin: GAP_MARGIN,
            spawn_threshold: SPAWN_THRESHOLD,
            min_obstacle_clearance: MIN_OBSTACLE_CLEARANCE,
            initial_obstacle_speed: OBSTACLE_SPEED,
            max_obstacle_speed: MAX_OBSTACLE_SPEED,
            speed_ramp_step: 0.5,
            speed_ramp_interval_secs: 10.0,
            difficulty: DifficultyPolicy::Combined,
            judge_timing: JudgeTiming::AfterMove,

            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            decoration_spawn_chance: DECORATION_SPAWN_CHANCE,
        }
    }
}

impl EngineConfig {
    /// Single life, constant gap and speed
    pub fn classic() -> Self {
        Self {
            initial_lives: 1,
            difficulty: DifficultyPolicy::None,
            ..Self::default()
        }
    }

    /// Default config with a different difficulty policy
    pub fn with_difficulty(difficulty: DifficultyPolicy) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject configurations that would produce undefined physics
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("gravity", self.gravity)?;
        non_negative("gravity", self.gravity)?;
        finite("jump_impulse", self.jump_impulse)?;
        if self.jump_impulse >= 0.0 {
            return Err(ConfigError::JumpNotUpward(self.jump_impulse));
        }
        non_negative("avatar_x", self.avatar_x)?;
        positive("avatar_width", self.avatar_width)?;
        positive("avatar_height", self.avatar_height)?;

        if self.initial_lives == 0 {
            return Err(ConfigError::NoLives);
        }

        positive("obstacle_width", self.obstacle_width)?;
        positive("min_gap", self.min_gap)?;
        positive("initial_gap", self.initial_gap)?;
        if self.min_gap > self.initial_gap {
            return Err(ConfigError::GapRange {
                min_gap: self.min_gap,
                initial_gap: self.initial_gap,
            });
        }
        non_negative("gap_decrease_step", self.gap_decrease_step)?;
        if self.score_step_interval == 0 {
            return Err(ConfigError::ZeroScoreInterval);
        }
        non_negative("gap_margin", self.gap_margin)?;
        non_negative("min_obstacle_clearance", self.min_obstacle_clearance)?;
        finite("spawn_threshold", self.spawn_threshold)?;
        let minimum = self.obstacle_width + self.min_obstacle_clearance;
        if self.spawn_threshold < minimum {
            return Err(ConfigError::SpawnSpacing {
                threshold: self.spawn_threshold,
                minimum,
            });
        }

        positive("initial_obstacle_speed", self.initial_obstacle_speed)?;
        finite("max_obstacle_speed", self.max_obstacle_speed)?;
        if self.max_obstacle_speed < self.initial_obstacle_speed {
            return Err(ConfigError::SpeedRange {
                initial: self.initial_obstacle_speed,
                max: self.max_obstacle_speed,
            });
        }
        non_negative("speed_ramp_step", self.speed_ramp_step)?;
        positive("speed_ramp_interval_secs", self.speed_ramp_interval_secs)?;

        if !(0.0..=1.0).contains(&self.decoration_spawn_chance) {
            return Err(ConfigError::SpawnChance(self.decoration_spawn_chance));
        }

        self.validate_playfield(self.playfield_width, self.playfield_height)
    }

    /// Check that a playfield of the given size can host this config.
    /// Also used for runtime resizes.
    pub fn validate_playfield(&self, width: f32, height: f32) -> Result<(), ConfigError> {
        positive("playfield_width", width)?;
        positive("playfield_height", height)?;
        if self.avatar_height >= height || self.avatar_x + self.avatar_width > width {
            return Err(ConfigError::AvatarDoesNotFit {
                width: self.avatar_width,
                height: self.avatar_height,
                field_width: width,
                field_height: height,
            });
        }
        // The widest gap must fit between the margins
        if self.initial_gap + 2.0 * self.gap_margin > height {
            return Err(ConfigError::GapDoesNotFit {
                gap: self.initial_gap,
                margin: self.gap_margin,
                height,
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
