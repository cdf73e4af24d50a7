//! Game state and core simulation types
//!
//! Everything the host needs to render a frame lives here. The engine
//! replaces the whole value every tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::frames_to_secs;

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first jump
    NotStarted,
    /// Active gameplay
    Running,
    /// Out of lives, frozen until reset
    Over,
}

/// Transient per-tick events for audio/visual cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First jump of a session
    Started,
    /// Avatar passed an obstacle
    Scored,
    /// Collision or boundary violation cost a life
    LifeLost { lives_left: u32 },
    /// Last life lost
    GameOver { score: u32, level: u32 },
    /// Difficulty tier went up
    LevelUp { level: u32 },
}

/// The player's avatar. Its horizontal position is fixed by the config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Top edge, growing downward
    pub y: f32,
    /// Vertical speed per frame (negative = upward)
    pub velocity: f32,
}

/// A pair of top/bottom barriers with a passable gap between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Top of the opening (bottom of the upper barrier)
    pub gap_top: f32,
    pub gap_size: f32,
    /// Set once the avatar has cleared this obstacle
    pub passed: bool,
}

impl Obstacle {
    /// Right edge
    #[inline]
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Bottom of the opening (top of the lower barrier)
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_size
    }
}

/// A background cloud (not gameplay-affecting)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
}

/// Playfield bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Largest `y` the avatar's top edge may take
    #[inline]
    pub fn max_avatar_y(&self, avatar_height: f32) -> f32 {
        self.height - avatar_height
    }

    /// Vertical centre used for spawning and recentring the avatar
    #[inline]
    pub fn start_y(&self) -> f32 {
        self.height / 2.0
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Bumped on every reset so each run draws a fresh obstacle sequence
    pub run_index: u32,
    pub phase: GamePhase,
    pub playfield: Playfield,
    pub avatar: Avatar,
    /// Ordered by spawn (and therefore by increasing `x`)
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub lives: u32,
    /// Difficulty tier, starts at 1
    pub level: u32,
    /// Current horizontal scroll speed per frame
    pub obstacle_speed: f32,
    /// Running ticks simulated so far
    pub time_ticks: u64,
    /// Sum of `dt` over simulated ticks, in reference frames. Kept in f64 so
    /// whole-frame steps add up exactly.
    pub elapsed_frames: f64,
    pub decorations: Vec<Decoration>,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Fresh `NotStarted` state for the configured playfield
    pub fn new(config: &EngineConfig, seed: u64) -> Self {
        let playfield = Playfield {
            width: config.playfield_width,
            height: config.playfield_height,
        };
        Self::fresh(config, seed, 0, playfield)
    }

    fn fresh(config: &EngineConfig, seed: u64, run_index: u32, playfield: Playfield) -> Self {
        Self {
            seed,
            run_index,
            phase: GamePhase::NotStarted,
            playfield,
            avatar: Avatar {
                y: playfield.start_y(),
                velocity: 0.0,
            },
            obstacles: Vec::new(),
            score: 0,
            lives: config.initial_lives,
            level: 1,
            obstacle_speed: config.initial_obstacle_speed,
            time_ticks: 0,
            elapsed_frames: 0.0,
            decorations: Vec::new(),
            next_id: 1,
        }
    }

    /// Fresh `NotStarted` state that keeps the current playfield size
    pub fn reset(&self, config: &EngineConfig) -> Self {
        Self::fresh(config, self.seed, self.run_index.wrapping_add(1), self.playfield)
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Simulated seconds of play so far
    pub fn elapsed_secs(&self) -> f64 {
        frames_to_secs(self.elapsed_frames)
    }

    /// RNG for the current tick, derived from seed, run and tick count
    pub fn tick_rng(&self) -> Pcg32 {
        let run_seed = self
            .seed
            .wrapping_add((self.run_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Pcg32::seed_from_u64(run_seed ^ self.time_ticks.wrapping_mul(2654435761))
    }

    /// Avatar top edge is within the playfield
    pub fn avatar_in_bounds(&self, config: &EngineConfig) -> bool {
        (0.0..=self.playfield.max_avatar_y(config.avatar_height)).contains(&self.avatar.y)
    }
}
