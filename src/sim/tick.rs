//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::decor;
use super::difficulty;
use super::input::TickInput;
use super::judge;
use super::kinematics::{self, Motion};
use super::obstacles;
use super::state::{GameEvent, GamePhase, GameState, Playfield};
use crate::config::{EngineConfig, JudgeTiming, LifeLossPolicy};
use crate::error::ConfigError;

/// New state plus the events produced while computing it
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

/// Pure state transition: `(state, input, dt) -> state'`
pub fn advance(
    config: &EngineConfig,
    state: &GameState,
    input: &TickInput,
    dt: f32,
) -> TickOutcome {
    let mut next = state.clone();
    let mut events = Vec::new();
    tick(config, &mut next, input, dt, &mut events);
    TickOutcome {
        state: next,
        events,
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(
    config: &EngineConfig,
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    if input.reset {
        *state = state.reset(config);
        log::info!("Game reset (run {})", state.run_index);
    }

    if let Some((width, height)) = input.resize {
        if let Err(err) = apply_resize(config, state, width, height) {
            log::warn!("Ignoring resize to {}x{}: {}", width, height, err);
        }
    }

    match state.phase {
        GamePhase::Over => return,
        GamePhase::NotStarted => {
            if input.jump {
                state.phase = GamePhase::Running;
                kinematics::jump(&mut state.avatar, config.jump_impulse);
                events.push(GameEvent::Started);
                log::info!("Game started");
            }
            return;
        }
        GamePhase::Running => {}
    }

    if !dt.is_finite() || dt <= 0.0 {
        log::warn!("Skipping tick with dt={}", dt);
        return;
    }

    if input.jump {
        kinematics::jump(&mut state.avatar, config.jump_impulse);
    }

    let mut rng = state.tick_rng();
    state.time_ticks += 1;
    state.elapsed_frames += dt as f64;

    let params = difficulty::params(config, state.score, state.elapsed_secs());
    state.obstacle_speed = params.speed;

    match kinematics::step(
        state.avatar,
        config.gravity,
        dt,
        &state.playfield,
        config.avatar_height,
    ) {
        Motion::InBounds(avatar) => state.avatar = avatar,
        Motion::OutOfBounds(avatar) => {
            state.avatar = avatar;
            log::debug!("Avatar left the playfield at y={:.1}", avatar.y);
            lose_life(config, state, events);
            return;
        }
    }

    let collided = match config.judge_timing {
        JudgeTiming::AfterMove => {
            move_obstacles(config, state, dt, &params, &mut rng);
            judge_obstacles(config, state, events)
        }
        JudgeTiming::BeforeMove => {
            let collided = judge_obstacles(config, state, events);
            if !collided {
                move_obstacles(config, state, dt, &params, &mut rng);
            }
            collided
        }
    };

    update_level(config, state, events);

    if collided {
        lose_life(config, state, events);
        return;
    }

    state.decorations = decor::advance(
        &state.decorations,
        dt,
        &state.playfield,
        config.decoration_spawn_chance,
        &mut rng,
    );
}

fn move_obstacles(
    config: &EngineConfig,
    state: &mut GameState,
    dt: f32,
    params: &difficulty::DifficultyParams,
    rng: &mut rand_pcg::Pcg32,
) {
    let current = std::mem::take(&mut state.obstacles);
    let playfield = state.playfield;
    let next = obstacles::advance(&current, dt, params, config, &playfield, rng, || {
        state.next_entity_id()
    });
    state.obstacles = next;
}

/// Returns true if the avatar hit an obstacle
fn judge_obstacles(
    config: &EngineConfig,
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
) -> bool {
    let verdict = judge::judge(
        &state.obstacles,
        &state.avatar,
        config,
        state.playfield.height,
    );
    state.obstacles = verdict.obstacles;
    for _ in 0..verdict.scored {
        state.score += 1;
        events.push(GameEvent::Scored);
    }
    if let Some(id) = verdict.collision {
        log::debug!("Avatar hit obstacle {}", id);
    }
    verdict.collision.is_some()
}

fn update_level(config: &EngineConfig, state: &mut GameState, events: &mut Vec<GameEvent>) {
    let level = difficulty::params(config, state.score, state.elapsed_secs()).level;
    if level > state.level {
        state.level = level;
        events.push(GameEvent::LevelUp { level });
        log::info!("Level {} (score {})", level, state.score);
    }
}

/// Take one life. At zero the game is over and the state freezes;
/// otherwise the field is cleared and play continues.
fn lose_life(config: &EngineConfig, state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    state.avatar.velocity = 0.0;
    events.push(GameEvent::LifeLost {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.phase = GamePhase::Over;
        events.push(GameEvent::GameOver {
            score: state.score,
            level: state.level,
        });
        log::info!("Game over: score {}, level {}", state.score, state.level);
        return;
    }

    state.obstacles.clear();
    state.decorations.clear();
    if config.life_loss == LifeLossPolicy::RecenterAvatar {
        state.avatar.y = state.playfield.start_y();
    }
    log::info!("Life lost, {} left", state.lives);
}

/// Change the playfield size, scaling the avatar's height proportionally.
/// A finished game only records the new size.
pub fn apply_resize(
    config: &EngineConfig,
    state: &mut GameState,
    width: f32,
    height: f32,
) -> Result<(), ConfigError> {
    config.validate_playfield(width, height)?;
    let scale = height / state.playfield.height;
    state.playfield = Playfield { width, height };
    if state.phase != GamePhase::Over {
        let max_y = state.playfield.max_avatar_y(config.avatar_height);
        state.avatar.y = (state.avatar.y * scale).clamp(0.0, max_y);
    }
    Ok(())
}
