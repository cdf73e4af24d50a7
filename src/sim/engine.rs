//! Engine handle for hosts
//!
//! Owns the validated config, the current state and the pending input.
//! The host pushes commands whenever they arrive and calls [`Engine::tick`]
//! from its fixed-rate timer.

use super::input::{Command, InputQueue, TickInput};
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{self, advance};
use crate::config::EngineConfig;
use crate::error::ConfigError;

pub struct Engine {
    config: EngineConfig,
    state: GameState,
    queue: InputQueue,
}

impl Engine {
    /// Validate the config and build a fresh `NotStarted` engine
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config, seed);
        log::info!(
            "Engine ready: {}x{} playfield, {} lives, difficulty {}",
            config.playfield_width,
            config.playfield_height,
            config.initial_lives,
            config.difficulty.as_str()
        );
        Ok(Self {
            config,
            state,
            queue: InputQueue::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Latest snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Queue a command for the next tick
    pub fn push(&mut self, command: Command) {
        self.queue.push(command);
    }

    /// Advance one tick with everything queued since the last one
    pub fn tick(&mut self, dt: f32) -> Vec<GameEvent> {
        let input = self.queue.take();
        self.advance(&input, dt)
    }

    /// Advance one tick with an explicit input
    pub fn advance(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        let outcome = advance(&self.config, &self.state, input, dt);
        self.state = outcome.state;
        outcome.events
    }

    /// Resize immediately, reporting invalid sizes to the caller
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        tick::apply_resize(&self.config, &mut self.state, width, height)
    }

    /// Drop pending jumps and return to a fresh `NotStarted` state. A pending
    /// resize still applies on the next tick.
    pub fn reset(&mut self) {
        self.queue.discard_actions();
        self.state = self.state.reset(&self.config);
    }
}
