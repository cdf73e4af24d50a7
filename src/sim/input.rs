//! Input commands
//!
//! Commands can arrive at any time between ticks. They are collected in an
//! [`InputQueue`] and folded into a single [`TickInput`] that the engine
//! applies at the start of the next tick.

use serde::{Deserialize, Serialize};

/// A discrete command from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Jump,
    Resize { width: f32, height: f32 },
    Reset,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Jump (click/tap/space). Several jumps in one tick count once.
    pub jump: bool,
    /// New playfield size, latest wins
    pub resize: Option<(f32, f32)>,
    /// Return to a fresh `NotStarted` state
    pub reset: bool,
}

impl TickInput {
    /// Input with only a jump
    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Default::default()
        }
    }

    /// Fold a command into this tick's input
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Jump => self.jump = true,
            Command::Resize { width, height } => self.resize = Some((width, height)),
            Command::Reset => {
                // A jump queued before the reset belongs to the old run
                self.reset = true;
                self.jump = false;
            }
        }
    }

    /// Fold a batch of commands in arrival order
    pub fn from_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut input = Self::default();
        for command in commands {
            input.apply(command);
        }
        input
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Commands received since the last tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: TickInput,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.apply(command);
    }

    /// Drain everything queued so far into one tick's input
    pub fn take(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }

    /// Forget queued jumps and resets. A queued resize still describes the
    /// host's window, so it stays for the next tick.
    pub fn discard_actions(&mut self) {
        self.pending = TickInput {
            resize: self.pending.resize,
            ..Default::default()
        };
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
