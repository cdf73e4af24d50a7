//! Gap-tracking autopilot
//!
//! Steers the avatar through the next gap by jumping whenever it would
//! otherwise sink too close to the gap's lower edge. Drives the headless
//! runner and the scoring tests.

use super::state::GameState;
use crate::config::EngineConfig;

/// Space kept between the avatar's bottom edge and the gap's lower edge
pub const BOTTOM_CLEARANCE: f32 = 6.0;

/// Lower edge the avatar has to stay above: the gap of the first obstacle
/// not yet behind the avatar, or a gap-sized band around the start height
/// while the field is empty
pub fn target_floor(state: &GameState, config: &EngineConfig) -> f32 {
    state
        .obstacles
        .iter()
        .find(|o| o.trailing_edge(config.obstacle_width) >= config.avatar_x)
        .map(|o| o.gap_bottom())
        .unwrap_or_else(|| state.playfield.start_y() + config.initial_gap / 2.0)
}

/// Jump if one more step without a jump would take the avatar's bottom edge
/// past the target floor
pub fn should_jump(state: &GameState, config: &EngineConfig, dt: f32) -> bool {
    let next_bottom = state.avatar.y + state.avatar.velocity * dt + config.avatar_height;
    next_bottom > target_floor(state, config) - BOTTOM_CLEARANCE
}
