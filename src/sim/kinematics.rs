//! Vertical avatar kinematics
//!
//! Position advances with the velocity from the start of the tick, then
//! gravity is applied to the velocity for the next tick.

use super::state::{Avatar, Playfield};

/// Result of one integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Avatar stayed inside the playfield
    InBounds(Avatar),
    /// Avatar would have left the playfield; carries the pre-step avatar
    OutOfBounds(Avatar),
}

/// Integrate one step: `v' = v + g*dt`, `y' = y + v*dt`
#[inline]
pub fn integrate(y: f32, velocity: f32, gravity: f32, dt: f32) -> (f32, f32) {
    (y + velocity * dt, velocity + gravity * dt)
}

/// Apply a jump impulse. Only the latest jump in a tick matters.
#[inline]
pub fn jump(avatar: &mut Avatar, impulse: f32) {
    avatar.velocity = impulse;
}

/// Advance the avatar and check it against the playfield.
///
/// Leaving the playfield is not clamped: the avatar is rolled back to its
/// value before the step.
pub fn step(
    avatar: Avatar,
    gravity: f32,
    dt: f32,
    playfield: &Playfield,
    avatar_height: f32,
) -> Motion {
    let (y, velocity) = integrate(avatar.y, avatar.velocity, gravity, dt);
    if y < 0.0 || y > playfield.max_avatar_y(avatar_height) {
        Motion::OutOfBounds(avatar)
    } else {
        Motion::InBounds(Avatar { y, velocity })
    }
}
