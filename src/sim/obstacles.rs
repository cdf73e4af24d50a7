//! Obstacle manager
//!
//! Scrolls obstacles left, retires the ones that have fully exited, and
//! spawns a new one at the right edge once the newest has travelled
//! `spawn_threshold` units.

use rand::Rng;

use super::difficulty::DifficultyParams;
use super::state::{Obstacle, Playfield};
use crate::config::EngineConfig;

/// Move every obstacle left by `speed * dt` and drop the ones fully off-screen
pub fn scroll(obstacles: &[Obstacle], dt: f32, speed: f32, obstacle_width: f32) -> Vec<Obstacle> {
    obstacles
        .iter()
        .map(|o| Obstacle {
            x: o.x - speed * dt,
            ..*o
        })
        .filter(|o| o.x > -obstacle_width)
        .collect()
}

/// Whether a new obstacle should enter at the right edge
pub fn needs_spawn(obstacles: &[Obstacle], playfield: &Playfield, spawn_threshold: f32) -> bool {
    match obstacles.last() {
        None => true,
        Some(last) => last.x < playfield.width - spawn_threshold,
    }
}

/// Build a new obstacle at the right edge with a random gap position
pub fn spawn<R: Rng + ?Sized>(
    id: u32,
    gap_size: f32,
    config: &EngineConfig,
    playfield: &Playfield,
    rng: &mut R,
) -> Obstacle {
    let low = config.gap_margin;
    let high = playfield.height - gap_size - config.gap_margin;
    let gap_top = if high > low {
        rng.random_range(low..=high)
    } else {
        low
    };
    Obstacle {
        id,
        x: playfield.width,
        gap_top,
        gap_size,
        passed: false,
    }
}

/// Advance the obstacle sequence by one tick.
///
/// `next_id` is only called when an obstacle is spawned.
pub fn advance<R: Rng + ?Sized>(
    obstacles: &[Obstacle],
    dt: f32,
    params: &DifficultyParams,
    config: &EngineConfig,
    playfield: &Playfield,
    rng: &mut R,
    next_id: impl FnOnce() -> u32,
) -> Vec<Obstacle> {
    let mut next = scroll(obstacles, dt, params.speed, config.obstacle_width);
    // Decide on the pre-scroll sequence so an empty field always gets one
    if needs_spawn(obstacles, playfield, config.spawn_threshold) {
        let obstacle = spawn(next_id(), params.gap_size, config, playfield, rng);
        log::debug!(
            "Spawned obstacle {} gap_top={:.1} gap={:.1}",
            obstacle.id,
            obstacle.gap_top,
            obstacle.gap_size
        );
        next.push(obstacle);
    }
    next
}
