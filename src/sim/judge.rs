//! Pass and collision judging
//!
//! Runs once per tick over the obstacles in sequence order. Produces a new
//! obstacle sequence with updated `passed` flags instead of flipping them in
//! place.

use glam::Vec2;

use super::state::{Avatar, Obstacle};
use crate::config::EngineConfig;

/// Axis-aligned rectangle (min inclusive, max exclusive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Horizontal spans overlap
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.min.x < other.max.x && other.min.x < self.max.x
    }
}

/// Avatar bounding box
pub fn avatar_rect(avatar: &Avatar, config: &EngineConfig) -> Rect {
    Rect::new(
        Vec2::new(config.avatar_x, avatar.y),
        Vec2::new(config.avatar_width, config.avatar_height),
    )
}

/// Full-height column an obstacle occupies
pub fn obstacle_column(obstacle: &Obstacle, config: &EngineConfig, height: f32) -> Rect {
    Rect::new(
        Vec2::new(obstacle.x, 0.0),
        Vec2::new(config.obstacle_width, height),
    )
}

/// The obstacle's trailing edge is behind the avatar's leading edge
#[inline]
pub fn has_cleared(obstacle: &Obstacle, avatar: &Rect, obstacle_width: f32) -> bool {
    obstacle.trailing_edge(obstacle_width) < avatar.max.x
}

/// Avatar overlaps the obstacle's column outside the gap
pub fn collides(obstacle: &Obstacle, avatar: &Rect, config: &EngineConfig, height: f32) -> bool {
    let column = obstacle_column(obstacle, config, height);
    avatar.overlaps_x(&column)
        && (avatar.min.y < obstacle.gap_top || avatar.max.y > obstacle.gap_bottom())
}

/// Outcome of judging one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub obstacles: Vec<Obstacle>,
    /// Obstacles newly passed this tick
    pub scored: u32,
    /// ID of the first obstacle hit, in sequence order
    pub collision: Option<u32>,
}

/// Judge the avatar against every obstacle.
///
/// Each obstacle is checked for a pass first, then for a collision. Judging
/// stops at the first collision; later obstacles keep their flags.
pub fn judge(obstacles: &[Obstacle], avatar: &Avatar, config: &EngineConfig, height: f32) -> Verdict {
    let rect = avatar_rect(avatar, config);
    let mut scored = 0;
    let mut collision = None;

    let obstacles: Vec<Obstacle> = obstacles
        .iter()
        .map(|o| {
            if collision.is_some() {
                return *o;
            }
            let mut next = *o;
            if !o.passed && has_cleared(o, &rect, config.obstacle_width) {
                next.passed = true;
                scored += 1;
            }
            if collides(o, &rect, config, height) {
                collision = Some(o.id);
            }
            next
        })
        .collect();

    Verdict {
        obstacles,
        scored,
        collision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f32 = 500.0;

    fn obstacle(id: u32, x: f32, gap_top: f32) -> Obstacle {
        Obstacle {
            id,
            x,
            gap_top,
            gap_size: 150.0,
            passed: false,
        }
    }

    fn avatar(y: f32) -> Avatar {
        Avatar { y, velocity: 0.0 }
    }

    #[test]
    fn test_rect_overlap_x() {
        let a = Rect::new(Vec2::new(50.0, 0.0), Vec2::new(38.0, 28.0));
        let b = Rect::new(Vec2::new(88.0, 0.0), Vec2::new(52.0, 500.0));
        assert!(!a.overlaps_x(&b));
        let b = Rect::new(Vec2::new(87.0, 0.0), Vec2::new(52.0, 500.0));
        assert!(a.overlaps_x(&b));
        let b = Rect::new(Vec2::new(-2.0, 0.0), Vec2::new(52.0, 500.0));
        assert!(!a.overlaps_x(&b));
    }

    #[test]
    fn test_pass_inside_gap_scores_once() {
        let config = EngineConfig::default();
        let obstacles = [obstacle(1, 35.0, 200.0)];
        let verdict = judge(&obstacles, &avatar(250.0), &config, HEIGHT);
        assert_eq!(verdict.scored, 1);
        assert_eq!(verdict.collision, None);
        assert!(verdict.obstacles[0].passed);

        let again = judge(&verdict.obstacles, &avatar(250.0), &config, HEIGHT);
        assert_eq!(again.scored, 0);
        assert!(again.obstacles[0].passed);
    }

    #[test]
    fn test_no_pass_before_trailing_edge_crosses() {
        let config = EngineConfig::default();
        // Trailing edge at 88 == avatar leading edge
        let obstacles = [obstacle(1, 36.0, 200.0)];
        let verdict = judge(&obstacles, &avatar(250.0), &config, HEIGHT);
        assert_eq!(verdict.scored, 0);
        assert!(!verdict.obstacles[0].passed);
    }

    #[test]
    fn test_collision_with_top_barrier() {
        let config = EngineConfig::default();
        let obstacles = [obstacle(4, 60.0, 260.0)];
        let verdict = judge(&obstacles, &avatar(250.0), &config, HEIGHT);
        assert_eq!(verdict.collision, Some(4));
    }

    #[test]
    fn test_collision_with_bottom_barrier() {
        let config = EngineConfig::default();
        // Gap ends at 250, avatar bottom at 278
        let obstacles = [obstacle(4, 60.0, 100.0)];
        let verdict = judge(&obstacles, &avatar(250.0), &config, HEIGHT);
        assert_eq!(verdict.collision, Some(4));
    }

    #[test]
    fn test_no_collision_without_horizontal_overlap() {
        let config = EngineConfig::default();
        let obstacles = [obstacle(1, 200.0, 0.0)];
        let verdict = judge(&obstacles, &avatar(250.0), &config, HEIGHT);
        assert_eq!(verdict.collision, None);
        assert_eq!(verdict.scored, 0);
    }

    #[test]
    fn test_first_collision_in_sequence_order_wins() {
        let config = EngineConfig::default();
        let obstacles = [obstacle(1, 40.0, 300.0), obstacle(2, 80.0, 300.0)];
        let verdict = judge(&obstacles, &avatar(250.0), &config, HEIGHT);
        assert_eq!(verdict.collision, Some(1));
        assert_eq!(verdict.obstacles.len(), 2);
    }

    #[test]
    fn test_score_and_collision_same_obstacle() {
        let config = EngineConfig::default();
        // Cleared horizontally but still overlapping the top barrier
        let obstacles = [obstacle(1, 35.0, 260.0)];
        let verdict = judge(&obstacles, &avatar(250.0), &config, HEIGHT);
        assert_eq!(verdict.scored, 1);
        assert_eq!(verdict.collision, Some(1));
    }
}
