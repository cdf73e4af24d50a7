//! Background clouds
//!
//! Purely cosmetic. Clouds spawn at random past the right edge, drift left at
//! their own speed and are culled once off-screen.

use glam::Vec2;
use rand::Rng;

use super::state::{Decoration, Playfield};
use crate::consts::{DECORATION_CULL_X, DECORATION_SPAWN_OFFSET};

/// Spawn a cloud just past the right edge
pub fn spawn<R: Rng + ?Sized>(playfield: &Playfield, rng: &mut R) -> Decoration {
    let y_span = (playfield.height - 100.0).max(0.0);
    Decoration {
        pos: Vec2::new(
            playfield.width + DECORATION_SPAWN_OFFSET,
            rng.random::<f32>() * y_span + 50.0,
        ),
        size: rng.random::<f32>() * 40.0 + 60.0,
        speed: rng.random::<f32>() * 0.5 + 0.5,
        opacity: rng.random::<f32>() * 0.3 + 0.7,
    }
}

/// Drift, cull, and maybe spawn one cloud
pub fn advance<R: Rng + ?Sized>(
    decorations: &[Decoration],
    dt: f32,
    playfield: &Playfield,
    spawn_chance: f64,
    rng: &mut R,
) -> Vec<Decoration> {
    let mut next: Vec<Decoration> = decorations
        .iter()
        .map(|d| Decoration {
            pos: d.pos - Vec2::new(d.speed * dt, 0.0),
            ..*d
        })
        .filter(|d| d.pos.x > DECORATION_CULL_X)
        .collect();

    if decorations.is_empty() || rng.random_bool(spawn_chance) {
        next.push(spawn(playfield, rng));
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const FIELD: Playfield = Playfield {
        width: 500.0,
        height: 500.0,
    };

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..200 {
            let d = spawn(&FIELD, &mut rng);
            assert_eq!(d.pos.x, 550.0);
            assert!((50.0..450.0).contains(&d.pos.y));
            assert!((60.0..100.0).contains(&d.size));
            assert!((0.5..1.0).contains(&d.speed));
            assert!((0.7..=1.0).contains(&d.opacity));
        }
    }

    #[test]
    fn test_first_cloud_always_spawns() {
        let mut rng = Pcg32::seed_from_u64(5);
        let next = advance(&[], 1.0, &FIELD, 0.0, &mut rng);
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn test_drift_and_cull() {
        let mut rng = Pcg32::seed_from_u64(5);
        let clouds = [
            Decoration {
                pos: Vec2::new(100.0, 80.0),
                size: 70.0,
                speed: 0.5,
                opacity: 0.9,
            },
            Decoration {
                pos: Vec2::new(-99.6, 80.0),
                size: 70.0,
                speed: 0.5,
                opacity: 0.9,
            },
        ];
        let next = advance(&clouds, 1.0, &FIELD, 0.0, &mut rng);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].pos.x, 99.5);
        assert_eq!(next[0].pos.y, 80.0);
    }
}
