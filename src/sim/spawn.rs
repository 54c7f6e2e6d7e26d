//! Off-screen enemy spawn placement

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::SPAWN_MARGIN;

/// Pick a spawn position just outside the arena
///
/// One of the four edges is chosen uniformly; the position sits
/// `SPAWN_MARGIN` units beyond that edge with the perpendicular coordinate
/// drawn uniformly over the edge extent, so a freshly spawned enemy is never
/// visible inside the arena.
pub fn spawn_position(rng: &mut Pcg32, arena_w: f32, arena_h: f32) -> Vec2 {
    match rng.random_range(0..4u32) {
        0 => Vec2::new(rng.random_range(0.0..arena_w), -SPAWN_MARGIN),
        1 => Vec2::new(arena_w + SPAWN_MARGIN, rng.random_range(0.0..arena_h)),
        2 => Vec2::new(rng.random_range(0.0..arena_w), arena_h + SPAWN_MARGIN),
        _ => Vec2::new(-SPAWN_MARGIN, rng.random_range(0.0..arena_h)),
    }
}
