//! Level and stat curves
//!
//! Level is always a pure function of cumulative experience. The player
//! record caches it for rendering, but the tick reconciles the cache against
//! `level_for_exp` every frame.

use serde::{Deserialize, Serialize};

/// Experience needed per level step
const EXP_PER_LEVEL: u32 = 100;

/// Level derived from cumulative experience (level 1 at 0 exp)
#[inline]
pub fn level_for_exp(exp: u32) -> u32 {
    exp / EXP_PER_LEVEL + 1
}

/// Experience threshold shown to the player for the next level
#[inline]
pub fn exp_for_next_level(level: u32) -> u32 {
    level * EXP_PER_LEVEL
}

/// Player stats at a given level
///
/// Only max health and damage scale; speed, range and cooldown are flat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub max_health: f32,
    pub damage: f32,
    /// Movement speed, arena units per second
    pub speed: f32,
    /// Auto-attack acquisition radius
    pub attack_range: f32,
    /// Minimum time between auto-attacks, milliseconds
    pub attack_cooldown_ms: f64,
}

pub fn stats_for_level(level: u32) -> PlayerStats {
    let step = level.saturating_sub(1) as f32;
    PlayerStats {
        max_health: 100.0 + step * 20.0,
        damage: 10.0 + step * 2.0,
        speed: 200.0,
        attack_range: 150.0,
        attack_cooldown_ms: 500.0,
    }
}

/// Enemy spawn interval for a given level, milliseconds (floored at 300)
#[inline]
pub fn spawn_interval_ms(level: u32) -> f64 {
    (1000.0 - level as f64 * 50.0).max(300.0)
}
