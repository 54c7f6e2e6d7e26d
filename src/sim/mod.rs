//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit simulation clock, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod geom;
pub mod progression;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geom::{Aabb, distance, normalized_direction};
pub use progression::{PlayerStats, exp_for_next_level, level_for_exp, spawn_interval_ms, stats_for_level};
pub use spawn::spawn_position;
pub use state::{Enemy, GamePhase, GameState, Player, Projectile};
pub use tick::{TickInput, tick};
