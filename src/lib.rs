//! Crimson Survivor - a browser arcade survivor game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, combat, game state)
//! - `input`: Keyboard boundary (pressed-key set -> directional flags)
//! - `frame`: Frame clock for the animation-frame scheduler

pub mod frame;
pub mod input;
pub mod sim;

pub use frame::FrameClock;
pub use input::InputState;

/// Game configuration constants
pub mod consts {
    /// Arena logical dimensions (shared by clamping, spawning, culling)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_BASE_HEALTH: f32 = 100.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_BASE_HEALTH: f32 = 30.0;
    pub const ENEMY_BASE_SPEED: f32 = 50.0;
    /// Extra enemy speed per player level
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 5.0;
    /// Contact damage per overlapping enemy per tick
    pub const ENEMY_CONTACT_DAMAGE: f32 = 0.5;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: f32 = 8.0;
    pub const PROJECTILE_SPEED: f32 = 400.0;

    /// How far outside the arena edge enemies spawn
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Score awarded per enemy kill
    pub const KILL_SCORE: u64 = 10;
    /// Experience awarded per enemy kill
    pub const KILL_EXP: u32 = 20;

    /// Maximum frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
