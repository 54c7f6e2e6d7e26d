//! Game state and core simulation types
//!
//! Every mutable cell the simulation needs (timers, id counter, RNG) lives in
//! one explicit `GameState` aggregate. Nothing is ambient.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Aabb;
use super::progression::{level_for_exp, stats_for_level};
use crate::consts::*;

/// Current phase of gameplay
///
/// Transitions: Menu --start--> Playing --pause--> Paused --resume--> Playing;
/// Playing --health 0--> GameOver --restart--> Playing (full re-init).
/// Ticks only run in Playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated yet
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended (terminal until restart)
    GameOver,
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub size: f32,
    pub health: f32,
    pub max_health: f32,
    /// Cumulative experience
    pub exp: u32,
    /// Cached level; reconciled against `level_for_exp(exp)` every tick
    pub level: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(
                (ARENA_WIDTH - PLAYER_SIZE) / 2.0,
                (ARENA_HEIGHT - PLAYER_SIZE) / 2.0,
            ),
            size: PLAYER_SIZE,
            health: PLAYER_BASE_HEALTH,
            max_health: PLAYER_BASE_HEALTH,
            exp: 0,
            level: 1,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A pursuing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    pub health: f32,
    pub max_health: f32,
    /// Chase speed, arena units per second
    pub speed: f32,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.aabb().center()
    }
}

/// An auto-attack projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: f32,
    pub size: f32,
}

impl Projectile {
    pub fn center(&self) -> Vec2 {
        Aabb::new(self.pos, self.size).center()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner RNG, advanced only inside ticks
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// Active enemies, id order (ids are monotonic so pushes keep it)
    pub enemies: Vec<Enemy>,
    /// Active projectiles, id order
    pub projectiles: Vec<Projectile>,
    pub score: u64,
    /// Survived time in seconds, advances only while playing
    pub elapsed_secs: f64,
    /// Simulation clock in milliseconds; the monotonic source the attack and
    /// spawn timers are measured against
    pub clock_ms: f64,
    pub last_attack_ms: f64,
    pub last_spawn_ms: f64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh state at the menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            player: Player::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            elapsed_secs: 0.0,
            clock_ms: 0.0,
            last_attack_ms: 0.0,
            last_spawn_ms: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Menu -> Playing. No-op in any other phase.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Menu {
            self.phase = GamePhase::Playing;
        }
    }

    /// Playing -> Paused. No-op in any other phase.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
        }
    }

    /// Paused -> Playing. No-op in any other phase.
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
        }
    }

    /// Full re-initialization straight into Playing
    ///
    /// Resets player, entity sets, score, clock, timers, id counter and RNG,
    /// so nothing from the previous run leaks into the new one.
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(seed);
        self.phase = GamePhase::Playing;
    }

    /// Reconcile the cached player level with cumulative experience.
    /// Returns true when the level increased this call.
    pub fn reconcile_level(&mut self) -> bool {
        let level = level_for_exp(self.player.exp);
        if level > self.player.level {
            self.player.level = level;
            let stats = stats_for_level(level);
            self.player.max_health = stats.max_health;
            // Heal-on-level-up is intentional
            self.player.health = stats.max_health;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_at_menu() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.player.level, 1);
        assert_eq!(state.player.health, state.player.max_health);
    }

    #[test]
    fn test_phase_commands() {
        let mut state = GameState::new(1);
        state.pause(); // not playing yet, ignored
        assert_eq!(state.phase, GamePhase::Menu);

        state.start();
        assert_eq!(state.phase, GamePhase::Playing);
        state.start(); // already playing, ignored
        assert_eq!(state.phase, GamePhase::Playing);

        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.resume();
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(1);
        state.start();
        state.score = 500;
        state.elapsed_secs = 42.0;
        state.clock_ms = 42_000.0;
        state.player.exp = 260;
        state.player.level = 3;
        let id = state.next_entity_id();
        assert!(id > 0);
        state.phase = GamePhase::GameOver;

        state.restart(2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.elapsed_secs, 0.0);
        assert_eq!(state.clock_ms, 0.0);
        assert_eq!(state.player.exp, 0);
        assert_eq!(state.player.level, 1);
        assert_eq!(state.next_entity_id(), 1);
    }

    #[test]
    fn test_level_reconcile_heals_to_new_max() {
        let mut state = GameState::new(1);
        state.player.health = 30.0;
        state.player.exp = 115;
        assert!(state.reconcile_level());
        assert_eq!(state.player.level, 2);
        assert_eq!(state.player.max_health, 120.0);
        assert_eq!(state.player.health, 120.0);

        // No change without a threshold crossing
        assert!(!state.reconcile_level());
    }
}
