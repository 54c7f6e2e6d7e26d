//! Per-frame simulation step
//!
//! One `tick` advances the whole world by `dt` seconds. Sub-step order is
//! load-bearing: later steps (targeting, collisions) must read the sets as
//! mutated by earlier steps in the same tick.

use std::cmp::Ordering;

use super::geom::{distance, normalized_direction};
use super::progression::{spawn_interval_ms, stats_for_level};
use super::spawn::spawn_position;
use super::state::{Enemy, GamePhase, GameState, Projectile};
use crate::consts::*;

/// Directional input snapshot for a single tick
///
/// Taken from the pressed-key set at the start of movement processing; any
/// subset of the four flags may be true at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one frame
///
/// Runs only while `Playing`; every other phase is a no-op so a stale
/// scheduler callback can never mutate state across a phase change.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    // 1. Clock advance
    state.elapsed_secs += dt as f64;
    state.clock_ms += dt as f64 * 1000.0;
    let now_ms = state.clock_ms;

    let stats = stats_for_level(state.player.level);

    // 2. Player movement. Diagonals are unnormalized on purpose (legacy
    // behavior kept: up+left is faster than either axis alone).
    let step = stats.speed * dt;
    let player = &mut state.player;
    if input.up {
        player.pos.y -= step;
    }
    if input.down {
        player.pos.y += step;
    }
    if input.left {
        player.pos.x -= step;
    }
    if input.right {
        player.pos.x += step;
    }
    player.pos.x = player.pos.x.clamp(0.0, ARENA_WIDTH - player.size);
    player.pos.y = player.pos.y.clamp(0.0, ARENA_HEIGHT - player.size);

    // 3. Spawn check
    if now_ms - state.last_spawn_ms > spawn_interval_ms(state.player.level) {
        let pos = spawn_position(&mut state.rng, ARENA_WIDTH, ARENA_HEIGHT);
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            pos,
            size: ENEMY_SIZE,
            health: ENEMY_BASE_HEALTH,
            max_health: ENEMY_BASE_HEALTH,
            speed: ENEMY_BASE_SPEED + state.player.level as f32 * ENEMY_SPEED_PER_LEVEL,
        });
        state.last_spawn_ms = now_ms;
    }

    // 4. Enemy steering toward the player's current position
    let player_pos = state.player.pos;
    for enemy in &mut state.enemies {
        let dir = normalized_direction(enemy.pos, player_pos);
        enemy.pos += dir * enemy.speed * dt;
    }

    // 5. Auto-attack acquisition. Nearest enemy strictly within range;
    // enemies iterate in id order, so ties go to the lowest id. The cooldown
    // timestamp only moves when a projectile actually spawns.
    if now_ms - state.last_attack_ms > stats.attack_cooldown_ms {
        let target = state
            .enemies
            .iter()
            .map(|e| (e.pos, distance(player_pos, e.pos)))
            .filter(|(_, dist)| *dist < stats.attack_range)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .map(|(pos, _)| pos);

        if let Some(target_pos) = target {
            let dir = normalized_direction(player_pos, target_pos);
            let id = state.next_entity_id();
            state.projectiles.push(Projectile {
                id,
                pos: player_pos,
                vel: dir * PROJECTILE_SPEED,
                damage: stats.damage,
                size: PROJECTILE_SIZE,
            });
            state.last_attack_ms = now_ms;
        }
    }

    // 6. Projectile advance, cull anything that left the arena
    for proj in &mut state.projectiles {
        proj.pos += proj.vel * dt;
    }
    state.projectiles.retain(|p| {
        p.pos.x >= 0.0 && p.pos.x <= ARENA_WIDTH && p.pos.y >= 0.0 && p.pos.y <= ARENA_HEIGHT
    });

    // 7. Projectile-enemy collision. A projectile is consumed by its first
    // strike, and each enemy takes at most one strike per tick.
    let enemies = &mut state.enemies;
    let mut struck: Vec<u32> = Vec::new();
    state.projectiles.retain(|proj| {
        for enemy in enemies.iter_mut() {
            if struck.contains(&enemy.id) {
                continue;
            }
            if distance(proj.center(), enemy.center()) < enemy.size / 2.0 {
                struck.push(enemy.id);
                enemy.health -= proj.damage;
                return false;
            }
        }
        true
    });
    let mut kills: u64 = 0;
    enemies.retain(|e| {
        if e.health <= 0.0 {
            kills += 1;
            false
        } else {
            true
        }
    });
    state.score += kills * KILL_SCORE;
    state.player.exp += kills as u32 * KILL_EXP;

    // 8. Player-enemy contact damage, additive per overlapping enemy
    let player_box = state.player.aabb();
    let contacts = state
        .enemies
        .iter()
        .filter(|e| player_box.overlaps(&e.aabb()))
        .count();
    if contacts > 0 {
        state.player.health =
            (state.player.health - contacts as f32 * ENEMY_CONTACT_DAMAGE).max(0.0);
    }

    // 9. Terminal check
    if state.player.health <= 0.0 {
        state.player.health = 0.0;
        state.phase = GamePhase::GameOver;
    }

    // 10. Level-up check (recompute level from experience, heal on increase)
    state.reconcile_level();
}
