//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one tick. Discrete key
//! presses queued since the last tick are applied first, then the world is
//! stepped if (and only if) a game is in progress.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::entity::EntityKind;
use super::input::{HeldKeys, Key};
use super::machine::{check_game_over, on_key_press};
use super::spawner::{enemy_fires, spawn_due};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional keys held at tick time
    pub held: HeldKeys,
    /// Discrete presses since the previous tick, oldest first
    pub presses: Vec<Key>,
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    for &key in &input.presses {
        on_key_press(state, key);
    }

    if state.phase() == GamePhase::Playing {
        step(state, &input.held);
    }
}

/// One simulation step. Order matters: move, spawn, advance, collide, check.
pub fn step(state: &mut GameState, held: &HeldKeys) {
    state.events.clear();

    move_player(state, held);

    state.session.spawn_tick += 1;
    spawn_due(state);

    advance_entities(state);
    advance_projectiles(state);
    state.particles.advance();

    resolve_collisions(state);

    check_game_over(state);
}

/// Apply held directions, keeping the ship inside the playfield
fn move_player(state: &mut GameState, held: &HeldKeys) {
    let player = &mut state.player;
    let max = Vec2::new(WIDTH, HEIGHT) - player.size();
    if held.left {
        player.pos.x -= PLAYER_SPEED;
    }
    if held.right {
        player.pos.x += PLAYER_SPEED;
    }
    if held.up {
        player.pos.y -= PLAYER_SPEED;
    }
    if held.down {
        player.pos.y += PLAYER_SPEED;
    }
    player.pos = player.pos.clamp(Vec2::ZERO, max.max(Vec2::ZERO));
}

/// Move enemies/asteroids/explosions, let enemies shoot back, cull the rest
fn advance_entities(state: &mut GameState) {
    let mut shots = Vec::new();
    for entity in &mut state.entities {
        entity.advance();
        if entity.kind == EntityKind::Enemy && enemy_fires(&mut state.rng) {
            let muzzle = entity.pos + entity.size() * Vec2::new(0.5, 1.0);
            shots.push(muzzle);
        }
    }
    for muzzle in shots {
        state.spawn_projectile(muzzle.x, muzzle.y, ENEMY_PROJECTILE_SPEED);
    }
    state.entities.retain(|e| e.active && e.pos.y <= HEIGHT);
}

fn advance_projectiles(state: &mut GameState) {
    for projectile in &mut state.projectiles {
        projectile.advance();
    }
    state.projectiles.retain(|p| {
        p.active && p.pos.y <= HEIGHT && p.pos.y >= -PROJECTILE_CULL_MARGIN
    });
}
