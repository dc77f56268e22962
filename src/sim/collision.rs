//! Collision resolution
//!
//! Runs once per tick after everything has moved. Two passes:
//! - projectiles: player shots kill at most one enemy/asteroid each, enemy
//!   shots only test the player
//! - bodies: the first enemy/asteroid touching the player rams it
//!
//! Nothing is removed while scanning. Hits are marked in index sets and the
//! collections are compacted once both passes are done, so an index marked
//! twice is still removed once.

use glam::Vec2;

use super::entity::{Entity, EntityKind, overlaps};
use super::particles::FIRE_COLOR;
use super::state::{GameEvent, GameState};
use crate::consts::BURST_SIZE;

/// Indices of a collection marked for removal
#[derive(Debug, Clone, Default)]
pub struct RemovalSet {
    marked: Vec<bool>,
}

impl RemovalSet {
    pub fn new(len: usize) -> Self {
        Self {
            marked: vec![false; len],
        }
    }

    /// Mark `index`; marking again is a no-op
    #[inline]
    pub fn mark(&mut self, index: usize) {
        self.marked[index] = true;
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.marked.get(index).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }

    /// Drop every marked element, preserving the order of the rest
    pub fn apply<T>(&self, items: &mut Vec<T>) {
        let mut index = 0;
        items.retain(|_| {
            let keep = !self.contains(index);
            index += 1;
            keep
        });
    }
}

/// First live destroyable entity (not already consumed) overlapping `body`
fn first_hit(entities: &[Entity], consumed: &RemovalSet, body: &Entity) -> Option<usize> {
    entities
        .iter()
        .enumerate()
        .find(|(i, e)| e.kind.is_destroyable() && !consumed.contains(*i) && overlaps(body, e))
        .map(|(i, _)| i)
}

/// Resolve all projectile and body collisions for this tick
pub fn resolve_collisions(state: &mut GameState) {
    let mut spent_projectiles = RemovalSet::new(state.projectiles.len());
    let mut destroyed = RemovalSet::new(state.entities.len());
    let mut blasts: Vec<Vec2> = Vec::new();

    for (pi, projectile) in state.projectiles.iter().enumerate() {
        if projectile.vel.y < 0.0 {
            // Player shot, moving up
            let Some(ei) = first_hit(&state.entities, &destroyed, projectile) else {
                continue;
            };
            let target = &state.entities[ei];
            let points = target.kind.points().unwrap_or(0);
            blasts.push(target.center());
            state.session.score += points;
            state.events.push(GameEvent::EnemyDestroyed {
                kind: target.kind,
                points,
            });
            log::debug!("{:?} destroyed (+{points})", target.kind);
            spent_projectiles.mark(pi);
            destroyed.mark(ei);
        } else if overlaps(projectile, &state.player) {
            // Enemy shot, moving down
            blasts.push(state.player.center());
            state.session.lives -= 1;
            state.events.push(GameEvent::PlayerHit {
                by: EntityKind::Projectile,
            });
            log::debug!("Player shot, lives={}", state.session.lives);
            spent_projectiles.mark(pi);
        }
    }

    // Only the first ramming body counts per tick
    if let Some(ei) = first_hit(&state.entities, &destroyed, &state.player) {
        let rammer = &state.entities[ei];
        blasts.push(state.player.center());
        blasts.push(rammer.center());
        state.session.lives -= 1;
        state.events.push(GameEvent::PlayerHit { by: rammer.kind });
        log::debug!("Player rammed by {:?}, lives={}", rammer.kind, state.session.lives);
        destroyed.mark(ei);
    }

    spent_projectiles.apply(&mut state.projectiles);
    destroyed.apply(&mut state.entities);

    for center in blasts {
        explode(state, center);
    }
}

/// Explosion entity plus a particle burst at `center`
pub fn explode(state: &mut GameState, center: Vec2) {
    let explosion = state.explosion_at(center);
    state.entities.push(explosion);
    state
        .particles
        .spawn_burst(&mut state.rng, center, FIRE_COLOR, BURST_SIZE);
}
