//! Enemy and asteroid spawning
//!
//! Spawns are driven by the session tick counter: an enemy every 120 ticks,
//! an asteroid every 180 ticks. Enemy return fire is a per-tick coin flip,
//! not a timer.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, EntityKind};
use super::state::GameState;
use crate::consts::*;

/// Run the periodic checks for the current `spawn_tick`
pub fn spawn_due(state: &mut GameState) {
    let tick = state.session.spawn_tick;
    if tick % ENEMY_SPAWN_PERIOD == 0 {
        spawn_descending(state, EntityKind::Enemy, ENEMY_SPEED);
    }
    if tick % ASTEROID_SPAWN_PERIOD == 0 {
        let kind = if state.rng.random_bool(0.5) {
            EntityKind::AsteroidLight
        } else {
            EntityKind::AsteroidHeavy
        };
        spawn_descending(state, kind, ASTEROID_SPEED);
    }
}

/// Place `kind` just above the top edge in a random lane, moving down
pub fn spawn_descending(state: &mut GameState, kind: EntityKind, speed: f32) {
    let mut entity =
        Entity::spawn(Vec2::ZERO, kind, state.sizes()).with_velocity(Vec2::new(0.0, speed));
    let size = entity.size();
    let max_x = (WIDTH - size.x).max(0.0);
    entity.pos = Vec2::new(state.rng.random_range(0.0..=max_x), -size.y);
    log::debug!("Spawned {:?} at x={:.1}", kind, entity.pos.x);
    state.entities.push(entity);
}

/// One independent 1-in-200 roll per live enemy per tick
#[inline]
pub fn enemy_fires<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_ratio(1, ENEMY_FIRE_ODDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{SpriteId, SpriteSizes};
    use crate::sim::state::GamePhase;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn playing_state(seed: u64) -> GameState {
        let sizes = SpriteSizes::default().with(SpriteId::Enemy, Vec2::new(40.0, 30.0));
        let mut state = GameState::new(seed, sizes);
        state.reset(GamePhase::Playing);
        state
    }

    #[test]
    fn test_enemy_at_tick_120() {
        let mut state = playing_state(3);
        state.session.spawn_tick = 120;
        spawn_due(&mut state);
        assert_eq!(state.entities.len(), 1);
        let enemy = &state.entities[0];
        assert_eq!(enemy.kind, EntityKind::Enemy);
        assert_eq!(enemy.pos.y, -30.0);
        assert!(enemy.pos.x >= 0.0 && enemy.pos.x <= WIDTH - 40.0);
        assert_eq!(enemy.vel, Vec2::new(0.0, ENEMY_SPEED));
    }

    #[test]
    fn test_asteroid_at_tick_180() {
        let mut state = playing_state(3);
        state.session.spawn_tick = 180;
        spawn_due(&mut state);
        assert_eq!(state.entities.len(), 1);
        let rock = &state.entities[0];
        assert!(matches!(
            rock.kind,
            EntityKind::AsteroidLight | EntityKind::AsteroidHeavy
        ));
        assert_eq!(rock.sprite, Some(rock.kind.sprite()));
        assert_eq!(rock.vel.y, ASTEROID_SPEED);
    }

    #[test]
    fn test_coinciding_periods_spawn_both() {
        let mut state = playing_state(3);
        state.session.spawn_tick = 360;
        spawn_due(&mut state);
        assert_eq!(state.entities.len(), 2);
        assert_eq!(state.entities[0].kind, EntityKind::Enemy);
    }

    #[test]
    fn test_off_period_spawns_nothing() {
        let mut state = playing_state(3);
        for tick in [1, 60, 119, 121, 179, 239] {
            state.session.spawn_tick = tick;
            spawn_due(&mut state);
        }
        assert!(state.entities.is_empty());
    }

    #[test]
    fn test_both_asteroid_kinds_appear() {
        let mut state = playing_state(11);
        let mut light = 0;
        let mut heavy = 0;
        for _ in 0..200 {
            state.entities.clear();
            state.session.spawn_tick = 180;
            spawn_due(&mut state);
            match state.entities[0].kind {
                EntityKind::AsteroidLight => light += 1,
                EntityKind::AsteroidHeavy => heavy += 1,
                other => panic!("unexpected {other:?}"),
            }
        }
        assert!(light > 50 && heavy > 50);
    }

    #[test]
    fn test_enemy_fire_rate_is_about_one_in_two_hundred() {
        let mut rng = Pcg32::seed_from_u64(42);
        let hits = (0..200_000).filter(|_| enemy_fires(&mut rng)).count();
        assert!((800..1200).contains(&hits), "hits = {hits}");
    }
}
