//! Game state and core simulation types
//!
//! Session counters live in one `Session` value so a reset is a single
//! assignment. The world (player, entities, projectiles, particles) and the
//! run's RNG sit beside it in `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::particles::ParticleSystem;
use crate::assets::SpriteSizes;
use crate::consts::*;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Lives exhausted, waiting for restart
    GameOver,
}

/// Something the collision resolver decided this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player projectile destroyed an enemy or asteroid
    EnemyDestroyed { kind: EntityKind, points: u64 },
    /// The player lost a life
    PlayerHit { by: EntityKind },
}

/// Score, lives, timers and phase for one menu-to-game-over cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub score: u64,
    /// Terminal at <= 0
    pub lives: i32,
    /// Ticks simulated since the session began
    pub spawn_tick: u64,
    pub phase: GamePhase,
    /// Game over title alpha
    pub fade_alpha: u8,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0,
            lives: INITIAL_LIVES,
            spawn_tick: 0,
            phase: GamePhase::Menu,
            fade_alpha: 0,
        }
    }
}

impl Session {
    /// Fresh counters in the given phase
    pub fn begin(phase: GamePhase) -> Self {
        Self {
            phase,
            ..Self::default()
        }
    }

    /// Step the game over fade-in, saturating at fully opaque
    pub fn fade_in(&mut self) {
        self.fade_alpha = self.fade_alpha.saturating_add(FADE_STEP);
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub session: Session,
    pub player: Entity,
    /// Enemies, asteroids and explosions
    pub entities: Vec<Entity>,
    pub projectiles: Vec<Entity>,
    pub particles: ParticleSystem,
    /// What the collision resolver decided during the last tick
    pub events: Vec<GameEvent>,
    sizes: SpriteSizes,
}

impl GameState {
    /// Create a new game state on the title screen
    pub fn new(seed: u64, sizes: SpriteSizes) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            session: Session::default(),
            player: Self::new_player(&sizes),
            entities: Vec::new(),
            projectiles: Vec::new(),
            particles: ParticleSystem::new(),
            events: Vec::new(),
            sizes,
        }
    }

    fn new_player(sizes: &SpriteSizes) -> Entity {
        let start = Vec2::new(
            WIDTH / 2.0 - PLAYER_START_X_OFFSET,
            HEIGHT - PLAYER_START_Y_OFFSET,
        );
        Entity::spawn(start, EntityKind::Player, sizes)
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    #[inline]
    pub fn sizes(&self) -> &SpriteSizes {
        &self.sizes
    }

    /// Start a new session in `phase`: counters, collections and player all reset
    pub fn reset(&mut self, phase: GamePhase) {
        self.entities.clear();
        self.projectiles.clear();
        self.particles.clear();
        self.events.clear();
        self.player = Self::new_player(&self.sizes);
        self.session = Session::begin(phase);
    }

    /// Add a projectile whose top edge is at `y`, horizontally centered on `center_x`
    pub fn spawn_projectile(&mut self, center_x: f32, y: f32, dy: f32) {
        let mut projectile = Entity::spawn(Vec2::ZERO, EntityKind::Projectile, &self.sizes)
            .with_velocity(Vec2::new(0.0, dy));
        projectile.pos = Vec2::new(center_x - projectile.size().x / 2.0, y);
        self.projectiles.push(projectile);
    }

    /// Player shot from the top-center of the ship
    pub fn fire_player_projectile(&mut self) {
        let center_x = self.player.center().x;
        let top = self.player.pos.y;
        self.spawn_projectile(center_x, top, -PROJECTILE_SPEED);
        log::debug!("Player fired at x={center_x:.1}");
    }

    /// Explosion entity centered on `center`
    pub fn explosion_at(&self, center: Vec2) -> Entity {
        let mut explosion = Entity::spawn(Vec2::ZERO, EntityKind::Explosion, &self.sizes);
        explosion.pos = center - explosion.size() / 2.0;
        explosion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_on_menu() {
        let state = GameState::new(1, SpriteSizes::default());
        assert_eq!(state.phase(), GamePhase::Menu);
        assert_eq!(state.session.lives, 3);
        assert_eq!(state.player.kind, EntityKind::Player);
        assert_eq!(state.player.pos, Vec2::new(143.0, 320.0));
    }

    #[test]
    fn test_reset_is_total() {
        let mut state = GameState::new(1, SpriteSizes::default());
        state.session = Session {
            score: 900,
            lives: -1,
            spawn_tick: 777,
            phase: GamePhase::GameOver,
            fade_alpha: 200,
        };
        state.player.pos = Vec2::new(1.0, 2.0);
        state.fire_player_projectile();
        let boom = state.explosion_at(Vec2::new(10.0, 10.0));
        state.entities.push(boom);

        state.reset(GamePhase::Playing);
        let after_once = state.session;
        assert_eq!(after_once, Session::begin(GamePhase::Playing));
        assert_eq!(after_once.score, 0);
        assert_eq!(after_once.lives, 3);
        assert_eq!(after_once.spawn_tick, 0);
        assert_eq!(after_once.fade_alpha, 0);
        assert!(state.entities.is_empty());
        assert!(state.projectiles.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.player.pos, Vec2::new(143.0, 320.0));

        state.reset(GamePhase::Playing);
        assert_eq!(state.session, after_once);
    }

    #[test]
    fn test_fade_saturates() {
        let mut session = Session::begin(GamePhase::GameOver);
        for _ in 0..60 {
            session.fade_in();
        }
        assert_eq!(session.fade_alpha, 255);
    }

    #[test]
    fn test_projectile_is_centered() {
        let sizes = SpriteSizes::default()
            .with(crate::assets::SpriteId::Projectile, Vec2::new(8.0, 16.0));
        let mut state = GameState::new(1, sizes);
        state.fire_player_projectile();
        let p = &state.projectiles[0];
        assert_eq!(p.center().x, state.player.center().x);
        assert_eq!(p.pos.y, state.player.pos.y);
        assert_eq!(p.vel, Vec2::new(0.0, -PROJECTILE_SPEED));
    }

    #[test]
    fn test_explosion_is_centered() {
        let state = GameState::new(1, SpriteSizes::default());
        let boom = state.explosion_at(Vec2::new(100.0, 50.0));
        assert_eq!(boom.center(), Vec2::new(100.0, 50.0));
        assert_eq!(boom.kind, EntityKind::Explosion);
    }
}
