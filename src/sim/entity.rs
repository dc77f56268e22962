//! Moving objects
//!
//! Player, enemies, asteroids, projectiles, explosions and exhaust all share
//! one storage shape. Only the per-kind rule applied on `advance` differs,
//! and that rule is looked up from a small behavior table.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use crate::assets::{SpriteId, SpriteSizes};
use crate::consts::*;

/// Entity type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    AsteroidLight,
    AsteroidHeavy,
    Projectile,
    Explosion,
    Exhaust,
}

/// Extra rules an entity kind applies after moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Behavior {
    /// Deactivate once age exceeds this many ticks
    pub lifetime: Option<u32>,
    /// Cycle the animation frame through this many states every tick (1 = static)
    pub animation_frames: u8,
}

impl Behavior {
    const PLAIN: Behavior = Behavior {
        lifetime: None,
        animation_frames: 1,
    };
}

impl EntityKind {
    pub fn behavior(self) -> Behavior {
        match self {
            EntityKind::Explosion => Behavior {
                lifetime: Some(EXPLOSION_LIFETIME),
                ..Behavior::PLAIN
            },
            EntityKind::Exhaust => Behavior {
                animation_frames: 2,
                ..Behavior::PLAIN
            },
            _ => Behavior::PLAIN,
        }
    }

    /// Enemies and asteroids: can be shot and can ram the player
    #[inline]
    pub fn is_destroyable(self) -> bool {
        matches!(
            self,
            EntityKind::Enemy | EntityKind::AsteroidLight | EntityKind::AsteroidHeavy
        )
    }

    /// Score for shooting this kind down
    pub fn points(self) -> Option<u64> {
        match self {
            EntityKind::Enemy => Some(ENEMY_POINTS),
            EntityKind::AsteroidLight | EntityKind::AsteroidHeavy => Some(ASTEROID_POINTS),
            _ => None,
        }
    }

    /// Default sprite for this kind
    pub fn sprite(self) -> SpriteId {
        match self {
            EntityKind::Player => SpriteId::Player,
            EntityKind::Enemy => SpriteId::Enemy,
            EntityKind::AsteroidLight => SpriteId::AsteroidLight,
            EntityKind::AsteroidHeavy => SpriteId::AsteroidHeavy,
            EntityKind::Projectile => SpriteId::Projectile,
            EntityKind::Explosion => SpriteId::Explosion1,
            EntityKind::Exhaust => SpriteId::Exhaust1,
        }
    }
}

/// A moving, drawable simulation object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at creation
    size: Vec2,
    pub kind: EntityKind,
    pub sprite: Option<SpriteId>,
    pub active: bool,
    pub frame: u8,
    /// Ticks since creation
    pub age: u32,
}

impl Entity {
    /// Create an entity sized from its sprite (zero size when imageless)
    pub fn new(pos: Vec2, kind: EntityKind, sprite: Option<SpriteId>, sizes: &SpriteSizes) -> Self {
        let size = sprite.map_or(Vec2::ZERO, |id| sizes.get(id));
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            kind,
            sprite,
            active: true,
            frame: 0,
            age: 0,
        }
    }

    /// Create an entity with its kind's default sprite
    pub fn spawn(pos: Vec2, kind: EntityKind, sizes: &SpriteSizes) -> Self {
        Self::new(pos, kind, Some(kind.sprite()), sizes)
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Move one tick and apply the kind's extra rule
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.age += 1;

        let behavior = self.kind.behavior();
        if let Some(lifetime) = behavior.lifetime
            && self.age > lifetime
        {
            self.active = false;
        }
        if behavior.animation_frames > 1 {
            self.frame = (self.frame + 1) % behavior.animation_frames;
        }
    }
}

/// AABB overlap between two entities
#[inline]
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    a.bounds().overlaps(&b.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> SpriteSizes {
        SpriteSizes::uniform(Vec2::new(16.0, 24.0))
    }

    #[test]
    fn test_advance_moves_and_ages() {
        let mut e = Entity::spawn(Vec2::new(10.0, 10.0), EntityKind::Enemy, &sizes())
            .with_velocity(Vec2::new(1.0, 2.5));
        e.advance();
        e.advance();
        assert_eq!(e.pos, Vec2::new(12.0, 15.0));
        assert_eq!(e.age, 2);
        assert!(e.active);
        assert_eq!(e.frame, 0);
    }

    #[test]
    fn test_size_comes_from_sprite() {
        let sizes = sizes().with(SpriteId::Enemy, Vec2::new(40.0, 30.0));
        let e = Entity::spawn(Vec2::ZERO, EntityKind::Enemy, &sizes);
        assert_eq!(e.size(), Vec2::new(40.0, 30.0));

        let imageless = Entity::new(Vec2::ZERO, EntityKind::Enemy, None, &sizes);
        assert_eq!(imageless.size(), Vec2::ZERO);
    }

    #[test]
    fn test_explosion_expires_after_lifetime() {
        let mut e = Entity::spawn(Vec2::ZERO, EntityKind::Explosion, &sizes());
        for _ in 0..EXPLOSION_LIFETIME {
            e.advance();
        }
        assert!(e.active, "still active at age == lifetime");
        e.advance();
        assert!(!e.active);
    }

    #[test]
    fn test_exhaust_cycles_two_frames() {
        let mut e = Entity::spawn(Vec2::ZERO, EntityKind::Exhaust, &sizes());
        let frames: Vec<u8> = (0..4)
            .map(|_| {
                e.advance();
                e.frame
            })
            .collect();
        assert_eq!(frames, vec![1, 0, 1, 0]);
    }

    #[test]
    fn test_destroyable_kinds_and_points() {
        assert!(EntityKind::Enemy.is_destroyable());
        assert!(EntityKind::AsteroidHeavy.is_destroyable());
        assert!(!EntityKind::Explosion.is_destroyable());
        assert!(!EntityKind::Projectile.is_destroyable());
        assert_eq!(EntityKind::Enemy.points(), Some(100));
        assert_eq!(EntityKind::AsteroidLight.points(), Some(50));
        assert_eq!(EntityKind::Player.points(), None);
    }

    #[test]
    fn test_entity_overlap() {
        let s = sizes();
        let a = Entity::spawn(Vec2::new(0.0, 0.0), EntityKind::Player, &s);
        let b = Entity::spawn(Vec2::new(15.0, 23.0), EntityKind::Enemy, &s);
        let c = Entity::spawn(Vec2::new(16.0, 0.0), EntityKind::Enemy, &s);
        assert!(overlaps(&a, &b));
        assert!(!overlaps(&a, &c));
    }
}
