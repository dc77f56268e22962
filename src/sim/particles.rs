//! Explosion debris
//!
//! Particles are purely decorative: they never collide and never affect
//! score or lives.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Base color for explosion bursts; green is randomized upward from here
pub const FIRE_COLOR: [u8; 3] = [255, 100, 0];
/// Upper bound (exclusive) of the random green offset
pub const GREEN_JITTER: u8 = 155;

/// A single point of debris
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in [0, 1]
    pub life: f32,
    pub decay: f32,
    pub color: [u8; 3],
    age: u32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: [u8; 3]) -> Self {
        Self {
            pos,
            vel,
            life: 1.0,
            decay: PARTICLE_DECAY,
            color,
            age: 0,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.age += 1;
        // Derived from age rather than accumulated, so 1/decay steps land on exactly zero
        self.life = 1.0 - self.age as f32 * self.decay;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// Draw alpha proportional to remaining life
    #[inline]
    pub fn alpha(&self) -> u8 {
        (255.0 * self.life).clamp(0.0, 255.0) as u8
    }
}

/// Owns every live particle, in spawn order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `count` particles at `origin` with random velocity and green tint
    pub fn spawn_burst<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        origin: Vec2,
        base: [u8; 3],
        count: usize,
    ) {
        self.particles.reserve(count);
        for _ in 0..count {
            let vel = Vec2::new(
                rng.random_range(-PARTICLE_SPEED..PARTICLE_SPEED),
                rng.random_range(-PARTICLE_SPEED..PARTICLE_SPEED),
            );
            let green = base[1].saturating_add(rng.random_range(0..GREEN_JITTER));
            self.particles
                .push(Particle::new(origin, vel, [base[0], green, base[2]]));
        }
    }

    /// Advance everything and drop the dead
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.advance();
        }
        self.particles.retain(|p| !p.is_dead());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
