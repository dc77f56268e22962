//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - Insertion-ordered collections, removals applied after each scan
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod geometry;
pub mod input;
pub mod machine;
pub mod particles;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{RemovalSet, resolve_collisions};
pub use entity::{Entity, EntityKind, overlaps};
pub use geometry::Aabb;
pub use input::{HeldKeys, Key};
pub use machine::{check_game_over, on_key_press};
pub use particles::{Particle, ParticleSystem};
pub use state::{GameEvent, GamePhase, GameState, Session};
pub use tick::{TickInput, step, tick};
