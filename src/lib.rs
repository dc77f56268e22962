//! Space Shooter - A vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `assets`: Sprite table with procedural fallback
//! - `renderer`: Off-screen frame composition
//! - `game`: Tick/key entry points for a display shell
//! - `settings`: Shell configuration

pub mod assets;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{SpriteId, SpriteTable};
pub use game::Game;
pub use renderer::Frame;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units, also the frame size in pixels)
    pub const WIDTH: f32 = 350.0;
    pub const HEIGHT: f32 = 400.0;

    /// Fixed tick rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Tick duration in seconds
    pub const TICK_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;

    /// Player movement per tick while a direction is held
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Upward speed of player projectiles
    pub const PROJECTILE_SPEED: f32 = 10.0;
    /// Downward speed of enemy projectiles
    pub const ENEMY_PROJECTILE_SPEED: f32 = 5.0;
    pub const ENEMY_SPEED: f32 = 2.5;
    pub const ASTEROID_SPEED: f32 = 3.0;

    /// Player spawn offset from the horizontal center
    pub const PLAYER_START_X_OFFSET: f32 = 32.0;
    /// Player spawn distance from the bottom edge
    pub const PLAYER_START_Y_OFFSET: f32 = 80.0;

    /// Spawn cadence in ticks
    pub const ENEMY_SPAWN_PERIOD: u64 = 120;
    pub const ASTEROID_SPAWN_PERIOD: u64 = 180;
    /// Per-tick return-fire odds for each live enemy (1 in N)
    pub const ENEMY_FIRE_ODDS: u32 = 200;

    /// Explosions deactivate once older than this
    pub const EXPLOSION_LIFETIME: u32 = 30;

    /// Particle life lost per tick
    pub const PARTICLE_DECAY: f32 = 0.02;
    /// Particle velocity range per axis (symmetric)
    pub const PARTICLE_SPEED: f32 = 2.0;
    /// Particles per explosion burst
    pub const BURST_SIZE: usize = 8;
    /// Particle disk diameter in pixels
    pub const PARTICLE_DIAMETER: u32 = 3;

    pub const INITIAL_LIVES: i32 = 3;
    pub const ENEMY_POINTS: u64 = 100;
    pub const ASTEROID_POINTS: u64 = 50;

    /// Projectiles above this line (negative y) are culled
    pub const PROJECTILE_CULL_MARGIN: f32 = 50.0;

    /// Game over title fade-in per compositor call
    pub const FADE_STEP: u8 = 5;

    /// Exhaust sprite size and animation period
    pub const EXHAUST_WIDTH: f32 = 23.0;
    pub const EXHAUST_HEIGHT: f32 = 30.0;
    pub const EXHAUST_FRAME_TICKS: u64 = 5;
}

/// Playfield dimensions as integer pixels, for window sizing
pub const PLAYFIELD: (u32, u32) = (consts::WIDTH as u32, consts::HEIGHT as u32);
