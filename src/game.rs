//! Entry points for a display shell
//!
//! Key events may arrive at any time between ticks. They only touch the
//! held-key set and the press queue; the world itself changes inside `tick`.

use crate::assets::SpriteTable;
use crate::renderer::{Compositor, Frame};
use crate::sim::{GameState, HeldKeys, Key, TickInput, tick};

/// A running game: simulation, sprites, frame and pending input
pub struct Game {
    state: GameState,
    sprites: SpriteTable,
    compositor: Compositor,
    held: HeldKeys,
    presses: Vec<Key>,
}

impl Game {
    pub fn new(seed: u64, sprites: SpriteTable) -> Self {
        let state = GameState::new(seed, sprites.sizes());
        Self {
            state,
            sprites,
            compositor: Compositor::new(),
            held: HeldKeys::default(),
            presses: Vec::new(),
        }
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.set(key, true);
        self.presses.push(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.set(key, false);
    }

    /// Raw key code variant of `key_down`; unknown codes are ignored
    pub fn key_down_code(&mut self, code: u32) {
        if let Some(key) = Key::from_code(code) {
            self.key_down(key);
        }
    }

    /// Raw key code variant of `key_up`; unknown codes are ignored
    pub fn key_up_code(&mut self, code: u32) {
        if let Some(key) = Key::from_code(code) {
            self.key_up(key);
        }
    }

    /// Key name variant of `key_down` ("ArrowLeft", "Space", "r", ...)
    pub fn key_down_name(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.key_down(key);
        }
    }

    pub fn key_up_name(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.key_up(key);
        }
    }

    /// Run one tick and return the freshly composed frame
    pub fn tick(&mut self) -> &Frame {
        let input = TickInput {
            held: self.held,
            presses: std::mem::take(&mut self.presses),
        };
        tick(&mut self.state, &input);
        self.compositor.compose(&mut self.state, &self.sprites)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Last composed frame
    pub fn frame(&self) -> &Frame {
        self.compositor.frame()
    }

    pub fn sprites(&self) -> &SpriteTable {
        &self.sprites
    }
}
