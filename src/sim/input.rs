//! Key identifiers and the held-key set
//!
//! The shell reports raw key codes. Anything that does not map to one of
//! the six game keys is dropped here.

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Start on the title screen, fire while playing
    Space,
    /// Restart after game over
    R,
}

impl Key {
    /// Map a classic virtual-key code (37-40 arrows, 32 space, 82 'R')
    pub fn from_code(code: u32) -> Option<Key> {
        match code {
            37 => Some(Key::Left),
            38 => Some(Key::Up),
            39 => Some(Key::Right),
            40 => Some(Key::Down),
            32 => Some(Key::Space),
            82 => Some(Key::R),
            _ => None,
        }
    }

    /// Map a key name as reported by most windowing layers
    pub fn from_name(name: &str) -> Option<Key> {
        match name.to_ascii_lowercase().as_str() {
            "left" | "arrowleft" => Some(Key::Left),
            "right" | "arrowright" => Some(Key::Right),
            "up" | "arrowup" => Some(Key::Up),
            "down" | "arrowdown" => Some(Key::Down),
            "space" | " " => Some(Key::Space),
            "r" => Some(Key::R),
            _ => None,
        }
    }
}

/// Directional keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Up => self.up = held,
            Key::Down => self.down = held,
            Key::Space | Key::R => {}
        }
    }
}
