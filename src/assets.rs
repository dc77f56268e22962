//! Sprite table
//!
//! Ten logical sprites, loaded from PNG files when available. If any file is
//! missing or unreadable the whole table is replaced by flat 32x32 tiles so
//! the rest of the game never sees the failure.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Edge length of the procedural fallback tiles
pub const FALLBACK_TILE_SIZE: u32 = 32;

/// Logical sprite names, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Background,
    Player,
    Enemy,
    AsteroidLight,
    AsteroidHeavy,
    Projectile,
    Exhaust1,
    Exhaust2,
    Explosion1,
    Explosion2,
}

impl SpriteId {
    pub const COUNT: usize = 10;

    pub const ALL: [SpriteId; Self::COUNT] = [
        SpriteId::Background,
        SpriteId::Player,
        SpriteId::Enemy,
        SpriteId::AsteroidLight,
        SpriteId::AsteroidHeavy,
        SpriteId::Projectile,
        SpriteId::Exhaust1,
        SpriteId::Exhaust2,
        SpriteId::Explosion1,
        SpriteId::Explosion2,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// File name (without extension) under the asset directory
    pub fn file_stem(self) -> &'static str {
        match self {
            SpriteId::Background => "BACKGROUND",
            SpriteId::Player => "PLAYER",
            SpriteId::Enemy => "ENEMY",
            SpriteId::AsteroidLight => "AST-1",
            SpriteId::AsteroidHeavy => "AST-2",
            SpriteId::Projectile => "LASER",
            SpriteId::Exhaust1 => "EXHAUST1",
            SpriteId::Exhaust2 => "EXHAUST2",
            SpriteId::Explosion1 => "EXPLOSION1",
            SpriteId::Explosion2 => "EXPLOSION2",
        }
    }
}

/// Asset loading failures. Never reach the simulation.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("sprite file not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("failed to decode {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("sprite {} has zero size", path.display())]
    Empty { path: PathBuf },
}

/// An RGBA sprite, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
}

impl Sprite {
    /// A single-color opaque tile
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb;
        Self {
            width,
            height,
            pixels: vec![[r, g, b, 255]; (width * height) as usize],
        }
    }

    pub fn from_rgba(image: image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let raw = image.into_raw();
        Self {
            width,
            height,
            pixels: bytemuck::cast_slice::<u8, [u8; 4]>(&raw).to_vec(),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[(y * self.width + x) as usize]
    }
}

/// Sprite dimensions only; all the simulation needs to size entities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSizes([Vec2; SpriteId::COUNT]);

impl SpriteSizes {
    #[inline]
    pub fn get(&self, id: SpriteId) -> Vec2 {
        self.0[id.index()]
    }

    /// Every sprite the same size (handy for tests)
    pub fn uniform(size: Vec2) -> Self {
        Self([size; SpriteId::COUNT])
    }

    pub fn with(mut self, id: SpriteId, size: Vec2) -> Self {
        self.0[id.index()] = size;
        self
    }
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self::uniform(Vec2::splat(FALLBACK_TILE_SIZE as f32))
    }
}

/// The resolved image table
#[derive(Debug, Clone)]
pub struct SpriteTable {
    sprites: Vec<Sprite>,
    procedural: bool,
}

impl SpriteTable {
    /// Load every sprite from `<dir>/<NAME>.png`
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let mut sprites = Vec::with_capacity(SpriteId::COUNT);
        for id in SpriteId::ALL {
            let path = dir.join(format!("{}.png", id.file_stem()));
            if !path.is_file() {
                return Err(AssetError::Missing { path });
            }
            let image = image::open(&path)
                .map_err(|source| AssetError::Image {
                    path: path.clone(),
                    source,
                })?
                .to_rgba8();
            if image.width() == 0 || image.height() == 0 {
                return Err(AssetError::Empty { path });
            }
            sprites.push(Sprite::from_rgba(image));
        }
        log::info!("Loaded {} sprites from {}", sprites.len(), dir.display());
        Ok(Self {
            sprites,
            procedural: false,
        })
    }

    /// Load from disk, or fall back to the procedural tiles on any failure
    pub fn load_or_fallback(dir: &Path) -> Self {
        match Self::load(dir) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("Asset loading failed ({e}), using procedural sprites");
                Self::procedural()
            }
        }
    }

    /// Flat 32x32 tiles: black background, one hue step per index after that
    pub fn procedural() -> Self {
        let sprites = SpriteId::ALL
            .iter()
            .map(|id| {
                let rgb = match id.index() {
                    0 => [0, 0, 0],
                    i => hsb_to_rgb(i as f32 * 0.1, 0.8, 0.9),
                };
                Sprite::solid(FALLBACK_TILE_SIZE, FALLBACK_TILE_SIZE, rgb)
            })
            .collect();
        Self {
            sprites,
            procedural: true,
        }
    }

    #[inline]
    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id.index()]
    }

    pub fn is_procedural(&self) -> bool {
        self.procedural
    }

    pub fn sizes(&self) -> SpriteSizes {
        let mut sizes = SpriteSizes::default();
        for id in SpriteId::ALL {
            sizes = sizes.with(id, self.get(id).size());
        }
        sizes
    }
}

/// Hue/saturation/brightness to RGB, all inputs in [0, 1] (hue wraps)
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> [u8; 3] {
    let to_byte = |v: f32| (v * 255.0 + 0.5) as u8;
    if saturation == 0.0 {
        let v = to_byte(brightness);
        return [v, v, v];
    }
    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));
    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    [to_byte(r), to_byte(g), to_byte(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procedural_table_shape() {
        let table = SpriteTable::procedural();
        assert!(table.is_procedural());
        for id in SpriteId::ALL {
            let sprite = table.get(id);
            assert_eq!(sprite.width, FALLBACK_TILE_SIZE);
            assert_eq!(sprite.height, FALLBACK_TILE_SIZE);
            assert_eq!(sprite.pixels.len(), 32 * 32);
        }
        assert_eq!(table.get(SpriteId::Background).pixel(5, 5), [0, 0, 0, 255]);
    }

    #[test]
    fn test_procedural_colors_are_distinct_and_deterministic() {
        let a = SpriteTable::procedural();
        let b = SpriteTable::procedural();
        for id in SpriteId::ALL {
            assert_eq!(a.get(id), b.get(id));
        }
        let player = a.get(SpriteId::Player).pixel(0, 0);
        let enemy = a.get(SpriteId::Enemy).pixel(0, 0);
        assert_ne!(player, enemy);
    }

    #[test]
    fn test_hsb_primary_hues() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0), [0, 255, 0]);
        assert_eq!(hsb_to_rgb(0.5, 0.0, 1.0), [255, 255, 255]);
    }

    #[test]
    fn test_missing_dir_falls_back() {
        let dir = std::env::temp_dir().join("space-shooter-no-such-assets");
        assert!(matches!(
            SpriteTable::load(&dir),
            Err(AssetError::Missing { .. })
        ));
        let table = SpriteTable::load_or_fallback(&dir);
        assert!(table.is_procedural());
        assert_eq!(table.sizes().get(SpriteId::Enemy), Vec2::splat(32.0));
    }
}
