//! Off-screen frame buffer
//!
//! An RGBA8 buffer the compositor paints into. The display shell only ever
//! sees a finished frame via `Game::tick`.

use std::path::Path;

use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::assets::Sprite;

/// RGBA8 pixel buffer, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 4]>,
}

/// Source-over blend of one channel
#[inline]
fn blend(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

impl Frame {
    /// Opaque black frame
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; (width * height) as usize],
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Pixel at (x, y); panics when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Raw RGBA bytes for the display path
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Blend `rgba` over the pixel at (x, y); clipped silently
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let [r, g, b, a] = rgba;
        let dst = &mut self.pixels[i];
        match a {
            0 => {}
            255 => *dst = [r, g, b, 255],
            _ => {
                *dst = [
                    blend(r, dst[0], a),
                    blend(g, dst[1], a),
                    blend(b, dst[2], a),
                    255,
                ]
            }
        }
    }

    /// Linear top-to-bottom gradient over the whole frame
    pub fn fill_vertical_gradient(&mut self, top: [u8; 3], bottom: [u8; 3]) {
        let span = self.height.saturating_sub(1).max(1) as f32;
        let width = self.width as usize;
        for (y, row) in self.pixels.chunks_mut(width).enumerate() {
            let t = y as f32 / span;
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            let color = [
                lerp(top[0], bottom[0]),
                lerp(top[1], bottom[1]),
                lerp(top[2], bottom[2]),
                255,
            ];
            row.fill(color);
        }
    }

    /// Nearest-neighbor scaled blit of `sprite` into the w x h box at (x, y)
    pub fn blit_scaled(&mut self, sprite: &Sprite, x: i32, y: i32, w: u32, h: u32) {
        if w == 0 || h == 0 || sprite.width == 0 || sprite.height == 0 {
            return;
        }
        for dy in 0..h {
            let sy = (dy as u64 * sprite.height as u64 / h as u64) as u32;
            for dx in 0..w {
                let sx = (dx as u64 * sprite.width as u64 / w as u64) as u32;
                self.blend_pixel(x + dx as i32, y + dy as i32, sprite.pixel(sx, sy));
            }
        }
    }

    /// `embedded-graphics` target that paints with a fixed alpha
    pub fn painter(&mut self, alpha: u8) -> Painter<'_> {
        Painter { frame: self, alpha }
    }

    /// Write the frame as a PNG
    pub fn save_png(&self, path: &Path) -> Result<(), image::ImageError> {
        image::save_buffer(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

/// Draw target for text and primitives, blended at a constant alpha
pub struct Painter<'a> {
    frame: &'a mut Frame,
    alpha: u8,
}

impl OriginDimensions for Painter<'_> {
    fn size(&self) -> Size {
        Size::new(self.frame.width, self.frame.height)
    }
}

impl DrawTarget for Painter<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.frame
                .blend_pixel(point.x, point.y, [color.r(), color.g(), color.b(), self.alpha]);
        }
        Ok(())
    }
}
