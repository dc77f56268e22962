//! Axis-aligned bounding boxes
//!
//! Every collision in the game is a rectangle/rectangle test between
//! top-left anchored boxes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A top-left anchored rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Positive width and height
    #[inline]
    pub fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// True iff the boxes share non-zero area. Touching edges do not count,
    /// and a degenerate box overlaps nothing.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        if !self.has_area() || !other.has_area() {
            return false;
        }
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}
