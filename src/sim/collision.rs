//! Axis-aligned box intersection
//!
//! Everything solid in the field is a box: the actor's bounds, each obstacle
//! segment and each heart. The lava floor is not; it is a half-plane checked
//! by comparing y against the floor line.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box given by its top-left corner and size (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square box of side `2 * half` centered on `center`
    pub fn centered(center: Vec2, half: f32) -> Self {
        Self {
            min: center - Vec2::splat(half),
            size: Vec2::splat(half * 2.0),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap on both axes; boxes that only touch do not intersect
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        intersects(self, other)
    }
}

/// True iff each box's min edge lies strictly before the other's max edge on both axes
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    let (a_max, b_max) = (a.max(), b.max());
    a.min.x < b_max.x && b.min.x < a_max.x && a.min.y < b_max.y && b.min.y < a_max.y
}
