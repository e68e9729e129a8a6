//! Axis-aligned collision boxes
//!
//! Everything in the runner is a box sliding down a lane, so overlap tests
//! are plain AABB checks. Touching edges do not count as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(amount),
            size: (self.size - Vec2::splat(2.0 * amount)).max(Vec2::ZERO),
        }
    }

    /// Strict overlap test (shared edges are not a collision)
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min, self.max());
        let (b_min, b_max) = (other.min, other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 40.0, 60.0);
        let b = Rect::new(30.0, 50.0, 20.0, 20.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_miss() {
        let a = Rect::new(0.0, 0.0, 40.0, 60.0);
        let b = Rect::new(40.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(0.0, 60.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_inset_shrinks_hitbox() {
        let obstacle = Rect::new(100.0, 100.0, 50.0, 50.0);
        let hitbox = obstacle.inset(5.0);
        assert_eq!(hitbox.min, Vec2::new(105.0, 105.0));
        assert_eq!(hitbox.size, Vec2::new(40.0, 40.0));
        assert_eq!(hitbox.center(), obstacle.center());

        // Grazes the outer box but not the inset one
        let grazing = Rect::new(146.0, 100.0, 10.0, 10.0);
        assert!(obstacle.intersects(&grazing));
        assert!(!hitbox.intersects(&grazing));
    }
}
