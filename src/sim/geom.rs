//! Geometry helpers for the simulation
//!
//! Everything here works on arena coordinates: entity positions are the
//! top-left corner of a square bounding box with a single `size` side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Unit vector pointing from `from` toward `to`
///
/// Returns the zero vector when the points coincide. That is a defined
/// fallback (coincident chaser and target just stand still), not an error.
#[inline]
pub fn normalized_direction(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Axis-aligned square bounding box: top-left corner plus side length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: f32,
}

impl Aabb {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }

    /// Overlap test with strict far-edge inequalities: boxes that merely
    /// touch along an edge do not count as colliding.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size
            && self.pos.x + self.size > other.pos.x
            && self.pos.y < other.pos.y + other.size
            && self.pos.y + self.size > other.pos.y
    }

    /// Center of the box
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_normalized_direction_coincident_points() {
        let p = Vec2::new(123.0, -45.5);
        assert_eq!(normalized_direction(p, p), Vec2::ZERO);
    }

    #[test]
    fn test_normalized_direction_axis() {
        let dir = normalized_direction(Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert!((dir - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_overlaps_touching_edges_do_not_collide() {
        let a = Aabb::new(Vec2::ZERO, 10.0);
        let b = Aabb::new(Vec2::new(10.0, 0.0), 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_intersecting() {
        let a = Aabb::new(Vec2::ZERO, 10.0);
        let b = Aabb::new(Vec2::new(9.5, 9.5), 10.0);
        assert!(a.overlaps(&b));
    }

    proptest! {
        #[test]
        fn prop_overlaps_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
            asize in 0.1f32..100.0, bsize in 0.1f32..100.0,
        ) {
            let a = Aabb::new(Vec2::new(ax, ay), asize);
            let b = Aabb::new(Vec2::new(bx, by), bsize);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_direction_is_unit_or_zero(
            fx in -1000.0f32..1000.0, fy in -1000.0f32..1000.0,
            tx in -1000.0f32..1000.0, ty in -1000.0f32..1000.0,
        ) {
            let dir = normalized_direction(Vec2::new(fx, fy), Vec2::new(tx, ty));
            let len = dir.length();
            prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-3);
        }
    }
}
