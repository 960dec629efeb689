//! Arena and playfield geometry
//!
//! The arena is the circle the player may move in. The playfield is the
//! full screen rectangle; projectiles live until they leave it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sdf::{sd_box, sd_circle};

/// Circular region bounding player movement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub center: Vec2,
    pub radius: f32,
}

impl Arena {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Pull `pos` back onto the ring if it is outside, keeping its direction
    /// from the center. Positions inside are returned unchanged.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        if sd_circle(pos, self.center, self.radius) > 0.0 {
            self.center + (pos - self.center).normalize_or_zero() * self.radius
        } else {
            pos
        }
    }
}

/// Screen rectangle from (0, 0) to (width, height)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Points on the edge still count as inside
    pub fn contains(&self, pos: Vec2) -> bool {
        sd_box(pos, Vec2::ZERO, Vec2::new(self.width, self.height)) <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arena() -> Arena {
        Arena::new(Vec2::new(400.0, 300.0), 220.0)
    }

    #[test]
    fn test_clamp_inside_is_noop() {
        let p = Vec2::new(450.0, 320.0);
        assert_eq!(arena().clamp(p), p);
    }

    #[test]
    fn test_clamp_outside_projects_onto_ring() {
        let clamped = arena().clamp(Vec2::new(700.0, 300.0));
        assert!((clamped - Vec2::new(620.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn test_playfield_contains() {
        let field = Playfield::new(800.0, 600.0);
        assert!(field.contains(Vec2::new(0.0, 0.0)));
        assert!(field.contains(Vec2::new(800.0, 600.0)));
        assert!(!field.contains(Vec2::new(-0.5, 300.0)));
        assert!(!field.contains(Vec2::new(400.0, 600.5)));
    }

    proptest! {
        #[test]
        fn prop_clamped_points_land_on_ring(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0) {
            let arena = arena();
            let p = Vec2::new(x, y);
            prop_assume!((p - arena.center).length() > arena.radius);

            let clamped = arena.clamp(p);
            let dist = (clamped - arena.center).length();
            prop_assert!((dist - arena.radius).abs() < 1e-2);

            // Same ray from the center
            let before = (p - arena.center).normalize();
            let after = (clamped - arena.center).normalize();
            prop_assert!(before.perp_dot(after).abs() < 1e-4);
            prop_assert!(before.dot(after) > 0.0);
        }

        #[test]
        fn prop_clamp_never_leaves_arena(x in 0.0f32..800.0, y in 0.0f32..600.0) {
            let arena = arena();
            let clamped = arena.clamp(Vec2::new(x, y));
            prop_assert!((clamped - arena.center).length() <= arena.radius + 1e-2);
        }
    }
}
