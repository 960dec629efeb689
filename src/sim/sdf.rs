//! Signed distance helpers
//!
//! Negative inside, positive outside. Used for the arena boundary, the
//! playfield bounds and circle overlap tests.

use glam::Vec2;

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Signed distance to an axis-aligned box given by its min/max corners
pub fn sd_box(p: Vec2, min: Vec2, max: Vec2) -> f32 {
    let center = (min + max) * 0.5;
    let half = (max - min) * 0.5;
    let d = (p - center).abs() - half;
    let outside = d.max(Vec2::ZERO).length();
    let inside = d.x.max(d.y).min(0.0);
    outside + inside
}

/// True if two circles overlap (touching counts as a miss)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    sd_circle(a, b, radius_b) < radius_a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sd_circle() {
        let c = Vec2::new(400.0, 300.0);
        assert!((sd_circle(Vec2::new(400.0, 300.0), c, 220.0) + 220.0).abs() < 1e-4);
        assert!((sd_circle(Vec2::new(700.0, 300.0), c, 220.0) - 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_sd_box() {
        let min = Vec2::ZERO;
        let max = Vec2::new(800.0, 600.0);
        // Inside: distance to nearest edge, negative
        assert!((sd_box(Vec2::new(10.0, 300.0), min, max) + 10.0).abs() < 1e-4);
        // Outside on one axis
        assert!((sd_box(Vec2::new(-5.0, 300.0), min, max) - 5.0).abs() < 1e-4);
        // Outside past a corner
        assert!((sd_box(Vec2::new(803.0, 604.0), min, max) - 5.0).abs() < 1e-4);
        // On the edge
        assert!(sd_box(Vec2::new(800.0, 300.0), min, max).abs() < 1e-4);
    }

    #[test]
    fn test_circles_overlap() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_overlap(a, 16.0, Vec2::new(30.0, 0.0), 15.0));
        assert!(!circles_overlap(a, 16.0, Vec2::new(31.0, 0.0), 15.0));
        assert!(!circles_overlap(a, 16.0, Vec2::new(40.0, 0.0), 15.0));
    }
}
