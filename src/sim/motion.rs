//! Player motion from keyboard and pointer input
//!
//! Velocity is set directly each tick, there is no acceleration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A directional key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value (arrows or WASD)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Held state of the four direction keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// Unit-per-axis direction; opposing keys cancel on their own axis
    pub fn axis(&self) -> Vec2 {
        let x = axis_value(self.left, self.right);
        // Screen coordinates: up is -y
        let y = axis_value(self.up, self.down);
        Vec2::new(x, y)
    }
}

fn axis_value(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Pointer (mouse/touch) drag target
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    target: Option<Vec2>,
}

impl PointerInput {
    pub fn press(&mut self, pos: Vec2) {
        self.target = Some(pos);
    }

    /// Moves are ignored unless the pointer is pressed
    pub fn drag(&mut self, pos: Vec2) {
        if self.target.is_some() {
            self.target = Some(pos);
        }
    }

    pub fn release(&mut self) {
        self.target = None;
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }
}

/// Compute the player velocity for this tick.
///
/// An active pointer target wins over the keys: the player heads straight
/// for it at `speed`. A target exactly on the player yields zero velocity.
/// Without a pointer each axis is `±speed` or zero independently, so
/// diagonals move faster than straight lines.
pub fn player_velocity(pos: Vec2, keys: &DirectionKeys, pointer: Option<Vec2>, speed: f32) -> Vec2 {
    match pointer {
        Some(target) => (target - pos).normalize_or_zero() * speed,
        None => keys.axis() * speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SPEED: f32 = 400.0;

    fn keys(up: bool, down: bool, left: bool, right: bool) -> DirectionKeys {
        DirectionKeys {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn test_left_only() {
        let v = player_velocity(Vec2::ZERO, &keys(false, false, true, false), None, SPEED);
        assert_eq!(v, Vec2::new(-SPEED, 0.0));
    }

    #[test]
    fn test_opposing_keys_cancel_per_axis() {
        let v = player_velocity(Vec2::ZERO, &keys(false, false, true, true), None, SPEED);
        assert_eq!(v, Vec2::ZERO);

        let v = player_velocity(Vec2::ZERO, &keys(true, false, true, true), None, SPEED);
        assert_eq!(v, Vec2::new(0.0, -SPEED));

        let v = player_velocity(Vec2::ZERO, &keys(true, true, false, true), None, SPEED);
        assert_eq!(v, Vec2::new(SPEED, 0.0));
    }

    #[test]
    fn test_no_input_is_stationary() {
        let v = player_velocity(Vec2::new(10.0, 10.0), &DirectionKeys::default(), None, SPEED);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_on_player_is_zero() {
        let p = Vec2::new(400.0, 300.0);
        let v = player_velocity(p, &keys(true, false, false, false), Some(p), SPEED);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_lifecycle() {
        let mut pointer = PointerInput::default();
        pointer.drag(Vec2::new(5.0, 5.0));
        assert_eq!(pointer.target(), None);

        pointer.press(Vec2::new(1.0, 2.0));
        pointer.drag(Vec2::new(3.0, 4.0));
        assert_eq!(pointer.target(), Some(Vec2::new(3.0, 4.0)));

        pointer.release();
        assert_eq!(pointer.target(), None);
    }

    #[test]
    fn test_direction_from_key() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("w"), Some(Direction::Up));
        assert_eq!(Direction::from_key("Enter"), None);
    }

    proptest! {
        #[test]
        fn prop_pointer_overrides_keys(
            px in 0.0f32..800.0, py in 0.0f32..600.0,
            tx in 0.0f32..800.0, ty in 0.0f32..600.0,
            up in any::<bool>(), down in any::<bool>(),
            left in any::<bool>(), right in any::<bool>()
        ) {
            let pos = Vec2::new(px, py);
            let target = Vec2::new(tx, ty);
            prop_assume!((target - pos).length() > 1e-2);

            let v = player_velocity(pos, &keys(up, down, left, right), Some(target), SPEED);
            prop_assert!((v.length() - SPEED).abs() < 1e-2);
            let expected = (target - pos).normalize();
            prop_assert!((v / SPEED - expected).length() < 1e-3);
        }
    }
}
