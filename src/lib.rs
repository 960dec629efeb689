//! Ring Dodge - A circular arena dodge game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, scoring)
//! - `session`: Host driver turning frame deltas into fixed simulation steps
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences
//! - `highscores`: Top score leaderboard
//! - `web`: Browser bindings (wasm32 only)

pub mod error;
pub mod highscores;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::GameError;
pub use highscores::HighScores;
pub use session::Session;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (200 Hz, 5 ms per tick)
    pub const SIM_DT: f32 = 1.0 / 200.0;
    /// Length of one tick in milliseconds
    pub const SIM_DT_MS: u32 = 5;
    /// Frame deltas above this are clamped (tab switch, debugger pause)
    pub const MAX_FRAME_MS: u32 = 100;
    /// Maximum substeps per frame to prevent spiral of death. Covers a
    /// whole clamped frame so the sim never falls behind the frame clock.
    pub const MAX_SUBSTEPS: u32 = MAX_FRAME_MS / SIM_DT_MS;

    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Arena defaults
    pub const ARENA_CENTER_X: f32 = 400.0;
    pub const ARENA_CENTER_Y: f32 = 300.0;
    pub const ARENA_RADIUS: f32 = 220.0;
    /// Radius of the ring drawn by the renderer (slightly larger than the
    /// movement limit so the player sprite stays inside it)
    pub const ARENA_VISUAL_RADIUS: f32 = 250.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 400.0;
    /// 32x32 sprite
    pub const PLAYER_HIT_RADIUS: f32 = 16.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 300.0;
    /// 60x60 sprite drawn at half scale
    pub const PROJECTILE_HIT_RADIUS: f32 = 15.0;
    /// Distance outside the arena radius where projectiles appear
    pub const SPAWN_OFFSET: f32 = 50.0;
    /// Sprite faces up, travel angle 0 faces right
    pub const PROJECTILE_ROTATION_OFFSET: f32 = std::f32::consts::FRAC_PI_2;

    /// Spawner timing (milliseconds)
    pub const SPAWN_INTERVAL_MS: u32 = 1000;
    pub const SPAWN_DECAY_PERIOD_MS: u32 = 5000;
    pub const SPAWN_DECAY_STEP_MS: u32 = 50;
    pub const MIN_SPAWN_INTERVAL_MS: u32 = 100;

    /// One point per 10 ms survived
    pub const SCORE_QUANTUM_MS: u32 = 10;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert milliseconds to whole simulation ticks (rounded up, at least one)
#[inline]
pub fn ms_to_ticks(ms: u32) -> u64 {
    (ms.div_ceil(consts::SIM_DT_MS) as u64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(3.0 * PI) - (-PI)).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-6);
        assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_polar_to_cartesian_offsets_from_center() {
        let p = polar_to_cartesian(Vec2::new(400.0, 300.0), 270.0, 0.0);
        assert!((p - Vec2::new(670.0, 300.0)).length() < 1e-4);

        let p = polar_to_cartesian(Vec2::new(400.0, 300.0), 270.0, PI / 2.0);
        assert!((p - Vec2::new(400.0, 570.0)).length() < 1e-3);
    }

    #[test]
    fn test_ms_to_ticks() {
        assert_eq!(ms_to_ticks(10), 2);
        assert_eq!(ms_to_ticks(1000), 200);
        assert_eq!(ms_to_ticks(7), 2);
        assert_eq!(ms_to_ticks(0), 1);
    }
}
