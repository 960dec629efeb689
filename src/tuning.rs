//! Data-driven game balance
//!
//! Every gameplay constant lives here so a session can be rebuilt from a
//! single value. Times are in milliseconds and converted to simulation
//! ticks on use.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::ms_to_ticks;

/// Gameplay tuning values for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Playfield rectangle size; projectiles leaving it are removed
    pub playfield_width: f32,
    pub playfield_height: f32,

    /// Arena circle the player is confined to
    pub arena_center: Vec2,
    pub arena_radius: f32,

    pub player_speed: f32,
    pub player_hit_radius: f32,

    pub projectile_speed: f32,
    pub projectile_hit_radius: f32,
    /// Margin outside the arena radius where projectiles appear
    pub spawn_offset: f32,

    /// Starting time between spawns
    pub spawn_interval_ms: u32,
    /// How often the spawn interval shrinks
    pub spawn_decay_period_ms: u32,
    /// How much it shrinks each time
    pub spawn_decay_step_ms: u32,
    /// Floor for the spawn interval
    pub min_spawn_interval_ms: u32,

    /// Survival time per point
    pub score_quantum_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            arena_center: Vec2::new(ARENA_CENTER_X, ARENA_CENTER_Y),
            arena_radius: ARENA_RADIUS,
            player_speed: PLAYER_SPEED,
            player_hit_radius: PLAYER_HIT_RADIUS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_hit_radius: PROJECTILE_HIT_RADIUS,
            spawn_offset: SPAWN_OFFSET,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_decay_period_ms: SPAWN_DECAY_PERIOD_MS,
            spawn_decay_step_ms: SPAWN_DECAY_STEP_MS,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
            score_quantum_ms: SCORE_QUANTUM_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Check that values describe a playable session
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("arena_radius", self.arena_radius),
            ("player_speed", self.player_speed),
            ("player_hit_radius", self.player_hit_radius),
            ("projectile_speed", self.projectile_speed),
            ("projectile_hit_radius", self.projectile_hit_radius),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::tuning(field, "must be a positive number"));
            }
        }
        if !self.spawn_offset.is_finite() || self.spawn_offset < 0.0 {
            return Err(GameError::tuning("spawn_offset", "must not be negative"));
        }

        let timings = [
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("spawn_decay_period_ms", self.spawn_decay_period_ms),
            ("min_spawn_interval_ms", self.min_spawn_interval_ms),
            ("score_quantum_ms", self.score_quantum_ms),
        ];
        for (field, value) in timings {
            if value == 0 {
                return Err(GameError::tuning(field, "must be greater than zero"));
            }
        }
        if self.min_spawn_interval_ms > self.spawn_interval_ms {
            return Err(GameError::tuning(
                "min_spawn_interval_ms",
                "must not exceed spawn_interval_ms",
            ));
        }

        // Projectiles spawned outside the playfield would be culled at once
        let ring = self.spawn_radius();
        let c = self.arena_center;
        if c.x - ring < 0.0
            || c.x + ring > self.playfield_width
            || c.y - ring < 0.0
            || c.y + ring > self.playfield_height
        {
            return Err(GameError::tuning(
                "spawn_offset",
                "spawn ring must fit inside the playfield",
            ));
        }
        Ok(())
    }

    /// Distance from the arena center at which projectiles spawn
    pub fn spawn_radius(&self) -> f32 {
        self.arena_radius + self.spawn_offset
    }

    pub fn spawn_interval_ticks(&self) -> u64 {
        ms_to_ticks(self.spawn_interval_ms)
    }

    pub fn spawn_decay_period_ticks(&self) -> u64 {
        ms_to_ticks(self.spawn_decay_period_ms)
    }

    pub fn score_quantum_ticks(&self) -> u64 {
        ms_to_ticks(self.score_quantum_ms)
    }
}
