//! Projectile spawning
//!
//! Two tick-based timers drive the spawner: a repeating spawn timer and a
//! decay timer that shortens the spawn interval every few seconds. The
//! spawn timer is re-armed in place when the interval changes, so there is
//! only ever one of it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState, Projectile};
use crate::consts::PROJECTILE_ROTATION_OFFSET;
use crate::tuning::Tuning;
use crate::{ms_to_ticks, normalize_angle, polar_to_cartesian};

/// Repeating countdown measured in simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatingTimer {
    period: u64,
    remaining: u64,
}

impl RepeatingTimer {
    pub fn new(period: u64) -> Self {
        let period = period.max(1);
        Self {
            period,
            remaining: period,
        }
    }

    /// Count down one tick. Returns true when the timer fires.
    pub fn advance(&mut self) -> bool {
        // A restored timer may already be at zero
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = self.period;
            true
        } else {
            false
        }
    }

    /// Change the period and restart the countdown
    pub fn rearm(&mut self, period: u64) {
        *self = Self::new(period);
    }

    pub fn period(&self) -> u64 {
        self.period
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

/// Spawn rate state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Current time between spawns
    pub interval_ms: u32,
    pub step_ms: u32,
    pub min_interval_ms: u32,
    pub spawn_timer: RepeatingTimer,
    pub decay_timer: RepeatingTimer,
    /// Projectiles created this session
    pub spawned: u32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            interval_ms: tuning.spawn_interval_ms,
            step_ms: tuning.spawn_decay_step_ms,
            min_interval_ms: tuning.min_spawn_interval_ms,
            spawn_timer: RepeatingTimer::new(tuning.spawn_interval_ticks()),
            decay_timer: RepeatingTimer::new(tuning.spawn_decay_period_ticks()),
            spawned: 0,
        }
    }

    /// Shorten the interval by one step (not below the floor) and re-arm
    /// the spawn timer. Returns the new interval if it changed.
    pub fn decay(&mut self) -> Option<u32> {
        let next = self
            .interval_ms
            .saturating_sub(self.step_ms)
            .max(self.min_interval_ms);
        if next == self.interval_ms {
            return None;
        }
        self.interval_ms = next;
        self.spawn_timer.rearm(ms_to_ticks(next));
        Some(next)
    }
}

/// Advance both spawner timers by one tick. Does nothing after game over.
pub fn update_spawner(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }

    if state.spawner.spawn_timer.advance() {
        let degrees: f32 = state.rng_state.next_rng().random_range(0.0..360.0);
        spawn_projectile(state, degrees.to_radians());
    }

    if state.spawner.decay_timer.advance() {
        if let Some(interval_ms) = state.spawner.decay() {
            log::debug!("Spawn interval now {} ms", interval_ms);
            state
                .events
                .push(GameEvent::SpawnIntervalChanged { interval_ms });
        }
    }
}

/// Create a projectile on the spawn ring at `angle` (radians), aimed at the
/// player's current position. Returns its ID.
pub fn spawn_projectile(state: &mut GameState, angle: f32) -> u32 {
    let pos = polar_to_cartesian(state.arena.center, state.tuning.spawn_radius(), angle);
    let dir = (state.player.pos - pos).normalize_or_zero();
    let travel = dir.y.atan2(dir.x);

    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        pos,
        vel: dir * state.tuning.projectile_speed,
        radius: state.tuning.projectile_hit_radius,
        rotation: normalize_angle(travel + PROJECTILE_ROTATION_OFFSET),
        spawned_at: state.time_ticks,
    });
    state.spawner.spawned += 1;
    state.events.push(GameEvent::ProjectileSpawned { id });
    log::debug!(
        "Projectile {} spawned at ({:.0}, {:.0})",
        id,
        pos.x,
        pos.y
    );
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::f32::consts::PI;

    fn state() -> GameState {
        GameState::new(&Tuning::default(), 12345)
    }

    #[test]
    fn test_timer_fires_every_period() {
        let mut timer = RepeatingTimer::new(3);
        let fired: Vec<bool> = (0..7).map(|_| timer.advance()).collect();
        assert_eq!(fired, [false, false, true, false, false, true, false]);
    }

    #[test]
    fn test_restored_timer_at_zero_fires() {
        let mut timer: RepeatingTimer =
            serde_json::from_str(r#"{"period":3,"remaining":0}"#).unwrap();
        assert!(timer.advance());
        assert_eq!(timer.remaining(), 3);
        assert!(!timer.advance());
    }

    #[test]
    fn test_timer_rearm_restarts_countdown() {
        let mut timer = RepeatingTimer::new(10);
        for _ in 0..8 {
            timer.advance();
        }
        timer.rearm(4);
        assert_eq!(timer.period(), 4);
        assert_eq!(timer.remaining(), 4);
    }

    #[test]
    fn test_decay_stops_at_floor() {
        let tuning = Tuning {
            spawn_interval_ms: 200,
            spawn_decay_step_ms: 60,
            min_spawn_interval_ms: 100,
            ..Default::default()
        };
        let mut spawner = Spawner::new(&tuning);
        assert_eq!(spawner.decay(), Some(140));
        assert_eq!(spawner.decay(), Some(100));
        assert_eq!(spawner.decay(), None);
        assert_eq!(spawner.interval_ms, 100);
        assert_eq!(spawner.spawn_timer.period(), ms_to_ticks(100));
    }

    #[test]
    fn test_spawn_position_and_aim() {
        let mut state = state();
        let id = spawn_projectile(&mut state, 0.0);
        let p = &state.projectiles[0];
        assert_eq!(p.id, id);
        assert!((p.pos - Vec2::new(670.0, 300.0)).length() < 1e-3);
        assert!((p.vel - Vec2::new(-300.0, 0.0)).length() < 1e-3);
        // Travelling left (π) plus a quarter turn wraps to -π/2
        assert!((p.rotation + PI / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_spawn_targets_player_at_spawn_time() {
        let mut state = state();
        state.player.pos = Vec2::new(300.0, 300.0);
        spawn_projectile(&mut state, PI / 2.0);
        let vel_before = state.projectiles[0].vel;

        let spawn_pos = state.projectiles[0].pos;
        let expected = (Vec2::new(300.0, 300.0) - spawn_pos).normalize() * 300.0;
        assert!((vel_before - expected).length() < 1e-2);

        // Moving the player later does not re-aim the projectile
        state.player.pos = Vec2::new(500.0, 200.0);
        assert_eq!(state.projectiles[0].vel, vel_before);
    }

    #[test]
    fn test_first_spawn_after_one_interval() {
        let mut state = state();
        for _ in 0..199 {
            update_spawner(&mut state);
        }
        assert!(state.projectiles.is_empty());
        update_spawner(&mut state);
        assert_eq!(state.projectiles.len(), 1);

        // Spawned on the ring
        let d = (state.projectiles[0].pos - state.arena.center).length();
        assert!((d - 270.0).abs() < 1e-2);
    }

    #[test]
    fn test_single_spawn_timer_after_decay() {
        // 10 s: spawns at 1..=5 s (5), decay at 5 s re-arms to 950 ms,
        // then 5.95, 6.9, 7.85, 8.8, 9.75 (5 more)
        let mut state = state();
        for _ in 0..2000 {
            update_spawner(&mut state);
        }
        assert_eq!(state.spawner.spawned, 10);
        assert_eq!(state.spawner.interval_ms, 900);
    }

    #[test]
    fn test_no_spawns_after_game_over() {
        let mut state = state();
        state.phase = crate::sim::GamePhase::GameOver;
        for _ in 0..1000 {
            update_spawner(&mut state);
        }
        assert_eq!(state.spawner.spawned, 0);
    }
}
