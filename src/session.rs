//! Host-facing session driver
//!
//! Owns the game state, collects input between frames and converts
//! variable frame deltas into fixed simulation ticks.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Direction, DirectionKeys, GameEvent, GameState, PointerInput, TickInput, tick};
use crate::tuning::Tuning;

/// One running game plus its input and frame-clock bookkeeping
pub struct Session {
    tuning: Tuning,
    state: GameState,
    keys: DirectionKeys,
    pointer: PointerInput,
    autopilot: bool,
    /// Unsimulated frame time in milliseconds
    accumulator: f64,
}

impl Session {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        log::info!("Session started with seed: {}", seed);
        let state = GameState::new(&tuning, seed);
        Self {
            tuning,
            state,
            keys: DirectionKeys::default(),
            pointer: PointerInput::default(),
            autopilot: false,
            accumulator: 0.0,
        }
    }

    /// Throw the current session away and build a fresh one from the tuning
    pub fn reset(&mut self, seed: u64) {
        log::info!("Session reset with seed: {}", seed);
        self.state = GameState::new(&self.tuning, seed);
        self.keys = DirectionKeys::default();
        self.pointer = PointerInput::default();
        self.accumulator = 0.0;
    }

    /// Advance by a frame delta in milliseconds. Returns the number of
    /// simulation ticks run.
    pub fn update(&mut self, delta_ms: f64) -> u32 {
        // A host without a previous timestamp can hand us NaN
        let delta_ms = if delta_ms.is_finite() { delta_ms } else { 0.0 };
        self.accumulator += delta_ms.clamp(0.0, MAX_FRAME_MS as f64);

        let step_ms = SIM_DT_MS as f64;
        let input = self.tick_input();
        let mut substeps = 0;
        while self.accumulator >= step_ms && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= step_ms;
            substeps += 1;
        }
        // Drop time we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(step_ms);
        }
        substeps
    }

    fn tick_input(&self) -> TickInput {
        TickInput {
            keys: self.keys,
            pointer: self.pointer.target(),
            autopilot: self.autopilot,
        }
    }

    pub fn key_down(&mut self, dir: Direction) {
        self.keys.set(dir, true);
    }

    pub fn key_up(&mut self, dir: Direction) {
        self.keys.set(dir, false);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer.press(Vec2::new(x, y));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.drag(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}
