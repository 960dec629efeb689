//! Game state and core simulation types
//!
//! One `GameState` is one session. It is rebuilt from `Tuning` and a seed
//! on every restart and never partially reset.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Playfield};
use super::spawner::Spawner;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player was hit. Terminal for the session.
    GameOver,
}

/// Notifications for the presentation layer, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh session began; the host starts the background track
    SessionStarted { seed: u64 },
    ProjectileSpawned { id: u32 },
    /// Spawn interval shrank
    SpawnIntervalChanged { interval_ms: u32 },
    /// Player was hit; carries the final score
    GameOver { score: u64 },
}

/// The player-controlled character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alive: bool,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            alive: true,
        }
    }
}

/// A hazard flying in a straight line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Sprite rotation in radians (travel angle plus sprite offset)
    pub rotation: f32,
    /// Tick the projectile was created on
    pub spawned_at: u64,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Number of generators handed out so far
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// Generator for the next draw. Each draw gets its own deterministic
    /// stream so the state stays a plain (seed, counter) pair.
    pub fn next_rng(&mut self) -> Pcg32 {
        let mixed = self
            .seed
            .wrapping_add(self.draws.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.draws += 1;
        Pcg32::seed_from_u64(mixed)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    /// Balance values this session was built from
    pub tuning: Tuning,
    pub arena: Arena,
    pub playfield: Playfield,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Tick of the last score increment
    pub last_score_tick: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Live projectiles (sorted by id for determinism)
    pub projectiles: Vec<Projectile>,
    pub spawner: Spawner,
    /// Events not yet drained by the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the player at the arena center
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        let arena = Arena::new(tuning.arena_center, tuning.arena_radius);
        Self {
            seed,
            rng_state: RngState::new(seed),
            tuning: tuning.clone(),
            arena,
            playfield: Playfield::new(tuning.playfield_width, tuning.playfield_height),
            score: 0,
            time_ticks: 0,
            last_score_tick: 0,
            phase: GamePhase::Playing,
            player: Player::new(arena.center, tuning.player_hit_radius),
            projectiles: Vec::new(),
            spawner: Spawner::new(tuning),
            events: vec![GameEvent::SessionStarted { seed }],
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Seconds survived so far
    pub fn elapsed_secs(&self) -> f32 {
        self.time_ticks as f32 * crate::consts::SIM_DT
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Ensure projectiles are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.projectiles.sort_by_key(|p| p.id);
    }
}
