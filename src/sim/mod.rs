//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod motion;
pub mod sdf;
pub mod spawner;
pub mod state;
pub mod tick;

pub use arena::{Arena, Playfield};
pub use collision::{find_player_hit, trigger_game_over};
pub use motion::{Direction, DirectionKeys, PointerInput, player_velocity};
pub use sdf::{circles_overlap, sd_box, sd_circle};
pub use spawner::{RepeatingTimer, Spawner, spawn_projectile, update_spawner};
pub use state::{GameEvent, GamePhase, GameState, Player, Projectile};
pub use tick::{TickInput, autopilot_target, tick};
