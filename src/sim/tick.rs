//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::collision::{find_player_hit, trigger_game_over};
use super::motion::{DirectionKeys, player_velocity};
use super::spawner::update_spawner;
use super::state::GameState;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction keys
    pub keys: DirectionKeys,
    /// Pointer target while pressed (playfield coordinates)
    pub pointer: Option<Vec2>,
    /// Demo mode - autopilot steers the player
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Frozen after the hit
    if state.is_game_over() {
        return;
    }

    state.time_ticks += 1;

    // Player motion, then keep inside the arena
    let pointer = if input.autopilot {
        autopilot_target(state)
    } else {
        input.pointer
    };
    state.player.vel = player_velocity(
        state.player.pos,
        &input.keys,
        pointer,
        state.tuning.player_speed,
    );
    let moved = state.player.pos + state.player.vel * dt;
    state.player.pos = state.arena.clamp(moved);

    // Projectiles fly straight until they leave the screen
    for projectile in &mut state.projectiles {
        projectile.pos += projectile.vel * dt;
    }
    let playfield = state.playfield;
    state.projectiles.retain(|p| playfield.contains(p.pos));

    if let Some(id) = find_player_hit(&state.player, &state.projectiles) {
        log::debug!("Player hit by projectile {}", id);
        trigger_game_over(state);
        return;
    }

    update_score(state);
    update_spawner(state);

    // Ensure deterministic ordering
    state.normalize_order();
}

/// Award one point each time a score quantum has passed
fn update_score(state: &mut GameState) {
    if state.time_ticks - state.last_score_tick >= state.tuning.score_quantum_ticks() {
        state.score += 1;
        state.last_score_tick = state.time_ticks;
    }
}

/// Where the demo autopilot wants to go this tick.
///
/// Sidesteps every projectile that is still closing in, weighted by
/// proximity, with a weak pull back toward the arena center so the player
/// does not get pinned against the ring.
pub fn autopilot_target(state: &GameState) -> Option<Vec2> {
    let player = state.player.pos;
    let mut escape = Vec2::ZERO;

    for projectile in &state.projectiles {
        let to_player = player - projectile.pos;
        let closing = projectile.vel.dot(to_player) > 0.0;
        if !closing {
            continue;
        }
        let dist = to_player.length().max(1.0);
        let side = projectile.vel.perp().normalize_or_zero();
        // Step off the projectile's line on the side we are already on
        let sign = if side.dot(to_player) >= 0.0 { 1.0 } else { -1.0 };
        escape += side * sign * (100.0 / dist).powi(2);
    }

    let to_center = state.arena.center - player;
    escape += to_center / state.arena.radius * 0.5;

    if escape.length_squared() < 1e-4 {
        return None;
    }
    Some(player + escape.normalize() * 50.0)
}
