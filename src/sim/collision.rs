//! Player/projectile collision and the game-over transition
//!
//! The overlap test is a plain circle check run once per tick by the
//! simulation itself.

use super::sdf::circles_overlap;
use super::state::{GameEvent, GamePhase, GameState, Player, Projectile};

/// ID of the first projectile touching the player, if any
pub fn find_player_hit(player: &Player, projectiles: &[Projectile]) -> Option<u32> {
    projectiles
        .iter()
        .find(|p| circles_overlap(player.pos, player.radius, p.pos, p.radius))
        .map(|p| p.id)
}

/// End the session: freeze the player and every projectile and report the
/// final score. Returns false (and changes nothing) if the game is
/// already over.
pub fn trigger_game_over(state: &mut GameState) -> bool {
    if state.phase == GamePhase::GameOver {
        return false;
    }

    state.phase = GamePhase::GameOver;
    state.player.alive = false;
    state.player.vel = glam::Vec2::ZERO;
    for projectile in &mut state.projectiles {
        projectile.vel = glam::Vec2::ZERO;
    }

    let score = state.score;
    state.events.push(GameEvent::GameOver { score });
    log::info!(
        "Game over: score {} after {:.2}s",
        score,
        state.elapsed_secs()
    );
    true
}
