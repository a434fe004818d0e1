//! Collision resolution and scoring
//!
//! Checks run in a fixed order every tick so simultaneous overlaps resolve
//! the same way each time: player shots against invaders, then the UFO,
//! then bunkers; invader shots against the player, then bunkers; finally
//! the formation landing check. Score and lives mutate here and nowhere
//! else.

use rand::Rng;

use super::formation::Extents;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Resolve every overlap for this tick.
///
/// `extents` are the formation bounds from the top of the tick; the
/// landing check reads them rather than post-step positions.
pub fn resolve(state: &mut GameState, extents: Option<Extents>) {
    player_shots_vs_targets(state);
    invader_shots_vs_player(state);
    landing_check(state, extents);
}

fn player_shots_vs_targets(state: &mut GameState) {
    for shot_idx in 0..state.player_shots.len() {
        // Invaders first. The scan stops at the first kill, in grid storage
        // order, so one shot never fells two invaders.
        if state.player_shots[shot_idx].alive {
            let shot_rect = state.player_shots[shot_idx].rect();
            for invader in state.invaders.iter_mut().filter(|i| i.alive) {
                if shot_rect.overlaps(&invader.rect()) {
                    invader.alive = false;
                    state.player_shots[shot_idx].alive = false;
                    let points = invader.kind.points();
                    state.score += points;
                    state.events.push(GameEvent::InvaderDestroyed { points });
                    break;
                }
            }
        }

        // Then the saucer, only for a shot still in flight. The gate is
        // inert in practice: the formation never climbs into the saucer's
        // band, so one shot cannot claim an invader and the saucer in the
        // same tick.
        if state.player_shots[shot_idx].alive
            && state.ufo.visible
            && state.player_shots[shot_idx].rect().overlaps(&state.ufo.rect())
        {
            state.ufo.visible = false;
            state.player_shots[shot_idx].alive = false;
            let points = UFO_SCORE_BASE + state.rng.random_range(0..UFO_SCORE_SPREAD);
            state.score += points;
            state.events.push(GameEvent::UfoDestroyed { points });
        }

        // Bunkers last, and deliberately not gated on the shot surviving
        // the checks above: a shot that just died still erodes any cell its
        // corner sits in this tick. Cells only stop absorbing at 0 hp.
        let p = state.player_shots[shot_idx].pos;
        for bunker in &mut state.bunkers {
            if bunker.hit(p) {
                state.player_shots[shot_idx].alive = false;
            }
        }
    }
}

fn invader_shots_vs_player(state: &mut GameState) {
    for shot_idx in 0..state.invader_shots.len() {
        if state.invader_shots[shot_idx]
            .rect()
            .overlaps(&state.player.rect())
        {
            state.invader_shots[shot_idx].alive = false;
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::PlayerStruck);
            if state.lives == 0 {
                state.phase = GamePhase::GameOver;
            }
        }

        let p = state.invader_shots[shot_idx].pos;
        for bunker in &mut state.bunkers {
            if bunker.hit(p) {
                state.invader_shots[shot_idx].alive = false;
            }
        }
    }
}

/// The formation lands when its lowest living edge reaches the player's
/// row. An empty board has no extents and never lands.
fn landing_check(state: &mut GameState, extents: Option<Extents>) {
    if let Some(ext) = extents {
        if ext.bottom >= state.player.pos.y {
            state.phase = GamePhase::GameOver;
        }
    }
}
