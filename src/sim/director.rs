//! Fire and spawn policy
//!
//! Invader fire picks the bottom-most survivor of each occupied lane as a
//! candidate, then one candidate uniformly at random. The UFO enters from a
//! random edge at a random speed, rarely.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Shot, ShotOwner};
use crate::consts::*;

/// Roll the per-tick invader fire chance and spawn at most one shot
pub fn invader_fire(state: &mut GameState) {
    if state.alive_invaders() == 0 || !state.rng.random_bool(INVADER_FIRE_CHANCE) {
        return;
    }

    // One candidate per distinct x lane. Later grid slots overwrite earlier
    // ones, and row-major order makes that the bottom-most of each column.
    // Lane x values stay integral (integer spawn grid, integer step), so the
    // key cast is exact and candidates come out in ascending-x order.
    let mut lanes: BTreeMap<i32, usize> = BTreeMap::new();
    for (idx, invader) in state.invaders.iter().enumerate() {
        if invader.alive {
            lanes.insert(invader.pos.x as i32, idx);
        }
    }
    let candidates: Vec<usize> = lanes.into_values().collect();
    let pick = state.rng.random_range(0..candidates.len());
    let shooter = &state.invaders[candidates[pick]];

    let muzzle = Vec2::new(
        shooter.pos.x + INVADER_WIDTH / 2.0,
        shooter.pos.y + INVADER_HEIGHT,
    );
    state
        .invader_shots
        .push(Shot::new(muzzle, INVADER_SHOT_SPEED, ShotOwner::Invader));
    state.events.push(GameEvent::ShotFired);
}

/// Roll the per-tick UFO entrance chance while the saucer is hidden
pub fn maybe_spawn_ufo(state: &mut GameState) {
    if state.ufo.visible || !state.rng.random_bool(UFO_SPAWN_CHANCE) {
        return;
    }
    let from_left = state.rng.random_bool(0.5);
    let speed = state.rng.random_range(UFO_MIN_SPEED..UFO_MAX_SPEED);
    state.ufo.pos = Vec2::new(
        if from_left {
            -UFO_WIDTH
        } else {
            FIELD_WIDTH + UFO_WIDTH
        },
        UFO_CRUISE_Y,
    );
    state.ufo.vel_x = if from_left { speed } else { -speed };
    state.ufo.visible = true;
    state.events.push(GameEvent::UfoAppeared);
}
