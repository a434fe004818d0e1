//! Host-facing view of a tick
//!
//! A [`WorldSnapshot`] is everything a renderer needs for one frame: a flat
//! draw list plus the scoreboard. Building one borrows the state immutably
//! and copies plain data out, so hosts never reach into simulation
//! internals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{GamePhase, GameState, InvaderKind};
use crate::consts::*;

/// What a draw rectangle depicts, so hosts can pick sprites or colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    PlayerShot,
    InvaderShot,
    Invader(InvaderKind),
    Ufo,
    /// One shield cell; `hp` lets hosts tint worn cells
    BunkerCell { hp: u8 },
}

/// One rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRect {
    pub rect: Rect,
    pub kind: SpriteKind,
}

/// Scoreboard numbers for the host's overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudState {
    pub score: u32,
    pub high_score: u32,
    pub lives: u8,
}

/// Complete per-frame output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub phase: GamePhase,
    pub hud: HudState,
    /// Draw list in paint order, background to foreground
    pub sprites: Vec<DrawRect>,
}

/// Read the scoreboard
pub fn hud(state: &GameState) -> HudState {
    HudState {
        score: state.score,
        high_score: state.high_score,
        lives: state.lives,
    }
}

/// Flatten the visible parts of `state` into a draw list
pub fn snapshot(state: &GameState) -> WorldSnapshot {
    let mut sprites = Vec::new();

    sprites.push(DrawRect {
        rect: state.player.rect(),
        kind: SpriteKind::Player,
    });

    for shot in state.player_shots.iter().filter(|s| s.alive) {
        sprites.push(DrawRect {
            rect: shot.rect(),
            kind: SpriteKind::PlayerShot,
        });
    }
    for shot in state.invader_shots.iter().filter(|s| s.alive) {
        sprites.push(DrawRect {
            rect: shot.rect(),
            kind: SpriteKind::InvaderShot,
        });
    }

    for invader in state.invaders.iter().filter(|i| i.alive) {
        sprites.push(DrawRect {
            rect: invader.rect(),
            kind: SpriteKind::Invader(invader.kind),
        });
    }

    if state.ufo.visible {
        sprites.push(DrawRect {
            rect: state.ufo.rect(),
            kind: SpriteKind::Ufo,
        });
    }

    for bunker in &state.bunkers {
        for (row, cells) in bunker.cells.iter().enumerate() {
            for (col, &hp) in cells.iter().enumerate() {
                if hp == 0 {
                    continue;
                }
                let pos = bunker.pos
                    + Vec2::new(col as f32 * BUNKER_CELL_SIZE, row as f32 * BUNKER_CELL_SIZE);
                sprites.push(DrawRect {
                    rect: Rect {
                        pos,
                        size: Vec2::splat(BUNKER_CELL_SIZE),
                    },
                    kind: SpriteKind::BunkerCell { hp },
                });
            }
        }
    }

    WorldSnapshot {
        phase: state.phase,
        hud: hud(state),
        sprites,
    }
}
