//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick cadence only, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (grid storage order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod director;
pub mod formation;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use formation::{Extents, Formation};
pub use rect::Rect;
pub use snapshot::{DrawRect, HudState, SpriteKind, WorldSnapshot, hud, snapshot};
pub use state::{
    Bunker, GameEvent, GamePhase, GameState, Invader, InvaderKind, Player, Shot, ShotOwner, Ufo,
};
pub use tick::{TickInput, tick};
