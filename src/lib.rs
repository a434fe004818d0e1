//! Retrovaders - a fixed-formation arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, formation sweep, collisions,
//!   session state machine)
//!
//! Rendering, audio and input capture are host concerns: the host feeds a
//! [`sim::TickInput`] into [`sim::tick`] once per frame and consumes the
//! [`sim::WorldSnapshot`], [`sim::HudState`] and drained [`sim::GameEvent`]s
//! that come back out.

pub mod sim;

pub use sim::{GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 700.0;

    /// Player cannon
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    /// Horizontal units moved per held-direction tick
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_Y: f32 = 640.0; // FIELD_HEIGHT - 60
    pub const PLAYER_START_X: f32 = 275.0; // (FIELD_WIDTH - PLAYER_WIDTH) / 2
    /// Ticks between player shots (250 ms at 60 Hz)
    pub const FIRE_COOLDOWN_TICKS: u32 = 15;

    /// Projectiles (both owners share one body size)
    pub const SHOT_WIDTH: f32 = 4.0;
    pub const SHOT_HEIGHT: f32 = 14.0;
    /// Player shot vertical velocity, negative = upward
    pub const PLAYER_SHOT_SPEED: f32 = -7.0;
    /// Invader shot vertical velocity, positive = downward
    pub const INVADER_SHOT_SPEED: f32 = 4.0;
    /// Distance past either vertical edge before a shot despawns
    pub const SHOT_DESPAWN_MARGIN: f32 = 20.0;

    /// Invader grid
    pub const INVADER_COLS: usize = 11;
    pub const INVADER_ROWS: usize = 5;
    pub const INVADER_WIDTH: f32 = 30.0;
    pub const INVADER_HEIGHT: f32 = 22.0;
    pub const GRID_ORIGIN_X: f32 = 60.0;
    pub const GRID_ORIGIN_Y: f32 = 100.0;
    pub const GRID_STEP_X: f32 = 40.0;
    pub const GRID_STEP_Y: f32 = 32.0;

    /// Formation sweep
    pub const FORMATION_STEP_X: f32 = 14.0;
    pub const FORMATION_DROP_Y: f32 = 18.0;
    /// Ticks between formation steps with the full grid alive
    pub const FORMATION_BASE_INTERVAL: f32 = 40.0;
    /// How much of the base interval erodes as the grid empties
    pub const FORMATION_INTERVAL_RANGE: f32 = 35.0;
    /// Fastest allowed sweep
    pub const FORMATION_MIN_INTERVAL: f32 = 6.0;

    /// Per-tick chance that some invader fires
    pub const INVADER_FIRE_CHANCE: f64 = 0.03;
    /// Per-tick chance the hidden UFO enters
    pub const UFO_SPAWN_CHANCE: f64 = 0.001;

    /// UFO
    pub const UFO_WIDTH: f32 = 60.0;
    pub const UFO_HEIGHT: f32 = 26.0;
    pub const UFO_CRUISE_Y: f32 = 60.0;
    /// Crossing speed is sampled from [UFO_MIN_SPEED, UFO_MAX_SPEED)
    pub const UFO_MIN_SPEED: f32 = 3.0;
    pub const UFO_MAX_SPEED: f32 = 5.0;
    /// Hidden parking spot, off the left edge
    pub const UFO_PARK_X: f32 = -100.0;
    pub const UFO_PARK_SPEED: f32 = 2.0;
    /// Extra distance past an edge before the UFO counts as gone
    pub const UFO_EXIT_MARGIN: f32 = 20.0;
    pub const UFO_SCORE_BASE: u32 = 100;
    /// Kill bonus is a uniform integer in [0, UFO_SCORE_SPREAD)
    pub const UFO_SCORE_SPREAD: u32 = 150;

    /// Bunkers
    pub const BUNKER_COUNT: usize = 4;
    pub const BUNKER_COLS: usize = 7;
    pub const BUNKER_ROWS: usize = 4;
    pub const BUNKER_CELL_SIZE: f32 = 10.0;
    pub const BUNKER_CELL_HP: u8 = 2;
    pub const BUNKER_ORIGIN_X: f32 = 60.0;
    pub const BUNKER_STEP_X: f32 = 130.0;
    pub const BUNKER_Y: f32 = 540.0; // FIELD_HEIGHT - 160

    /// Session
    pub const STARTING_LIVES: u8 = 3;
    /// Delay before a finished session restarts (2000 ms at 60 Hz)
    pub const RESET_DELAY_TICKS: u32 = 120;
}
