//! Game state and core simulation types
//!
//! Everything a session owns lives here. `tick` advances one `GameState`
//! in place; nothing in this module touches a clock, a screen or a speaker.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::formation::Formation;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Session ended, waiting out the restart delay
    GameOver,
}

/// Things that happened during a tick, drained by the host after each call
/// to [`tick`](super::tick::tick). The sound-bearing variants map one to one
/// onto the cabinet tones; `SessionEnded`/`SessionReset` are silent
/// lifecycle markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A shot left a muzzle, either owner
    ShotFired,
    /// The formation shifted or dropped
    FormationStepped,
    /// An invader was destroyed, carrying its point value
    InvaderDestroyed { points: u32 },
    /// The UFO entered the field
    UfoAppeared,
    /// The UFO was destroyed, carrying base plus bonus points
    UfoDestroyed { points: u32 },
    /// An invader shot connected with the player
    PlayerStruck,
    /// Lives ran out or the formation landed
    SessionEnded,
    /// A fresh board was laid out after the restart delay
    SessionReset,
}

/// Invader sprite classes, one per grid band, with distinct point values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvaderKind {
    Squid,
    Crab,
    Octopus,
}

impl InvaderKind {
    /// Row-to-kind mapping for a fresh grid; row 0 is the top row
    pub fn for_row(row: usize) -> Self {
        match row {
            0 => Self::Squid,
            1 | 2 => Self::Crab,
            _ => Self::Octopus,
        }
    }

    /// Points awarded for destroying this kind
    pub fn points(self) -> u32 {
        match self {
            Self::Squid => 30,
            Self::Crab => 20,
            Self::Octopus => 10,
        }
    }
}

/// The player's cannon
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner; y never changes after construction
    pub pos: Vec2,
    /// Ticks until the next shot is allowed
    pub cooldown_ticks: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_Y),
            cooldown_ticks: 0,
        }
    }

    /// Shift one speed unit along `direction` (-1 left, +1 right), clamped
    /// to the playfield
    pub fn shift(&mut self, direction: f32) {
        self.pos.x =
            (self.pos.x + direction * PLAYER_SPEED).clamp(0.0, FIELD_WIDTH - PLAYER_WIDTH);
    }

    /// Where a fresh shot spawns: centered on the cannon, just above it
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + PLAYER_WIDTH / 2.0 - SHOT_WIDTH / 2.0,
            self.pos.y - 10.0,
        )
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }
}

/// Who fired a shot; fixes its velocity sign and target set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOwner {
    Player,
    Invader,
}

/// A projectile in flight
#[derive(Debug, Clone)]
pub struct Shot {
    pub pos: Vec2,
    /// Vertical velocity per tick; negative is upward
    pub vel_y: f32,
    pub owner: ShotOwner,
    pub alive: bool,
}

impl Shot {
    pub fn new(pos: Vec2, vel_y: f32, owner: ShotOwner) -> Self {
        Self {
            pos,
            vel_y,
            owner,
            alive: true,
        }
    }

    /// Advance one tick; dies a short way past either vertical edge
    pub fn update(&mut self) {
        self.pos.y += self.vel_y;
        if self.pos.y < -SHOT_DESPAWN_MARGIN || self.pos.y > FIELD_HEIGHT + SHOT_DESPAWN_MARGIN {
            self.alive = false;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::new(SHOT_WIDTH, SHOT_HEIGHT),
        }
    }
}

/// One grid member. Dead invaders stay in storage with `alive` cleared so
/// the grid never reallocates mid-session.
#[derive(Debug, Clone)]
pub struct Invader {
    pub pos: Vec2,
    pub kind: InvaderKind,
    pub alive: bool,
}

impl Invader {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::new(INVADER_WIDTH, INVADER_HEIGHT),
        }
    }
}

/// The bonus saucer. One exists per session; `visible` gates everything.
#[derive(Debug, Clone)]
pub struct Ufo {
    pub pos: Vec2,
    /// Horizontal velocity per tick; the sign is the travel direction
    pub vel_x: f32,
    pub visible: bool,
}

impl Ufo {
    /// Parked off the left edge, hidden
    pub fn hidden() -> Self {
        Self {
            pos: Vec2::new(UFO_PARK_X, UFO_CRUISE_Y),
            vel_x: UFO_PARK_SPEED,
            visible: false,
        }
    }

    /// Advance one tick; hides once fully past the exit edge it is
    /// traveling toward
    pub fn update(&mut self) {
        if !self.visible {
            return;
        }
        self.pos.x += self.vel_x;
        let gone_left = self.vel_x < 0.0 && self.pos.x < -UFO_WIDTH - UFO_EXIT_MARGIN;
        let gone_right = self.vel_x > 0.0 && self.pos.x > FIELD_WIDTH + UFO_EXIT_MARGIN;
        if gone_left || gone_right {
            self.visible = false;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::new(UFO_WIDTH, UFO_HEIGHT),
        }
    }
}

/// A destructible shield: a small grid of cells that each soak two hits
#[derive(Debug, Clone)]
pub struct Bunker {
    pub pos: Vec2,
    /// Cell hit-points, indexed [row][col] with row 0 at the top
    pub cells: [[u8; BUNKER_COLS]; BUNKER_ROWS],
}

impl Bunker {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            cells: [[BUNKER_CELL_HP; BUNKER_COLS]; BUNKER_ROWS],
        }
    }

    /// Apply point damage at a world coordinate. Returns true when a live
    /// cell absorbed the hit; out-of-grid coordinates and exhausted cells
    /// absorb nothing.
    pub fn hit(&mut self, point: Vec2) -> bool {
        let col = ((point.x - self.pos.x) / BUNKER_CELL_SIZE).floor();
        let row = ((point.y - self.pos.y) / BUNKER_CELL_SIZE).floor();
        if col < 0.0 || col >= BUNKER_COLS as f32 || row < 0.0 || row >= BUNKER_ROWS as f32 {
            return false;
        }
        let cell = &mut self.cells[row as usize][col as usize];
        if *cell > 0 {
            *cell -= 1;
            true
        } else {
            false
        }
    }
}

/// Complete session state, advanced in place by [`tick`](super::tick::tick)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Every random draw in the simulation goes through here
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    /// Best score seen since construction; survives board resets
    pub high_score: u32,
    /// Ticks since the current board was laid out
    pub time_ticks: u64,
    /// Restart countdown, armed when the session ends
    pub reset_ticks: u32,
    pub player: Player,
    pub player_shots: Vec<Shot>,
    pub invader_shots: Vec<Shot>,
    /// Flat 11x5 grid in row-major order, top row first
    pub invaders: Vec<Invader>,
    pub ufo: Ufo,
    pub bunkers: Vec<Bunker>,
    pub formation: Formation,
    /// What happened this tick; cleared at the top of every tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session with a fresh board
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            lives: STARTING_LIVES,
            high_score: 0,
            time_ticks: 0,
            reset_ticks: 0,
            player: Player::new(),
            player_shots: Vec::new(),
            invader_shots: Vec::new(),
            invaders: Vec::new(),
            ufo: Ufo::hidden(),
            bunkers: Vec::new(),
            formation: Formation::new(),
            events: Vec::new(),
        };
        state.lay_out_board();
        state
    }

    /// Rebuild the board for a new session. Score, lives, shots, UFO and
    /// sweep state all reset; the high score and the RNG stream carry over.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.time_ticks = 0;
        self.reset_ticks = 0;
        self.player = Player::new();
        self.player_shots.clear();
        self.invader_shots.clear();
        self.ufo = Ufo::hidden();
        self.formation = Formation::new();
        self.lay_out_board();
    }

    fn lay_out_board(&mut self) {
        self.invaders.clear();
        for row in 0..INVADER_ROWS {
            for col in 0..INVADER_COLS {
                self.invaders.push(Invader {
                    pos: Vec2::new(
                        GRID_ORIGIN_X + col as f32 * GRID_STEP_X,
                        GRID_ORIGIN_Y + row as f32 * GRID_STEP_Y,
                    ),
                    kind: InvaderKind::for_row(row),
                    alive: true,
                });
            }
        }
        self.bunkers.clear();
        for i in 0..BUNKER_COUNT {
            self.bunkers.push(Bunker::new(Vec2::new(
                BUNKER_ORIGIN_X + i as f32 * BUNKER_STEP_X,
                BUNKER_Y,
            )));
        }
    }

    /// Spawn the player's shot if the cooldown has lapsed and nothing of
    /// theirs is in flight. A blocked request is silently ignored.
    pub fn try_fire(&mut self) {
        if self.player.cooldown_ticks > 0 || !self.player_shots.is_empty() {
            return;
        }
        self.player_shots.push(Shot::new(
            self.player.muzzle(),
            PLAYER_SHOT_SPEED,
            ShotOwner::Player,
        ));
        self.player.cooldown_ticks = FIRE_COOLDOWN_TICKS;
        self.events.push(GameEvent::ShotFired);
    }

    /// Number of living invaders
    pub fn alive_invaders(&self) -> usize {
        self.invaders.iter().filter(|i| i.alive).count()
    }
}
