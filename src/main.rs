//! Headless demo session
//!
//! Runs a scripted pilot for a fixed number of ticks and prints the final
//! snapshot as JSON. Useful for eyeballing the simulation without a
//! renderer:
//!
//! ```text
//! RUST_LOG=info cargo run -- [seed] [ticks]
//! ```

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;

use retrovaders::sim::{GameEvent, GameState, TickInput, hud, snapshot, tick};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let ticks: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(3600);

    info!("session seed {}, running {} ticks", seed, ticks);

    let mut state = GameState::new(seed);
    for t in 0..ticks {
        let input = autopilot(t);
        tick(&mut state, &input);
        for event in &state.events {
            match event {
                GameEvent::InvaderDestroyed { points } => {
                    info!("tick {}: invader down, +{}", t, points);
                }
                GameEvent::UfoAppeared => info!("tick {}: saucer on screen", t),
                GameEvent::UfoDestroyed { points } => {
                    info!("tick {}: saucer down, +{}", t, points);
                }
                GameEvent::PlayerStruck => {
                    info!("tick {}: player hit, {} lives left", t, state.lives);
                }
                GameEvent::SessionEnded => {
                    info!("tick {}: session over, score {}", t, state.score);
                }
                GameEvent::SessionReset => info!("tick {}: fresh board", t),
                GameEvent::ShotFired | GameEvent::FormationStepped => {}
            }
        }
    }

    let h = hud(&state);
    info!(
        "final: score {} high {} lives {}",
        h.score, h.high_score, h.lives
    );
    if let Ok(json) = serde_json::to_string_pretty(&snapshot(&state)) {
        println!("{json}");
    }
}

/// Scripted pilot: sweep back and forth across the field, holding the
/// trigger down often enough to keep a shot in the air
fn autopilot(t: u64) -> TickInput {
    let sweep_right = (t / 120) % 2 == 0;
    TickInput {
        left: !sweep_right,
        right: sweep_right,
        fire: t % 4 == 0,
    }
}
