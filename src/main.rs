//! Headless session driver
//!
//! Runs a scripted session at simulation cadence and dumps the final state
//! as JSON. Handy for eyeballing balance without a renderer attached:
//!
//! ```text
//! drift-salvage [level 1-12] [seed]
//! ```

use std::env;

use drift_salvage::consts::*;
use drift_salvage::sim::{GameLevel, GameScreen, GameState, Simulation};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let level = args
        .next()
        .and_then(|a| a.parse::<usize>().ok())
        .and_then(|n| GameLevel::ALL.get(n.wrapping_sub(1)).copied())
        .unwrap_or(GameLevel::Tutorial);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or(0xD1F7);

    let mut sim = Simulation::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, seed);
    let mut state = GameState::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
    state.current_level = level;
    state.current_screen = GameScreen::Playing;
    sim.reset(&mut state);

    log::info!("driving {:?} with seed {seed:#x}", level);

    // Sweep the field in a loose octagon, half a second per heading
    const DIRS: [(i32, i32); 8] = [
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ];
    let max_ticks = 60 * 120;
    let mut ticks = 0;
    while state.current_screen == GameScreen::Playing && ticks < max_ticks {
        let (dx, dy) = DIRS[(ticks / 30) % DIRS.len()];
        sim.set_player_direction_and_move(&mut state, dx, dy);
        sim.tick(&mut state);
        ticks += 1;
    }

    log::info!(
        "stopped after {ticks} ticks on {:?}: score {}, health {}",
        state.current_screen,
        state.score,
        state.player.health
    );

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("snapshot failed: {err}"),
    }
}
