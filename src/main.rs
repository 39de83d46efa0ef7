//! Ghostfire headless driver
//!
//! Runs the deterministic sim without a window: a small scripted bot spins
//! the camera and fires on a cadence until the run resolves. Useful for
//! soak-testing the game loop and for reproducing runs from a seed.
//!
//! The windowed build wires the same `tick`/`render_frame` pair to a real
//! event loop; nothing in the sim knows the difference.

use std::path::PathBuf;

use clap::Parser;

use ghostfire::Settings;
use ghostfire::sim::{GameState, TickInput, tick};

#[derive(Parser, Debug)]
#[command(name = "ghostfire", about = "Headless arena survival run")]
struct Args {
    /// Run seed (same seed + same inputs = same run)
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Simulated frame time in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u32,

    /// Hard cap on simulated time, in milliseconds
    #[arg(long, default_value_t = 120_000)]
    max_ms: u64,

    /// Settings file path
    #[arg(long, default_value = "settings.json")]
    settings: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let settings = Settings::load(&args.settings);

    let mut state = GameState::new(args.seed);
    let dt = args.frame_ms as f32;
    let mut simulated_ms = 0u64;

    log::info!("starting run: seed {}, frame {}ms", args.seed, args.frame_ms);

    while !state.phase.is_terminal() && simulated_ms < args.max_ms {
        // Scripted bot: sweep the camera and fire roughly twice a second
        let sweeping = (simulated_ms / 4000) % 2 == 0;
        let input = TickInput {
            yaw_delta: settings.yaw_delta(if sweeping { 2.0 } else { -2.0 }),
            fire: simulated_ms % 512 < args.frame_ms as u64,
            ..Default::default()
        };

        tick(&mut state, &input, dt);
        simulated_ms += args.frame_ms as u64;
    }

    let frame = state.render_frame();
    log::info!(
        "run over at {}ms: won={} lost={} score={} health={} enemies={} drawn={}",
        state.elapsed_ms,
        frame.hud.won,
        frame.hud.lost,
        frame.hud.score,
        frame.hud.health,
        state.live_enemies(),
        frame.instances.len(),
    );
    println!(
        "{}",
        serde_json::to_string(&frame.hud).expect("hud serializes")
    );
}
