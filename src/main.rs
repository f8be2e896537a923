//! Headless native driver
//!
//! Runs a session at a fixed 60 Hz frame rate with the demo player at the
//! paddle until the session is decided, exit is requested, or the frame cap is
//! reached.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gem_breakout::input::InputSender;
use gem_breakout::sim::{FrameTime, GameEvent, GameState, TickInput, tick};
use gem_breakout::view::Frame;
use gem_breakout::{GameConfig, InputEdge, InputQueue, Key};

/// Frame length (milliseconds)
const FRAME_MS: f32 = 1000.0 / 60.0;
/// Ten minutes of play
const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 10;

#[derive(Parser)]
#[command(name = "gem-breakout")]
#[command(about = "Run a headless Gem Breakout session with the demo player")]
struct Args {
    /// JSON config file (defaults are used when omitted)
    config: Option<PathBuf>,
    /// Stop after this many frames
    #[arg(long, default_value_t = DEFAULT_MAX_FRAMES)]
    max_frames: u64,
}

fn send_key(keys: &InputSender, edge: InputEdge) {
    if !keys.send(edge) {
        log::warn!("Input queue closed, dropped {:?}", edge);
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Gem Breakout (headless) starting...");

    let config = match &args.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let mut state = match GameState::try_new(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let queue = InputQueue::new();
    let keys = queue.sender();
    send_key(&keys, InputEdge::pressed(Key::Confirm));

    let mut game_time_ms = 0.0f64;
    for frame in 0..args.max_frames {
        game_time_ms += FRAME_MS as f64;
        let input = TickInput {
            edges: queue.drain(),
            idle_mode: true,
        };
        tick(&mut state, &input, &FrameTime::new(FRAME_MS, game_time_ms));

        if state.events.iter().any(|e| matches!(e, GameEvent::GemCaught(_))) {
            log::info!("Gem caught at frame {}", frame);
        }

        if state.phase.is_terminal() {
            // Stop on the next drain
            send_key(&keys, InputEdge::pressed(Key::Exit));
        }
        if state.exit_requested {
            break;
        }
    }

    let view = Frame::capture(&state);
    log::info!(
        "Finished after {} ticks: {:?}, {} of {} blocks",
        state.time_ticks,
        state.phase,
        state.blocks_hit,
        state.block_count()
    );
    if let Some(banner) = view.banner() {
        println!("{}", banner);
    }
    println!("{}", view.status_line());
    ExitCode::SUCCESS
}
