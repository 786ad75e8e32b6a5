use std::thread;
use std::time::Duration;

use clap::Parser;
use grid_snake::config::DEFAULT_TICK_INTERVAL_MS;
use grid_snake::error::GameError;
use grid_snake::game::GameState;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::info;

const LOGGING_HELP: &str = "\
Logging is controlled by RUST_LOG and written to stderr, which shares the \
game screen. Redirect it when logging is enabled, e.g. \
`RUST_LOG=debug grid-snake 2>snake.log`.";

#[derive(Debug, Parser)]
#[command(version, about, after_help = LOGGING_HELP)]
struct Cli {
    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between ticks in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,
}

fn main() -> Result<(), GameError> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    install_panic_hook();

    let session = TerminalSession::enter()?;
    let bounds = session.board();
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed)?,
        None => GameState::new(bounds)?,
    };
    info!(
        "board {}x{}, seed {:?}, tick {} ms",
        bounds.width, bounds.height, cli.seed, cli.tick_ms
    );

    run(session, state, Duration::from_millis(cli.tick_ms))
}

fn run(
    mut session: TerminalSession,
    mut state: GameState,
    tick_interval: Duration,
) -> Result<(), GameError> {
    let mut input = InputHandler::new();

    loop {
        if let Some(game_input) = input.poll_input()? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }

            state.set_direction(game_input);
        }

        state.advance()?;
        state.redraw();
        session.present(&state)?;

        thread::sleep(tick_interval);
    }

    info!(
        "quit after {} ticks and {} lives",
        state.tick_count, state.life
    );
    Ok(())
}
