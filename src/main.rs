use std::time::{Duration, Instant};

use clap::Parser;
use rainbow_snake::config::{
    DEFAULT_TICK_INTERVAL_MS, INPUT_POLL_MS, SEGMENT_SIZE, WORLD_HEIGHT, WORLD_WIDTH,
};
use rainbow_snake::error::AppError;
use rainbow_snake::game::GameState;
use rainbow_snake::input::{GameInput, InputHandler};
use rainbow_snake::renderer;
use rainbow_snake::terminal_runtime::TerminalSession;
use rainbow_snake::theme::{THEMES, Theme};
use rainbow_snake::ui::hud::HudInfo;
use rainbow_snake::world::World;

#[derive(Debug, Parser)]
#[command(version, about = "Rainbow garden Snake for the terminal")]
struct Cli {
    /// Gameplay tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the WASD dodge maneuver (WASD becomes a second set of
    /// movement keys).
    #[arg(long = "no-dodge")]
    no_dodge: bool,

    /// Color theme name.
    #[arg(long, default_value = "garden")]
    theme: String,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let theme = Theme::by_name(&cli.theme).ok_or_else(|| AppError::UnknownTheme {
        name: cli.theme.clone(),
        available: THEMES
            .iter()
            .map(|theme| theme.name)
            .collect::<Vec<_>>()
            .join(", "),
    })?;

    let world = World::new(WORLD_WIDTH, WORLD_HEIGHT, SEGMENT_SIZE);
    let dodge_enabled = !cli.no_dodge;
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(world, dodge_enabled, seed),
        None => GameState::new(world, dodge_enabled),
    };

    let input = InputHandler::new(dodge_enabled);
    let tick_interval = Duration::from_millis(cli.tick_ms.max(1));
    let poll_timeout = Duration::from_millis(INPUT_POLL_MS);

    let mut session = TerminalSession::enter()?;
    let mut last_tick = Instant::now();

    loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                &state,
                &HudInfo {
                    theme,
                    dodge_enabled,
                },
            );
        })?;

        match input.poll_input(poll_timeout)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Intent(intent)) => state.queue_input(intent),
            None => {}
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
