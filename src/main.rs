//! Terminal runner (default binary).
//!
//! Input is polled without blocking so the drop clock is checked on every
//! iteration; a short sleep keeps the loop from spinning.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::prelude::*;

use tetrodrop::app::App;
use tetrodrop::core::{GameConfig, SpeedCurve};
use tetrodrop::term::{FrameBuffer, TerminalRenderer};
use tetrodrop::types::{BOARD_HEIGHT, BOARD_WIDTH, INITIAL_SPEED, SCORE_STEP, SPEED_INCREMENT};

const IDLE_SLEEP: Duration = Duration::from_millis(5);

#[derive(Debug, Parser)]
#[command(name = "tetrodrop", about = "Falling-block puzzle game for the terminal")]
struct Cli {
    #[arg(long, default_value_t = BOARD_WIDTH as usize, help = "Board width in cells")]
    width: usize,

    #[arg(long, default_value_t = BOARD_HEIGHT as usize, help = "Board height in cells")]
    height: usize,

    #[arg(long, help = "Seed for the first game (defaults to the clock)")]
    seed: Option<u32>,

    #[arg(long, default_value_t = INITIAL_SPEED, help = "Rows per second at score zero")]
    initial_speed: f64,

    #[arg(long, default_value_t = SPEED_INCREMENT, help = "Speed added per score step")]
    speed_increment: f64,

    #[arg(long, default_value_t = SCORE_STEP, help = "Points needed for each speed step")]
    score_step: u64,

    #[arg(long, help = "Write logs to this file (the terminal is in use by the game)")]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = WARN, -vv = INFO, -vvv = DEBUG, -vvvv = TRACE)")]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            speed: SpeedCurve {
                initial: self.initial_speed,
                increment: self.speed_increment,
                score_step: self.score_step,
            },
            ..GameConfig::with_board(self.height, self.width)
        }
    }

    fn level(&self) -> tracing_subscriber::filter::LevelFilter {
        use tracing_subscriber::filter::LevelFilter;
        match self.verbose {
            0 => LevelFilter::ERROR,
            1 => LevelFilter::WARN,
            2 => LevelFilter::INFO,
            3 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    // Without a log file nothing is installed; stdout belongs to the game.
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(cli.level())
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.subsec_nanos() ^ d.as_secs() as u32)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    let mut app = App::new(cli.config(), seed).context("invalid game configuration")?;
    tracing::info!(seed, width = cli.width, height = cli.height, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut app, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(app: &mut App, term: &mut TerminalRenderer) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);

    while !app.should_quit() {
        let now = Instant::now();
        let locked = app.update(now);

        while !locked && event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, now)?,
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            if app.should_quit() {
                return Ok(());
            }
        }

        app.render(term.viewport()?, &mut fb);
        term.draw_swap(&mut fb)?;
        thread::sleep(app.idle_for(Instant::now(), IDLE_SLEEP));
    }
    Ok(())
}
