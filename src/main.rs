//! Terminal tile-match runner (default binary).
//!
//! Interactive mode uses crossterm for input and the framebuffer renderer
//! from `tile_match::term`. `--headless` autoplays hinted moves instead and
//! prints one JSON object per move on stdout.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use serde_json::json;

use tile_match::core::{find_potential_match, EngineConfig, Palette};
use tile_match::input::{handle_key_event, should_quit};
use tile_match::session::Session;
use tile_match::term::{BoardView, TerminalRenderer, Viewport};
use tile_match::types::{Color, DEFAULT_SHUFFLE_ATTEMPTS, GRID_SIZE, STEP_MS};

#[derive(Debug, Parser)]
#[command(name = "tile-match", about = "Tile-matching board in the terminal")]
struct Cli {
    /// RNG seed for board generation and refills
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Grid edge length
    #[arg(long, default_value_t = GRID_SIZE)]
    size: usize,

    /// Number of token colors (first K of red, blue, green, yellow, purple, orange)
    #[arg(long, default_value_t = Color::COUNT)]
    colors: usize,

    /// Random shuffles tried before the constructive fallback
    #[arg(long, default_value_t = DEFAULT_SHUFFLE_ATTEMPTS)]
    shuffle_attempts: u32,

    /// Delay between resolution steps in milliseconds
    #[arg(long, default_value_t = STEP_MS)]
    step_ms: u32,

    /// Autoplay hinted moves without a terminal UI
    #[arg(long)]
    headless: bool,

    /// Moves to autoplay in headless mode
    #[arg(long, default_value_t = 20)]
    moves: u32,
}

impl Cli {
    fn engine_config(&self) -> Result<EngineConfig> {
        let config = EngineConfig::default()
            .with_seed(self.seed)
            .with_grid_size(self.size)
            .with_palette(Palette::first(self.colors)?)
            .with_shuffle_attempts(self.shuffle_attempts);
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.headless { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let session = Session::new(cli.engine_config()?)?;

    if cli.headless {
        return run_headless(session, cli.moves);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, cli.step_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session, step_ms: u32) -> Result<()> {
    let view = BoardView::default();
    let step = Duration::from_millis(step_ms as u64);
    let mut last_step = Instant::now();
    let mut last_size = (0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if (w, h) != last_size {
            term.invalidate();
            last_size = (w, h);
        }
        let fb = view.render(
            &session.snapshot(),
            &session.overlay(),
            &session.status(),
            Viewport::new(w, h),
        );
        term.draw(&fb)?;

        // Input with timeout until the next resolution step.
        let timeout = if session.is_resolving() {
            step.checked_sub(last_step.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0))
        } else {
            step
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
            }
        }

        // Step.
        if session.is_resolving() && last_step.elapsed() >= step {
            last_step = Instant::now();
            session.tick();
        } else if !session.is_resolving() {
            last_step = Instant::now();
        }
    }
}

fn run_headless(mut session: Session, moves: u32) -> Result<()> {
    let mut out = std::io::stdout().lock();

    for n in 1..=moves {
        let Some(hint) = find_potential_match(session.grid()) else {
            warn!("no move available after {} move(s)", n - 1);
            break;
        };
        let [a, b] = hint.swap;
        if !session.try_swap(a, b) {
            warn!("hinted swap {a}<->{b} was rejected");
            break;
        }
        let Some(cascade) = session.resolve() else {
            warn!("resolution did not settle after move {n}");
            break;
        };

        let line = json!({
            "move": n,
            "swap": [a, b],
            "steps": cascade.steps,
            "waves": cascade.waves,
            "cleared": cascade.cleared,
            "shuffled": cascade.shuffled,
        });
        writeln!(out, "{}", serde_json::to_string(&line)?)?;
    }

    let stats = session.stats();
    info!(
        "played {} move(s): best chain {}, {} shuffle(s), {} token(s) cleared",
        stats.moves,
        stats.best_chain,
        stats.shuffles,
        stats.cleared.total()
    );
    let summary = json!({
        "moves": stats.moves,
        "best_chain": stats.best_chain,
        "shuffles": stats.shuffles,
        "cleared": stats.cleared,
        "board": session.snapshot(),
    });
    writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    Ok(())
}
