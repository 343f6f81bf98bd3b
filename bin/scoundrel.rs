//! Scoundrel in the terminal
//!
//! Main entry point for the game.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scoundrel::tui::App;
use scoundrel::Game;

/// Scoundrel, a single-player dungeon crawl played with cards
#[derive(Parser, Debug)]
#[command(name = "scoundrel")]
#[command(author, version, about = "Scoundrel - Clear the dungeon!", long_about = None)]
struct Args {
    /// Shuffle seed (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Logging goes to a file or nowhere; stdout belongs to the UI.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scoundrel=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }

    let game = match args.seed {
        Some(seed) => Game::new(seed),
        None => Game::from_entropy(),
    };
    tracing::info!(seed = ?game.state().seed(), "starting scoundrel");
    let mut app = App::new(game);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if let Some(command) = app.handle_event(event) {
                app.execute(command);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
