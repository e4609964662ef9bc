//! tipsplit - Terminal Tip Calculator
//!
//! Splits a bill and tip between a party of people. Runs as an interactive
//! terminal form by default, or computes a single split when `--bill` is given.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use tipsplit::application::{App, OneShotSplit};
use tipsplit::infrastructure::{init_logging, ConfigRepository, LogTarget, Settings, DEFAULT_CONFIG_FILE};
use tipsplit::presentation::{render_ui, InputHandler, KeyOutcome};

/// Split a bill and tip evenly between a party.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file (JSON). Defaults to `tipsplit.json` when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Bill amount. Prints one split and exits instead of opening the form.
    #[arg(long, allow_hyphen_values = true)]
    bill: Option<String>,

    /// Number of people sharing the bill.
    #[arg(long, requires = "bill", allow_hyphen_values = true)]
    people: Option<String>,

    /// Free-form tip percentage.
    #[arg(long, requires = "bill", allow_hyphen_values = true)]
    tip: Option<String>,

    /// One of the configured preset tip percentages.
    #[arg(long, requires = "bill", conflicts_with = "tip")]
    preset: Option<f64>,
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) => ConfigRepository::load(path)?,
        None => ConfigRepository::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_target = match (&cli.log_file, cli.bill.is_some()) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Disabled,
    };
    init_logging(&log_target)?;

    let settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;

    match cli.bill {
        Some(bill) => {
            let request = OneShotSplit {
                bill,
                people: cli.people,
                preset: cli.preset,
                custom_tip: cli.tip,
            };
            print_split(&request, &settings)
        }
        None => run_interactive(&settings),
    }
}

fn print_split(request: &OneShotSplit, settings: &Settings) -> Result<()> {
    let rendered = request.run(settings)?;

    println!("Tip per person: {}", rendered.tip_per_person);
    println!("Total per person: {}", rendered.total_per_person);

    match rendered.error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Sets up the terminal, runs the form, and restores the terminal afterwards.
fn run_interactive(settings: &Settings) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(presets = ?settings.presets, "starting tip form");
    let mut app = App::new(settings);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal I/O failed")
}

/// Main application event loop.
///
/// Draws the form, then applies one key press per iteration until a quit key.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && InputHandler::handle_key_event(app, key.code, key.modifiers) == KeyOutcome::Quit
            {
                return Ok(());
            }
        }
    }
}
