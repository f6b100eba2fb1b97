use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use undercover::view::shell::HELP;
use undercover::view::{parse_line, ShellCommand};
use undercover::{render_text, GameConfig, GameController, GameEvent, GameRng, JsonFileRosterStore};

/// Pass-and-play Undercover in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Where the player roster is kept between sessions.
    #[arg(long, default_value = "undercover-roster.json")]
    roster_file: PathBuf,

    /// TOML file overriding rules and the word catalog.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible table.
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, e.g. `info` or `undercover=debug`. Defaults to RUST_LOG, then `warn`.
    #[arg(long)]
    log_level: Option<String>,
}

/// Lines printed after hiding a word so the next player cannot scroll to it.
const PRIVACY_SCROLL: usize = 40;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let store = JsonFileRosterStore::new(&cli.roster_file);

    let mut game = GameController::new(config, store, rng).context("starting the table")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}> ", render_text(&game.view()))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let view = game.view();

        match parse_line(&line, &view) {
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => writeln!(stdout, "{HELP}")?,
            Ok(ShellCommand::Show) => {}
            Ok(ShellCommand::Event(event)) => {
                let hides = event == GameEvent::HideWord;
                match game.dispatch(event) {
                    Ok(notices) => {
                        if hides {
                            write!(stdout, "{}", "\n".repeat(PRIVACY_SCROLL))?;
                        }
                        for notice in notices {
                            writeln!(stdout, "* {notice}")?;
                        }
                    }
                    Err(err) if err.is_validation() => writeln!(stdout, "! {err}")?,
                    Err(err) => return Err(err).context("saving the roster"),
                }
            }
            Err(err) => writeln!(stdout, "! {err}")?,
        }

        write!(stdout, "\n{}> ", render_text(&game.view()))?;
        stdout.flush()?;
    }

    Ok(())
}
