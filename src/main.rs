use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use oware::config::{AppConfig, PlayerKind};
use oware::ui::App;

/// Play Oware (Awari) in the terminal.
#[derive(Parser)]
#[command(name = "oware", about = "Play Oware (Awari) in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth for the negamax player
    #[arg(long)]
    depth: Option<u32>,

    /// Override the South seat: human, negamax, or random
    #[arg(long)]
    south: Option<String>,

    /// Override the North seat: human, negamax, or random
    #[arg(long)]
    north: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_kind(s: &str) -> Result<PlayerKind> {
    Ok(match s {
        "human" => PlayerKind::Human,
        "negamax" => PlayerKind::Negamax,
        "random" => PlayerKind::Random,
        other => bail!(
            "unknown player kind '{}' (expected 'human', 'negamax', or 'random')",
            other
        ),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(south) = &cli.south {
        config.players.south = parse_kind(south)?;
    }
    if let Some(north) = &cli.north {
        config.players.north = parse_kind(north)?;
    }
    config.validate().context("validating configuration")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running the game loop")
}
