//! Terminal poker night runner.
//!
//! Plays one hand against the league file: asks for the number of players,
//! prints blind alerts as they fall due, and records the winner.

use anyhow::{Context, Result};
use log::{info, warn};
use pico_args::Arguments;
use poker_night::{
    BlindScheduler, FileSystemStore, GameSession, League, ScoreStore, blinds::TimerAlerter,
    cli::Cli,
};
use std::{path::PathBuf, sync::Arc};
use tokio::io::{self, BufReader};

const HELP: &str = "\
Run a hand of poker night from the terminal

USAGE:
  pn_cli [OPTIONS]

OPTIONS:
  --db         PATH        League file  [default: env LEAGUE_DB_PATH or game.db.json]

FLAGS:
  --league                 Print the league table and exit
  -h, --help               Print help information
";

const DEFAULT_LEAGUE_PATH: &str = "game.db.json";

struct Args {
    league_path: PathBuf,
    show_league: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let args = Args {
        show_league: pargs.contains("--league"),
        league_path: pargs
            .opt_value_from_str::<_, PathBuf>("--db")?
            .or_else(|| std::env::var_os("LEAGUE_DB_PATH").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEAGUE_PATH)),
    };

    // Diagnostics go to stderr; stdout is the game.
    env_logger::builder().format_target(false).init();

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        warn!("Ignoring unrecognized arguments: {:?}", remaining);
    }

    // Catching signals for exit.
    ctrlc::set_handler(|| std::process::exit(0))?;

    let store = FileSystemStore::from_path(&args.league_path).with_context(|| {
        format!("Failed to open league file {}", args.league_path.display())
    })?;
    let store: Arc<dyn ScoreStore> = Arc::new(store);

    if args.show_league {
        print!("{}", render_league(&store.get_league_table().await?));
        return Ok(());
    }

    println!("Let's play poker!");
    println!("Type \"{{Name}} wins\" to record a win");

    let game = GameSession::new(BlindScheduler::new(Arc::new(TimerAlerter)), store);
    let mut cli = Cli::new(BufReader::new(io::stdin()), io::stdout(), game);
    cli.play_poker().await?;

    let (_, game) = cli.into_parts();
    info!("Hand ended in state {}", game.state());

    Ok(())
}

/// League table as aligned text
fn render_league(league: &League) -> String {
    if league.is_empty() {
        return "No wins recorded yet\n".to_string();
    }

    let width = league
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut table = format!("{:<width$}  Wins\n", "Name");
    for player in league {
        table.push_str(&format!("{:<width$}  {}\n", player.name, player.wins));
    }
    table
}
