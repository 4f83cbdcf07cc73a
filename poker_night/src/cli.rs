//! Terminal prompt loop for running one hand.
//!
//! The loop asks for the number of players, starts the game, relays blind
//! alerts to the terminal while waiting, and reads a `"{Name} wins"` line to
//! finish the hand.

use crate::{
    blinds::AlertDestination,
    game::{Game, GameError},
};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

pub const PLAYER_PROMPT: &str = "Please enter the number of players: ";
pub const BAD_PLAYER_INPUT: &str =
    "Bad value received for number of players, please try again with a number\n";
pub const BAD_WINNER_INPUT: &str = "Bad value received for winner, please try again\n";

/// Errors that end a CLI hand.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Extract the winner from a `"{Name} wins"` line.
///
/// # Examples
///
/// ```
/// use poker_night::cli::parse_winner;
///
/// assert_eq!(parse_winner("Chris wins").as_deref(), Some("Chris"));
/// assert_eq!(parse_winner("  Cleo  ").as_deref(), Some("Cleo"));
/// assert_eq!(parse_winner(" wins"), None);
/// ```
pub fn parse_winner(line: &str) -> Option<String> {
    let name = line.replacen(" wins", "", 1);
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Parse a player count. Zero and non-numbers are rejected.
pub fn parse_player_count(line: &str) -> Option<usize> {
    line.trim().parse().ok().filter(|&n| n > 0)
}

/// Prompt loop over an async line reader and writer
pub struct Cli<R, W, G> {
    input: Lines<R>,
    out: W,
    game: G,
}

impl<R, W, G> Cli<R, W, G>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    G: Game,
{
    pub fn new(input: R, out: W, game: G) -> Self {
        Self {
            input: input.lines(),
            out,
            game,
        }
    }

    /// Run one hand.
    ///
    /// A player count the game refuses is reported and asked for again.
    /// Returns `Ok(())` without finishing the game if input ends early.
    pub async fn play_poker(&mut self) -> Result<(), CliError> {
        let mut alerts = loop {
            let Some(number_of_players) = self.await_number_of_players().await? else {
                return Ok(());
            };

            let (destination, alerts) = AlertDestination::channel();
            match self.game.start(number_of_players, destination) {
                Ok(()) => break alerts,
                Err(GameError::InvalidPlayerCount(n)) => {
                    log::warn!("Game refused {} players", n);
                    self.write(BAD_PLAYER_INPUT).await?;
                }
                Err(e) => return Err(e.into()),
            }
        };

        loop {
            tokio::select! {
                biased;
                Some(text) = alerts.recv() => {
                    self.write(&text).await?;
                }
                line = self.input.next_line() => {
                    let Some(line) = line? else {
                        log::info!("Input closed before a winner was declared");
                        return Ok(());
                    };
                    match parse_winner(&line) {
                        Some(winner) => {
                            self.game.finish(&winner).await?;
                            return Ok(());
                        }
                        None => self.write(BAD_WINNER_INPUT).await?,
                    }
                }
            }
        }
    }

    /// Consume the CLI, returning its writer and game
    pub fn into_parts(self) -> (W, G) {
        (self.out, self.game)
    }

    async fn await_number_of_players(&mut self) -> Result<Option<usize>, CliError> {
        loop {
            self.write(PLAYER_PROMPT).await?;

            let Some(line) = self.input.next_line().await? else {
                return Ok(None);
            };
            match parse_player_count(&line) {
                Some(n) => return Ok(Some(n)),
                None => self.write(BAD_PLAYER_INPUT).await?,
            }
        }
    }

    async fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }
}
