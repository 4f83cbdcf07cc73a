//! Integration tests for the terminal prompt loop.
//!
//! Each test builds its own fake game so no state leaks between cases.

use async_trait::async_trait;
use poker_night::{
    BlindScheduler, Game, GameError, GameSession, InMemoryStore, ScoreStore,
    blinds::{AlertDestination, TimerAlerter},
    cli::{BAD_PLAYER_INPUT, BAD_WINNER_INPUT, Cli, CliError, PLAYER_PROMPT},
    game::GameResult,
};
use std::sync::Arc;

/// Records calls and echoes a canned blind alert on start
#[derive(Default)]
struct GameSpy {
    start_called_with: Option<usize>,
    finish_called_with: Option<String>,
    blind_alert: String,
}

#[async_trait]
impl Game for GameSpy {
    fn start(&mut self, number_of_players: usize, to: AlertDestination) -> GameResult<()> {
        self.start_called_with = Some(number_of_players);
        if !self.blind_alert.is_empty() {
            to.write(self.blind_alert.clone())?;
        }
        Ok(())
    }

    async fn finish(&mut self, winner: &str) -> GameResult<()> {
        self.finish_called_with = Some(winner.to_string());
        Ok(())
    }
}

async fn play(input: &str, game: GameSpy) -> (String, GameSpy) {
    let mut cli = Cli::new(input.as_bytes(), Vec::new(), game);
    cli.play_poker().await.unwrap();
    let (out, game) = cli.into_parts();
    (String::from_utf8(out).unwrap(), game)
}

#[tokio::test]
async fn test_start_with_three_players_and_finish_with_chris() {
    let (out, game) = play("3\nChris wins\n", GameSpy::default()).await;

    assert_eq!(out, PLAYER_PROMPT);
    assert_eq!(game.start_called_with, Some(3));
    assert_eq!(game.finish_called_with.as_deref(), Some("Chris"));
}

#[tokio::test]
async fn test_start_with_eight_players_and_finish_with_cleo() {
    let (_, game) = play("8\nCleo wins\n", GameSpy::default()).await;

    assert_eq!(game.start_called_with, Some(8));
    assert_eq!(game.finish_called_with.as_deref(), Some("Cleo"));
}

#[tokio::test]
async fn test_blind_alerts_reach_output() {
    let spy = GameSpy {
        blind_alert: "Blind is now 100\n".to_string(),
        ..Default::default()
    };

    let (out, _) = play("5\nRuth wins\n", spy).await;

    assert_eq!(out, format!("{PLAYER_PROMPT}Blind is now 100\n"));
}

#[tokio::test]
async fn test_bad_player_count_reprompts() {
    let (out, game) = play("Pies\n0\n4\nChris wins\n", GameSpy::default()).await;

    assert_eq!(
        out,
        format!("{PLAYER_PROMPT}{BAD_PLAYER_INPUT}{PLAYER_PROMPT}{BAD_PLAYER_INPUT}{PLAYER_PROMPT}")
    );
    assert_eq!(game.start_called_with, Some(4));
}

#[tokio::test]
async fn test_eof_before_player_count_does_not_start() {
    let (out, game) = play("Pies\n", GameSpy::default()).await;

    assert_eq!(out, format!("{PLAYER_PROMPT}{BAD_PLAYER_INPUT}{PLAYER_PROMPT}"));
    assert_eq!(game.start_called_with, None);
    assert_eq!(game.finish_called_with, None);
}

#[tokio::test]
async fn test_blank_winner_is_reread() {
    let (out, game) = play("2\n\nCleo wins\n", GameSpy::default()).await;

    assert!(out.ends_with(BAD_WINNER_INPUT));
    assert_eq!(game.finish_called_with.as_deref(), Some("Cleo"));
}

#[tokio::test]
async fn test_eof_before_winner_does_not_finish() {
    let (_, game) = play("2\n", GameSpy::default()).await;

    assert_eq!(game.start_called_with, Some(2));
    assert_eq!(game.finish_called_with, None);
}

#[tokio::test(start_paused = true)]
async fn test_cli_records_win_in_store() {
    let store = Arc::new(InMemoryStore::new());
    let game = GameSession::new(BlindScheduler::new(Arc::new(TimerAlerter)), store.clone());

    let mut cli = Cli::new("7\nChris wins\n".as_bytes(), Vec::new(), game);
    cli.play_poker().await.unwrap();

    assert_eq!(store.get_score("Chris").await.unwrap(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_player_count_too_large_for_blinds_reprompts() {
    let store = Arc::new(InMemoryStore::new());
    let game = GameSession::new(BlindScheduler::new(Arc::new(TimerAlerter)), store.clone());

    let mut cli = Cli::new(
        "40000000000000000\n3\nChris wins\n".as_bytes(),
        Vec::new(),
        game,
    );
    cli.play_poker().await.unwrap();

    let (out, _) = cli.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with(&format!("{PLAYER_PROMPT}{BAD_PLAYER_INPUT}{PLAYER_PROMPT}")));
    assert_eq!(store.get_score("Chris").await.unwrap(), 1);
}

/// Game whose winner can never be recorded
struct BrokenGame;

#[async_trait]
impl Game for BrokenGame {
    fn start(&mut self, _: usize, _: AlertDestination) -> GameResult<()> {
        Ok(())
    }

    async fn finish(&mut self, _: &str) -> GameResult<()> {
        Err(GameError::League(poker_night::LeagueError::Io(
            std::io::Error::other("disk full"),
        )))
    }
}

#[tokio::test]
async fn test_game_errors_are_returned() {
    let mut cli = Cli::new("3\nChris wins\n".as_bytes(), Vec::new(), BrokenGame);

    let err = cli.play_poker().await.unwrap_err();

    assert!(matches!(err, CliError::Game(GameError::League(_))));
}
