//! Integration tests for the league stores.
//!
//! These tests exercise both store implementations through the shared
//! `ScoreStore` trait, including persistence across reopen and concurrent wins.

use poker_night::league::{
    FileSystemStore, InMemoryStore, League, LeagueError, Player, ScoreStore,
};
use std::{collections::HashSet, io::Write, sync::Arc};
use tempfile::NamedTempFile;
use tokio::task::JoinSet;

const SEED: &str = r#"[
    {"Name": "Cleo", "Wins": 10},
    {"Name": "Chris", "Wins": 33}]"#;

/// Helper to create a league file holding `content`
fn league_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn player_set(league: &League) -> HashSet<(String, u64)> {
    league.iter().map(|p| (p.name.clone(), p.wins)).collect()
}

// ============================================================================
// File Store Tests
// ============================================================================

#[tokio::test]
async fn test_league_table_from_file() {
    let file = league_file(SEED);
    let store = FileSystemStore::from_path(file.path()).unwrap();

    let table = store.get_league_table().await.unwrap();
    assert_eq!(
        table,
        League::from(vec![Player::new("Chris", 33), Player::new("Cleo", 10)])
    );

    // Reading twice gives the same answer
    assert_eq!(store.get_league_table().await.unwrap(), table);
}

#[tokio::test]
async fn test_get_player_score() {
    let file = league_file(SEED);
    let store = FileSystemStore::from_path(file.path()).unwrap();

    assert_eq!(store.get_score("Chris").await.unwrap(), 33);
}

#[tokio::test]
async fn test_store_wins_for_existing_players() {
    let file = league_file(SEED);
    let store = FileSystemStore::from_path(file.path()).unwrap();

    store.record_win("Chris").await.unwrap();

    assert_eq!(store.get_score("Chris").await.unwrap(), 34);
    assert_eq!(store.get_score("Cleo").await.unwrap(), 10);
}

#[tokio::test]
async fn test_store_wins_for_new_players() {
    let file = league_file(SEED);
    let store = FileSystemStore::from_path(file.path()).unwrap();

    store.record_win("Pepper").await.unwrap();

    assert_eq!(store.get_score("Pepper").await.unwrap(), 1);
}

#[tokio::test]
async fn test_missing_player_is_not_found() {
    let file = league_file(SEED);
    let store = FileSystemStore::from_path(file.path()).unwrap();

    let err = store.get_score("Unknown").await.unwrap_err();
    assert!(matches!(err, LeagueError::PlayerNotFound(_)));
}

#[tokio::test]
async fn test_empty_file_initialized() {
    let file = league_file("");
    let store = FileSystemStore::from_path(file.path()).unwrap();

    assert!(store.get_league_table().await.unwrap().is_empty());
    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "[]");
}

#[tokio::test]
async fn test_nonexistent_file_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.db.json");

    let store = FileSystemStore::from_path(&path).unwrap();
    store.record_win("Ruth").await.unwrap();

    let on_disk = League::decode(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(on_disk.find("Ruth").map(|p| p.wins), Some(1));
}

#[test]
fn test_malformed_file_fails_construction() {
    let file = league_file(r#"[{"Name": "Cleo", "Wins": "#);

    let result = FileSystemStore::from_path(file.path());

    assert!(matches!(result, Err(LeagueError::Parse(_))));
    // The bad content is left untouched
    assert_eq!(
        std::fs::read_to_string(file.path()).unwrap(),
        r#"[{"Name": "Cleo", "Wins": "#
    );
}

#[tokio::test]
async fn test_wins_survive_reopen() {
    let file = league_file(SEED);

    {
        let store = FileSystemStore::from_path(file.path()).unwrap();
        store.record_win("Chris").await.unwrap();
        store.record_win("Pepper").await.unwrap();
        store.record_win("Pepper").await.unwrap();
    }

    let reopened = FileSystemStore::from_path(file.path()).unwrap();
    assert_eq!(reopened.get_score("Chris").await.unwrap(), 34);
    assert_eq!(reopened.get_score("Pepper").await.unwrap(), 2);
    assert_eq!(reopened.get_score("Cleo").await.unwrap(), 10);
}

#[tokio::test]
async fn test_file_keeps_insertion_order() {
    let file = league_file(SEED);
    let store = FileSystemStore::from_path(file.path()).unwrap();

    store.record_win("Pepper").await.unwrap();

    let on_disk = League::decode(&std::fs::read(file.path()).unwrap()).unwrap();
    let names: Vec<_> = on_disk.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Cleo", "Chris", "Pepper"]);
}

#[tokio::test]
async fn test_file_holds_exactly_the_league_after_shrinking() {
    // Padding makes the seed longer than its compact re-encoding
    let padded = format!("{SEED}{}", " ".repeat(256));
    let file = league_file(&padded);
    let store = FileSystemStore::from_path(file.path()).unwrap();

    store.record_win("Cleo").await.unwrap();

    let bytes = std::fs::read(file.path()).unwrap();
    assert_eq!(bytes, br#"[{"Name":"Cleo","Wins":11},{"Name":"Chris","Wins":33}]"#);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

async fn concurrent_wins(store: Arc<dyn ScoreStore>, callers: usize) {
    let mut tasks = JoinSet::new();
    for _ in 0..callers {
        let store = store.clone();
        tasks.spawn(async move { store.record_win("Pepper").await });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_wins_in_memory() {
    let store = Arc::new(InMemoryStore::new());

    concurrent_wins(store.clone(), 100).await;

    assert_eq!(store.get_score("Pepper").await.unwrap(), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_wins_on_file() {
    let file = league_file("");
    let store = Arc::new(FileSystemStore::from_path(file.path()).unwrap());

    concurrent_wins(store.clone(), 100).await;

    assert_eq!(store.get_score("Pepper").await.unwrap(), 100);
    let on_disk = League::decode(&std::fs::read(file.path()).unwrap()).unwrap();
    assert_eq!(on_disk.find("Pepper").map(|p| p.wins), Some(100));
}

#[tokio::test]
async fn test_league_table_counts_every_player() {
    let file = league_file("");
    let stores: [Arc<dyn ScoreStore>; 2] = [
        Arc::new(InMemoryStore::new()),
        Arc::new(FileSystemStore::from_path(file.path()).unwrap()),
    ];

    for store in stores {
        for name in ["Cleo", "Chris", "Cleo", "Ruth", "Cleo", "Chris"] {
            store.record_win(name).await.unwrap();
        }

        let table = store.get_league_table().await.unwrap();
        let expected: HashSet<_> = [
            ("Cleo".to_string(), 3),
            ("Chris".to_string(), 2),
            ("Ruth".to_string(), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(player_set(&table), expected);
    }
}
