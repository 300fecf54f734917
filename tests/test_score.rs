use std::fs;

use tempfile::TempDir;

use asteroids::error::{Result, ScoreError};
use asteroids::score::{FileScoreStore, HighScoreStore, MemoryScoreStore, ScoreBoard};

fn store_in(dir: &TempDir) -> FileScoreStore {
    FileScoreStore::new(dir.path().join("score"))
}

/// Store whose writes always fail.
struct BrokenStore;

impl HighScoreStore for BrokenStore {
    fn load(&self) -> Result<u32> {
        Ok(10)
    }

    fn save(&mut self, _score: u32) -> Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
    }
}

// ── File store ────────────────────────────────────────────────────────────────

#[test]
fn missing_file_loads_as_zero() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.load().unwrap(), 0);
}

#[test]
fn saved_score_loads_back() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.save(4825).unwrap();
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "4825");
    assert_eq!(store.load().unwrap(), 4825);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "  300\n").unwrap();
    assert_eq!(store.load().unwrap(), 300);
}

#[test]
fn garbage_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "lots").unwrap();
    match store.load() {
        Err(ScoreError::Parse { contents, .. }) => assert_eq!(contents, "lots"),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn unreadable_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    // A directory exists but cannot be read as a file
    let store = FileScoreStore::new(dir.path());
    assert!(matches!(store.load(), Err(ScoreError::Io(_))));
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

#[test]
fn board_starts_with_three_lives_and_stored_best() {
    let store = MemoryScoreStore { value: 900, writes: 0 };
    let board = ScoreBoard::new(&store);
    assert_eq!(board.score, 0);
    assert_eq!(board.lives, 3);
    assert_eq!(board.high_score, 900);
    assert!(!board.high_score_saved);
}

#[test]
fn unreadable_high_score_reads_as_zero() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "not a number").unwrap();
    let board = ScoreBoard::new(&store);
    assert_eq!(board.high_score, 0);
}

#[test]
fn new_high_score_is_written_once() {
    let mut store = MemoryScoreStore { value: 100, writes: 0 };
    let mut board = ScoreBoard::new(&store);
    board.score = 250;
    assert!(board.is_new_high_score());

    board.save_high_score(&mut store);
    board.save_high_score(&mut store);

    assert_eq!(store.writes, 1);
    assert_eq!(store.value, 250);
    assert!(board.high_score_saved);
}

#[test]
fn equal_or_lower_score_is_not_written() {
    let mut store = MemoryScoreStore { value: 250, writes: 0 };
    let mut board = ScoreBoard::new(&store);
    board.score = 250;
    assert!(!board.is_new_high_score());
    board.save_high_score(&mut store);
    assert_eq!(store.writes, 0);
    assert!(!board.high_score_saved);
}

#[test]
fn failed_write_leaves_flag_unset() {
    let mut store = BrokenStore;
    let mut board = ScoreBoard::new(&store);
    board.score = 11;
    board.save_high_score(&mut store);
    assert!(!board.high_score_saved);
}

#[test]
fn reset_restores_lives_and_clears_score() {
    let mut store = MemoryScoreStore::default();
    let mut board = ScoreBoard::new(&store);
    board.score = 75;
    board.lives = 0;
    board.save_high_score(&mut store);
    board.reset();
    assert_eq!(board.score, 0);
    assert_eq!(board.lives, 3);
    assert!(!board.high_score_saved);
    // High score is only refreshed by reloading
    assert_eq!(board.high_score, 0);
    assert_eq!(board.load_high_score(&store), 75);
}

#[test]
fn file_store_round_trips_through_board() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    let mut board = ScoreBoard::new(&store);
    board.score = 1200;
    board.save_high_score(&mut store);
    assert!(board.high_score_saved);

    let reloaded = ScoreBoard::new(&store);
    assert_eq!(reloaded.high_score, 1200);
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[test]
fn settings_read_paths_from_environment() {
    std::env::set_var("ASTEROIDS_SCORE_FILE", "/tmp/best");
    std::env::set_var("ASTEROIDS_LOG_FILE", "");
    let settings = asteroids::config::Settings::from_env();
    assert_eq!(settings.score_file, std::path::PathBuf::from("/tmp/best"));
    // Empty values fall back to the default
    assert_eq!(settings.log_file, std::env::temp_dir().join("asteroids.log"));
}
