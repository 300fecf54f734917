/// Score, lives, and the persisted high score.

use std::path::{Path, PathBuf};

use crate::config::STARTING_LIVES;
use crate::error::{Result, ScoreError};

// ── Persistence ───────────────────────────────────────────────────────────────

/// Somewhere a single high-score integer can be kept between runs.
pub trait HighScoreStore {
    fn load(&self) -> Result<u32>;
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Plain-text file holding the score as decimal digits.
#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileScoreStore {
    /// A missing file is a high score of 0, not an error.
    fn load(&self) -> Result<u32> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        contents
            .trim()
            .parse()
            .map_err(|source| ScoreError::Parse { contents, source })
    }

    fn save(&mut self, score: u32) -> Result<()> {
        std::fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// Store kept in memory; counts writes. Used when no file is wanted.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    pub value: u32,
    pub writes: usize,
}

impl HighScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u32> {
        Ok(self.value)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.value = score;
        self.writes += 1;
        Ok(())
    }
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: u32,
    /// The stored best, as loaded at the start of the current game.
    pub high_score: u32,
    pub lives: i32,
    /// Set once this game's score has been written to the store.
    pub high_score_saved: bool,
}

impl ScoreBoard {
    pub fn new(store: &impl HighScoreStore) -> Self {
        let mut board = Self {
            score: 0,
            high_score: 0,
            lives: STARTING_LIVES,
            high_score_saved: false,
        };
        board.load_high_score(store);
        board
    }

    /// Refresh `high_score` from the store; failures read as 0.
    pub fn load_high_score(&mut self, store: &impl HighScoreStore) -> u32 {
        self.high_score = store.load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not read high score, using 0");
            0
        });
        self.high_score
    }

    /// Start-of-game values; the high score is reloaded separately.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.high_score_saved = false;
    }

    pub fn is_new_high_score(&self) -> bool {
        self.score > self.high_score
    }

    /// Persist the score if it beats the stored best. Writes at most once
    /// per game; a failed write is logged and leaves `high_score_saved`
    /// unset.
    pub fn save_high_score(&mut self, store: &mut impl HighScoreStore) {
        if self.high_score_saved || !self.is_new_high_score() {
            return;
        }
        match store.save(self.score) {
            Ok(()) => {
                self.high_score_saved = true;
                tracing::info!(score = self.score, "new high score saved");
            }
            Err(err) => tracing::warn!(%err, score = self.score, "could not save high score"),
        }
    }
}
