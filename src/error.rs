/// Errors from the high-score store, the only fallible boundary in the core.

use std::num::ParseIntError;

#[derive(thiserror::Error, Debug)]
pub enum ScoreError {
    /// Reading or writing the backing file failed.
    #[error("high score I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store held something that is not a score.
    #[error("high score {contents:?} is not a number: {source}")]
    Parse {
        contents: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, ScoreError>;
