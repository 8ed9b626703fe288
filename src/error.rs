use crate::game_state::Outcome;
use crate::scoring::WORD_LENGTH;
use std::io;
use thiserror::Error;

/// Failure to build a [`WordStore`](crate::wordbank::WordStore). Fatal at startup.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("word list is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("word list entry '{0}' is not a {len}-letter word", len = WORD_LENGTH)]
    MalformedWord(String),
    #[error("word list has no target words")]
    NoTargets,
}

/// A rejected submission. The session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess has {0} letters, should have exactly {len}", len = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("'{0}' is not in the word list")]
    InvalidWord(String),
    #[error("the game is already over ({0})")]
    AlreadyFinished(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid day number")]
pub struct DayIndexError(pub String);

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    WordList(#[from] WordListError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}
