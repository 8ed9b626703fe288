// Library interface for wordterm
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod scoring;
pub mod share;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{AppError, DayIndexError, GuessError, WordListError};
pub use game_state::{
    GameInterface, GameSession, GameSummary, GuessResult, MAX_ATTEMPTS, Outcome, UserAction,
    game_loop,
};
pub use scoring::{Classification, ScoredGuess, ScoringRule, WORD_LENGTH, score_guess};
pub use share::{ShareStyle, render_share_summary};
pub use wordbank::WordStore;
