use crate::error::{DayIndexError, GuessError};
use crate::game_state::{
    GameInterface, GameSession, GameSummary, GuessResult, MAX_ATTEMPTS, Outcome, UserAction,
};
use crate::scoring::ScoringRule;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Guess the daily five-letter word in six tries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Day number to play instead of today's word
    #[arg(value_parser = parse_day_index, allow_negative_numbers = true)]
    pub day: Option<i64>,

    /// Path to a JSON word list with `targets` and `valid` arrays
    #[arg(short = 'w', long = "words")]
    pub words_path: Option<PathBuf>,

    /// Play line by line on stdin/stdout instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Only mark as many repeated letters present as the answer contains
    #[arg(long = "strict-duplicates")]
    pub strict_duplicates: bool,
}

impl Cli {
    pub fn scoring_rule(&self) -> ScoringRule {
        if self.strict_duplicates {
            ScoringRule::DuplicateAware
        } else {
            ScoringRule::Containment
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub fn parse_day_index(value: &str) -> Result<i64, DayIndexError> {
    value
        .trim()
        .parse()
        .map_err(|_| DayIndexError(value.to_string()))
}

fn describe_rejection(error: &GuessError) -> String {
    match error {
        GuessError::InvalidLength(_) => "Invalid guess. Please enter 5 letters.".to_string(),
        GuessError::InvalidWord(word) => {
            format!("'{}' is not in the word list.", word.to_uppercase())
        }
        GuessError::AlreadyFinished(_) => "The game is over. Type 'exit' to quit.".to_string(),
    }
}

pub fn display_start(day_index: i64, attempts_remaining: usize) {
    println!("WordTerm {day_index}: guess the five-letter word. {attempts_remaining} tries left.");
}

pub fn display_guess_result(result: &GuessResult) {
    println!(
        "{}  {}  ({}/{})",
        result.scored.word().to_uppercase(),
        result.scored.pattern(),
        result.attempts_used,
        MAX_ATTEMPTS
    );
}

pub fn display_game_over(summary: &GameSummary) {
    match summary.outcome {
        Outcome::Won => println!("\nWell done!\n"),
        Outcome::Lost => println!("\nToday's word was:\n\n{}\n", summary.answer.to_uppercase()),
        Outcome::InProgress => {}
    }
    print!("{}", summary.share);
}

/// Line-oriented implementation of [`GameInterface`] over any `BufRead`.
///
/// Once the game-over summary has been shown the interface stops reading and
/// asks the loop to exit.
pub struct CliInterface<R: BufRead> {
    reader: R,
    finished: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            finished: false,
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_start(&mut self, session: &GameSession) {
        display_start(session.day_index(), session.attempts_remaining());
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        if self.finished {
            return Some(UserAction::Exit);
        }
        println!("\nEnter your guess (5 letters, or 'exit' to quit):");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => return Some(UserAction::Exit),
            Ok(_) => {}
            Err(e) => {
                log::error!("failed to read guess: {e}");
                return Some(UserAction::Exit);
            }
        }

        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "" => None,
            "exit" | "quit" => Some(UserAction::Exit),
            _ => Some(UserAction::Guess(trimmed.to_string())),
        }
    }

    fn display_guess_result(&mut self, result: &GuessResult) {
        display_guess_result(result);
    }

    fn display_rejection(&mut self, error: &GuessError) {
        println!("{}", describe_rejection(error));
    }

    fn display_game_over(&mut self, summary: &GameSummary) {
        display_game_over(summary);
        self.finished = true;
    }

    fn display_exit_message(&mut self) {
        if !self.finished {
            println!("Exiting.");
        }
    }
}
