use crate::error::GuessError;
use crate::scoring::{ScoredGuess, ScoringRule, WORD_LENGTH};
use crate::share::{ShareStyle, render_share_summary};
use crate::wordbank::{WordStore, normalize_word};
use crate::{debug_log, info_log};
use chrono::NaiveDate;
use std::fmt;

pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Result of an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub scored: ScoredGuess,
    pub outcome: Outcome,
    pub attempts_used: usize,
}

/// Everything a game-over screen needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: Outcome,
    pub day_index: i64,
    pub attempts_used: usize,
    pub answer: String,
    pub share: String,
}

/// One play-through against a single target word.
#[derive(Debug, Clone)]
pub struct GameSession<'w> {
    words: &'w WordStore,
    rule: ScoringRule,
    day_index: i64,
    target: String,
    guesses: Vec<ScoredGuess>,
    outcome: Outcome,
}

impl<'w> GameSession<'w> {
    pub fn for_day(words: &'w WordStore, day_index: i64) -> Self {
        let target = words.word_for_day(day_index).to_string();
        info_log!("GameSession::for_day() - day {}", day_index);
        Self {
            words,
            rule: ScoringRule::default(),
            day_index,
            target,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            outcome: Outcome::InProgress,
        }
    }

    pub fn for_date(words: &'w WordStore, date: NaiveDate) -> Self {
        let (day_index, _) = words.day_index_and_word_for_date(date);
        info_log!("GameSession::for_date() - {} is day {}", date, day_index);
        Self::for_day(words, day_index)
    }

    #[must_use]
    pub fn with_scoring_rule(mut self, rule: ScoringRule) -> Self {
        self.rule = rule;
        self
    }

    /// Validate, score and record a guess.
    ///
    /// Rejections leave the session untouched and consume no attempt.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessResult, GuessError> {
        if self.outcome.is_terminal() {
            return Err(GuessError::AlreadyFinished(self.outcome));
        }

        let guess = normalize_word(raw);
        let len = guess.chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::InvalidLength(len));
        }
        if !self.words.is_valid_guess(&guess) {
            return Err(GuessError::InvalidWord(guess));
        }

        let scored = self.rule.score(&guess, &self.target);
        debug_log!("submit_guess() - '{}' scored {}", guess, scored.pattern());
        self.guesses.push(scored.clone());

        if guess == self.target {
            self.outcome = Outcome::Won;
        } else if self.guesses.len() == MAX_ATTEMPTS {
            self.outcome = Outcome::Lost;
        }

        Ok(GuessResult {
            scored,
            outcome: self.outcome,
            attempts_used: self.guesses.len(),
        })
    }

    pub fn day_index(&self) -> i64 {
        self.day_index
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn scoring_rule(&self) -> ScoringRule {
        self.rule
    }

    pub fn guesses(&self) -> &[ScoredGuess] {
        &self.guesses
    }

    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.guesses.len()
    }

    /// One entry per attempt; `None` for rows not yet played.
    pub fn board(&self) -> [Option<&ScoredGuess>; MAX_ATTEMPTS] {
        std::array::from_fn(|row| self.guesses.get(row))
    }

    /// The target, but only once the player has lost.
    pub fn revealed_answer(&self) -> Option<&str> {
        (self.outcome == Outcome::Lost).then_some(self.target.as_str())
    }

    pub fn share_summary(&self, style: &ShareStyle) -> String {
        render_share_summary(self.day_index, &self.guesses, MAX_ATTEMPTS, style)
    }

    pub fn summary(&self, style: &ShareStyle) -> GameSummary {
        GameSummary {
            outcome: self.outcome,
            day_index: self.day_index,
            attempts_used: self.guesses.len(),
            answer: self.target.clone(),
            share: self.share_summary(style),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Exit,
}

/// Presentation seam: the game loop talks to the player only through this.
pub trait GameInterface {
    fn display_start(&mut self, session: &GameSession);
    /// `None` means nothing actionable happened yet; the loop asks again.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_guess_result(&mut self, result: &GuessResult);
    fn display_rejection(&mut self, error: &GuessError);
    fn display_game_over(&mut self, summary: &GameSummary);
    fn display_exit_message(&mut self);
}

/// Drive `session` through `interface` until the player exits.
pub fn game_loop<I: GameInterface + ?Sized>(
    session: &mut GameSession,
    interface: &mut I,
    style: &ShareStyle,
) -> Outcome {
    interface.display_start(session);

    loop {
        let Some(action) = interface.read_guess() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::Guess(raw) => match session.submit_guess(&raw) {
                Ok(result) => {
                    info_log!(
                        "game_loop() - guess {}/{} '{}' -> {} ({})",
                        result.attempts_used,
                        MAX_ATTEMPTS,
                        result.scored.word(),
                        result.scored.pattern(),
                        result.outcome
                    );
                    interface.display_guess_result(&result);
                    if result.outcome.is_terminal() {
                        interface.display_game_over(&session.summary(style));
                    }
                }
                Err(e) => {
                    log::warn!("rejected guess '{}': {}", raw.trim(), e);
                    interface.display_rejection(&e);
                }
            },
        }
    }

    session.outcome()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Classification;

    fn store() -> WordStore {
        let targets = ["light", "those", "crane"];
        let valid = [
            "slate", "raise", "tight", "night", "fight", "sight", "might", "right", "geese",
        ];
        WordStore::new(
            targets.iter().map(ToString::to_string).collect(),
            valid.iter().map(ToString::to_string).collect(),
        )
        .unwrap()
    }

    const WRONG_GUESSES: [&str; 6] = ["tight", "night", "fight", "sight", "might", "right"];

    /// Records every interface call and replays scripted actions.
    struct ScriptedInterface {
        actions: Vec<UserAction>,
        results: Vec<GuessResult>,
        rejections: Vec<GuessError>,
        game_over: Option<GameSummary>,
        started: bool,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: &[&str]) -> Self {
            let mut actions: Vec<UserAction> = actions
                .iter()
                .map(|a| UserAction::Guess((*a).to_string()))
                .collect();
            actions.push(UserAction::Exit);
            actions.reverse();
            Self {
                actions,
                results: Vec::new(),
                rejections: Vec::new(),
                game_over: None,
                started: false,
                exited: false,
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_start(&mut self, _session: &GameSession) {
            self.started = true;
        }

        fn read_guess(&mut self) -> Option<UserAction> {
            Some(self.actions.pop().unwrap_or(UserAction::Exit))
        }

        fn display_guess_result(&mut self, result: &GuessResult) {
            self.results.push(result.clone());
        }

        fn display_rejection(&mut self, error: &GuessError) {
            self.rejections.push(error.clone());
        }

        fn display_game_over(&mut self, summary: &GameSummary) {
            self.game_over = Some(summary.clone());
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    #[test]
    fn test_new_session_in_progress() {
        let words = store();
        let session = GameSession::for_day(&words, 0);
        assert_eq!(session.target(), "light");
        assert_eq!(session.day_index(), 0);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert!(session.board().iter().all(Option::is_none));
        assert_eq!(session.revealed_answer(), None);
    }

    #[test]
    fn test_session_for_date() {
        let words = store();
        let date = NaiveDate::from_ymd_opt(2021, 6, 20).unwrap();
        let session = GameSession::for_date(&words, date);
        assert_eq!(session.day_index(), 1);
        assert_eq!(session.target(), "those");
    }

    #[test]
    fn test_win_on_first_guess() {
        let words = store();
        let mut session = GameSession::for_day(&words, 0);
        let result = session.submit_guess("light").unwrap();
        assert_eq!(result.outcome, Outcome::Won);
        assert_eq!(result.attempts_used, 1);
        assert_eq!(result.scored.marks(), &[Classification::Correct; 5]);
        assert_eq!(session.outcome(), Outcome::Won);
        assert_eq!(session.revealed_answer(), None);
    }

    #[test]
    fn test_lose_after_six_wrong_guesses() {
        let words = store();
        let mut session = GameSession::for_day(&words, 0);
        for (i, guess) in WRONG_GUESSES.iter().enumerate() {
            let result = session.submit_guess(guess).unwrap();
            let expected = if i + 1 == MAX_ATTEMPTS {
                Outcome::Lost
            } else {
                Outcome::InProgress
            };
            assert_eq!(result.outcome, expected);
        }
        assert_eq!(session.guesses().len(), 6);
        assert_eq!(session.attempts_remaining(), 0);
        assert_eq!(session.revealed_answer(), Some("light"));
        assert!(session.board().iter().all(Option::is_some));
    }

    #[test]
    fn test_win_on_last_attempt() {
        let words = store();
        let mut session = GameSession::for_day(&words, 0);
        for guess in &WRONG_GUESSES[..5] {
            session.submit_guess(guess).unwrap();
        }
        let result = session.submit_guess("light").unwrap();
        assert_eq!(result.outcome, Outcome::Won);
        assert_eq!(session.attempts_used(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_invalid_length_rejected() {
        let words = store();
        let mut session = GameSession::for_day(&words, 0);
        assert_eq!(session.submit_guess("ab"), Err(GuessError::InvalidLength(2)));
        assert_eq!(session.submit_guess("lights"), Err(GuessError::InvalidLength(6)));
        assert!(session.guesses().is_empty());
        assert_eq!(session.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_unknown_word_rejected() {
        let words = store();
        let mut session = GameSession::for_day(&words, 0);
        assert_eq!(
            session.submit_guess("zzzzz"),
            Err(GuessError::InvalidWord("zzzzz".to_string()))
        );
        assert!(session.guesses().is_empty());
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_guess_is_normalized() {
        let words = store();
        let mut session = GameSession::for_day(&words, 0);
        let result = session.submit_guess("  LiGhT\n").unwrap();
        assert_eq!(result.scored.word(), "light");
        assert_eq!(result.outcome, Outcome::Won);
    }

    #[test]
    fn test_no_guesses_after_terminal_state() {
        let words = store();
        let mut session = GameSession::for_day(&words, 0);
        session.submit_guess("light").unwrap();
        assert_eq!(
            session.submit_guess("those"),
            Err(GuessError::AlreadyFinished(Outcome::Won))
        );
        assert_eq!(session.guesses().len(), 1);
        assert_eq!(session.outcome(), Outcome::Won);

        let mut session = GameSession::for_day(&words, 0);
        for guess in WRONG_GUESSES {
            session.submit_guess(guess).unwrap();
        }
        assert_eq!(
            session.submit_guess("light"),
            Err(GuessError::AlreadyFinished(Outcome::Lost))
        );
        assert_eq!(session.guesses().len(), 6);
        assert_eq!(session.outcome(), Outcome::Lost);
    }

    #[test]
    fn test_duplicate_aware_rule() {
        let words = store();
        let mut session =
            GameSession::for_day(&words, 1).with_scoring_rule(ScoringRule::DuplicateAware);
        assert_eq!(session.scoring_rule(), ScoringRule::DuplicateAware);
        let result = session.submit_guess("geese").unwrap();
        assert_eq!(result.scored.pattern(), "XXXGG");
    }

    #[test]
    fn test_board_rows_follow_guesses() {
        let words = store();
        let mut session = GameSession::for_day(&words, 0);
        session.submit_guess("tight").unwrap();
        session.submit_guess("slate").unwrap();
        let board = session.board();
        assert_eq!(board[0].map(ScoredGuess::word), Some("tight"));
        assert_eq!(board[1].map(ScoredGuess::word), Some("slate"));
        assert!(board[2..].iter().all(Option::is_none));
    }

    #[test]
    fn test_summary_includes_share_text() {
        let words = store();
        let mut session = GameSession::for_day(&words, 0);
        session.submit_guess("tight").unwrap();
        session.submit_guess("light").unwrap();
        let summary = session.summary(&ShareStyle::default());
        assert_eq!(summary.outcome, Outcome::Won);
        assert_eq!(summary.attempts_used, 2);
        assert_eq!(summary.answer, "light");
        assert_eq!(summary.share, "WordTerm 0 2/6\n🟨🟩🟩🟩🟩\n🟩🟩🟩🟩🟩\n");
    }

    #[test]
    fn test_game_loop_reports_rejections_and_win() {
        let words = store();
        let mut session = GameSession::for_day(&words, 0);
        let mut interface = ScriptedInterface::new(&["ab", "zzzzz", "tight", "light", "those"]);

        let outcome = game_loop(&mut session, &mut interface, &ShareStyle::default());

        assert_eq!(outcome, Outcome::Won);
        assert!(interface.started);
        assert!(interface.exited);
        assert_eq!(interface.results.len(), 2);
        assert_eq!(
            interface.rejections,
            vec![
                GuessError::InvalidLength(2),
                GuessError::InvalidWord("zzzzz".to_string()),
                GuessError::AlreadyFinished(Outcome::Won),
            ]
        );
        let summary = interface.game_over.unwrap();
        assert_eq!(summary.attempts_used, 2);
    }

    #[test]
    fn test_game_loop_exit_mid_game() {
        let words = store();
        let mut session = GameSession::for_day(&words, 0);
        let mut interface = ScriptedInterface::new(&["tight"]);

        let outcome = game_loop(&mut session, &mut interface, &ShareStyle::default());

        assert_eq!(outcome, Outcome::InProgress);
        assert!(interface.game_over.is_none());
        assert_eq!(session.attempts_used(), 1);
    }
}
