//! TUI (Terminal User Interface) module for WordTerm
//!
//! This module provides the full-screen terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiInterface`: owns the terminal, renders the board and turns key
//!   presses into [`UserAction`]s for the game loop
//! - `Theme`: tile colours, kept out of the scoring core
//!
//! # State Machine
//! - `EnteringGuess` → `GameOver` once the session reaches a terminal outcome

use crate::error::GuessError;
use crate::game_state::{
    GameInterface, GameSession, GameSummary, GuessResult, MAX_ATTEMPTS, Outcome, UserAction,
};
use crate::scoring::{Classification, ScoredGuess, WORD_LENGTH};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for the chrome around the board
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// Tile colours for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub correct: Style,
    pub present: Style,
    pub absent: Style,
    pub pending: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let text = Color::Rgb(0xCE, 0xD2, 0xD4);
        Self {
            correct: Style::new().fg(text).bg(Color::Rgb(0x43, 0x7C, 0x3D)),
            present: Style::new().fg(text).bg(Color::Rgb(0xA6, 0x90, 0x2E)),
            absent: Style::new().fg(text).bg(Color::Rgb(0x2C, 0x2C, 0x2D)),
            pending: Style::new().fg(Color::White).bg(Color::DarkGray),
        }
    }
}

impl Theme {
    fn tile(&self, state: TileState) -> Style {
        match state {
            TileState::Empty | TileState::Entered => self.pending,
            TileState::Scored(Classification::Correct) => self.correct,
            TileState::Scored(Classification::Present) => self.present,
            TileState::Scored(Classification::Absent) => self.absent,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum TileState {
    Empty,
    Entered,
    Scored(Classification),
}

#[derive(Debug, Clone)]
struct GuessRow {
    letters: [char; WORD_LENGTH],
    states: [TileState; WORD_LENGTH],
}

impl GuessRow {
    fn new() -> Self {
        Self {
            letters: [' '; WORD_LENGTH],
            states: [TileState::Empty; WORD_LENGTH],
        }
    }

    fn from_input(input: &str) -> Self {
        let mut row = Self::new();
        for (i, ch) in input.chars().enumerate().take(WORD_LENGTH) {
            row.letters[i] = ch.to_ascii_uppercase();
            row.states[i] = TileState::Entered;
        }
        row
    }

    fn from_scored(scored: &ScoredGuess) -> Self {
        let mut row = Self::new();
        for (i, (ch, mark)) in scored.letters().enumerate().take(WORD_LENGTH) {
            row.letters[i] = ch.to_ascii_uppercase();
            row.states[i] = TileState::Scored(mark);
        }
        row
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TuiState {
    EnteringGuess,
    /// Session finished - result and share text stored in the interface
    GameOver(Outcome),
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    theme: &'a Theme,
    day_index: Option<i64>,
    guesses: &'a [GuessRow],
    current_input: &'a str,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
    share: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    theme: Theme,
    day_index: Option<i64>,
    guesses: Vec<GuessRow>,
    current_input: String,
    state: TuiState,
    message: String,
    error_message: String,
    share: String,
    status: String,
}

/// Put the terminal back if setup fails after raw mode was switched on.
fn restore_on_error<T>(result: Result<T, io::Error>) -> Result<T, io::Error> {
    if result.is_err() {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        let _ = disable_raw_mode();
    }
    result
}

impl TuiInterface {
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let terminal = restore_on_error(Self::enter_screen())?;

        Ok(Self {
            terminal,
            theme,
            day_index: None,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
            share: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            theme: &self.theme,
            day_index: self.day_index,
            guesses: &self.guesses,
            current_input: &self.current_input,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
            share: &self.share,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            log::error!("draw failed: {e}");
        }
    }

    /// Render the complete UI layout using the provided context.
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Game board
                Constraint::Min(8),     // Info panel (takes remaining space)
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.day_index);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, day_index: Option<i64>) {
        let text = match day_index {
            Some(day) => format!("WORDTERM #{day}"),
            None => "WORDTERM".to_string(),
        };
        let title = Paragraph::new(text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .title(format!("Guesses ({}/{MAX_ATTEMPTS})", ctx.guesses.len()))
            .borders(Borders::ALL)
            .style(Style::default());

        let inner = block.inner(area);
        f.render_widget(block, area);

        let showing_current_input =
            ctx.state == TuiState::EnteringGuess && ctx.guesses.len() < MAX_ATTEMPTS;

        for row_index in 0..MAX_ATTEMPTS {
            let row = match ctx.guesses.get(row_index) {
                Some(row) => row.clone(),
                None if showing_current_input && row_index == ctx.guesses.len() => {
                    GuessRow::from_input(ctx.current_input)
                }
                None => GuessRow::new(),
            };
            Self::render_guess_row(f, &row, row_index, inner, ctx.theme);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_guess_row(f: &mut Frame, row: &GuessRow, row_index: usize, area: Rect, theme: &Theme) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let letter = row.letters[i];
            spans.push(Span::styled(format!(" {letter} "), theme.tile(row.states[i])));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if !ctx.message.is_empty() {
            let style = match ctx.state {
                TuiState::GameOver(Outcome::Won) => SUCCESS_STYLE,
                TuiState::GameOver(_) => INFO_STYLE,
                TuiState::EnteringGuess => MESSAGE_STYLE,
            };
            lines.push(Line::from(vec![Span::styled(ctx.message, style)]));
            lines.push(Line::from(""));
        }

        if !ctx.share.is_empty() {
            for share_line in ctx.share.lines() {
                lines.push(Line::from(share_line));
            }
            lines.push(Line::from(""));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type your 5-letter guess | ENTER: Submit | ESC: Quit",
            TuiState::GameOver(_) => "Q / ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            // Mouse, focus, paste and resize events carry no game input
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info_log!("handle_input() - Ctrl-C pressed, returning Exit");
            return Ok(Some(UserAction::Exit));
        }

        // Filter out garbage that terminals emit on focus changes (alt-tab)
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("handle_input() - Ignoring control character: {:?}", c);
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event received: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        match self.state {
            TuiState::EnteringGuess => Ok(self.handle_guess_input(key)),
            TuiState::GameOver(_) => Ok(Self::handle_game_over_input(key)),
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !Self::has_modifier_keys(&key) => {
                if self.current_input.len() < WORD_LENGTH {
                    self.error_message.clear();
                    self.current_input.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.error_message.clear();
                self.current_input.pop();
            }
            KeyCode::Enter if !self.current_input.is_empty() => {
                info_log!(
                    "handle_guess_input() - Enter pressed, submitting '{}'",
                    self.current_input
                );
                return Some(UserAction::Guess(self.current_input.clone()));
            }
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

fn describe_rejection(error: &GuessError) -> String {
    match error {
        GuessError::InvalidLength(_) => format!("Guess must be exactly {WORD_LENGTH} letters!"),
        GuessError::InvalidWord(word) => format!("{} is not in the word list", word.to_uppercase()),
        GuessError::AlreadyFinished(_) => "The game is over - press Q to quit".to_string(),
    }
}

impl GameInterface for TuiInterface {
    fn display_start(&mut self, session: &GameSession) {
        self.day_index = Some(session.day_index());
        self.guesses = session.guesses().iter().map(GuessRow::from_scored).collect();
        self.status = format!(
            "Day {} - {} tries left",
            session.day_index(),
            session.attempts_remaining()
        );
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_guess() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("input error: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_guess_result(&mut self, result: &GuessResult) {
        self.guesses.push(GuessRow::from_scored(&result.scored));
        self.current_input.clear();
        self.error_message.clear();
        self.status = format!(
            "Guess {}/{MAX_ATTEMPTS}: {}",
            result.attempts_used,
            result.scored.word().to_uppercase()
        );
        self.draw_or_log();
    }

    fn display_rejection(&mut self, error: &GuessError) {
        self.error_message = describe_rejection(error);
        self.draw_or_log();
    }

    fn display_game_over(&mut self, summary: &GameSummary) {
        self.state = TuiState::GameOver(summary.outcome);
        self.message = match summary.outcome {
            Outcome::Won => "Well Done!".to_string(),
            _ => format!("Today's word was: {}", summary.answer.to_uppercase()),
        };
        self.share.clone_from(&summary.share);
        self.status = format!("Game Over - {}", summary.outcome);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
