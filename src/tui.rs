//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `Menu` → `EnteringWord` (custom word only) → `Guessing` → `PlayAgain` → back to `Menu`
//! - Terminal state: `Exiting`

use crate::board::Board;
use crate::game_state::GameInterface;
use crate::session::{GuessOutcome, GuessingSession, Letter, MAX_TRIES, MAX_WORD_LENGTH, Status};
use crate::stats::PlayerStats;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
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
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const HIDDEN_LETTER: char = '*';

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const FAILURE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    Menu,
    EnteringWord,
    Guessing,
    PlayAgain,
    Exiting,
}

impl TuiState {
    fn instructions(self) -> &'static str {
        match self {
            Self::Menu => "1: Random word | 2: Custom word (2 players) | 3 / ESC: Quit",
            Self::EnteringWord => {
                "Player 1: type the secret word | ENTER: Submit | BACKSPACE: Delete | ESC: Quit"
            }
            Self::Guessing => "Press a letter to guess | ESC: Quit",
            Self::PlayAgain => "1: Play again | 0 / ESC: Quit",
            Self::Exiting => "Goodbye! Press any key to close",
        }
    }
}

/// Banner shown once a session has ended.
#[derive(Debug, Clone)]
struct Outcome {
    won: bool,
    text: String,
}

/// Everything the next frame shows. Kept apart from the terminal so screen
/// transitions can be exercised without one.
#[derive(Debug)]
struct Screen {
    state: TuiState,
    board: Option<Board>,
    word_input: String,
    outcome: Option<Outcome>,
    stats: String,
    message: String,
    error_message: String,
    status: String,
}

/// Result of one key press while the secret word is being typed.
#[derive(Debug, PartialEq, Eq)]
enum WordEntry {
    Editing,
    Submitted(String),
    Cancelled,
}

impl Screen {
    fn new() -> Self {
        Self {
            state: TuiState::Menu,
            board: None,
            word_input: String::new(),
            outcome: None,
            stats: String::new(),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        }
    }

    /// Back to the menu: the previous game's board and banner are dropped.
    fn show_menu(&mut self) {
        self.state = TuiState::Menu;
        self.status = "Main menu".to_string();
        self.outcome = None;
        // The welcome text stays until a game has been played
        if self.board.take().is_some() {
            self.message.clear();
        }
    }

    fn start_word_entry(&mut self) {
        self.state = TuiState::EnteringWord;
        self.word_input.clear();
        self.status = "Player 1: enter a word for player 2 to guess".to_string();
    }

    /// Every character is kept; length and content are validated on submit.
    fn edit_word(&mut self, code: KeyCode) -> WordEntry {
        match code {
            KeyCode::Esc => WordEntry::Cancelled,
            KeyCode::Enter => {
                self.error_message.clear();
                WordEntry::Submitted(std::mem::take(&mut self.word_input))
            }
            KeyCode::Backspace => {
                self.word_input.pop();
                WordEntry::Editing
            }
            KeyCode::Char(c) => {
                self.word_input.push(c);
                WordEntry::Editing
            }
            _ => WordEntry::Editing,
        }
    }

    fn show_exit(&mut self, stats: &PlayerStats) {
        self.state = TuiState::Exiting;
        self.stats = TuiInterface::stats_line(stats);
        self.message = "Thanks for playing! Goodbye!".to_string();
        self.status = "Exiting application...".to_string();
    }
}

/// Full-screen interface.
///
/// Owns the terminal for its lifetime and restores it on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    screen: Screen,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            screen: Screen::new(),
        })
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

    fn draw(&mut self) -> Result<(), io::Error> {
        let screen = &self.screen;
        self.terminal.draw(|f| {
            Self::render_static(f, screen);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &Screen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(14),   // Gallows + information
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(20)])
            .split(chunks[1]);

        Self::render_title(f, chunks[0]);
        Self::render_board(f, middle[0], ctx.board.as_ref());
        Self::render_info(f, middle[1], ctx);
        Self::render_status(f, chunks[2], &ctx.status);
        Self::render_instructions(f, chunks[3], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, board: Option<&Board>) {
        let block = Block::default().title("Gallows").borders(Borders::ALL);

        let Some(board) = board else {
            f.render_widget(Paragraph::new("No game in progress").block(block), area);
            return;
        };

        let mut lines: Vec<Line> = board
            .gallows()
            .iter()
            .map(|row| Line::from(format!("  {row}")))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled(
            format!("  {}", board.masked_word),
            HEADER_STYLE,
        )]));
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "  Wrong guesses: {} / {MAX_TRIES}",
            board.wrong_guesses
        )));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &Screen) {
        let mut lines = Vec::new();

        if ctx.state == TuiState::EnteringWord {
            let hidden: String = ctx.word_input.chars().map(|_| HIDDEN_LETTER).collect();
            lines.push(Line::from(vec![Span::styled(
                "Secret word for player 2:",
                INFO_STYLE,
            )]));
            lines.push(Line::from(format!(
                "  {hidden}_  ({} / {MAX_WORD_LENGTH})",
                ctx.word_input.chars().count()
            )));
            lines.push(Line::from(""));
        }

        if let Some(board) = &ctx.board
            && !board.guessed.is_empty()
        {
            lines.push(Line::from(vec![Span::styled("Guessed letters:", INFO_STYLE)]));
            lines.push(Line::from(format!("  {}", board.guessed_list())));
            lines.push(Line::from(""));
        }

        if let Some(outcome) = &ctx.outcome {
            let style = if outcome.won { SUCCESS_STYLE } else { FAILURE_STYLE };
            lines.push(Line::from(vec![Span::styled(outcome.text.as_str(), style)]));
            lines.push(Line::from(""));
        }

        if !ctx.stats.is_empty() {
            lines.push(Line::from(vec![Span::styled("Statistics:", INFO_STYLE)]));
            lines.push(Line::from(format!("  {}", ctx.stats)));
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.message.as_str(),
                MESSAGE_STYLE,
            )]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message.as_str(),
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let paragraph = Paragraph::new(state.instructions())
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

    /// Redraws, then waits for the next usable key press.
    ///
    /// Returns `Ok(None)` when the poll times out or the event is ignored.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        self.draw()?;

        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        if Self::has_modifier_keys(&key) {
            debug_log!("next_key() - Ignoring key with modifier: {:?}", key.modifiers);
            return Ok(None);
        }

        // Terminal focus changes (alt-tab) can leak replacement or control characters
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("next_key() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }

        debug_log!("next_key() - Key event received: {:?}", key.code);
        Ok(Some(key))
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Reads a single character key in `state`. ESC or an input error closes input.
    fn read_char(&mut self, state: TuiState) -> Option<String> {
        self.screen.state = state;
        loop {
            match self.next_key() {
                Ok(Some(key)) => match key.code {
                    KeyCode::Esc => {
                        info_log!("read_char() - ESC pressed in {:?}", state);
                        return None;
                    }
                    KeyCode::Char(c) => {
                        self.screen.error_message.clear();
                        return Some(c.to_string());
                    }
                    _ => {}
                },
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Terminal input error: {e}");
                    return None;
                }
            }
        }
    }

    /// Keeps the current frame up until a key is pressed or input fails.
    fn wait_for_any_key(&mut self) {
        loop {
            match self.next_key() {
                Ok(Some(_)) => return,
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Terminal input error: {e}");
                    return;
                }
            }
        }
    }

    fn stats_line(stats: &PlayerStats) -> String {
        format!(
            "{} | Score: {} | Games: {} | Wins: {} | Win rate: {:.1}%",
            stats.name,
            stats.score,
            stats.games_played,
            stats.games_won,
            stats.win_rate()
        )
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self) {
        self.screen.message = format!(
            "Welcome to Hangman! Guess the word one letter at a time. \
             You have {MAX_TRIES} wrong guesses before you lose."
        );
        self.draw_or_log();
    }

    fn display_menu(&mut self) {
        self.screen.show_menu();
        self.draw_or_log();
    }

    fn read_menu_choice(&mut self) -> Option<String> {
        self.read_char(TuiState::Menu)
    }

    fn read_custom_word(&mut self) -> Option<String> {
        self.screen.start_word_entry();

        loop {
            match self.next_key() {
                Ok(Some(key)) => match self.screen.edit_word(key.code) {
                    WordEntry::Editing => {}
                    WordEntry::Submitted(word) => return Some(word),
                    WordEntry::Cancelled => return None,
                },
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Terminal input error: {e}");
                    return None;
                }
            }
        }
    }

    fn display_game_started(&mut self, custom_word: bool) {
        self.screen.outcome = None;
        self.screen.error_message.clear();
        self.screen.message = if custom_word {
            "Player 2: the secret word is set. Start guessing!".to_string()
        } else {
            "A random word has been chosen. Start guessing!".to_string()
        };
        self.screen.status = "Game started".to_string();
    }

    fn display_board(&mut self, board: &Board) {
        self.screen.board = Some(board.clone());
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<String> {
        self.screen.status = "Waiting for guess...".to_string();
        self.read_char(TuiState::Guessing)
    }

    fn display_guess_result(&mut self, letter: Letter, outcome: GuessOutcome) {
        self.screen.message = match outcome {
            GuessOutcome::Correct => format!("Correct! '{letter}' is in the word."),
            GuessOutcome::Incorrect => format!("Wrong! '{letter}' is not in the word."),
        };
    }

    fn display_error(&mut self, message: &str) {
        self.screen.error_message = message.to_string();
        self.draw_or_log();
    }

    fn display_outcome(&mut self, session: &GuessingSession) {
        let word = session.secret_word();
        let outcome = match session.status() {
            Status::Won => Outcome {
                won: true,
                text: format!(
                    "CONGRATULATIONS! You guessed the word: {word} (+{} points)",
                    session.score().unwrap_or(0)
                ),
            },
            Status::Lost | Status::InProgress => Outcome {
                won: false,
                text: format!("GAME OVER! The word was: {word}"),
            },
        };
        self.screen.status = if outcome.won { "You won!" } else { "You lost" }.to_string();
        self.screen.outcome = Some(outcome);
        self.screen.message.clear();
        self.draw_or_log();
    }

    fn display_stats(&mut self, stats: &PlayerStats) {
        self.screen.stats = Self::stats_line(stats);
        self.draw_or_log();
    }

    fn read_play_again(&mut self) -> Option<String> {
        self.screen.message = "Play again? (1 = Yes, 0 = No)".to_string();
        self.read_char(TuiState::PlayAgain)
    }

    fn display_exit_message(&mut self, stats: &PlayerStats) {
        self.screen.show_exit(stats);
        self.wait_for_any_key();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
