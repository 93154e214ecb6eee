use crate::board::Board;
use crate::game_state::{GameInterface, QUIT_COMMAND};
use crate::session::{GuessOutcome, GuessingSession, Letter, MAX_TRIES, Status};
use crate::stats::PlayerStats;
use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const RULE: &str = "========================================";

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Seed for picking random words, for reproducible games
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Player name shown with the statistics
    #[arg(short, long)]
    pub name: Option<String>,

    /// Append logs to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-oriented interface over any reader and writer.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
        {
            log::warn!("Failed to write to output: {e}");
        }
    }

    fn println(&mut self, text: &str) {
        self.print(&format!("{text}\n"));
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        self.print(text);
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                None
            }
        }
    }

    fn clear_screen(&mut self) {
        if let Err(e) = execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0)) {
            log::warn!("Failed to clear screen: {e}");
        }
    }
}

impl CliInterface<io::StdinLock<'static>, io::Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_welcome(&mut self) {
        self.println("");
        self.println(RULE);
        self.println("    WELCOME TO HANGMAN GAME!");
        self.println(RULE);
        self.println("\nGuess the word one letter at a time.");
        self.println(&format!(
            "You have {MAX_TRIES} wrong guesses before you lose!\n"
        ));
    }

    fn display_menu(&mut self) {
        self.println(RULE);
        self.println("             MAIN MENU");
        self.println(RULE);
        self.println("1. Play with Random Word");
        self.println("2. Play with Custom Word (2 Players)");
        self.println("3. Exit");
        self.println(RULE);
    }

    fn read_menu_choice(&mut self) -> Option<String> {
        self.prompt("Enter your choice: ")
    }

    fn read_custom_word(&mut self) -> Option<String> {
        self.prompt("\nEnter a word for player 2 to guess: ")
    }

    fn display_game_started(&mut self, custom_word: bool) {
        if custom_word {
            self.clear_screen();
        }
        self.println(&format!("\n{RULE}"));
        self.println("         GAME STARTED!");
        self.println(RULE);
    }

    fn display_board(&mut self, board: &Board) {
        self.print(&board.to_string());
    }

    fn read_guess(&mut self) -> Option<String> {
        self.prompt(&format!(
            "\nEnter your guess (a-z, or '{QUIT_COMMAND}' to exit): "
        ))
    }

    fn display_guess_result(&mut self, letter: Letter, outcome: GuessOutcome) {
        match outcome {
            GuessOutcome::Correct => {
                self.println(&format!("\nCorrect! '{letter}' is in the word."));
            }
            GuessOutcome::Incorrect => {
                self.println(&format!("\nWrong! '{letter}' is not in the word."));
            }
        }
    }

    fn display_error(&mut self, message: &str) {
        self.println(message);
    }

    fn display_outcome(&mut self, session: &GuessingSession) {
        let word = session.secret_word();
        self.println(&format!("\n{RULE}"));
        match session.status() {
            Status::Won => {
                self.println("    CONGRATULATIONS! YOU WON!");
                self.println(RULE);
                self.println(&format!("\nYou guessed the word: {word}"));
                if let Some(points) = session.score() {
                    self.println(&format!("+{points} points"));
                }
            }
            Status::Lost | Status::InProgress => {
                self.println("        GAME OVER!");
                self.println(RULE);
                self.println(&format!("\nThe word was: {word}"));
                self.println("Better luck next time!");
            }
        }
    }

    fn display_stats(&mut self, stats: &PlayerStats) {
        self.println(&format!("\nPlayer: {}", stats.name));
        self.println(&format!(
            "Score: {} | Games: {} | Wins: {}",
            stats.score, stats.games_played, stats.games_won
        ));
        if stats.games_played > 0 {
            self.println(&format!("Win Rate: {:.1}%", stats.win_rate()));
        }
    }

    fn read_play_again(&mut self) -> Option<String> {
        let answer = self.prompt("\nPlay again? (1 = Yes, 0 = No): ");
        self.println("");
        answer
    }

    fn display_exit_message(&mut self, stats: &PlayerStats) {
        if stats.games_played > 0 {
            self.display_stats(stats);
        }
        self.println("\nThanks for playing! Goodbye!");
    }
}
