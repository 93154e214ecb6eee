//! Input validation errors.
//!
//! Every variant is recoverable: the game loop shows the message and
//! prompts again. The `Display` text is what the player sees.

use crate::session::{Letter, MAX_WORD_LENGTH};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Invalid input! '{0}' is not a letter. Please enter a single letter (a-z).")]
    InvalidGuess(String),
    #[error("You already guessed '{0}'! Try another letter.")]
    DuplicateGuess(Letter),
    #[error("The game is already over.")]
    SessionOver,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("The word must contain at least one letter.")]
    Empty,
    #[error("The word is too long ({0} letters, at most {} allowed).", MAX_WORD_LENGTH)]
    TooLong(usize),
    #[error("The word may only contain letters ('{0}' is not a letter).")]
    NotAlphabetic(char),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Invalid choice '{0}'! Please enter 1, 2 or 3.")]
    InvalidChoice(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("Invalid answer '{0}'! Please enter 1 (yes) or 0 (no).")]
    InvalidAnswer(String),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("could not open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
}
