// Library interface for hangman
// This allows integration tests to access internal modules

pub mod board;
pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod session;
pub mod stats;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use board::Board;
pub use error::{GuessError, MenuError, PromptError, WordError};
pub use game_state::{GameInterface, QUIT_COMMAND, game_loop, play_session};
pub use session::{GuessOutcome, GuessingSession, Letter, MAX_TRIES, SecretWord, Status};
pub use stats::PlayerStats;
pub use wordbank::{WORD_BANK, WordSource, select_word};
