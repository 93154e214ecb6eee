//! Text rendering of a session: the masked word and the gallows.

use crate::session::{GuessedLetters, GuessingSession, Letter, MAX_TRIES, SecretWord};
use std::fmt;

pub const GALLOWS_HEIGHT: usize = 7;
const PLACEHOLDER: char = '_';

/// Gallows drawing for a wrong-guess count.
///
/// Body parts appear in order: head, torso, left arm, right arm, left leg,
/// right leg. Counts above [`MAX_TRIES`] draw the full figure.
#[must_use]
pub fn gallows(wrong_guesses: u8) -> [&'static str; GALLOWS_HEIGHT] {
    let wrong = wrong_guesses.min(MAX_TRIES);

    let head = if wrong >= 1 { "  O   |" } else { "      |" };
    let body = match wrong {
        0 | 1 => "      |",
        2 => "  |   |",
        3 => " /|   |",
        _ => " /|\\  |",
    };
    let legs = match wrong {
        0..=4 => "      |",
        5 => " /    |",
        _ => " / \\  |",
    };

    ["  +---+", "  |   |", head, body, legs, "      |", "========="]
}

/// `c _ t` style rendering of the secret word.
#[must_use]
pub fn mask_word(secret: &SecretWord, guessed: &GuessedLetters) -> String {
    secret
        .letters()
        .map(|l| {
            if guessed.contains(l) {
                l.as_char()
            } else {
                PLACEHOLDER
            }
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Snapshot of everything a front end needs to draw the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub masked_word: String,
    pub guessed: Vec<Letter>,
    pub wrong_guesses: u8,
}

impl Board {
    #[must_use]
    pub fn new(secret: &SecretWord, guessed: &GuessedLetters, wrong_guesses: u8) -> Self {
        Self {
            masked_word: mask_word(secret, guessed),
            guessed: guessed.iter().collect(),
            wrong_guesses,
        }
    }

    #[must_use]
    pub fn from_session(session: &GuessingSession) -> Self {
        Self::new(
            session.secret_word(),
            session.guessed_letters(),
            session.wrong_guesses(),
        )
    }

    #[must_use]
    pub fn gallows(&self) -> [&'static str; GALLOWS_HEIGHT] {
        gallows(self.wrong_guesses)
    }

    /// Guessed letters joined for display, e.g. `c, x, a`.
    #[must_use]
    pub fn guessed_list(&self) -> String {
        self.guessed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for line in self.gallows() {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "\nWrong guesses: {} / {MAX_TRIES}", self.wrong_guesses)?;
        writeln!(f, "\nWord: {}", self.masked_word)?;
        if !self.guessed.is_empty() {
            writeln!(f, "\nGuessed letters: {}", self.guessed_list())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_gallows_empty_frame() {
        let art = gallows(0);
        assert_eq!(art[2], "      |");
        assert_eq!(art[3], "      |");
        assert_eq!(art[4], "      |");
        assert!(!art.join("\n").contains('O'));
    }

    #[test]
    fn test_gallows_progression() {
        assert_eq!(gallows(1)[2], "  O   |");
        assert_eq!(gallows(1)[3], "      |");
        assert_eq!(gallows(2)[3], "  |   |");
        assert_eq!(gallows(3)[3], " /|   |");
        assert_eq!(gallows(4)[3], " /|\\  |");
        assert_eq!(gallows(4)[4], "      |");
        assert_eq!(gallows(5)[4], " /    |");
    }

    #[test]
    fn test_gallows_full_figure() {
        let art = gallows(MAX_TRIES);
        assert_eq!(art[2], "  O   |");
        assert_eq!(art[3], " /|\\  |");
        assert_eq!(art[4], " / \\  |");
        assert_eq!(gallows(200), art);
    }

    #[test]
    fn test_mask_word_reveals_all_occurrences() {
        let secret = SecretWord::new("banana").unwrap();
        let mut guessed = GuessedLetters::new();
        assert_eq!(mask_word(&secret, &guessed), "_ _ _ _ _ _");
        guessed.insert(letter('a'));
        assert_eq!(mask_word(&secret, &guessed), "_ a _ a _ a");
        guessed.insert(letter('n'));
        guessed.insert(letter('b'));
        assert_eq!(mask_word(&secret, &guessed), "b a n a n a");
    }

    #[test]
    fn test_board_display() {
        let mut session = GuessingSession::new(SecretWord::new("cat").unwrap());
        session.submit_guess(letter('c')).unwrap();
        session.submit_guess(letter('x')).unwrap();

        let board = Board::from_session(&session);
        assert_eq!(board.masked_word, "c _ _");
        assert_eq!(board.guessed_list(), "c, x");

        let text = board.to_string();
        assert!(text.contains("Wrong guesses: 1 / 6"));
        assert!(text.contains("Word: c _ _"));
        assert!(text.contains("Guessed letters: c, x"));
        assert!(text.contains("  O   |"));
    }

    #[test]
    fn test_board_display_hides_empty_guess_list() {
        let session = GuessingSession::new(SecretWord::new("cat").unwrap());
        let text = Board::from_session(&session).to_string();
        assert!(!text.contains("Guessed letters"));
    }
}
