use crate::error::{GuessError, WordError};
use std::fmt;
use std::str::FromStr;

pub const MAX_TRIES: u8 = 6;
pub const MAX_WORD_LENGTH: usize = 49;
pub const ALPHABET_SIZE: usize = 26;

const POINTS_PER_REMAINING_TRY: u32 = 10;

/// A single lowercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(char);

impl Letter {
    /// Normalises `c` to lowercase, or returns `None` if it is not an ASCII letter.
    #[must_use]
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then(|| Self(c.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn as_char(self) -> char {
        self.0
    }

    fn index(self) -> usize {
        (self.0 as u8 - b'a') as usize
    }
}

impl FromStr for Letter {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::new(c).ok_or_else(|| GuessError::InvalidGuess(trimmed.to_string()))
            }
            _ => Err(GuessError::InvalidGuess(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The word being guessed: 1 to 49 lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord(String);

impl SecretWord {
    /// Trims and lowercases `input`, then checks length and alphabet.
    pub fn new(input: &str) -> Result<Self, WordError> {
        let word = input.trim().to_ascii_lowercase();
        let len = word.chars().count();
        if len == 0 {
            return Err(WordError::Empty);
        }
        if len > MAX_WORD_LENGTH {
            return Err(WordError::TooLong(len));
        }
        if let Some(bad) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::NotAlphabetic(bad));
        }
        Ok(Self(word))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(letter.as_char())
    }

    /// Letters of the word in order, repeats included.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.chars().map(Letter)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Append-only set of guessed letters that remembers insertion order.
#[derive(Debug, Clone)]
pub struct GuessedLetters {
    order: Vec<Letter>,
    seen: [bool; ALPHABET_SIZE],
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::with_capacity(ALPHABET_SIZE),
            seen: [false; ALPHABET_SIZE],
        }
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.seen[letter.index()]
    }

    /// Returns `false` and leaves the set untouched if `letter` is already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.seen[letter.index()] = true;
        self.order.push(letter);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.order.iter().copied()
    }
}

impl Default for GuessedLetters {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// One play-through: a secret word plus everything guessed against it.
///
/// The session performs no I/O. Input is validated into a [`Letter`] before
/// it reaches [`GuessingSession::submit_guess`].
#[derive(Debug, Clone)]
pub struct GuessingSession {
    secret: SecretWord,
    guessed: GuessedLetters,
    wrong_guesses: u8,
}

impl GuessingSession {
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            guessed: GuessedLetters::new(),
            wrong_guesses: 0,
        }
    }

    /// Records a guess.
    ///
    /// Repeated letters and guesses after the session has ended are rejected
    /// without touching any state.
    pub fn submit_guess(&mut self, letter: Letter) -> Result<GuessOutcome, GuessError> {
        if self.is_over() {
            return Err(GuessError::SessionOver);
        }
        if !self.guessed.insert(letter) {
            return Err(GuessError::DuplicateGuess(letter));
        }

        if self.secret.contains(letter) {
            Ok(GuessOutcome::Correct)
        } else {
            self.wrong_guesses += 1;
            Ok(GuessOutcome::Incorrect)
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self.wrong_guesses >= MAX_TRIES {
            Status::Lost
        } else if self.secret.letters().all(|l| self.guessed.contains(l)) {
            Status::Won
        } else {
            Status::InProgress
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != Status::InProgress
    }

    #[must_use]
    pub fn secret_word(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub fn guessed_letters(&self) -> &GuessedLetters {
        &self.guessed
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    #[must_use]
    pub fn remaining_tries(&self) -> u8 {
        MAX_TRIES.saturating_sub(self.wrong_guesses)
    }

    /// Points for a won session, one bonus per unused try.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        match self.status() {
            Status::Won => Some(u32::from(self.remaining_tries()) * POINTS_PER_REMAINING_TRY),
            Status::InProgress | Status::Lost => None,
        }
    }
}
