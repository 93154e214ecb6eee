use crate::error::WordError;
use crate::session::SecretWord;
use rand::Rng;

pub const WORD_BANK: [&str; 15] = [
    "programming",
    "computer",
    "keyboard",
    "function",
    "variable",
    "algorithm",
    "database",
    "network",
    "software",
    "hardware",
    "developer",
    "debugging",
    "compiler",
    "memory",
    "processor",
];

/// Where a session's secret word comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource<'a> {
    Random,
    /// Text typed by a second player.
    Custom(&'a str),
}

pub fn random_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WORD_BANK[rng.gen_range(0..WORD_BANK.len())]
}

pub fn select_word<R: Rng + ?Sized>(
    source: WordSource<'_>,
    rng: &mut R,
) -> Result<SecretWord, WordError> {
    match source {
        WordSource::Random => SecretWord::new(random_word(rng)),
        WordSource::Custom(text) => SecretWord::new(text),
    }
}
