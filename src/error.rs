//! Engine error type

use std::fmt;

/// Errors reported by the hangman engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangmanError {
    /// Invalid construction or round parameters
    Configuration(String),
    /// The letter was already guessed this round
    RepeatedGuess(char),
    /// The blank marker or whitespace, which no word can contain
    InvalidGuess(char),
    /// Secret resolution requested with no live candidates
    ExhaustedPool,
    /// No round has been prepared yet
    NoActiveRound,
    /// The dictionary holds no words of the requested length
    NoWordsOfLength(usize),
    /// The round has already been won or lost
    RoundOver,
}

impl fmt::Display for HangmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::RepeatedGuess(letter) => write!(f, "{letter} was already guessed"),
            Self::InvalidGuess(letter) => write!(f, "{letter:?} cannot be guessed"),
            Self::ExhaustedPool => write!(f, "No words left"),
            Self::NoActiveRound => write!(f, "No round in progress"),
            Self::NoWordsOfLength(len) => write!(f, "No words of length {len} in dictionary"),
            Self::RoundOver => write!(f, "The round is already over"),
        }
    }
}

impl std::error::Error for HangmanError {}
