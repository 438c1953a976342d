//! Guessed letter tracking

use crate::error::HangmanError;
use std::collections::BTreeSet;
use std::fmt;

/// Distinct letters guessed this round, kept in alphabetical order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters(BTreeSet<char>);

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    /// Record a new letter
    ///
    /// # Errors
    /// Returns `HangmanError::RepeatedGuess` if the letter is already recorded.
    pub fn insert(&mut self, letter: char) -> Result<(), HangmanError> {
        if self.0.insert(letter) {
            Ok(())
        } else {
            Err(HangmanError::RepeatedGuess(letter))
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

/// Renders as `[a, c, e]`, or `[]` when nothing has been guessed
impl fmt::Display for GuessedLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{letter}")?;
        }
        write!(f, "]")
    }
}
