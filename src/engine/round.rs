//! Round state and the per-guess transition
//!
//! A `Round` is an immutable snapshot. Guessing a letter produces the next
//! snapshot instead of mutating in place, so a failed guess can never leave a
//! half-updated round behind.

use super::events::GuessEvent;
use super::partition::{family_sizes, partition};
use super::ranking::{hardest, rank, second_hardest};
use super::registry::GuessedLetters;
use super::schedule::{MercyInterval, MercyScheduler, Selection};
use crate::core::{BLANK, Pattern, Word};
use crate::error::HangmanError;
use std::collections::BTreeMap;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    /// Every position has been revealed
    Won,
    /// The wrong-guess budget ran out
    Lost,
}

/// Result of one accepted guess
#[derive(Debug, Clone)]
pub struct GuessReport {
    /// Every pattern the guess could have produced, with its family size
    pub families: BTreeMap<Pattern, usize>,
    pub event: GuessEvent,
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct Round {
    word_len: usize,
    guesses_left: usize,
    pattern: Pattern,
    pool: Vec<Word>,
    guessed: GuessedLetters,
    scheduler: MercyScheduler,
}

impl Round {
    /// Start a round over `pool`, which must already be filtered to `word_len`
    #[must_use]
    pub fn new(word_len: usize, guesses: usize, pool: Vec<Word>, interval: MercyInterval) -> Self {
        debug_assert!(pool.iter().all(|w| w.len() == word_len));
        Self {
            word_len,
            guesses_left: guesses,
            pattern: Pattern::blank(word_len),
            pool,
            guessed: GuessedLetters::new(),
            scheduler: MercyScheduler::new(interval),
        }
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.guesses_left
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Live candidates still consistent with the pattern
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub const fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    #[must_use]
    pub const fn scheduler(&self) -> &MercyScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.pattern.is_complete() {
            RoundStatus::Won
        } else if self.guesses_left == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Compute the round that follows guessing `letter`
    ///
    /// # Errors
    /// - `RoundOver` if the round is already won or lost
    /// - `InvalidGuess` if `letter` is the blank marker or whitespace
    /// - `RepeatedGuess` if `letter` was guessed before
    /// - `ExhaustedPool` if there are no live candidates to partition
    pub fn guess(&self, letter: char) -> Result<(Self, GuessReport), HangmanError> {
        if self.status() != RoundStatus::InProgress {
            return Err(HangmanError::RoundOver);
        }

        if letter == BLANK || letter.is_whitespace() {
            return Err(HangmanError::InvalidGuess(letter));
        }

        let mut guessed = self.guessed.clone();
        guessed.insert(letter)?;

        let families = partition(&self.pattern, &self.pool, letter);
        let ranked = rank(&families);

        let mut scheduler = self.scheduler.clone();
        let selection = scheduler.select(ranked.len());
        let chosen = match selection {
            Selection::Mercy => second_hardest(&ranked),
            Selection::Hardest | Selection::MercyUnavailable => hardest(&ranked),
        }
        .ok_or(HangmanError::ExhaustedPool)?;

        let guesses_left = if chosen.pattern.contains(letter) {
            self.guesses_left
        } else {
            self.guesses_left.saturating_sub(1)
        };

        let event = GuessEvent {
            letter,
            selection,
            pattern: chosen.pattern.clone(),
            pool_size: chosen.size(),
            family_count: families.len(),
        };

        let next = Self {
            word_len: self.word_len,
            guesses_left,
            pattern: chosen.pattern.clone(),
            pool: chosen.members.iter().map(|&w| w.clone()).collect(),
            guessed,
            scheduler,
        };

        Ok((
            next,
            GuessReport {
                families: family_sizes(&families),
                event,
            },
        ))
    }
}
