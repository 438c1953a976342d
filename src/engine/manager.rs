//! Main hangman engine interface

use super::events::{GuessEvent, GuessObserver, LogObserver};
use super::resolver::resolve_secret;
use super::round::{Round, RoundStatus};
use super::schedule::{Difficulty, MercyInterval};
use crate::core::{Pattern, Word};
use crate::error::HangmanError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;

/// Adversarial hangman engine
///
/// Owns the dictionary for its whole lifetime and the state of the active
/// round. The random source used to settle the final secret word is the `R`
/// parameter, so tests can pass a seeded generator.
pub struct HangmanManager<R = StdRng> {
    words: Vec<Word>,
    round: Option<Round>,
    observer: Option<Box<dyn GuessObserver>>,
    last_event: Option<GuessEvent>,
    rng: R,
}

impl HangmanManager<StdRng> {
    /// Create a new manager seeded from the operating system
    ///
    /// With `debug` set, every guess is reported through `log::debug!`.
    ///
    /// # Errors
    /// Returns `HangmanError::Configuration` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    /// use evil_hangman::engine::{Difficulty, HangmanManager};
    ///
    /// let words = ["head", "hear", "herd", "herb"].map(|w| Word::new(w).unwrap());
    /// let mut manager = HangmanManager::new(words, false).unwrap();
    ///
    /// manager.prep_for_round(4, 6, Difficulty::Hard).unwrap();
    /// manager.make_guess('e').unwrap();
    /// assert_eq!(manager.pattern(), "-e--");
    /// assert_eq!(manager.guesses_made(), "[e]");
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>, debug: bool) -> Result<Self, HangmanError> {
        Self::with_rng(words, debug, StdRng::from_os_rng())
    }
}

impl<R: rand::Rng> HangmanManager<R> {
    /// Create a new manager with a caller-supplied random source
    ///
    /// Duplicate words are collapsed.
    ///
    /// # Errors
    /// Returns `HangmanError::Configuration` if `words` is empty.
    pub fn with_rng(
        words: impl IntoIterator<Item = Word>,
        debug: bool,
        rng: R,
    ) -> Result<Self, HangmanError> {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort();
        words.dedup();

        if words.is_empty() {
            return Err(HangmanError::Configuration(
                "dictionary must contain at least one word".into(),
            ));
        }

        let observer: Option<Box<dyn GuessObserver>> = if debug {
            Some(Box::new(LogObserver))
        } else {
            None
        };

        Ok(Self {
            words,
            round: None,
            observer,
            last_event: None,
            rng,
        })
    }

    /// Attach a consumer for guess events, replacing any previous one
    pub fn set_observer(&mut self, observer: Box<dyn GuessObserver>) {
        self.observer = Some(observer);
    }

    /// Number of dictionary words with exactly `len` characters
    #[must_use]
    pub fn num_words(&self, len: usize) -> usize {
        self.words.iter().filter(|w| w.len() == len).count()
    }

    /// Word lengths present in the dictionary, with their counts
    #[must_use]
    pub fn word_lengths(&self) -> BTreeMap<usize, usize> {
        let mut lengths = BTreeMap::new();
        for word in &self.words {
            *lengths.entry(word.len()).or_insert(0) += 1;
        }
        lengths
    }

    /// Start a new round
    ///
    /// Any previous round is discarded.
    ///
    /// # Errors
    /// - `NoWordsOfLength` if the dictionary has no word of `word_len` letters
    /// - `Configuration` if `guesses` is zero
    pub fn prep_for_round(
        &mut self,
        word_len: usize,
        guesses: usize,
        difficulty: Difficulty,
    ) -> Result<(), HangmanError> {
        self.prep_with_interval(word_len, guesses, difficulty.mercy_interval())
    }

    /// Start a new round with an explicit mercy interval
    ///
    /// # Errors
    /// Same as [`Self::prep_for_round`], plus `Configuration` for a zero
    /// mercy interval.
    pub fn prep_with_interval(
        &mut self,
        word_len: usize,
        guesses: usize,
        interval: MercyInterval,
    ) -> Result<(), HangmanError> {
        if guesses == 0 {
            return Err(HangmanError::Configuration(
                "a round needs at least one wrong guess allowed".into(),
            ));
        }
        if let MercyInterval::Every(n) = interval {
            MercyInterval::every(n)?;
        }

        let pool: Vec<Word> = self
            .words
            .iter()
            .filter(|w| w.len() == word_len)
            .cloned()
            .collect();

        if pool.is_empty() {
            return Err(HangmanError::NoWordsOfLength(word_len));
        }

        log::info!(
            "new round: {} words of length {word_len}, {guesses} guesses, mercy {interval:?}",
            pool.len()
        );

        self.round = Some(Round::new(word_len, guesses, pool, interval));
        self.last_event = None;
        Ok(())
    }

    /// The active round, if one has been prepared
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Number of live candidates
    #[must_use]
    pub fn num_words_current(&self) -> usize {
        self.round.as_ref().map_or(0, |r| r.pool().len())
    }

    /// Live candidates
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        match &self.round {
            Some(round) => round.pool(),
            None => &[],
        }
    }

    /// Wrong guesses left in this round
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.round.as_ref().map_or(0, Round::guesses_left)
    }

    /// Guessed letters in alphabetical order, formatted as `[a, c, e]`
    #[must_use]
    pub fn guesses_made(&self) -> String {
        self.round
            .as_ref()
            .map_or_else(|| "[]".to_string(), |r| r.guessed().to_string())
    }

    #[must_use]
    pub fn already_guessed(&self, letter: char) -> bool {
        self.round
            .as_ref()
            .is_some_and(|r| r.guessed().contains(letter))
    }

    /// Current pattern with `-` for unrevealed positions
    #[must_use]
    pub fn pattern(&self) -> String {
        self.round
            .as_ref()
            .map(|r| r.pattern().to_string())
            .unwrap_or_default()
    }

    /// Round progress; `InProgress` until a round is prepared and decided
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round
            .as_ref()
            .map_or(RoundStatus::InProgress, Round::status)
    }

    /// The event produced by the most recent accepted guess
    #[must_use]
    pub const fn last_event(&self) -> Option<&GuessEvent> {
        self.last_event.as_ref()
    }

    /// Guess a letter, committing the family the scheduler picks
    ///
    /// Returns every pattern the guess could have produced with its family
    /// size, not just the committed one.
    ///
    /// # Errors
    /// - `NoActiveRound` before `prep_for_round`
    /// - `RepeatedGuess` if `letter` was already guessed (state unchanged)
    /// - `InvalidGuess` for the blank marker or whitespace (state unchanged)
    /// - `RoundOver` once the round is won or lost
    pub fn make_guess(&mut self, letter: char) -> Result<BTreeMap<Pattern, usize>, HangmanError> {
        let round = self.round.as_ref().ok_or(HangmanError::NoActiveRound)?;
        let (next, report) = round.guess(letter)?;

        if let Some(observer) = self.observer.as_mut() {
            observer.observe(&report.event);
        }

        self.round = Some(next);
        self.last_event = Some(report.event);
        Ok(report.families)
    }

    /// Settle on a secret word
    ///
    /// With several candidates left one is chosen uniformly at random.
    ///
    /// # Errors
    /// - `NoActiveRound` before `prep_for_round`
    /// - `ExhaustedPool` if no candidates remain
    pub fn secret_word(&mut self) -> Result<String, HangmanError> {
        let round = self.round.as_ref().ok_or(HangmanError::NoActiveRound)?;
        resolve_secret(round.pool(), &mut self.rng).map(|w| w.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Selection;

    fn manager(texts: &[&str]) -> HangmanManager<StdRng> {
        let words = texts.iter().map(|t| Word::new(*t).unwrap());
        HangmanManager::with_rng(words, false, StdRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn empty_dictionary_rejected() {
        let result = HangmanManager::new(Vec::<Word>::new(), false);
        assert!(matches!(result, Err(HangmanError::Configuration(_))));
    }

    #[test]
    fn duplicates_collapsed() {
        let m = manager(&["head", "head", "hear"]);
        assert_eq!(m.num_words(4), 2);
    }

    #[test]
    fn num_words_by_length() {
        let m = manager(&["a", "an", "ant", "and", "head"]);
        assert_eq!(m.num_words(3), 2);
        assert_eq!(m.num_words(7), 0);
        assert_eq!(m.word_lengths().get(&1), Some(&1));
        assert_eq!(m.word_lengths().len(), 4);
    }

    #[test]
    fn queries_before_round() {
        let m = manager(&["head"]);
        assert_eq!(m.num_words_current(), 0);
        assert_eq!(m.guesses_left(), 0);
        assert_eq!(m.guesses_made(), "[]");
        assert_eq!(m.pattern(), "");
        assert!(!m.already_guessed('h'));
    }

    #[test]
    fn guess_before_round_is_an_error() {
        let mut m = manager(&["head"]);
        assert_eq!(m.make_guess('h'), Err(HangmanError::NoActiveRound));
        assert_eq!(m.secret_word(), Err(HangmanError::NoActiveRound));
    }

    #[test]
    fn prep_filters_by_length() {
        let mut m = manager(&["head", "hear", "heard", "he"]);
        m.prep_for_round(4, 5, Difficulty::Hard).unwrap();
        assert_eq!(m.num_words_current(), 2);
        assert_eq!(m.pattern(), "----");
        assert_eq!(m.guesses_left(), 5);
    }

    #[test]
    fn prep_rejects_missing_length_and_zero_budget() {
        let mut m = manager(&["head"]);
        assert_eq!(
            m.prep_for_round(9, 5, Difficulty::Hard),
            Err(HangmanError::NoWordsOfLength(9))
        );
        assert!(matches!(
            m.prep_for_round(4, 0, Difficulty::Hard),
            Err(HangmanError::Configuration(_))
        ));
    }

    #[test]
    fn prep_rejects_zero_mercy_interval() {
        let mut m = manager(&["head", "hear", "herd", "herb"]);
        assert!(matches!(
            m.prep_with_interval(4, 5, MercyInterval::Every(0)),
            Err(HangmanError::Configuration(_))
        ));
        assert!(m.round().is_none());
        assert_eq!(m.make_guess('e'), Err(HangmanError::NoActiveRound));

        m.prep_with_interval(4, 5, MercyInterval::Every(1)).unwrap();
        m.make_guess('e').unwrap();
        assert_eq!(m.last_event().unwrap().selection, Selection::Hardest);
    }

    #[test]
    fn prep_resets_previous_round() {
        let mut m = manager(&["head", "hear"]);
        m.prep_for_round(4, 5, Difficulty::Hard).unwrap();
        m.make_guess('z').unwrap();
        m.prep_for_round(4, 5, Difficulty::Hard).unwrap();
        assert_eq!(m.guesses_made(), "[]");
        assert_eq!(m.guesses_left(), 5);
        assert!(m.last_event().is_none());
    }

    #[test]
    fn repeated_guess_is_rejected() {
        let mut m = manager(&["head", "hear"]);
        m.prep_for_round(4, 5, Difficulty::Hard).unwrap();
        m.make_guess('e').unwrap();
        assert_eq!(m.make_guess('e'), Err(HangmanError::RepeatedGuess('e')));
        assert!(m.already_guessed('e'));
        assert_eq!(m.guesses_left(), 5);
    }

    #[test]
    fn secret_word_is_a_candidate() {
        let mut m = manager(&["head", "hear", "herd", "herb"]);
        m.prep_for_round(4, 5, Difficulty::Hard).unwrap();
        m.make_guess('e').unwrap();
        let secret = m.secret_word().unwrap();
        assert!(m.candidates().iter().any(|w| w.text() == secret));
    }

    #[test]
    fn last_event_describes_guess() {
        let mut m = manager(&["head", "hear", "herd", "herb"]);
        m.prep_for_round(4, 5, Difficulty::Hard).unwrap();
        m.make_guess('e').unwrap();
        let event = m.last_event().unwrap();
        assert_eq!(event.letter, 'e');
        assert_eq!(event.pool_size, 4);
        assert_eq!(event.family_count, 1);
        assert_eq!(event.pattern.to_string(), "-e--");
    }
}
