//! Hangman reveal patterns
//!
//! A pattern has one slot per letter of the secret word. Unrevealed slots hold
//! the blank marker `-`; revealed slots hold the letter found there. Revealed
//! slots never change once set.

use super::Word;
use std::fmt;

/// Marker for an unrevealed position
pub const BLANK: char = '-';

/// Reveal pattern for the current round
///
/// Ordering is lexicographic over the characters, which matches comparing the
/// rendered pattern strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Vec<char>);

impl Pattern {
    /// Create an all-blank pattern of the given length
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self(vec![BLANK; len])
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The slots of the pattern, `BLANK` where unrevealed
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[char] {
        &self.0
    }

    /// Count the revealed (non-blank) positions
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.0.iter().filter(|&&ch| ch != BLANK).count()
    }

    /// True once every position has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(&BLANK)
    }

    /// Check whether any position shows `letter`
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    /// Check whether `word` agrees with every revealed position
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .0
                .iter()
                .zip(word.chars())
                .all(|(&slot, &ch)| slot == BLANK || slot == ch)
    }

    /// Calculate the pattern that results if `word` is the secret and `letter` is guessed
    ///
    /// Copies `self` and reveals every position where `word` holds `letter`.
    /// Already revealed positions are kept.
    ///
    /// # Panics
    /// Panics if `word` and `self` differ in length.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Pattern, Word};
    ///
    /// let current = Pattern::from("-e--");
    /// let word = Word::new("head").unwrap();
    ///
    /// assert_eq!(current.reveal(&word, 'a').to_string(), "-ea-");
    /// assert_eq!(current.reveal(&word, 'z'), current);
    /// ```
    #[must_use]
    pub fn reveal(&self, word: &Word, letter: char) -> Self {
        assert_eq!(
            word.len(),
            self.len(),
            "cannot reveal '{word}' against a pattern of length {}",
            self.len()
        );
        let mut slots = self.0.clone();
        for &i in word.positions_of(letter) {
            slots[i] = letter;
        }
        Self(slots)
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self(s.chars().collect())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.0 {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_pattern() {
        let pattern = Pattern::blank(4);
        assert_eq!(pattern.to_string(), "----");
        assert_eq!(pattern.revealed_count(), 0);
        assert!(!pattern.is_complete());
    }

    #[test]
    fn revealed_count_ignores_blanks() {
        assert_eq!(Pattern::from("-ea-").revealed_count(), 2);
        assert_eq!(Pattern::from("sassy").revealed_count(), 5);
    }

    #[test]
    fn reveal_marks_every_occurrence() {
        let word = Word::new("sassy").unwrap();
        let pattern = Pattern::blank(5).reveal(&word, 's');
        assert_eq!(pattern.to_string(), "s-ss-");
        assert!(pattern.contains('s'));
    }

    #[test]
    fn reveal_missing_letter_is_unchanged() {
        let word = Word::new("herb").unwrap();
        let current = Pattern::from("-e--");
        assert_eq!(current.reveal(&word, 'a'), current);
    }

    #[test]
    fn reveal_keeps_previous_letters() {
        let word = Word::new("hear").unwrap();
        let pattern = Pattern::blank(4).reveal(&word, 'e').reveal(&word, 'r');
        assert_eq!(pattern.to_string(), "-e-r");
    }

    #[test]
    #[should_panic(expected = "cannot reveal 'heard'")]
    fn reveal_rejects_length_mismatch() {
        let word = Word::new("heard").unwrap();
        let _ = Pattern::blank(4).reveal(&word, 'd');
    }

    #[test]
    fn complete_pattern() {
        let word = Word::new("aa").unwrap();
        assert!(Pattern::blank(2).reveal(&word, 'a').is_complete());
    }

    #[test]
    fn matches_respects_revealed_slots() {
        let pattern = Pattern::from("-e-r");
        assert!(pattern.matches(&Word::new("hear").unwrap()));
        assert!(!pattern.matches(&Word::new("herd").unwrap()));
        assert!(!pattern.matches(&Word::new("heard").unwrap()));
    }

    #[test]
    fn ordering_matches_string_ordering() {
        let a = Pattern::from("-ea-");
        let b = Pattern::from("-e--");
        assert_eq!(a.cmp(&b), a.to_string().cmp(&b.to_string()));
        assert!(a > b);
    }
}
