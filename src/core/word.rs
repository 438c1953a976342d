//! Dictionary word representation
//!
//! A Word stores a candidate word along with letter position indices used when
//! computing reveal patterns.

use super::pattern::BLANK;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

/// A dictionary word with letter position tracking
///
/// Words can have any non-zero length. Length is measured in `char`s, so a
/// guess unit is always a single character.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ContainsBlank,
    Whitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::ContainsBlank => {
                write!(f, "Word must not contain the blank marker '{BLANK}'")
            }
            Self::Whitespace => write!(f, "Word must not contain whitespace"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - It contains the blank marker `-`
    /// - It contains whitespace
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    ///
    /// let word = Word::new("hear").unwrap();
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("x-ray").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.contains(BLANK) {
            return Err(WordError::ContainsBlank);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::Whitespace);
        }

        let chars: Vec<char> = text.chars().collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false, words are validated non-empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("sassy").unwrap();
        assert_eq!(word.text(), "sassy");
        assert_eq!(word.chars(), &['s', 'a', 's', 's', 'y']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_rejects_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_rejects_blank_marker() {
        assert_eq!(Word::new("t-shirt"), Err(WordError::ContainsBlank));
    }

    #[test]
    fn word_creation_rejects_whitespace() {
        assert_eq!(Word::new("ice cream"), Err(WordError::Whitespace));
        assert_eq!(Word::new("tab\t"), Err(WordError::Whitespace));
    }

    #[test]
    fn word_length_counts_chars() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
        assert!(word.has_letter('é'));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("head").unwrap();
        assert!(word.has_letter('h'));
        assert!(word.has_letter('d'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("sassy").unwrap();
        assert_eq!(word.positions_of('s'), &[0, 2, 3]);
        assert_eq!(word.positions_of('a'), &[1]);
        assert_eq!(word.positions_of('q'), &[] as &[usize]);
    }

    #[test]
    fn word_ordering_follows_text() {
        let mut words = vec![
            Word::new("herd").unwrap(),
            Word::new("head").unwrap(),
            Word::new("herb").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["head", "herb", "herd"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("hear").unwrap();
        assert_eq!(format!("{word}"), "hear");
    }
}
