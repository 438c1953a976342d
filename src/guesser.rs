//! Letter suggestion for the guessing side
//!
//! Picks the unguessed letter that appears in the most live candidates. Used
//! for hints in play mode and as the automated player in simulations.

use crate::core::Word;
use crate::engine::GuessedLetters;
use rustc_hash::FxHashMap;

/// Count, for each unguessed letter, how many candidates contain it
#[must_use]
pub fn letter_coverage(candidates: &[Word], guessed: &GuessedLetters) -> FxHashMap<char, usize> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();

    for word in candidates {
        let mut seen: Vec<char> = word.chars().to_vec();
        seen.sort_unstable();
        seen.dedup();

        for letter in seen {
            if !guessed.contains(letter) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Suggest the best next letter
///
/// Ties go to the alphabetically first letter. Returns `None` when every
/// letter of every candidate has been guessed.
///
/// # Examples
/// ```
/// use evil_hangman::core::Word;
/// use evil_hangman::engine::GuessedLetters;
/// use evil_hangman::guesser::suggest_letter;
///
/// let pool = ["head", "hear", "herd"].map(|w| Word::new(w).unwrap());
/// let mut guessed = GuessedLetters::new();
/// guessed.insert('e').unwrap();
///
/// assert_eq!(suggest_letter(&pool, &guessed), Some('h'));
/// ```
#[must_use]
pub fn suggest_letter(candidates: &[Word], guessed: &GuessedLetters) -> Option<char> {
    letter_coverage(candidates, guessed)
        .into_iter()
        .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then_with(|| b.cmp(a)))
        .map(|(letter, _)| letter)
}
