//! Pattern family partitioning
//!
//! Splits the live pool into the families a guessed letter would produce.

use crate::core::{Pattern, Word};
use std::collections::BTreeMap;

/// Live candidates sharing the pattern they would reveal for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family<'a> {
    pub pattern: Pattern,
    pub members: Vec<&'a Word>,
}

impl Family<'_> {
    /// Number of candidates in the family
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Group `pool` by the pattern each word would reveal when `letter` is guessed
///
/// Every word lands in exactly one family, and no family is empty. The family
/// whose pattern equals `current` holds the words without `letter`. Families
/// come back in ascending pattern order.
///
/// # Panics
/// Panics if a word in `pool` is not as long as `current`.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Pattern, Word};
/// use evil_hangman::engine::partition;
///
/// let pool: Vec<Word> = ["head", "hear", "herd", "herb"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let families = partition(&Pattern::from("-e--"), &pool, 'a');
/// let sizes: Vec<(String, usize)> = families
///     .iter()
///     .map(|f| (f.pattern.to_string(), f.size()))
///     .collect();
///
/// assert_eq!(sizes, [("-e--".to_string(), 2), ("-ea-".to_string(), 2)]);
/// ```
#[must_use]
pub fn partition<'a>(current: &Pattern, pool: &'a [Word], letter: char) -> Vec<Family<'a>> {
    let mut groups: BTreeMap<Pattern, Vec<&'a Word>> = BTreeMap::new();

    for word in pool {
        groups
            .entry(current.reveal(word, letter))
            .or_default()
            .push(word);
    }

    groups
        .into_iter()
        .map(|(pattern, members)| Family { pattern, members })
        .collect()
}

/// Reduce families to their pattern sizes
#[must_use]
pub fn family_sizes(families: &[Family<'_>]) -> BTreeMap<Pattern, usize> {
    families
        .iter()
        .map(|family| (family.pattern.clone(), family.size()))
        .collect()
}
