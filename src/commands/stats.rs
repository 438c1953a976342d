//! Dictionary statistics command
//!
//! Summarizes how many words of each length the loaded dictionary offers.

use crate::engine::HangmanManager;
use rand::Rng;
use std::collections::BTreeMap;

/// Word counts per length
pub struct DictionaryStats {
    pub total_words: usize,
    pub by_length: BTreeMap<usize, usize>,
}

impl DictionaryStats {
    /// The length with the most words, preferring the shorter one on ties
    #[must_use]
    pub fn most_common_length(&self) -> Option<usize> {
        self.by_length
            .iter()
            .max_by(|(len_a, a), (len_b, b)| a.cmp(b).then_with(|| len_b.cmp(len_a)))
            .map(|(&len, _)| len)
    }
}

/// Count the manager's dictionary words per length
#[must_use]
pub fn dictionary_stats<R: Rng>(manager: &HangmanManager<R>) -> DictionaryStats {
    let by_length = manager.word_lengths();

    DictionaryStats {
        total_words: by_length.values().sum(),
        by_length,
    }
}
