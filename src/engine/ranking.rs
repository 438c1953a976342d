//! Family hardness ranking
//!
//! Orders families from easiest to hardest for the guesser. The comparison is
//! split into one function per rule so each tie-break can be checked on its own:
//!
//! 1. Smaller families are easier.
//! 2. On equal size, revealing more letters is easier.
//! 3. On equal reveals, the lexicographically larger pattern is easier.

use super::partition::Family;
use crate::core::Pattern;
use std::cmp::Ordering;

/// Rule 1: fewer members sorts lower
#[must_use]
pub fn by_size(a: usize, b: usize) -> Ordering {
    a.cmp(&b)
}

/// Rule 2: more revealed letters sorts lower
#[must_use]
pub fn by_revealed(a: &Pattern, b: &Pattern) -> Ordering {
    b.revealed_count().cmp(&a.revealed_count())
}

/// Rule 3: the larger pattern string sorts lower
#[must_use]
pub fn by_pattern(a: &Pattern, b: &Pattern) -> Ordering {
    b.cmp(a)
}

/// Compare two (pattern, size) pairs by hardness, easiest first
#[must_use]
pub fn compare_hardness(a: (&Pattern, usize), b: (&Pattern, usize)) -> Ordering {
    by_size(a.1, b.1)
        .then_with(|| by_revealed(a.0, b.0))
        .then_with(|| by_pattern(a.0, b.0))
}

/// Sort families from easiest to hardest
///
/// The hardest family is the last element of the result.
#[must_use]
pub fn rank<'f, 'w>(families: &'f [Family<'w>]) -> Vec<&'f Family<'w>> {
    let mut ranked: Vec<&Family<'w>> = families.iter().collect();
    ranked.sort_by(|a, b| compare_hardness((&a.pattern, a.size()), (&b.pattern, b.size())));
    ranked
}

/// The hardest family of a ranked list
#[must_use]
pub fn hardest<'f, 'w>(ranked: &[&'f Family<'w>]) -> Option<&'f Family<'w>> {
    ranked.last().copied()
}

/// The second-hardest family, or the hardest when only one exists
#[must_use]
pub fn second_hardest<'f, 'w>(ranked: &[&'f Family<'w>]) -> Option<&'f Family<'w>> {
    match ranked {
        [.., second, _] => Some(*second),
        _ => hardest(ranked),
    }
}
