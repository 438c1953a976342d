//! Final secret word selection

use crate::core::Word;
use crate::error::HangmanError;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Pick the secret word from the remaining candidates
///
/// A single candidate is returned without touching `rng`; otherwise the choice
/// is uniform over the pool.
///
/// # Errors
/// Returns `HangmanError::ExhaustedPool` if `pool` is empty.
pub fn resolve_secret<'a, R: Rng + ?Sized>(
    pool: &'a [Word],
    rng: &mut R,
) -> Result<&'a Word, HangmanError> {
    match pool {
        [] => Err(HangmanError::ExhaustedPool),
        [only] => Ok(only),
        _ => pool.choose(rng).ok_or(HangmanError::ExhaustedPool),
    }
}
