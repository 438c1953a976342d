//! Core domain types for hangman
//!
//! Words and reveal patterns. These types are pure and have no knowledge of
//! rounds, difficulty or randomness.

mod pattern;
mod word;

pub use pattern::{BLANK, Pattern};
pub use word::{Word, WordError};
