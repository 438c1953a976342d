//! Dictionaries for hangman
//!
//! Provides the embedded default dictionary compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
