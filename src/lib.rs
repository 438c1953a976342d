//! Evil Hangman
//!
//! A hangman engine that never commits to a secret word until it has to. Each
//! guess splits the remaining candidates into families by the pattern they
//! would reveal, and the engine keeps the family that leaves the guesser worst
//! off, granting an easier pick now and then depending on difficulty.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::engine::{Difficulty, HangmanManager};
//! use evil_hangman::wordlists::{DICTIONARY, loader::words_from_slice};
//!
//! let mut manager = HangmanManager::new(words_from_slice(DICTIONARY), false).unwrap();
//! manager.prep_for_round(5, 6, Difficulty::Hard).unwrap();
//!
//! let families = manager.make_guess('e').unwrap();
//! println!("{} families, pattern now {}", families.len(), manager.pattern());
//! ```

// Core domain types
pub mod core;

// Error type
pub mod error;

// Adversarial engine
pub mod engine;

// Letter suggestions for the guessing side
pub mod guesser;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive console game
pub mod interactive;

pub use error::HangmanError;
