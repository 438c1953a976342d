//! The adversarial hangman engine
//!
//! Per guess: partition the live pool into pattern families, rank them by
//! hardness, let the mercy schedule pick one, then commit it as the new round
//! state.

mod events;
mod manager;
mod partition;
pub mod ranking;
mod registry;
mod resolver;
mod round;
mod schedule;

pub use events::{GuessEvent, GuessObserver, LogObserver};
pub use manager::HangmanManager;
pub use partition::{Family, family_sizes, partition};
pub use registry::GuessedLetters;
pub use resolver::resolve_secret;
pub use round::{GuessReport, Round, RoundStatus};
pub use schedule::{Difficulty, MercyInterval, MercyScheduler, Selection};
