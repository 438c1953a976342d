//! Command implementations

pub mod simulate;
pub mod stats;

pub use simulate::{
    RoundOutcome, SimulationConfig, SimulationResult, TierStatistics, play_round, run_simulation,
};
pub use stats::{DictionaryStats, dictionary_stats};
