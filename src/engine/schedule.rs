//! Difficulty tiers and the mercy schedule
//!
//! Each tier maps to a mercy interval. The scheduler counts hardest picks and,
//! once the count reaches the interval, hands the guesser the second-hardest
//! family instead and starts counting again.

use crate::error::HangmanError;
use std::fmt;

/// Difficulty tier for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    /// Mercy after every hardest pick
    Easy,
    /// Mercy after every third hardest pick
    Medium,
    /// Never merciful
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The mercy interval configured for this tier
    #[must_use]
    pub const fn mercy_interval(self) -> MercyInterval {
        match self {
            Self::Easy => MercyInterval::EASY,
            Self::Medium => MercyInterval::MEDIUM,
            Self::Hard => MercyInterval::Never,
        }
    }

    /// Create a tier from its name
    ///
    /// Defaults to `Hard` if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "easy" | "e" | "1" => Self::Easy,
            "medium" | "m" | "2" => Self::Medium,
            _ => Self::Hard,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// Number of hardest picks the scheduler makes before granting mercy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MercyInterval {
    Every(usize),
    Never,
}

impl MercyInterval {
    pub const EASY: Self = Self::Every(1);
    pub const MEDIUM: Self = Self::Every(3);

    /// Create a finite interval
    ///
    /// # Errors
    /// Returns `HangmanError::Configuration` if `n` is zero.
    pub fn every(n: usize) -> Result<Self, HangmanError> {
        if n == 0 {
            return Err(HangmanError::Configuration(
                "mercy interval must be at least 1".into(),
            ));
        }
        Ok(Self::Every(n))
    }
}

/// Which family the scheduler handed out for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The hardest family
    Hardest,
    /// Mercy: the second-hardest family
    Mercy,
    /// Mercy was due but only one family existed, so the hardest was used
    MercyUnavailable,
}

impl Selection {
    /// True if the scheduler spent a mercy on this guess
    #[must_use]
    pub const fn is_mercy(self) -> bool {
        matches!(self, Self::Mercy | Self::MercyUnavailable)
    }
}

/// Mercy counter for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MercyScheduler {
    interval: MercyInterval,
    counter: usize,
}

impl MercyScheduler {
    /// Start a fresh schedule with the counter at zero
    #[must_use]
    pub const fn new(interval: MercyInterval) -> Self {
        Self {
            interval,
            counter: 0,
        }
    }

    #[must_use]
    pub const fn interval(&self) -> MercyInterval {
        self.interval
    }

    /// Hardest picks made since the last mercy
    #[must_use]
    pub const fn counter(&self) -> usize {
        self.counter
    }

    /// Decide which family to hand out given how many families exist
    pub fn select(&mut self, family_count: usize) -> Selection {
        match self.interval {
            MercyInterval::Every(m) if self.counter == m => {
                self.counter = 0;
                if family_count > 1 {
                    Selection::Mercy
                } else {
                    Selection::MercyUnavailable
                }
            }
            _ => {
                self.counter += 1;
                Selection::Hardest
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(interval: MercyInterval, guesses: usize) -> Vec<Selection> {
        let mut scheduler = MercyScheduler::new(interval);
        (0..guesses).map(|_| scheduler.select(2)).collect()
    }

    #[test]
    fn tier_mapping() {
        assert_eq!(Difficulty::Easy.mercy_interval(), MercyInterval::Every(1));
        assert_eq!(Difficulty::Medium.mercy_interval(), MercyInterval::Every(3));
        assert_eq!(Difficulty::Hard.mercy_interval(), MercyInterval::Never);
    }

    #[test]
    fn zero_interval_rejected() {
        assert!(matches!(
            MercyInterval::every(0),
            Err(HangmanError::Configuration(_))
        ));
        assert_eq!(MercyInterval::every(2), Ok(MercyInterval::Every(2)));
    }

    #[test]
    fn easy_alternates() {
        use Selection::{Hardest, Mercy};
        assert_eq!(
            run(MercyInterval::EASY, 6),
            [Hardest, Mercy, Hardest, Mercy, Hardest, Mercy]
        );
    }

    #[test]
    fn medium_grants_mercy_after_three_hardest() {
        use Selection::{Hardest, Mercy};
        assert_eq!(
            run(MercyInterval::MEDIUM, 8),
            [Hardest, Hardest, Hardest, Mercy, Hardest, Hardest, Hardest, Mercy]
        );
    }

    #[test]
    fn hard_never_grants_mercy() {
        let selections = run(MercyInterval::Never, 100);
        assert!(selections.iter().all(|&s| s == Selection::Hardest));
    }

    #[test]
    fn mercy_count_over_many_guesses() {
        for m in 1..=5 {
            for n in 0..40 {
                let mercies = run(MercyInterval::Every(m), n)
                    .iter()
                    .filter(|s| s.is_mercy())
                    .count();
                assert_eq!(mercies, n / (m + 1), "interval {m}, {n} guesses");
            }
        }
    }

    #[test]
    fn single_family_falls_back_but_resets() {
        let mut scheduler = MercyScheduler::new(MercyInterval::EASY);
        assert_eq!(scheduler.select(1), Selection::Hardest);
        assert_eq!(scheduler.select(1), Selection::MercyUnavailable);
        assert_eq!(scheduler.counter(), 0);
        assert_eq!(scheduler.select(3), Selection::Hardest);
        assert_eq!(scheduler.select(3), Selection::Mercy);
    }

    #[test]
    fn difficulty_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("M"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("whatever"), Difficulty::Hard);
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }
}
