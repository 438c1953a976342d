//! Simulation command
//!
//! Plays many automated rounds against each difficulty tier and collects win
//! statistics.

use crate::core::Word;
use crate::engine::{Difficulty, GuessedLetters, HangmanManager, RoundStatus};
use crate::error::HangmanError;
use crate::guesser::suggest_letter;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub word_len: usize,
    pub guesses: usize,
    pub rounds: usize,
    /// Chance that the automated player guesses a random letter instead of the best one
    pub noise: f64,
    pub seed: u64,
    pub difficulties: Vec<Difficulty>,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(word_len: usize, guesses: usize) -> Self {
        Self {
            word_len,
            guesses,
            rounds: 100,
            noise: 0.2,
            seed: 0,
            difficulties: Difficulty::ALL.to_vec(),
        }
    }
}

/// Result of one automated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub won: bool,
    pub wrong_guesses: usize,
    pub letters_guessed: usize,
    pub secret: String,
}

/// Aggregated results for one difficulty tier
#[derive(Debug, Clone)]
pub struct TierStatistics {
    pub difficulty: Difficulty,
    pub rounds: usize,
    pub wins: usize,
    pub total_wrong: usize,
    pub total_letters: usize,
}

impl TierStatistics {
    fn from_outcomes(difficulty: Difficulty, outcomes: &[RoundOutcome]) -> Self {
        Self {
            difficulty,
            rounds: outcomes.len(),
            wins: outcomes.iter().filter(|o| o.won).count(),
            total_wrong: outcomes.iter().map(|o| o.wrong_guesses).sum(),
            total_letters: outcomes.iter().map(|o| o.letters_guessed).sum(),
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64
        }
    }

    #[must_use]
    pub fn average_wrong(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_wrong as f64 / self.rounds as f64
        }
    }

    #[must_use]
    pub fn average_letters(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_letters as f64 / self.rounds as f64
        }
    }
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub word_len: usize,
    pub guesses: usize,
    pub pool_size: usize,
    pub tiers: Vec<TierStatistics>,
    pub duration: Duration,
}

/// Play one round with the automated guesser
///
/// # Errors
///
/// Returns an error if the round cannot be prepared (no words of that length,
/// zero budget) or the engine reports an invariant violation.
pub fn play_round<R: Rng>(
    manager: &mut HangmanManager<R>,
    config: &SimulationConfig,
    difficulty: Difficulty,
    player: &mut impl Rng,
) -> Result<RoundOutcome, HangmanError> {
    manager.prep_for_round(config.word_len, config.guesses, difficulty)?;

    let alphabet: Vec<char> = {
        let mut letters: Vec<char> = manager
            .candidates()
            .iter()
            .flat_map(|w| w.chars().iter().copied())
            .collect();
        letters.sort_unstable();
        letters.dedup();
        letters
    };

    while manager.status() == RoundStatus::InProgress {
        let Some(round) = manager.round() else { break };
        let letter = if player.random_bool(config.noise.clamp(0.0, 1.0)) {
            random_letter(&alphabet, round.guessed(), player)
        } else {
            suggest_letter(round.pool(), round.guessed())
        };

        let Some(letter) = letter else { break };
        manager.make_guess(letter)?;
    }

    let letters_guessed = manager.round().map_or(0, |r| r.guessed().len());
    Ok(RoundOutcome {
        won: manager.status() == RoundStatus::Won,
        wrong_guesses: config.guesses - manager.guesses_left(),
        letters_guessed,
        secret: manager.secret_word()?,
    })
}

fn random_letter(alphabet: &[char], guessed: &GuessedLetters, rng: &mut impl Rng) -> Option<char> {
    let open: Vec<char> = alphabet
        .iter()
        .copied()
        .filter(|&c| !guessed.contains(c))
        .collect();
    open.choose(rng).copied()
}

/// Run the simulation for every configured tier
///
/// Rounds run in parallel; round `i` seeds its player and engine from
/// `config.seed + i`, so a run is reproducible.
///
/// # Errors
///
/// Returns the first error produced by any round.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (compile-time constant).
pub fn run_simulation(
    words: &[Word],
    config: &SimulationConfig,
) -> Result<SimulationResult, HangmanError> {
    let pool: Vec<Word> = words
        .iter()
        .filter(|w| w.len() == config.word_len)
        .cloned()
        .collect();

    if pool.is_empty() {
        return Err(HangmanError::NoWordsOfLength(config.word_len));
    }

    let start = Instant::now();
    let total = (config.rounds * config.difficulties.len()) as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut tiers = Vec::with_capacity(config.difficulties.len());
    for &difficulty in &config.difficulties {
        pb.set_message(format!("{difficulty}"));

        let outcomes: Vec<RoundOutcome> = (0..config.rounds)
            .into_par_iter()
            .map(|i| {
                let seed = config.seed.wrapping_add(i as u64);
                let engine_rng = StdRng::seed_from_u64(seed);
                let mut manager =
                    HangmanManager::with_rng(pool.iter().cloned(), false, engine_rng)?;
                let mut player = StdRng::seed_from_u64(seed.rotate_left(32));
                let outcome = play_round(&mut manager, config, difficulty, &mut player);
                pb.inc(1);
                outcome
            })
            .collect::<Result<_, _>>()?;

        log::info!(
            "{difficulty}: {} of {} rounds won",
            outcomes.iter().filter(|o| o.won).count(),
            outcomes.len()
        );
        tiers.push(TierStatistics::from_outcomes(difficulty, &outcomes));
    }

    pb.finish_and_clear();

    Ok(SimulationResult {
        word_len: config.word_len,
        guesses: config.guesses,
        pool_size: pool.len(),
        tiers,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;
    use crate::wordlists::loader::words_from_slice;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn quiet_config(word_len: usize, guesses: usize) -> SimulationConfig {
        SimulationConfig {
            noise: 0.0,
            rounds: 4,
            ..SimulationConfig::new(word_len, guesses)
        }
    }

    #[test]
    fn single_word_round_is_won() {
        let mut manager =
            HangmanManager::with_rng(words(&["sassy"]), false, StdRng::seed_from_u64(1)).unwrap();
        let config = quiet_config(5, 3);
        let outcome = play_round(
            &mut manager,
            &config,
            Difficulty::Hard,
            &mut StdRng::seed_from_u64(2),
        )
        .unwrap();

        assert!(outcome.won);
        assert_eq!(outcome.wrong_guesses, 0);
        assert_eq!(outcome.secret, "sassy");
        assert_eq!(outcome.letters_guessed, 3);
    }

    #[test]
    fn lost_round_spends_whole_budget() {
        let mut manager = HangmanManager::with_rng(
            words(&["ab", "cd", "ef", "gh", "ij", "kl"]),
            false,
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        let config = quiet_config(2, 1);
        let outcome = play_round(
            &mut manager,
            &config,
            Difficulty::Hard,
            &mut StdRng::seed_from_u64(2),
        )
        .unwrap();

        // Every letter splits off one word, so the hard tier dodges the first guess
        assert!(!outcome.won);
        assert_eq!(outcome.wrong_guesses, 1);
        assert_ne!(outcome.secret.chars().next(), Some('a'));
    }

    #[test]
    fn simulation_is_reproducible() {
        let dictionary = words_from_slice(DICTIONARY);
        let config = SimulationConfig {
            rounds: 6,
            seed: 11,
            ..SimulationConfig::new(4, 6)
        };

        let first = run_simulation(&dictionary, &config).unwrap();
        let second = run_simulation(&dictionary, &config).unwrap();

        for (a, b) in first.tiers.iter().zip(&second.tiers) {
            assert_eq!(a.wins, b.wins);
            assert_eq!(a.total_wrong, b.total_wrong);
        }
        assert_eq!(first.tiers.len(), 3);
    }

    #[test]
    fn missing_length_is_reported() {
        let config = quiet_config(12, 5);
        assert!(matches!(
            run_simulation(&words(&["head"]), &config),
            Err(HangmanError::NoWordsOfLength(12))
        ));
    }

    #[test]
    fn statistics_averages() {
        let outcomes = vec![
            RoundOutcome {
                won: true,
                wrong_guesses: 2,
                letters_guessed: 6,
                secret: "head".into(),
            },
            RoundOutcome {
                won: false,
                wrong_guesses: 4,
                letters_guessed: 8,
                secret: "herb".into(),
            },
        ];
        let stats = TierStatistics::from_outcomes(Difficulty::Medium, &outcomes);
        assert!((stats.win_rate() - 0.5).abs() < f64::EPSILON);
        assert!((stats.average_wrong() - 3.0).abs() < f64::EPSILON);
        assert!((stats.average_letters() - 7.0).abs() < f64::EPSILON);
    }
}
