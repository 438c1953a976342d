//! Evil Hangman - CLI
//!
//! Console hangman against an engine that keeps changing its mind about the
//! secret word.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{SimulationConfig, dictionary_stats, run_simulation},
    core::Word,
    engine::{Difficulty, HangmanManager},
    interactive::{PlayConfig, run_console},
    output::{print_dictionary_stats, print_simulation_result},
    wordlists::{DICTIONARY, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an adversary that defers choosing its word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'default' (embedded dictionary) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Report every family decision (also raises the log level to debug)
    #[arg(short = 'v', long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the console (default)
    Play {
        /// Word length; asked for if omitted
        #[arg(short, long)]
        length: Option<usize>,

        /// Wrong guesses allowed; asked for if omitted
        #[arg(short, long)]
        guesses: Option<usize>,

        /// Difficulty: easy, medium or hard; asked for if omitted
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Let an automated player face every difficulty tier
    Simulate {
        /// Word length
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Wrong guesses allowed
        #[arg(short, long, default_value = "6")]
        guesses: usize,

        /// Rounds per difficulty
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,

        /// Only simulate this difficulty
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Chance (0-1) that the player guesses a random letter
        #[arg(long, default_value = "0.2")]
        noise: f64,

        /// Base seed for reproducible runs
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Show word counts per length
    Stats,
}

/// Load the dictionary based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    use evil_hangman::wordlists::loader::load_from_file;

    match wordlist {
        "default" => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist {path}")),
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let words = load_words(&cli.wordlist)?;
    log::info!("loaded {} words from {}", words.len(), cli.wordlist);

    let command = cli.command.unwrap_or(Commands::Play {
        length: None,
        guesses: None,
        difficulty: None,
    });

    match command {
        Commands::Play {
            length,
            guesses,
            difficulty,
        } => {
            let config = PlayConfig {
                word_len: length,
                guesses,
                difficulty: difficulty.as_deref().map(Difficulty::from_name),
                debug: cli.debug,
            };
            run_play_command(words, cli.debug, config)
        }
        Commands::Simulate {
            length,
            guesses,
            rounds,
            difficulty,
            noise,
            seed,
        } => {
            if !(0.0..=1.0).contains(&noise) {
                bail!("noise must be between 0 and 1, got {noise}");
            }
            let config = SimulationConfig {
                rounds,
                noise,
                seed,
                difficulties: difficulty.as_deref().map_or_else(
                    || Difficulty::ALL.to_vec(),
                    |name| vec![Difficulty::from_name(name)],
                ),
                ..SimulationConfig::new(length, guesses)
            };
            run_simulate_command(&words, &config)
        }
        Commands::Stats => run_stats_command(words),
    }
}

fn run_play_command(words: Vec<Word>, debug: bool, config: PlayConfig) -> Result<()> {
    let mut manager = HangmanManager::new(words, debug).context("cannot start the game")?;
    run_console(&mut manager, config)
}

fn run_simulate_command(words: &[Word], config: &SimulationConfig) -> Result<()> {
    println!(
        "Simulating {} rounds per difficulty with {}-letter words...",
        config.rounds, config.word_len
    );
    let result = run_simulation(words, config)?;
    print_simulation_result(&result);
    Ok(())
}

fn run_stats_command(words: Vec<Word>) -> Result<()> {
    let manager = HangmanManager::new(words, false).context("cannot load the dictionary")?;
    print_dictionary_stats(&dictionary_stats(&manager));
    Ok(())
}
