//! Display functions for command results

use super::formatters::{create_progress_bar, win_rate_bar};
use crate::commands::{DictionaryStats, SimulationResult};
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Setup:".bright_cyan().bold());
    println!("   Word length:      {}", result.word_len);
    println!("   Wrong guesses:    {}", result.guesses);
    println!("   Candidate words:  {}", result.pool_size);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "By difficulty:".bright_cyan().bold());
    for tier in &result.tiers {
        let rate = tier.win_rate();
        println!(
            "   {:<7} {} {:5.1}% won  ({} rounds, {:.1} wrong, {:.1} letters on average)",
            tier.difficulty.to_string().bright_white().bold(),
            win_rate_bar(rate, 30).green(),
            rate * 100.0,
            tier.rounds,
            tier.average_wrong(),
            tier.average_letters()
        );
    }
}

/// Print word counts per length
pub fn print_dictionary_stats(stats: &DictionaryStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Total words: {}", stats.total_words.to_string().bright_yellow());
    if let Some(len) = stats.most_common_length() {
        println!("   Most common length: {len}");
    }

    let max = stats.by_length.values().copied().max().unwrap_or(0);
    println!();
    for (len, count) in &stats.by_length {
        let bar = create_progress_bar(*count as f64, max as f64, 40);
        println!("   {len:>3}: {} {count:5}", bar.green());
    }
}
