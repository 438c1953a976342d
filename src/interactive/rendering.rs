//! Console rendering for the play loop

use super::app::Statistics;
use crate::core::Pattern;
use crate::engine::{HangmanManager, RoundStatus};
use crate::output::formatters::spaced_pattern;
use colored::Colorize;
use rand::Rng;
use std::collections::BTreeMap;
use std::io::{self, Write};

pub fn render_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, "{}", "                    H A N G M A N".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "Guess one letter at a time. Type '?' for a hint or 'quit' to stop.\n")
}

/// Show guesses left, guessed letters and the current pattern
pub fn render_status<R: Rng>(
    out: &mut impl Write,
    manager: &HangmanManager<R>,
    debug: bool,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Guesses left: {}", manager.guesses_left().to_string().bright_yellow())?;
    if debug {
        writeln!(
            out,
            "{}",
            format!("DEBUGGING: words left: {}", manager.num_words_current()).bright_black()
        )?;
    }
    writeln!(out, "Guessed so far: {}", manager.guesses_made())?;
    writeln!(
        out,
        "Current word: {}",
        spaced_pattern(&manager.pattern()).bright_white().bold()
    )?;
    writeln!(out, "{}", format!("({})", manager.pattern()).bright_black())
}

/// Show every family a guess produced, largest first
pub fn render_families(
    out: &mut impl Write,
    families: &BTreeMap<Pattern, usize>,
) -> io::Result<()> {
    let mut sorted: Vec<(&Pattern, &usize)> = families.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    writeln!(out, "{}", "DEBUGGING: families".bright_black())?;
    for (pattern, size) in sorted {
        writeln!(out, "  {pattern}  {size:>5}")?;
    }
    Ok(())
}

pub fn render_outcome(out: &mut impl Write, status: RoundStatus, secret: &str) -> io::Result<()> {
    writeln!(out)?;
    match status {
        RoundStatus::Won => writeln!(
            out,
            "{} The word was {}.",
            "You win!".green().bold(),
            secret.bright_yellow().bold()
        ),
        RoundStatus::Lost => writeln!(
            out,
            "{} The word was {}.",
            "Sorry, you lose.".red().bold(),
            secret.bright_yellow().bold()
        ),
        RoundStatus::InProgress => writeln!(out, "The word was {secret}."),
    }
}

pub fn render_goodbye(out: &mut impl Write, stats: Statistics) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Rounds won: {}  Rounds lost: {}",
        stats.wins.to_string().green(),
        stats.losses.to_string().red()
    )?;
    writeln!(out, "Thanks for playing!")
}
