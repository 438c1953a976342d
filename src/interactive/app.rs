//! Console game state and loop

use super::rendering::{
    render_families, render_goodbye, render_outcome, render_status, render_welcome,
};
use crate::engine::{Difficulty, HangmanManager, RoundStatus};
use crate::error::HangmanError;
use crate::guesser::suggest_letter;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Round settings fixed from the command line; unset values are asked for
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    pub word_len: Option<usize>,
    pub guesses: Option<usize>,
    pub difficulty: Option<Difficulty>,
    /// Show family sizes and the live pool size after each guess
    pub debug: bool,
}

/// What the player typed during a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    Guess(char),
    Hint,
    Quit,
    Invalid(String),
}

impl PlayerInput {
    /// Parse one line of input
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "quit" | "exit" => return Self::Quit,
            "?" | "hint" => return Self::Hint,
            _ => {}
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_whitespace() && ch != crate::core::BLANK => {
                Self::Guess(ch.to_lowercase().next().unwrap_or(ch))
            }
            _ => Self::Invalid(trimmed.to_string()),
        }
    }
}

/// Wins and losses across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub wins: usize,
    pub losses: usize,
}

/// Console application
pub struct App<'m, R, I, O> {
    pub manager: &'m mut HangmanManager<R>,
    pub config: PlayConfig,
    pub stats: Statistics,
    input: I,
    out: O,
}

impl<'m, R: Rng, I: BufRead, O: Write> App<'m, R, I, O> {
    pub fn new(manager: &'m mut HangmanManager<R>, config: PlayConfig, input: I, out: O) -> Self {
        Self {
            manager,
            config,
            stats: Statistics::default(),
            input,
            out,
        }
    }

    /// Play rounds until the player quits or input runs out
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, or if the
    /// engine reports an invariant violation.
    pub fn run(&mut self) -> Result<Statistics> {
        render_welcome(&mut self.out)?;

        loop {
            if !self.setup_round()? {
                break;
            }
            let Some(status) = self.play_round()? else { break };

            let secret = self.manager.secret_word()?;
            render_outcome(&mut self.out, status, &secret)?;
            match status {
                RoundStatus::Won => self.stats.wins += 1,
                RoundStatus::Lost => self.stats.losses += 1,
                RoundStatus::InProgress => {}
            }

            let again = self.prompt("Play again? (y/n)")?;
            if !matches!(again.as_deref(), Some("y" | "Y" | "yes" | "Yes")) {
                break;
            }
        }

        render_goodbye(&mut self.out, self.stats)?;
        Ok(self.stats)
    }

    /// Ask for any unset round settings and prepare the round
    ///
    /// Returns `false` if input ran out.
    fn setup_round(&mut self) -> Result<bool> {
        let word_len = match self.config.word_len {
            Some(len) => len,
            None => {
                let lengths = self.manager.word_lengths();
                let hint = lengths
                    .keys()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                let Some(len) = self.prompt_number(&format!("Word length ({hint})"), |len| {
                    lengths.contains_key(&len)
                })?
                else {
                    return Ok(false);
                };
                len
            }
        };

        let guesses = match self.config.guesses {
            Some(guesses) => guesses,
            None => {
                let Some(guesses) =
                    self.prompt_number("Number of wrong guesses allowed", |n| n > 0)?
                else {
                    return Ok(false);
                };
                guesses
            }
        };

        let difficulty = match self.config.difficulty {
            Some(difficulty) => difficulty,
            None => {
                let Some(name) = self.prompt("Difficulty (easy/medium/hard)")? else {
                    return Ok(false);
                };
                Difficulty::from_name(&name)
            }
        };

        self.manager
            .prep_for_round(word_len, guesses, difficulty)
            .with_context(|| format!("could not start a round of {word_len}-letter words"))?;

        if self.config.debug {
            writeln!(
                self.out,
                "{}",
                format!(
                    "DEBUGGING: {} words of length {word_len}, difficulty {difficulty}",
                    self.manager.num_words_current()
                )
                .bright_black()
            )?;
        }
        Ok(true)
    }

    /// Run guesses until the round ends
    ///
    /// Returns `None` if the player quit or input ran out.
    fn play_round(&mut self) -> Result<Option<RoundStatus>> {
        while self.manager.status() == RoundStatus::InProgress {
            render_status(&mut self.out, &*self.manager, self.config.debug)?;

            let Some(line) = self.prompt("Your guess")? else {
                return Ok(None);
            };

            match PlayerInput::parse(&line) {
                PlayerInput::Quit => return Ok(None),
                PlayerInput::Hint => {
                    let suggestion = self
                        .manager
                        .round()
                        .and_then(|r| suggest_letter(r.pool(), r.guessed()));
                    match suggestion {
                        Some(letter) => writeln!(self.out, "Try '{letter}'.")?,
                        None => writeln!(self.out, "No hint available.")?,
                    }
                }
                PlayerInput::Invalid(text) => {
                    writeln!(self.out, "{}", format!("'{text}' is not a single letter.").red())?;
                }
                PlayerInput::Guess(letter) => match self.manager.make_guess(letter) {
                    Ok(families) => {
                        if self.config.debug {
                            render_families(&mut self.out, &families)?;
                        }
                        self.report_guess(letter)?;
                    }
                    Err(HangmanError::RepeatedGuess(_)) => {
                        writeln!(
                            self.out,
                            "{}",
                            format!("You already guessed {letter}").yellow()
                        )?;
                    }
                    Err(e) => return Err(e.into()),
                },
            }
        }

        Ok(Some(self.manager.status()))
    }

    fn report_guess(&mut self, letter: char) -> Result<()> {
        let count = self.manager.pattern().chars().filter(|&c| c == letter).count();
        if count == 0 {
            writeln!(self.out, "{}", format!("Sorry, there are no {letter}'s").red())?;
        } else if count == 1 {
            writeln!(self.out, "{}", format!("Yes, there is one {letter}").green())?;
        } else {
            writeln!(
                self.out,
                "{}",
                format!("Yes, there are {count} {letter}'s").green()
            )?;
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}: ")?;
        self.out.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_number(
        &mut self,
        prompt: &str,
        valid: impl Fn(usize) -> bool,
    ) -> Result<Option<usize>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(n) if valid(n) => return Ok(Some(n)),
                _ => writeln!(self.out, "{}", format!("'{line}' is not a valid choice.").red())?,
            }
        }
    }
}
