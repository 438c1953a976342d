//! Interactive console game

mod app;
mod rendering;

pub use app::{App, PlayConfig, PlayerInput, Statistics};

use crate::engine::HangmanManager;
use anyhow::Result;
use rand::Rng;
use std::io;

/// Play on stdin/stdout
///
/// # Errors
///
/// Returns an error if terminal I/O fails or the engine reports an invariant
/// violation.
pub fn run_console<R: Rng>(manager: &mut HangmanManager<R>, config: PlayConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    App::new(manager, config, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
