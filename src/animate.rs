//! Step-by-step replay of a solution on a writer.

use std::io::Write;
use std::time::Duration;
use toah_core::{ModelError, MoveSequence, PuzzleState};
use tracing::{debug, instrument};

/// Failure while animating a move sequence.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum AnimateError {
    /// The sequence could not be replayed.
    #[display("Replay failed: {}", _0)]
    Model(ModelError),
    /// Writing a frame failed.
    #[display("Could not write frame: {}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for AnimateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnimateError::Model(e) => Some(e),
            AnimateError::Io(e) => Some(e),
        }
    }
}

/// Replays `sequence` from a fresh model, writing every state to `out`.
///
/// Sleeps for `delay` after each frame when it is non-zero. Returns the
/// final model.
#[instrument(skip(sequence, out), fields(moves = sequence.len()))]
pub fn animate<W: Write>(
    sequence: &MoveSequence,
    stools: usize,
    cheeses: u32,
    delay: Duration,
    out: &mut W,
) -> Result<PuzzleState, AnimateError> {
    let mut model = PuzzleState::new(stools)?;
    model.fill_first_peg(cheeses).map_err(ModelError::Setup)?;
    writeln!(out, "{}\n", model)?;

    for (step, mov) in sequence.iter().enumerate() {
        model
            .move_cheese(mov.from, mov.to)
            .map_err(|cause| ModelError::Replay { step, cause })?;
        writeln!(out, "Move {}: {}\n{}\n", step + 1, mov, model)?;
        out.flush()?;

        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    debug!(moves = model.move_count(), "Animation finished");
    Ok(model)
}
