//! Interactive play loop over any line reader and writer.

use super::command::PlayerCommand;
use std::io::{self, BufRead, Write};
use toah_core::{IllegalMove, ModelError, PuzzleState};
use tracing::{debug, info, instrument};

/// How to play, shown at start and on `Info`.
pub const INSTRUCTIONS: &str = "\
The objective of the game is to move the given stack of cheeses
to the right most stool with the least amount of moves.
To move a block of cheese from stool X to stool Y
enter stool numbers in the format x,y
Enter 'Info' if you wish to read this message again
Enter 'Quit' to exit the game";

/// Shown before each line of input.
pub const PROMPT: &str = "Enter a move or type Quit to exit: ";

enum Flow {
    Continue,
    Quit,
}

/// Console controller for solving the puzzle by hand.
///
/// Reads one command per line from `input` and writes responses to
/// `output`. Stools are numbered from 1 on the console.
#[derive(Debug)]
pub struct ConsoleController<R, W> {
    model: PuzzleState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleController<R, W> {
    /// Creates a controller with `cheeses` cheeses on the first of `stools` stools.
    #[instrument(skip(input, output))]
    pub fn new(cheeses: u32, stools: usize, input: R, output: W) -> Result<Self, ModelError> {
        let mut model = PuzzleState::new(stools)?;
        model.fill_first_peg(cheeses).map_err(ModelError::Setup)?;
        Ok(Self {
            model,
            input,
            output,
        })
    }

    /// Returns the model being played.
    pub fn model(&self) -> &PuzzleState {
        &self.model
    }

    /// Runs until `Quit` or end of input and returns the final model.
    #[instrument(skip(self))]
    pub fn play_loop(mut self) -> io::Result<PuzzleState> {
        writeln!(self.output, "{}", INSTRUCTIONS)?;

        let mut line = String::new();
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if let Flow::Quit = self.handle(&line)? {
                break;
            }
        }

        writeln!(self.output, "\nYou have successfully quit the game!")?;
        info!(moves = self.model.move_count(), "Console game ended");
        Ok(self.model)
    }

    fn handle(&mut self, line: &str) -> io::Result<Flow> {
        let (from, to) = match line.parse::<PlayerCommand>() {
            Ok(PlayerCommand::Quit) => return Ok(Flow::Quit),
            Ok(PlayerCommand::Info) => {
                writeln!(self.output, "{}", INSTRUCTIONS)?;
                return Ok(Flow::Continue);
            }
            Ok(PlayerCommand::Move { from, to }) => (from, to),
            Err(e) => {
                debug!(error = %e, "Rejected input");
                writeln!(
                    self.output,
                    "Incorrect input, input must be positive #,#, Info or Quit\n"
                )?;
                return Ok(Flow::Continue);
            }
        };

        let stools = self.model.peg_count();
        let (Some(source), Some(destination)) = (from.index(stools), to.index(stools)) else {
            let outside = if from.index(stools).is_none() { &from } else { &to };
            writeln!(self.output, "Error {} is not within the range\n", outside)?;
            return Ok(Flow::Continue);
        };
        if self.model.top_cheese(source).is_none() {
            writeln!(self.output, "Stool {} has no cheese!\n", from)?;
            return Ok(Flow::Continue);
        }

        match self.model.move_cheese(source, destination) {
            Ok(()) => {
                writeln!(self.output, "{}", self.model)?;
                if self.model.is_solved() {
                    writeln!(self.output, "Solved in {} moves!", self.model.move_count())?;
                }
            }
            Err(e) => {
                debug!(error = %e, "Illegal move");
                writeln!(self.output, "{}\n", rejection_message(&e))?;
            }
        }
        Ok(Flow::Continue)
    }
}

/// Player-facing explanation of a rejected move.
fn rejection_message(err: &IllegalMove) -> String {
    match err {
        IllegalMove::SamePeg { .. } => {
            "Error, cheese cannot be moved to the same stool, try again".to_string()
        }
        IllegalMove::OntoSmaller { .. } => {
            "Error, cheese being moved is bigger than the cheese on that stool, try again"
                .to_string()
        }
        other => format!("Error, {}", other),
    }
}
