//! Parsing of console input lines.

use std::str::FromStr;
use tracing::instrument;

/// Word commands understood by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Keyword {
    /// Show the instructions again.
    Info,
    /// Leave the game.
    Quit,
}

/// A stool number as the player typed it, counted from 1.
///
/// Kept as digits so a number too large for `usize` can still be echoed
/// back in the range message.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", digits)]
pub struct Stool {
    digits: String,
}

impl Stool {
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Self {
            digits: if trimmed.is_empty() { "0" } else { trimmed }.to_string(),
        }
    }

    /// Returns the zero-based index of this stool in a model with `stools`
    /// stools, or `None` when it is out of range.
    pub fn index(&self, stools: usize) -> Option<usize> {
        self.digits
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=stools).contains(n))
            .map(|n| n - 1)
    }
}

impl From<usize> for Stool {
    fn from(number: usize) -> Self {
        Self {
            digits: number.to_string(),
        }
    }
}

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Show the instructions again.
    Info,
    /// Leave the game.
    Quit,
    /// Move the top cheese between two stools, numbered from 1.
    Move {
        /// Stool to take the cheese from.
        from: Stool,
        /// Stool to put the cheese on.
        to: Stool,
    },
}

/// Input that is neither a keyword nor an `x,y` pair.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unrecognised command: {:?}", input)]
pub struct ParseCommandError {
    /// The offending input, trimmed.
    pub input: String,
}

impl std::error::Error for ParseCommandError {}

impl From<Keyword> for PlayerCommand {
    fn from(keyword: Keyword) -> Self {
        match keyword {
            Keyword::Info => PlayerCommand::Info,
            Keyword::Quit => PlayerCommand::Quit,
        }
    }
}

impl FromStr for PlayerCommand {
    type Err = ParseCommandError;

    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(keyword) = trimmed.parse::<Keyword>() {
            return Ok(keyword.into());
        }

        let error = || ParseCommandError {
            input: trimmed.to_string(),
        };
        let (from, to) = trimmed.split_once(',').ok_or_else(error)?;
        let stool = |part: &str| {
            let part = part.trim();
            if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
                Some(Stool::from_digits(part))
            } else {
                None
            }
        };

        match (stool(from), stool(to)) {
            (Some(from), Some(to)) => Ok(PlayerCommand::Move { from, to }),
            _ => Err(error()),
        }
    }
}
