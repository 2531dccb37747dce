//! Domino toppling simulator.
//!
//! A line of dominoes is written as a string of `|` (standing), `\`
//! (falling left) and `/` (falling right). [`process`] runs the whole
//! line through a number of synchronous steps, either forward in time
//! (toppling) or backward (inferring a prior configuration).

pub mod cell;
pub mod error;
pub mod line;
pub mod parser;

use std::str::FromStr;

pub use crate::cell::{Cell, Symbol};
use crate::error::{InvalidDirectionError, InvalidStepCountError};
pub use crate::line::Line;

/// Which way time runs for one simulation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl FromStr for Direction {
    type Err = InvalidDirectionError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "forward" => Ok(Self::Forward),
            "backward" => Ok(Self::Backward),
            _ => Err(InvalidDirectionError {
                mode: mode.to_string(),
            }),
        }
    }
}

/// Runs `steps` synchronous iterations over `input` in the given
/// direction and returns the resulting configuration. Zero steps return
/// the input unchanged; a negative count is rejected up front.
#[tracing::instrument]
pub fn run(input: &str, direction: Direction, steps: i64) -> miette::Result<String> {
    if steps < 0 {
        return Err(InvalidStepCountError { steps }.into());
    }

    let mut line = parser::parse(input)?;
    for _ in 0..steps {
        match direction {
            Direction::Forward => line.step_forward(),
            Direction::Backward => line.step_backward(),
        }
    }

    Ok(line.to_string())
}

/// String-mode entry point: resolves `mode` into a [`Direction`] once at
/// the boundary, then delegates to [`run`].
#[tracing::instrument]
pub fn process(input: &str, mode: &str, steps: i64) -> miette::Result<String> {
    let direction = mode.parse::<Direction>()?;
    run(input, direction, steps)
}
