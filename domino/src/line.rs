use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::cell::{Cell, Symbol};

/// The full ordered line of dominoes for one simulation run. Length is
/// fixed once decoded; position is the only identity a domino has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    symbols: Vec<Symbol>,
}

impl Line {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// One forward toppling step.
    pub fn step_forward(&mut self) {
        self.step(Cell::toppled);
    }

    /// One backward step with the predecessor rule.
    pub fn step_backward(&mut self) {
        self.step(Cell::raised);
    }

    // Every successor is computed from the same pre-step snapshot; the
    // vector is only replaced once the whole pass is done, so no cell
    // ever sees a neighbour's in-progress update.
    fn step(&mut self, rule: fn(Cell) -> Symbol) {
        self.symbols = (0..self.symbols.len())
            .map(|index| rule(Cell::at(&self.symbols, index)))
            .collect();
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.symbols.iter().map(|symbol| symbol.as_char()).join("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Symbol::*;
    use crate::parser;
    use rstest::rstest;

    #[rstest]
    #[case::wave_advances(r"|//|||", r"|///||")]
    #[case::waves_collide(r"||//||\||/\|", r"||///\\||/\|")]
    #[case::settled_line_is_stable(r"\\\|///", r"\\\|///")]
    #[case::edge_fallers_stay_put(r"/||\", r"//\\")]
    fn step_forward(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        let mut line = parser::parse(input)?;
        line.step_forward();
        assert_eq!(expected, line.to_string());
        Ok(())
    }

    #[rstest]
    #[case::wave_recedes(r"|///||", r"|//|||")]
    #[case::lone_faller_stays_down(r"||/||", r"||/||")]
    fn step_backward(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        let mut line = parser::parse(input)?;
        line.step_backward();
        assert_eq!(expected, line.to_string());
        Ok(())
    }

    #[test]
    fn single_domino_never_sees_a_phantom_push() -> miette::Result<()> {
        for input in ["|", r"\", "/"] {
            let mut line = parser::parse(input)?;
            line.step_forward();
            assert_eq!(input, line.to_string());
        }
        Ok(())
    }

    #[test]
    fn empty_line_steps_to_itself() -> miette::Result<()> {
        let mut line = parser::parse("")?;
        assert!(line.is_empty());
        line.step_forward();
        line.step_backward();
        assert_eq!("", line.to_string());
        Ok(())
    }

    #[test]
    fn step_keeps_length_fixed() -> miette::Result<()> {
        let mut line = parser::parse(r"|//|||")?;
        let len = line.len();
        for _ in 0..10 {
            line.step_forward();
            assert_eq!(len, line.len());
        }
        Ok(())
    }

    #[test]
    fn display_encodes_symbols_in_order() {
        let line = Line::new(vec![Standing, FallingLeft, FallingRight]);
        assert_eq!(r"|\/", line.to_string());
    }
}
