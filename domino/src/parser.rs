use miette::miette;
use nom::{branch::alt, character::complete::char, combinator::value, multi::many0, IResult};

use crate::cell::Symbol;
use crate::error::InvalidSymbolError;
use crate::line::Line;

pub(crate) const STANDING: char = '|';
pub(crate) const FALLING_LEFT: char = '\\';
pub(crate) const FALLING_RIGHT: char = '/';

fn parse_symbol(input: &str) -> IResult<&str, Symbol> {
    alt((
        value(Symbol::Standing, char(STANDING)),
        value(Symbol::FallingLeft, char(FALLING_LEFT)),
        value(Symbol::FallingRight, char(FALLING_RIGHT)),
    ))(input)
}

fn parse_symbols(input: &str) -> IResult<&str, Vec<Symbol>> {
    many0(parse_symbol)(input)
}

/// Decodes a configuration string into a [`Line`]. The empty string is a
/// valid (empty) line; any character outside the three-symbol alphabet
/// is reported together with its position.
pub fn parse(input: &str) -> miette::Result<Line> {
    let (rest, symbols) =
        parse_symbols(input).map_err(|e| miette!("configuration parse failed: {:?}", e))?;

    if let Some(character) = rest.chars().next() {
        let position = input.len() - rest.len();
        return Err(InvalidSymbolError::new(input, position, character).into());
    }

    Ok(Line::new(symbols))
}
