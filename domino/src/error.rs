use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("invalid symbol '{character}' at position {position}")]
#[diagnostic(
    code(domino::invalid_symbol),
    help("a configuration may only contain '|', '\\' and '/'")
)]
pub struct InvalidSymbolError {
    #[source_code]
    pub src: String,

    #[label("unrecognized character here")]
    pub span: SourceSpan,

    pub character: char,
    pub position: usize,
}

impl InvalidSymbolError {
    pub(crate) fn new(input: &str, position: usize, character: char) -> Self {
        Self {
            src: input.to_string(),
            span: (position, character.len_utf8()).into(),
            character,
            position,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("unknown direction \"{mode}\"")]
#[diagnostic(
    code(domino::invalid_direction),
    help("direction must be \"forward\" or \"backward\"")
)]
pub struct InvalidDirectionError {
    pub mode: String,
}

#[derive(Debug, Error, Diagnostic)]
#[error("step count {steps} is negative")]
#[diagnostic(
    code(domino::invalid_step_count),
    help("the number of steps must be a non-negative integer")
)]
pub struct InvalidStepCountError {
    pub steps: i64,
}
