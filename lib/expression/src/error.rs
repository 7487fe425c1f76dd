use derive_more::Display;
use nom::error::ErrorKind;

use telemetry::IsErr;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum ParseError {
    #[display(fmt = "Unexpected token at \"{}\"", _0)]
    InvalidInput(String),

    #[display(fmt = "Failed parsing value \"{}\"", _0)]
    FailedParsingValue(String),

    #[display(fmt = "Unknown Error: {}", _0)]
    Unknown(String),

    #[display(fmt = "Expression nested deeper than {} levels", _0)]
    DepthExceeded(usize),

    #[display(fmt = "Expression tree deeper than {} levels", _0)]
    TreeTooDeep(usize),
}

impl std::error::Error for ParseError {}

// Malformed input is the caller's problem, only internal errors are failures
impl IsErr for ParseError {
    fn is_err(&self) -> bool {
        matches!(self, ParseError::Unknown(_))
    }
}

/// Error produced inside the grammar, borrowing from the input
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GrammarError<'a> {
    Syntax(&'a str, ErrorKind),
    Value(&'a str),
    Depth(usize),
    TreeDepth(usize),
}

impl<'a> nom::error::ParseError<&'a str> for GrammarError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        GrammarError::Syntax(input, kind)
    }

    fn append(_: &'a str, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> From<GrammarError<'a>> for ParseError {
    fn from(e: GrammarError<'a>) -> Self {
        match e {
            GrammarError::Syntax(remaining, _) => ParseError::InvalidInput(remaining.to_string()),
            GrammarError::Value(literal) => ParseError::FailedParsingValue(literal.to_string()),
            GrammarError::Depth(limit) => ParseError::DepthExceeded(limit),
            GrammarError::TreeDepth(limit) => ParseError::TreeTooDeep(limit),
        }
    }
}
