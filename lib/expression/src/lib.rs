//! Parsing and evaluation of infix arithmetic expressions.
//!
//! Supports decimal literals with leading minus signs, `(`/`[` grouping and the
//! binary operators `+ - * / ^`. Operators of the same tier group to the right,
//! so `1-2-3` evaluates to `2` and `2^3^2` to `512`.

#[macro_use]
extern crate lazy_static;

use telemetry::Measure;

pub use config::{figment, Config};
pub use error::ParseError;
pub use expr::{evaluate, Expr};
pub use operator::{Operator, Precedence};
pub use parser::{parse, Parser};

mod config;
mod error;
mod expr;
mod operator;
mod parser;

lazy_static! {
    static ref CALCULATE_MEASURE: Measure = Measure::new("expression", "calculate");
}

/// Parses and evaluates `input` in one step
pub fn calculate(input: &str) -> Result<f64, ParseError> {
    CALCULATE_MEASURE.stats(|| parse(input).map(|e| e.evaluate()))
}
