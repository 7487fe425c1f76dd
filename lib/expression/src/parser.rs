use log::{debug, error, trace};
use nom::IResult;
use nom::{
    branch::alt,
    character::complete::{anychar, char, digit1, one_of},
    combinator::{cut, map, map_opt, opt, recognize},
    multi::{many0, many0_count},
    sequence::{pair, tuple},
};

use crate::config::Config;
use crate::error::{GrammarError, ParseError};
use crate::expr::Expr;
use crate::operator::{Operator, Precedence};

type PResult<'a, O> = IResult<&'a str, O, GrammarError<'a>>;

/// A parsed subtree with its depth
type Node = (Expr, usize);

/// A literal is any number of leading minus signs, digits and an optional
/// fractional part. Only a single minus sign converts successfully, and the
/// value must be finite
fn parse_literal(i: &str) -> PResult<'_, f64> {
    let matched: PResult<'_, &str> = recognize(tuple((
        many0_count(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
    )))(i);
    let (rest, text) = matched?;

    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok((rest, v)),
        _ => Err(nom::Err::Failure(GrammarError::Value(text))),
    }
}

fn parse_operator(precedence: Precedence, i: &str) -> PResult<'_, Operator> {
    map_opt(anychar, |c| precedence.parse_operator(c))(i)
}

fn parse_delimiter<'a>(delimiters: &'static str, i: &'a str) -> PResult<'a, char> {
    one_of(delimiters)(i)
}

/// Recursive descent parser over the tiers in `Precedence`.
///
/// Each tier parses one operand of the next tier, then on finding one of its
/// own operators treats the entire remainder as the right hand side at the
/// same tier. Chains of operators therefore nest to the right, `1-2-3` is
/// `1-(2-3)`.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: Config,
}

impl Parser {
    pub fn new(config: Config) -> Parser {
        Parser { config }
    }

    pub fn parse(&self, input: &str) -> Result<Expr, ParseError> {
        let result = match self.parse_tier(Precedence::Additive, 0, input) {
            Ok(("", (expr, _))) => Ok(expr),
            Ok((remaining, _)) => Err(ParseError::InvalidInput(remaining.to_string())),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e.into()),
            Err(nom::Err::Incomplete(needed)) => {
                error!("Incomplete parse of \"{}\": {:?}", input, needed);
                Err(ParseError::Unknown(format!("Incomplete input: {:?}", needed)))
            }
        };

        match &result {
            Ok(expr) => trace!("Parsed \"{}\" as {}", input, expr),
            Err(e) => debug!("Rejected \"{}\": {}", input, e),
        }
        result
    }

    /// Chains are collected iteratively, only groups recurse
    fn parse_tier<'a>(
        &self,
        precedence: Precedence,
        nesting: usize,
        i: &'a str,
    ) -> PResult<'a, Node> {
        let operand = |i: &'a str| match precedence.tighter() {
            Some(inner) => self.parse_tier(inner, nesting, i),
            None => self.parse_atom(nesting, i),
        };

        let (i, first) = operand(i)?;
        let (i, rest) = many0(pair(
            |i: &'a str| parse_operator(precedence, i),
            cut(operand),
        ))(i)?;

        let node = self.fold_right(first, rest)?;
        Ok((i, node))
    }

    /// Folds `a op1 b op2 c` into `a op1 (b op2 c)`
    fn fold_right<'a>(
        &self,
        first: Node,
        rest: Vec<(Operator, Node)>,
    ) -> Result<Node, nom::Err<GrammarError<'a>>> {
        let mut last = first;
        let mut pending = Vec::with_capacity(rest.len());
        for (op, operand) in rest {
            pending.push((std::mem::replace(&mut last, operand), op));
        }

        let (mut acc, mut depth) = last;
        while let Some(((left, left_depth), op)) = pending.pop() {
            depth = 1 + depth.max(left_depth);
            if depth > self.config.max_tree_depth {
                return Err(nom::Err::Failure(GrammarError::TreeDepth(
                    self.config.max_tree_depth,
                )));
            }
            acc = Expr::binary(op, left, acc);
        }
        Ok((acc, depth))
    }

    fn parse_atom<'a>(&self, nesting: usize, i: &'a str) -> PResult<'a, Node> {
        alt((
            map(parse_literal, |v| (Expr::Value(v), 1)),
            |i: &'a str| self.parse_group(nesting, i),
        ))(i)
    }

    fn parse_group<'a>(&self, nesting: usize, i: &'a str) -> PResult<'a, Node> {
        let (i, open) = parse_delimiter("([", i)?;
        if nesting >= self.config.max_depth {
            return Err(nom::Err::Failure(GrammarError::Depth(self.config.max_depth)));
        }

        let (i, inner) =
            cut(|i: &'a str| self.parse_tier(Precedence::Additive, nesting + 1, i))(i)?;

        let closing = self.closing_delimiters(open);
        let (i, _) = cut(|i: &'a str| parse_delimiter(closing, i))(i)?;

        Ok((i, inner))
    }

    fn closing_delimiters(&self, open: char) -> &'static str {
        match (self.config.strict_delimiters, open) {
            (false, _) => ")]",
            (true, '(') => ")",
            (true, _) => "]",
        }
    }
}

pub fn parse(input: &str) -> Result<Expr, ParseError> {
    Parser::default().parse(input)
}
