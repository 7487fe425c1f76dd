use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

/// A binary infix operator
#[derive(
    Debug, Display, Clone, Copy, Hash, PartialEq, Eq, EnumIter, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    #[display(fmt = "+")]
    #[strum(serialize = "+")]
    Add,
    #[display(fmt = "-")]
    #[strum(serialize = "-")]
    Sub,
    #[display(fmt = "*")]
    #[strum(serialize = "*")]
    Mul,
    #[display(fmt = "/")]
    #[strum(serialize = "/")]
    Div,
    #[display(fmt = "^")]
    #[strum(serialize = "^")]
    Pow,
}

/// Precedence tiers, loosest binding first
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum Precedence {
    Additive,
    Multiplicative,
    Power,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Operator> {
        Operator::iter().find(|op| op.symbol() == symbol)
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Additive,
            Self::Mul | Self::Div => Precedence::Multiplicative,
            Self::Pow => Precedence::Power,
        }
    }

    /// Reduces two operands. No checks are made for division by zero or
    /// invalid powers, these produce infinity or NaN
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

impl Precedence {
    /// The operators that split an expression at this tier
    pub fn operators(self) -> impl Iterator<Item = Operator> {
        Operator::iter().filter(move |op| op.precedence() == self)
    }

    /// The next tier that binds more tightly, `None` once only atoms remain
    pub fn tighter(self) -> Option<Precedence> {
        match self {
            Self::Additive => Some(Self::Multiplicative),
            Self::Multiplicative => Some(Self::Power),
            Self::Power => None,
        }
    }

    pub fn parse_operator(self, symbol: char) -> Option<Operator> {
        self.operators().find(|op| op.symbol() == symbol)
    }
}
