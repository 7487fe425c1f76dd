use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operator::Operator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Value(f64),
    Binary(Operator, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn binary(op: Operator, left: Expr, right: Expr) -> Expr {
        Expr::Binary(op, Box::new(left), Box::new(right))
    }

    /// Reduces the tree to a single value. Never fails, numeric edge cases
    /// surface as infinity or NaN
    pub fn evaluate(&self) -> f64 {
        match self {
            Expr::Value(v) => *v,
            Expr::Binary(op, l, r) => op.apply(l.evaluate(), r.evaluate()),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Expr::Value(_) => 1,
            Expr::Binary(_, l, r) => 1 + l.depth().max(r.depth()),
        }
    }
}

pub fn evaluate(e: &Expr) -> f64 {
    e.evaluate()
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Value(v) => write!(f, "{}", v),
            Expr::Binary(op, l, r) => write!(f, "({} {} {})", l, op, r),
        }
    }
}

impl From<f64> for Expr {
    fn from(v: f64) -> Self {
        Expr::Value(v)
    }
}
