use std::fmt;

use serde::Serialize;

/// Arithmetic operator of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    pub fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
        }
    }
}

/// A single two-operand question. Never changes once generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Problem {
    left: i32,
    right: i32,
    operator: Operator,
}

impl Problem {
    pub fn new(left: i32, operator: Operator, right: i32) -> Self {
        Self {
            left,
            right,
            operator,
        }
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The expected answer. Subtraction may go negative.
    pub fn correct_answer(&self) -> i64 {
        self.operator.apply(i64::from(self.left), i64::from(self.right))
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator.symbol(), self.right)
    }
}
