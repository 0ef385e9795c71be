use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calc::operations::{self, DomainError};

/// The six supported binary operations.
///
/// This enum is the dispatch table: [`Operation::apply`] matches on it
/// exhaustively, so every name has exactly one implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Operation '{0}' not found")]
pub struct UnknownOperation(pub String);

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Modulo,
    ];

    /// Name used in URL paths and in the `operation` field of responses.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Modulo => "modulo",
        }
    }

    /// Symbol shown to the user, e.g. in `6 × 7 = 42`.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Power => "^",
            Operation::Modulo => "%",
        }
    }

    /// Operator character as typed into an expression.
    pub fn input_char(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
            Operation::Power => '^',
            Operation::Modulo => '%',
        }
    }

    /// Maps a typed operator character; `×` and `÷` are accepted as aliases.
    pub fn from_operator(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' | '×' => Some(Operation::Multiply),
            '/' | '÷' => Some(Operation::Divide),
            '^' => Some(Operation::Power),
            '%' => Some(Operation::Modulo),
            _ => None,
        }
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64, DomainError> {
        match self {
            Operation::Add => operations::add(a, b),
            Operation::Subtract => operations::subtract(a, b),
            Operation::Multiply => operations::multiply(a, b),
            Operation::Divide => operations::divide(a, b),
            Operation::Power => operations::power(a, b),
            Operation::Modulo => operations::modulo(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
