//! Parser for single binary-operation expressions such as `10+5` or `5*-3`.
//!
//! The input is scanned right-to-left for the operator. A `-` directly after
//! another operator belongs to the right operand, which is what lets
//! `5*-3` split as `5` and `-3`. There is no precedence and no support for
//! more than one operation.

use std::fmt;

use thiserror::Error;

use crate::calc::operation::Operation;

/// Two operands and the operation joining them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedExpression {
    pub a: f64,
    pub b: f64,
    pub operation: Operation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSide {
    Left,
    Right,
}

impl fmt::Display for OperandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSide::Left => f.write_str("left"),
            OperandSide::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("expression is empty")]
    Empty,

    #[error("no operator found")]
    MissingOperator,

    #[error("{side} operand '{text}' is not a number")]
    InvalidOperand { side: OperandSide, text: String },
}

impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.operation.symbol(), self.b)
    }
}

pub fn parse_expression(input: &str) -> Result<ParsedExpression, ExpressionError> {
    let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let (split, operation) = (1..chars.len())
        .rev()
        .find_map(|i| {
            let op = Operation::from_operator(chars[i])?;
            let sign_marker =
                chars[i] == '-' && Operation::from_operator(chars[i - 1]).is_some();
            (!sign_marker).then_some((i, op))
        })
        .ok_or(ExpressionError::MissingOperator)?;

    let left: String = chars[..split].iter().collect();
    let right: String = chars[split + 1..].iter().collect();

    Ok(ParsedExpression {
        a: parse_operand(&left, OperandSide::Left)?,
        b: parse_operand(&right, OperandSide::Right)?,
        operation,
    })
}

fn parse_operand(text: &str, side: OperandSide) -> Result<f64, ExpressionError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ExpressionError::InvalidOperand {
            side,
            text: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(a: f64, b: f64, operation: Operation) -> ParsedExpression {
        ParsedExpression { a, b, operation }
    }

    #[test]
    fn simple_addition() {
        assert_eq!(parse_expression("10+5"), Ok(parsed(10.0, 5.0, Operation::Add)));
    }

    #[test]
    fn negative_second_operand() {
        assert_eq!(
            parse_expression("5*-3"),
            Ok(parsed(5.0, -3.0, Operation::Multiply))
        );
    }

    #[test]
    fn negative_first_operand() {
        assert_eq!(
            parse_expression("-3-7"),
            Ok(parsed(-3.0, 7.0, Operation::Subtract))
        );
    }

    #[test]
    fn double_minus_is_subtraction_of_negative() {
        assert_eq!(
            parse_expression("4--2"),
            Ok(parsed(4.0, -2.0, Operation::Subtract))
        );
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(
            parse_expression("  2.5 +\t3.7 "),
            Ok(parsed(2.5, 3.7, Operation::Add))
        );
    }

    #[test]
    fn display_symbols_are_accepted() {
        assert_eq!(
            parse_expression("6×7"),
            Ok(parsed(6.0, 7.0, Operation::Multiply))
        );
        assert_eq!(
            parse_expression("15÷3"),
            Ok(parsed(15.0, 3.0, Operation::Divide))
        );
    }

    #[test]
    fn round_trips_every_operator() {
        let pairs = [(10.0, 5.0), (-3.0, 7.0), (4.0, -2.0)];
        for op in Operation::ALL {
            for (a, b) in pairs {
                let text = format!("{}{}{}", a, op.input_char(), b);
                assert_eq!(
                    parse_expression(&text),
                    Ok(parsed(a, b, op)),
                    "failed on {text}"
                );
            }
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_expression(""), Err(ExpressionError::Empty));
        assert_eq!(parse_expression("   "), Err(ExpressionError::Empty));
    }

    #[test]
    fn missing_operator() {
        assert_eq!(parse_expression("42"), Err(ExpressionError::MissingOperator));
        assert_eq!(parse_expression("-42"), Err(ExpressionError::MissingOperator));
    }

    #[test]
    fn invalid_operands_yield_no_partial_result() {
        assert_eq!(
            parse_expression("5+"),
            Err(ExpressionError::InvalidOperand {
                side: OperandSide::Right,
                text: String::new(),
            })
        );
        assert_eq!(
            parse_expression("abc*2"),
            Err(ExpressionError::InvalidOperand {
                side: OperandSide::Left,
                text: "abc".to_string(),
            })
        );
        assert!(parse_expression("1+2+3").is_err());
        assert!(parse_expression("5++3").is_err());
    }

    #[test]
    fn non_finite_operands_are_rejected() {
        assert!(parse_expression("inf+1").is_err());
        assert!(parse_expression("1*NaN").is_err());
    }
}
