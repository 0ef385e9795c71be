//! Arithmetic core shared by the server and the calculator UI.
//!
//! - [`operations`]: pure `f64` functions with the domain-error policy
//! - [`operation`]: the closed set of operation names and the dispatch table
//! - [`expression`]: single-operator infix parser used by the UI

pub mod expression;
pub mod operation;
pub mod operations;

pub use expression::{parse_expression, ExpressionError, OperandSide, ParsedExpression};
pub use operation::{Operation, UnknownOperation};
pub use operations::DomainError;
