use crate::api::OperationResult;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CalculatorIntent {
    /// A single key: digit, `.`, or operator (`×`/`÷` included).
    Press(char),
    /// Replace the current entry with a whole typed expression.
    Type(String),
    Backspace,
    Clear,
    Submit,
    /// The server evaluated the pending expression.
    Calculated(OperationResult),
    /// The server rejected the pending expression or could not be reached.
    Failed(String),
}

impl Intent for CalculatorIntent {}
