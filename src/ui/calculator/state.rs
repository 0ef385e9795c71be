use crate::calc::ParsedExpression;
use crate::ui::mvi::UiState;

/// Value shown on the display after `Clear` and after any error.
pub const RESET_DISPLAY: &str = "0";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    /// Display holds `"0"` or the previous result.
    #[default]
    Idle,
    /// The user has typed at least one character.
    Entering,
    /// A parsed expression is waiting for the server's answer.
    Calculating(ParsedExpression),
}

/// Line shown under the display.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// e.g. `5 + 3 = 8`
    Result(String),
    Notice(String),
    Error(String),
}

impl Message {
    pub fn text(&self) -> &str {
        match self {
            Message::Result(text) | Message::Notice(text) | Message::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Message::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub display: String,
    pub phase: Phase,
    pub message: Option<Message>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: RESET_DISPLAY.to_string(),
            phase: Phase::Idle,
            message: None,
        }
    }
}

impl UiState for CalculatorState {}

impl CalculatorState {
    /// Expression that still needs a network round trip, if any.
    pub fn pending(&self) -> Option<ParsedExpression> {
        match self.phase {
            Phase::Calculating(expression) => Some(expression),
            _ => None,
        }
    }

    pub fn is_calculating(&self) -> bool {
        self.pending().is_some()
    }
}
