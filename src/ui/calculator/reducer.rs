use crate::api::OperationResult;
use crate::calc::{parse_expression, Operation};
use crate::ui::calculator::intent::CalculatorIntent;
use crate::ui::calculator::state::{CalculatorState, Message, Phase, RESET_DISPLAY};
use crate::ui::mvi::Reducer;

pub const EMPTY_INPUT_NOTICE: &str = "Please enter a calculation";
pub const INVALID_EXPRESSION_ERROR: &str = "Invalid expression";

pub struct CalculatorReducer;

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Intent = CalculatorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CalculatorIntent::Clear => CalculatorState::default(),
            CalculatorIntent::Calculated(result) if state.is_calculating() => CalculatorState {
                display: format_number(result.result),
                phase: Phase::Idle,
                message: Some(Message::Result(result_line(&result))),
            },
            CalculatorIntent::Failed(detail) if state.is_calculating() => {
                error_state(format!("Error: {detail}"))
            }
            // Late answers, and typing while a request is in flight, are dropped
            CalculatorIntent::Calculated(_) | CalculatorIntent::Failed(_) => state,
            _ if state.is_calculating() => state,
            CalculatorIntent::Press(key) => press(state, key),
            CalculatorIntent::Type(text) => CalculatorState {
                display: text,
                phase: Phase::Entering,
                message: None,
            },
            CalculatorIntent::Backspace => backspace(state),
            CalculatorIntent::Submit => submit(state),
        }
    }
}

fn press(state: CalculatorState, key: char) -> CalculatorState {
    let is_number_key = key.is_ascii_digit() || key == '.';
    let is_operator = Operation::from_operator(key).is_some();
    if !is_number_key && !is_operator {
        return state;
    }

    let display = match state.phase {
        Phase::Entering => {
            let mut display = state.display;
            display.push(key);
            display
        }
        // Fresh entry: numbers replace the result, operators extend it
        _ if key == '.' => "0.".to_string(),
        _ if is_number_key => key.to_string(),
        _ if key == '-' && state.display == RESET_DISPLAY => key.to_string(),
        _ => format!("{}{}", state.display, key),
    };

    CalculatorState {
        display,
        phase: Phase::Entering,
        message: None,
    }
}

fn backspace(state: CalculatorState) -> CalculatorState {
    if state.phase != Phase::Entering {
        return state;
    }

    let mut display = state.display;
    display.pop();
    if display.is_empty() {
        return CalculatorState::default();
    }

    CalculatorState {
        display,
        phase: Phase::Entering,
        message: None,
    }
}

fn submit(state: CalculatorState) -> CalculatorState {
    let input = state.display.trim();
    if input.is_empty() || input == RESET_DISPLAY {
        return CalculatorState {
            display: RESET_DISPLAY.to_string(),
            phase: Phase::Idle,
            message: Some(Message::Notice(EMPTY_INPUT_NOTICE.to_string())),
        };
    }

    match parse_expression(input) {
        Ok(expression) => CalculatorState {
            display: state.display,
            phase: Phase::Calculating(expression),
            message: None,
        },
        Err(e) => {
            tracing::debug!(input, error = %e, "Rejected expression");
            error_state(INVALID_EXPRESSION_ERROR.to_string())
        }
    }
}

fn error_state(message: String) -> CalculatorState {
    CalculatorState {
        display: RESET_DISPLAY.to_string(),
        phase: Phase::Idle,
        message: Some(Message::Error(message)),
    }
}

/// `5 + 3 = 8`, `6 × 7 = 42`
pub fn result_line(result: &OperationResult) -> String {
    format!(
        "{} {} {} = {}",
        format_number(result.operands.a),
        result.operation.symbol(),
        format_number(result.operands.b),
        format_number(result.result)
    )
}

/// Shortest decimal form; `-0` shows as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
