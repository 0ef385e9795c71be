//! Calculator screen: display, pending request and result line.

mod intent;
mod reducer;
mod session;
mod state;

pub use intent::CalculatorIntent;
pub use reducer::{
    format_number, result_line, CalculatorReducer, EMPTY_INPUT_NOTICE, INVALID_EXPRESSION_ERROR,
};
pub use session::CalculatorSession;
pub use state::{CalculatorState, Message, Phase, RESET_DISPLAY};
