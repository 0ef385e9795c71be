use crate::client::CalculatorApi;
use crate::ui::calculator::intent::CalculatorIntent;
use crate::ui::calculator::reducer::CalculatorReducer;
use crate::ui::calculator::state::CalculatorState;
use crate::ui::mvi::Reducer;

/// Drives a [`CalculatorState`] and performs the one network call a
/// submitted expression needs.
pub struct CalculatorSession<A> {
    api: A,
    state: CalculatorState,
}

impl<A: CalculatorApi> CalculatorSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: CalculatorState::default(),
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Applies `intent`; if that leaves an expression pending, evaluates it
    /// and applies the outcome before returning.
    pub async fn dispatch(&mut self, intent: CalculatorIntent) -> &CalculatorState {
        self.apply(intent);

        if let Some(expression) = self.state.pending() {
            let outcome = match self.api.calculate(&expression).await {
                Ok(result) => CalculatorIntent::Calculated(result),
                Err(e) => {
                    tracing::warn!(expression = %expression, error = %e, "Calculation failed");
                    CalculatorIntent::Failed(e.detail())
                }
            };
            self.apply(outcome);
        }

        &self.state
    }

    /// Types `text` as a fresh entry and submits it.
    pub async fn evaluate(&mut self, text: impl Into<String>) -> &CalculatorState {
        self.apply(CalculatorIntent::Type(text.into()));
        self.dispatch(CalculatorIntent::Submit).await
    }

    fn apply(&mut self, intent: CalculatorIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = CalculatorReducer::reduce(state, intent);
    }
}
