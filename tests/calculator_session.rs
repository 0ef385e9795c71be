mod common;

use calculator_api::calc::{Operation, ParsedExpression};
use calculator_api::ui::calculator::{
    CalculatorIntent, CalculatorSession, Message, Phase, EMPTY_INPUT_NOTICE,
};
use calculator_api::ui::repl::{render, run_repl};
use common::MockApi;

#[tokio::test]
async fn submit_issues_one_request() {
    let api = MockApi::default();
    let mut session = CalculatorSession::new(api.clone());

    for key in "10+5".chars() {
        session.dispatch(CalculatorIntent::Press(key)).await;
    }
    assert!(api.calls().is_empty());

    let state = session.dispatch(CalculatorIntent::Submit).await;
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.display, "15");
    assert_eq!(state.message, Some(Message::Result("10 + 5 = 15".to_string())));
    assert_eq!(
        api.calls(),
        vec![ParsedExpression {
            a: 10.0,
            b: 5.0,
            operation: Operation::Add,
        }]
    );
}

#[tokio::test]
async fn empty_submission_makes_no_network_call() {
    let api = MockApi::default();
    let mut session = CalculatorSession::new(api.clone());

    let state = session.dispatch(CalculatorIntent::Submit).await;
    assert_eq!(
        state.message,
        Some(Message::Notice(EMPTY_INPUT_NOTICE.to_string()))
    );

    session.evaluate("").await;
    session.evaluate("0").await;
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn invalid_expression_makes_no_network_call() {
    let api = MockApi::default();
    let mut session = CalculatorSession::new(api.clone());

    let state = session.evaluate("1+2+3").await;
    assert!(state.message.as_ref().unwrap().is_error());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn api_failure_is_rendered_as_error() {
    let api = MockApi::failing("Division by zero is not allowed");
    let mut session = CalculatorSession::new(api.clone());

    let state = session.evaluate("5/0").await;
    assert_eq!(state.display, "0");
    assert_eq!(render(state), "Error: Division by zero is not allowed");
    assert_eq!(api.calls().len(), 1);

    // Session is ready for the next input
    let state = session.dispatch(CalculatorIntent::Press('7')).await;
    assert_eq!(state.display, "7");
    assert!(state.message.is_none());
}

#[tokio::test]
async fn negative_second_operand_reaches_api() {
    let api = MockApi::default();
    let mut session = CalculatorSession::new(api.clone());

    let state = session.evaluate("5*-3").await;
    assert_eq!(state.display, "-15");
    assert_eq!(api.calls()[0].b, -3.0);
}

#[tokio::test]
async fn repl_prints_one_line_per_input() {
    let api = MockApi::default();
    let mut session = CalculatorSession::new(api.clone());
    let input: &[u8] = b"2^3\n\n10 % 3\nabc\nclear\n0\nquit\n7+7\n";
    let mut output = Vec::new();

    run_repl(&mut session, input, &mut output).await.unwrap();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "2 ^ 3 = 8",
            "10 % 3 = 1",
            "Invalid expression",
            "0",
            EMPTY_INPUT_NOTICE,
        ]
    );
    // Nothing after `quit` is evaluated
    assert_eq!(api.calls().len(), 2);
}
