//! Line-oriented front end for the calculator session.
//!
//! Each non-empty line is submitted as one expression. `c`/`clear` resets
//! the display, `q`/`quit` ends the loop.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::client::CalculatorApi;
use crate::ui::calculator::{CalculatorIntent, CalculatorSession, CalculatorState};

/// Text shown for a state: the message line if there is one, else the display.
pub fn render(state: &CalculatorState) -> String {
    match &state.message {
        Some(message) => message.text().to_string(),
        None => state.display.clone(),
    }
}

pub async fn run_repl<A, R, W>(
    session: &mut CalculatorSession<A>,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    A: CalculatorApi,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let state = match line.trim() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "c" | "clear" => session.dispatch(CalculatorIntent::Clear).await,
            expression => session.evaluate(expression).await,
        };

        output.write_all(render(state).as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    Ok(())
}
