use std::process::ExitCode;

use clap::Parser;

use calculator_api::api::{init_tracing, CalculatorServer};
use calculator_api::cli::{Cli, Command};
use calculator_api::client::CalculatorClient;
use calculator_api::ui::calculator::CalculatorSession;
use calculator_api::ui::repl::{render, run_repl};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();
    let config = cli.resolve_config()?;

    match cli.command {
        Command::Serve { .. } => {
            let server = CalculatorServer::bind(&config.server).await?;
            server.run().await?;
        }
        Command::Eval { expression, .. } => {
            let client = CalculatorClient::new(&config.client)?;
            let mut session = CalculatorSession::new(client);
            let state = session.evaluate(expression).await;
            println!("{}", render(state));

            if state.message.as_ref().is_some_and(|m| m.is_error()) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Repl { .. } => {
            let client = CalculatorClient::new(&config.client)?;
            let mut session = CalculatorSession::new(client);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_repl(&mut session, stdin, tokio::io::stdout()).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
