//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "calculator-api", version, about = "Arithmetic HTTP service and calculator")]
pub struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Address to bind, overrides server.bind_addr
        #[arg(long)]
        bind: Option<String>,
    },
    /// Evaluate one expression against a running server
    Eval {
        /// Expression such as "10+5" or "5*-3"
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Server URL, overrides client.base_url
        #[arg(long)]
        url: Option<String>,
    },
    /// Read expressions from stdin, one per line
    Repl {
        /// Server URL, overrides client.base_url
        #[arg(long)]
        url: Option<String>,
    },
}

impl Cli {
    /// Loads the config file, applies command-line overrides and validates
    /// the result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match &self.command {
            Command::Serve { bind: Some(bind) } => config.server.bind_addr = bind.clone(),
            Command::Eval { url: Some(url), .. } | Command::Repl { url: Some(url) } => {
                config.client.base_url = url.clone()
            }
            _ => {}
        }

        config.validate()?;
        Ok(config)
    }
}
