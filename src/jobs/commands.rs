//! Text commands for on-demand queries.
//!
//! Parsing and reply formatting only; signal work is delegated to
//! [`AlertPipeline::run`](crate::jobs::pipeline::AlertPipeline::run) and name
//! lookups to the [`CompanyDirectory`](crate::services::CompanyDirectory).

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::jobs::context::AppContext;

pub const COMMAND_PREFIX: char = '/';

pub const HELP_TEXT: &str = "Commands:\n\
/stock <TICKER> - Get stock signals for a ticker\n\
/company <NAME> - Get the stock ticker for a company\n\
/help - Show this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Stock { ticker: String },
    Company { name: String },
    Help,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: /{command} {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Unknown command '/{0}'. Type /help for a list of commands.")]
    Unknown(String),
}

impl Command {
    /// Parse a chat line. Returns `None` for lines that are not commands.
    pub fn parse(line: &str) -> Option<Result<Command, CommandError>> {
        let body = line.trim().strip_prefix(COMMAND_PREFIX)?;
        let (name, rest) = match body.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (body, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "stock" => match rest.split_whitespace().next() {
                Some(ticker) => Ok(Command::Stock {
                    ticker: ticker.to_uppercase(),
                }),
                None => Err(CommandError::MissingArgument {
                    command: "stock",
                    usage: "<TICKER>",
                }),
            },
            "company" if rest.is_empty() => Err(CommandError::MissingArgument {
                command: "company",
                usage: "<NAME>",
            }),
            "company" => Ok(Command::Company {
                name: rest.to_string(),
            }),
            "help" => Ok(Command::Help),
            other => Err(CommandError::Unknown(other.to_string())),
        };
        Some(command)
    }
}

pub struct CommandHandler {
    ctx: Arc<AppContext>,
}

impl CommandHandler {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self { ctx }
    }

    /// Reply to a chat line, or `None` if the line is not a command.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let reply = match Command::parse(line)? {
            Ok(command) => self.execute(command).await,
            Err(e) => e.to_string(),
        };
        Some(reply)
    }

    pub async fn execute(&self, command: Command) -> String {
        debug!(command = ?command, "CommandHandler: executing {:?}", command);
        match command {
            Command::Stock { ticker } => self.ctx.pipeline.run(&ticker).await.message(),
            Command::Company { name } => match self.ctx.directory.lookup(&name) {
                Some((company, ticker)) => format!("The ticker for {} is {}.", company, ticker),
                None => format!("Sorry, I couldn't find a ticker for {}.", name),
            },
            Command::Help => HELP_TEXT.to_string(),
        }
    }
}
