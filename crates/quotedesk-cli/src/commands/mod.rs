mod backend_test;
mod decode;
mod search;

use serde_json::Value;

use quotedesk_core::ClientConfig;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a command produced, in both renderings.
#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    pub text: String,
    pub test_failed: bool,
}

impl CommandResult {
    pub fn ok(data: Value, text: impl Into<String>) -> Self {
        Self {
            data,
            text: text.into(),
            test_failed: false,
        }
    }

    pub fn with_test_failed(mut self, test_failed: bool) -> Self {
        self.test_failed = test_failed;
        self
    }

    /// Under `--strict`, a failed backend test fails the whole command.
    pub fn enforce_strict(&self, strict: bool) -> Result<(), CliError> {
        if strict && self.test_failed {
            return Err(CliError::StrictModeViolation);
        }
        Ok(())
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    match &cli.command {
        Command::Test => {
            let config = ClientConfig::from_env(cli.base_url.as_deref(), cli.timeout_ms)?;
            tracing::debug!(
                base_url = config.base_url(),
                mock = cli.mock,
                "resolved client config"
            );
            backend_test::run(config, cli.mock).await
        }
        Command::Search(args) => search::run(args),
        Command::Decode(args) => decode::run(args),
    }
}
