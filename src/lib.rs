pub mod cli;
pub mod core;
pub mod providers;

use crate::core::{AppConfig, LookupMode, RateProvider};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Rates {
        from: Option<String>,
        table: bool,
    },
    Convert {
        from: Option<String>,
        to: Option<String>,
        amount: Option<f64>,
        strict: bool,
    },
}

/// Resolves configuration, builds the HTTP client and runs `command`.
///
/// Failed lookups are reported on `out` and still return `Ok`; only errors
/// writing output or building the client surface as `Err`.
pub async fn run_command<W: Write>(
    command: AppCommand,
    config_path: Option<&str>,
    out: &mut W,
) -> Result<()> {
    info!("Currency client starting...");

    let config = AppConfig::resolve(config_path);
    debug!("Resolved config: {config:#?}");

    let provider = providers::HttpRateClient::new(&config)?;
    execute(command, &provider, out).await
}

pub async fn execute<W: Write>(
    command: AppCommand,
    provider: &dyn RateProvider,
    out: &mut W,
) -> Result<()> {
    match command {
        AppCommand::Rates { from, table } => {
            cli::rates::run(provider, from.as_deref(), table, out).await
        }
        AppCommand::Convert {
            from,
            to,
            amount,
            strict,
        } => {
            let mode = if strict {
                LookupMode::Strict
            } else {
                LookupMode::Lenient
            };
            cli::convert::run(provider, from.as_deref(), to.as_deref(), amount, mode, out).await
        }
    }
}
