use anyhow::Result;
use clap::{Parser, Subcommand};
use currency_client::core::log::init_logging;

#[derive(Parser)]
#[command(version, about = "Currency API Client")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file (defaults to ./config.json)
    #[arg(short, long = "config", value_name = "PATH", global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rate table for a base currency
    Rates {
        /// Base currency (example: USD)
        #[arg(long = "from")]
        from: Option<String>,

        /// Render the rates as a table instead of JSON
        #[arg(long)]
        table: bool,
    },
    /// Convert an amount between two currencies
    Convert {
        /// Base currency (example: USD)
        #[arg(long = "from")]
        from: Option<String>,

        /// Target currency (example: INR)
        #[arg(long)]
        to: Option<String>,

        /// Amount to convert
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,

        /// Only treat absent values as missing, so zero amounts and rates are accepted
        #[arg(long)]
        strict: bool,
    },
}

impl From<Commands> for currency_client::AppCommand {
    fn from(cmd: Commands) -> currency_client::AppCommand {
        match cmd {
            Commands::Rates { from, table } => currency_client::AppCommand::Rates { from, table },
            Commands::Convert {
                from,
                to,
                amount,
                strict,
            } => currency_client::AppCommand::Convert {
                from,
                to,
                amount,
                strict,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    let result = currency_client::run_command(
        cli.command.into(),
        cli.config_path.as_deref(),
        &mut stdout,
    )
    .await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
