use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use pppx::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Use the built-in sample data instead of fetching
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for pppx::AppCommand {
    fn from(cmd: Commands) -> pppx::AppCommand {
        match cmd {
            Commands::Compare => pppx::AppCommand::Compare,
            Commands::Convert { amount, from, to } => {
                pppx::AppCommand::Convert { amount, from, to }
            }
            Commands::Countries => pppx::AppCommand::Countries,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Interactively compare purchasing power between two countries
    Compare,
    /// Convert an amount from one country's currency to another by PPP
    Convert {
        /// Amount in the source country's currency
        amount: f64,
        /// Source country code, e.g. US
        from: String,
        /// Target country code, e.g. IN
        to: String,
    },
    /// List countries with their PPP factors and exchange rates
    Countries,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = pppx::RunOptions {
        offline: cli.offline,
    };
    let result = match cli.command {
        Some(Commands::Setup) => pppx::cli::setup::setup(),
        Some(cmd) => pppx::run_command(cmd.into(), cli.config_path.as_deref(), options).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
