pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::provider::{DataProvider, MarketData};
use crate::providers::{FallbackProvider, RemoteProvider, StaticProvider};
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Compare,
    Convert {
        amount: f64,
        from: String,
        to: String,
    },
    Countries,
}

/// Options given on the command line that override the config file.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunOptions {
    pub offline: bool,
}

/// Picks the data source: live data with the built-in sample as fallback, or
/// only the sample when offline.
pub fn build_provider(config: &AppConfig, offline: bool) -> Box<dyn DataProvider> {
    if offline {
        info!("Offline mode, using sample data");
        Box::new(StaticProvider)
    } else {
        Box::new(FallbackProvider::new(
            RemoteProvider::from_config(config),
            StaticProvider,
        ))
    }
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    options: RunOptions,
) -> Result<()> {
    info!("PPP Comparison Tool starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = build_provider(&config, options.offline || config.offline);

    let pb = cli::ui::new_spinner("Fetching PPP data and exchange rates...");
    let data = MarketData::load(provider.as_ref(), &config.countries).await;
    pb.finish_and_clear();
    let data = data?;

    match command {
        AppCommand::Compare => {
            let stdin = std::io::stdin();
            cli::compare::run(&data, stdin.lock(), std::io::stdout())
        }
        AppCommand::Convert { amount, from, to } => {
            cli::convert::run(&data, amount, &from, &to, &mut std::io::stdout())
        }
        AppCommand::Countries => {
            cli::countries::run(&data);
            Ok(())
        }
    }
}
