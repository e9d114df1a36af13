pub mod bootstrap_config;
mod cli;
mod config;

use crate::config::load_config;
use bootstrap_config::{BootstrapConfig, Command};
use common::types::config::Config;
use common::types::errors::CatalogError;
use common::types::Catalog;
use common::util::logging;
use log::{debug, error, info};
use routing::providers::graphhopper::{GraphHopperClient, RoutingError};
use routing::ranking::{MatchRequest, TripRanker};
use std::fmt::{Display, Formatter};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::signal;

#[tokio::main]
async fn main() -> ExitCode {
    let result = run()
        .await
        .inspect_err(|err| error!(target: "main", "{}", err));

    ExitCode::from(exit_status(&result))
}

fn exit_status<T>(result: &Result<T, TripmatchError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

async fn run() -> Result<(), TripmatchError> {
    let bootstrap_config = BootstrapConfig::read();

    logging::init(bootstrap_config.clone().log_level.into());

    let Config::Version1 { routing, matching, server, trips } = load_config(&bootstrap_config)?;

    let catalog = match trips {
        Some(trips) => Catalog::from_trips(trips)?,
        None => Catalog::builtin(),
    };
    debug!(target: "main", "Catalog holds {} trips", catalog.len());

    if routing.api_key.is_none() {
        info!(target: "main", "No api key configured for {}", routing.base_url);
    }
    let provider = GraphHopperClient::new(&routing)?;
    let ranker = TripRanker::new(Arc::new(provider), &matching);

    match bootstrap_config.command {
        Command::Serve => {
            let (listener, app) = server::build(ranker, catalog, server.bind).await?;

            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    if let Err(err) = signal::ctrl_c().await {
                        error!(target: "main", "Could not listen for shutdown signal: {}", err);
                    }
                    info!(target: "main", "Received shutdown signal");
                })
                .await?;
        }
        Command::Match { origin, destination } => {
            let request = MatchRequest { origin, destination };
            let outcome = logging::run_with_spinner_async("main", "Matching trips", || {
                ranker.submit(request, &catalog)
            })
            .await;

            cli::write_outcome(&mut std::io::stdout().lock(), &outcome)?;
        }
        Command::Trips => cli::write_trips(&mut std::io::stdout().lock(), &catalog)?,
    }

    Ok(())
}

#[derive(thiserror::Error, Debug)]
pub enum TripmatchError {
    Config(#[from] config::ConfigError),
    Catalog(#[from] CatalogError),
    Routing(#[from] RoutingError),
    IO(#[from] std::io::Error),
    Server(#[from] server::ServerError),
}

impl Display for TripmatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let err: &dyn Display = match self {
            TripmatchError::Config(err) => err,
            TripmatchError::Catalog(err) => err,
            TripmatchError::Routing(err) => err,
            TripmatchError::IO(err) => err,
            TripmatchError::Server(err) => err,
        };
        let prefix = match self {
            TripmatchError::Config(_) => "Reading config file",
            TripmatchError::Catalog(_) => "Loading trip catalog",
            TripmatchError::Routing(_) => "Setting up routing client",
            TripmatchError::IO(_) => "Error during IO",
            TripmatchError::Server(_) => "Error in server",
        };
        write!(f, "{}: {}", prefix, err)
    }
}
