//! Roadplan console binary
//!
//! Interactive menu for recording cities, roads and road budgets.

use roadplan_cli::config::DEFAULT_LOG_FILTER;
use roadplan_cli::{AppConfig, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so the menu transcript on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::default();
    tracing::info!("Starting roadplan console");
    tracing::info!("  Cities: {:?}", config.cities_file);
    tracing::info!("  Roads: {:?}", config.roads_file);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(&config, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
