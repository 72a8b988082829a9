use dioxus_logger::tracing::{self, Level};
use tokio::net::TcpListener;

use crate::server::{config::Config, error::Error, model::app::AppState, region, router};

/// Initialize the logger, defaulting to `INFO`
pub fn init_logger() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Build the state shared by every handler, warning about regions that will fail closed
pub fn build_state(config: Config) -> AppState {
    for region in region::REGIONS {
        if config.connection(region.database).is_none() {
            tracing::warn!(
                "No connection configured for database {}, {} will be reported as unavailable",
                region.database,
                region.project
            );
        }
    }

    AppState::new(config)
}

/// Bind the configured address and serve the API until the process is stopped
pub async fn serve(config: Config) -> Result<(), Error> {
    let bind_address = config.bind_address;
    let state = build_state(config);

    let listener = TcpListener::bind(bind_address).await?;

    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, router::routes().with_state(state)).await?;

    Ok(())
}

/// Load the configuration from the environment and serve the API
pub async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    serve(config).await
}
