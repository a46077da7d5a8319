// File: crates/services/calendra_backend/src/main.rs
use calendra_backend::{build_app, AppState, StartupError};
use calendra_common::logging;
use calendra_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error!("{}", err);
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Arc::new(load_config()?);
    logging::init_from_config(&config.logging);

    let state = AppState::new(config.clone()).await?;
    let app = build_app(&state)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
