//! API server binary entry point

use nbpress_server::{start_server, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nbpress_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get bind address from environment or use default
    let addr = std::env::var("NBPRESS_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    // Create shared state with the production engines
    let state = AppState::new();

    tracing::info!("Starting notebook converter API server");
    start_server(&addr, state).await?;

    Ok(())
}
