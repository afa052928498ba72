use std::net::SocketAddr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use recyclo_api::{api, config, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set subscriber");

    // Load configuration
    let config = config::Config::from_env()?;

    // Open the local data store
    let store = db::Store::open(&config.data_dir)?;
    info!("Opened data store at {}", config.data_dir.display());

    // Build our application with routes
    let app = api::router::create_router(store, config.clone());

    // Run our application
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
