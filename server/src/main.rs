use std::sync::Arc;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use calendar_server::config::Config;
use calendar_server::routes::create_routes;
use calendar_server::state::AppState;
use calendar_server::store::SqliteEventStore;
use calendar_server::utils::error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("calendar_server=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    let store = SqliteEventStore::connect(&config.database_url, config.max_connections).await?;
    let state = Arc::new(AppState::new(Arc::new(store), config.mock_seed));

    let app = create_routes(state, &config);

    let listener = config.bind().await?;
    tracing::info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
