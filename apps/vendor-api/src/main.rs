use axum_helpers::server::{create_app, health_router};
use axum_helpers::JwtAuth;
use core_config::tracing::{init_tracing, install_color_eyre};
use tower_http::services::ServeDir;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Connect to MongoDB with retry
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // Initialize collection indexes
    api::init_indexes(&db).await?;

    let jwt = JwtAuth::new(&config.jwt);
    let state = AppState {
        config,
        mongo_client,
        db,
        jwt,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs, CORS, tracing, and compression
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Liveness endpoint plus static serving for uploaded documents
    let app = router
        .merge(health_router(state.config.app))
        .nest_service("/uploads", ServeDir::new(&state.config.uploads_dir));

    info!("Starting vendor API");

    create_app(app, &state.config.server).await?;

    info!("Vendor API shutdown complete");
    Ok(())
}
