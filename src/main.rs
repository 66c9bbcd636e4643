mod model;
mod server;

use dioxus_logger::tracing;
use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, service::admin::AdminCodeService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    dioxus_logger::init(config.log_level)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let cors = startup::cors_layer(&config)?;

    let admin_code_service = AdminCodeService::new();

    // Check for admin users and log a registration code if none exist
    startup::check_for_admin(&db, &admin_code_service).await?;

    let app = router::router()
        .with_state(AppState::new(db, admin_code_service, config.bulk.clone()))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
