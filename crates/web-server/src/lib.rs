use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use selection::SelectionService;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// The service is read-only after startup, so a plain `Arc` is enough; no
/// locking is needed to serve concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SelectionService>,
}

/// Builds the application router over the given service.
pub fn app(service: Arc<SelectionService>) -> Router {
    let app_state = Arc::new(AppState { service });
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/strategies", get(handlers::list_strategies))
        .route("/api/select-stocks", post(handlers::select_stocks))
        .with_state(app_state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, service: Arc<SelectionService>) -> anyhow::Result<()> {
    let app = app(service);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
