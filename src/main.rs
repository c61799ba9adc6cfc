use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod controllers;
mod models;
mod routers;
mod state;

use config::Config;
use routers::{health_check_route, recommend_route, root_route, search_route};
use state::AppState;

fn app(state: AppState) -> Router {
    // CORS stays wide open: the frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        .route("/recommend", post(recommend_route))
        .route("/search", post(search_route))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let config = Config::from_env();
    let state = AppState::from_config(&config);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .unwrap();

    info!("🎵 AI Music Backend listening on port {}", config.port);
    info!("📡 Model service at {}", config.model_service_url);

    axum::serve(listener, app(state)).await.unwrap();
}
