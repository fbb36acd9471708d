use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod api;
pub mod assistant;
pub mod config;

/// Shared request state. The model name only shows up in the summary log
/// line; reply and summary text never depend on it.
#[derive(Clone)]
pub struct AppState {
    pub summary_model: String,
}

pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(state).layer(cors)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    info!(port = port, "listening");
    axum::serve(listener, app).await.expect("server failed");
}
