mod error;
mod handlers;
mod models;

use axum::{routing::post, Router};

use crate::AppState;

pub use error::ApiError;
pub use handlers::{chat, get_initial_data, not_found};
pub use models::{
    ChatRequest, ChatResponse, ErrorResponse, InitialDataRequest, InitialDataResponse,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/get-initial-data", post(get_initial_data))
        .route("/api/chat", post(chat))
        .fallback(not_found)
        .with_state(state)
}
