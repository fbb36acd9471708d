use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{assistant, AppState};

use super::error::ApiError;
use super::models::{
    ChatRequest, ChatResponse, ErrorResponse, InitialDataRequest, InitialDataResponse,
};

const MISSING_SALESFORCE_DATA: &str = "Missing required Salesforce data from the extension.";
const MISSING_CHAT_FIELDS: &str = "Missing question or aiModel.";

const PLACEHOLDER_USERNAME: &str = "Prateek (from Server)";

pub async fn get_initial_data(
    State(state): State<AppState>,
    payload: Result<Json<InitialDataRequest>, JsonRejection>,
) -> Result<Json<InitialDataResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::Validation(MISSING_SALESFORCE_DATA))?;
    info!(
        salesforce_host = %request.salesforce_host,
        flow_id = %request.flow_id,
        "received request for initial data"
    );

    if request.session_id.is_empty()
        || request.salesforce_host.is_empty()
        || request.flow_id.is_empty()
    {
        return Err(ApiError::Validation(MISSING_SALESFORCE_DATA));
    }

    let summary = assistant::flow_summary(&request.flow_id, &state.summary_model);
    Ok(Json(InitialDataResponse {
        username: PLACEHOLDER_USERNAME.to_string(),
        summary: summary.to_string(),
    }))
}

pub async fn chat(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::Validation(MISSING_CHAT_FIELDS))?;
    info!(
        question = %request.question,
        ai_model = %request.ai_model,
        "received chat message"
    );

    if request.question.is_empty() || request.ai_model.is_empty() {
        return Err(ApiError::Validation(MISSING_CHAT_FIELDS));
    }

    let reply = assistant::chat_reply(&request.question, &request.ai_model);
    Ok(Json(ChatResponse {
        reply: reply.to_string(),
    }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
