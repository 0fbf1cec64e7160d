use super::super::dto::{ErrorResponse, RestChatRequest, RestChatResponse};
use super::super::state::ServerState;
use crate::agent::{AgentError, AgentQuery};
use crate::model::ModelProvider;
use crate::types::Query;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

type Rejection = (StatusCode, Json<ErrorResponse>);

fn reject(status: StatusCode, error: impl Into<String>) -> Rejection {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

fn agent_failure_status(error: &AgentError) -> StatusCode {
    if error.is_upstream() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = RestChatRequest,
    responses(
        (status = 200, description = "Agent answered", body = RestChatResponse),
        (status = 400, description = "Model not allowed or no messages", body = ErrorResponse),
        (status = 500, description = "Backend is missing a dependency", body = ErrorResponse),
        (status = 502, description = "Model provider failed", body = ErrorResponse)
    )
)]
pub async fn chat_handler<P: ModelProvider + 'static>(
    State(state): State<Arc<ServerState<P>>>,
    Json(payload): Json<RestChatRequest>,
) -> Result<Json<RestChatResponse>, Rejection> {
    let RestChatRequest {
        model_name,
        system_prompt,
        messages,
        allow_search,
    } = payload;
    let request_id = Uuid::new_v4();

    info!(
        %request_id,
        model = model_name.as_str(),
        allow_search,
        messages = messages.len(),
        "Received /chat request"
    );

    if !state.is_model_allowed(&model_name) {
        warn!(%request_id, model = model_name.as_str(), "Rejecting /chat request for model outside allow-list");
        return Err(reject(StatusCode::BAD_REQUEST, "Invalid model name"));
    }

    let query = Query::from(messages);
    if query.is_blank() {
        warn!(%request_id, "Rejecting /chat request without messages");
        return Err(reject(StatusCode::BAD_REQUEST, "messages cannot be empty"));
    }

    let span = info_span!("chat", %request_id, model = model_name.as_str());
    let result = state
        .orchestrator()
        .respond(AgentQuery {
            model: model_name,
            query,
            allow_search,
            system_prompt,
        })
        .instrument(span)
        .await;

    match result {
        Ok(response) => {
            info!(%request_id, "Chat request completed successfully");
            Ok(Json(RestChatResponse { response }))
        }
        Err(err) => {
            let status = agent_failure_status(&err);
            error!(%request_id, %status, error = %err, "Agent run failed");
            Err(reject(
                status,
                format!("Failed to get AI response | Error: {err}"),
            ))
        }
    }
}
