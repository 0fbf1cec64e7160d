use super::dto::{ErrorResponse, HealthResponse, RestChatRequest, RestChatResponse};
use super::routes;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(routes::chat::chat_handler, routes::health::health_handler),
    components(schemas(RestChatRequest, RestChatResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "chat", description = "Ask the agent a question"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
