use super::client::BackendClient;
use super::error::FrontendError;
use super::page::{FormState, render_page};
use super::render::render_reply;
use crate::config::{AppConfig, FrontendConfig};
use crate::server::dto::RestChatRequest;
use crate::server::shutdown_signal;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

pub struct FrontendState {
    client: BackendClient,
    allowed_models: Vec<String>,
}

impl FrontendState {
    pub fn new(client: BackendClient, allowed_models: Vec<String>) -> Self {
        Self {
            client,
            allowed_models,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, FrontendError> {
        let client = BackendClient::new(
            &config.frontend.backend_url,
            config.frontend.request_timeout,
        )?;
        Ok(Self::new(client, config.allowed_models.clone()))
    }

    fn default_form(&self) -> FormState {
        FormState {
            model_name: self.allowed_models.first().cloned().unwrap_or_default(),
            ..FormState::default()
        }
    }
}

/// Form fields as posted by the browser; an unchecked box is absent.
#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub system_prompt: String,
    #[serde(default)]
    pub model_name: String,
    #[serde(default)]
    pub allow_search: Option<String>,
    #[serde(default)]
    pub query: String,
}

impl From<AskForm> for FormState {
    fn from(form: AskForm) -> Self {
        Self {
            system_prompt: form.system_prompt,
            model_name: form.model_name,
            allow_search: form.allow_search.is_some(),
            query: form.query,
        }
    }
}

async fn index(State(state): State<Arc<FrontendState>>) -> Html<String> {
    Html(render_page(&state.allowed_models, &state.default_form(), None))
}

async fn ask(State(state): State<Arc<FrontendState>>, Form(form): Form<AskForm>) -> Html<String> {
    let form = FormState::from(form);
    if form.query.trim().is_empty() {
        debug!("Ignoring submission without a query");
        return Html(render_page(&state.allowed_models, &form, None));
    }

    let request = RestChatRequest {
        model_name: form.model_name.clone(),
        system_prompt: form.system_prompt.clone(),
        messages: vec![form.query.clone()],
        allow_search: form.allow_search,
    };
    let reply = render_reply(state.client.chat(&request).await);
    Html(render_page(&state.allowed_models, &form, Some(&reply)))
}

pub fn router(state: FrontendState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub async fn serve(state: FrontendState, config: &FrontendConfig) -> Result<(), FrontendError> {
    let addr = config.bind;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| FrontendError::Bind { addr, source })?;
    info!(%addr, backend = config.backend_url.as_str(), "Web form ready");

    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(FrontendError::Serve)
}
