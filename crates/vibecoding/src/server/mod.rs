mod handlers;
mod ui;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use vibecoding_core::api::ErrorResponse;

use crate::agent::{AgentConnector, BridgeConnector};
use crate::config::AgentArgs;
use crate::generator::Generator;
use crate::prelude::{eprintln, *};
use crate::provider::make_provider;

#[derive(Debug, clap::Args)]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[clap(flatten)]
    pub agent: AgentArgs,
}

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub generator: Generator,
    pub agents: Arc<dyn AgentConnector>,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health))
        .route("/build", post(handlers::build))
        .route("/deploy", post(handlers::deploy))
        .route("/app", get(ui::index))
        .layer(cors)
        .with_state(state)
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let provider = make_provider(&global.provider)?;

    if global.provider.provider.requires_api_key() && global.provider.api_key().is_none() {
        log::warn!(
            "{} is not set: /build will fail until it is configured",
            global.provider.api_key_hint()
        );
    }

    let connector = BridgeConnector::new(&app.agent);
    if !connector.is_configured() {
        log::warn!("PRIVATE_KEY or RPC_URL is not set: /deploy will fail until they are configured");
    }

    let state = Arc::new(AppState {
        generator: Generator::new(provider),
        agents: Arc::new(connector),
    });

    let addr = format!("{}:{}", app.host, app.port);

    if global.verbose {
        eprintln!("Provider: {}", global.provider.provider.name());
        eprintln!("Model: {}", global.provider.model());
        eprintln!("Base URL: {}", global.provider.base_url());
        eprintln!("Agent bridge: {}", app.agent.agent_url);
        eprintln!("Chain id: {}", app.agent.chain_id);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Backend running on http://{addr}");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::CapabilityNotFound { .. } => StatusCode::NOT_IMPLEMENTED,
            Error::Configuration(_) | Error::Agent(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{self}");
        }

        let body = match self {
            Error::CapabilityNotFound { ref methods } => {
                ErrorResponse::new(self.to_string()).with_agent_methods(methods.clone())
            }
            _ => ErrorResponse::new(self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}
