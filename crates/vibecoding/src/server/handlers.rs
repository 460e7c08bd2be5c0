use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use vibecoding_core::api::{
    parse_body, BuildPayload, BuildResponse, DeployPayload, DeployResponse, HealthResponse,
};

use super::AppState;
use crate::agent;
use crate::error::Error;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

pub async fn build(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<BuildResponse>, Error> {
    let request = parse_body::<BuildPayload>(&body)?.into_request()?;

    log::info!(
        "/build: {} chars, frontend={}",
        request.prompt.chars().count(),
        request.frontend
    );

    let generation = state.generator.generate(&request).await?;

    log::info!("/build: answered from {}", generation.contract.source());

    Ok(Json(generation.into()))
}

pub async fn deploy(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<DeployResponse>, Error> {
    let request = parse_body::<DeployPayload>(&body)?.into_request()?;

    log::info!(
        "/deploy: {} bytes of source, {} constructor args",
        request.code.len(),
        request.constructor_args.len()
    );

    let receipt = agent::deploy(state.agents.as_ref(), &request).await?;

    log::info!("/deploy: {}", receipt.method.info());

    Ok(Json(receipt.into()))
}
