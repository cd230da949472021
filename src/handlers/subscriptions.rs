use axum::{extract::State, Json};
use std::sync::Arc;

use super::RequestBody;
use crate::error::GatewayError;
use crate::models::requests::{SubscribeRequest, UnsubscribeRequest};
use crate::models::responses::{SubscribeResponse, UnsubscribeResponse};
use crate::services::AppState;

pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    RequestBody(request): RequestBody<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, GatewayError> {
    let subscription = request.validate()?;
    let response = state.gateway.subscribe(&subscription).await?;
    Ok(Json(response))
}

pub async fn unsubscribe(
    State(state): State<Arc<AppState>>,
    RequestBody(request): RequestBody<UnsubscribeRequest>,
) -> Result<Json<UnsubscribeResponse>, GatewayError> {
    let subscription_arn = request.validate()?;
    let response = state.gateway.unsubscribe(&subscription_arn).await?;
    Ok(Json(response))
}
