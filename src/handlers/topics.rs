use axum::{extract::State, Json};
use std::sync::Arc;

use super::RequestBody;
use crate::error::GatewayError;
use crate::models::requests::{CreateTopicRequest, DeleteTopicRequest};
use crate::models::responses::{CreateTopicResponse, DeleteTopicResponse};
use crate::services::AppState;

pub async fn create_topic(
    State(state): State<Arc<AppState>>,
    RequestBody(request): RequestBody<CreateTopicRequest>,
) -> Result<Json<CreateTopicResponse>, GatewayError> {
    let topic_name = request.validate()?;
    let response = state.gateway.create_topic(&topic_name).await?;
    Ok(Json(response))
}

pub async fn delete_topic(
    State(state): State<Arc<AppState>>,
    RequestBody(request): RequestBody<DeleteTopicRequest>,
) -> Result<Json<DeleteTopicResponse>, GatewayError> {
    let topic_name = request.validate()?;
    let response = state.gateway.delete_topic(&topic_name).await?;
    Ok(Json(response))
}
