pub mod health;
pub mod subscriptions;
pub mod topics;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::GatewayError;

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            GatewayError::Validation(description) => {
                tracing::warn!(description = %description, "Rejected request with missing fields");
            }
            _ => tracing::error!(kind = self.kind(), error = %self, "Request failed"),
        }

        (
            self.status_code(),
            Json(json!({
                "error": self.kind(),
                "description": self.to_string(),
            })),
        )
            .into_response()
    }
}

/// JSON body extractor that never rejects on content. A body that is not a
/// JSON object of the expected shape yields `T::default()`, so the request
/// fails presence validation like any other request with missing fields.
pub struct RequestBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for RequestBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let value = serde_json::from_slice(&bytes).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "Request body did not decode, treating all fields as missing");
            T::default()
        });

        Ok(Self(value))
    }
}
