use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required request field is missing. Carries the fixed per-endpoint description.
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    NotificationService(String),

    #[error("{0}")]
    IdentityService(String),

    /// The notification service already applied the mutation; the mirror is now out of sync.
    #[error("record store update on table {table} failed for key {key}: {message}")]
    RecordStore {
        table: String,
        key: String,
        message: String,
    },
}

impl GatewayError {
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Validation(_) => "validation",
            GatewayError::NotificationService(_) => "notification_service",
            GatewayError::IdentityService(_) => "identity_service",
            GatewayError::RecordStore { .. } => "record_store",
        }
    }

    // Validation failures keep 500 for compatibility with existing clients.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
