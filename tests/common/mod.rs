#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tower::ServiceExt;

use topic_gateway::config::{Config, LogFormat};
use topic_gateway::create_router;
use topic_gateway::error::GatewayError;
use topic_gateway::models::responses::{
    CreateTopicResponse, DeleteTopicResponse, ResponseMetadata, SubscribeResponse,
    UnsubscribeResponse,
};
use topic_gateway::services::identity::IdentityService;
use topic_gateway::services::notification::NotificationService;
use topic_gateway::services::record_store::{RecordAttribute, RecordStore, Table};
use topic_gateway::services::AppState;

pub const REGION: &str = "us-west-2";
pub const ACCOUNT: &str = "111122223333";
pub const TOPICS_TABLE: &str = "gateway-topics";
pub const SUBSCRIPTIONS_TABLE: &str = "gateway-subscriptions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateTopic(String),
    DeleteTopic(String),
    Subscribe {
        topic_arn: String,
        protocol: String,
        endpoint: String,
    },
    Unsubscribe(String),
    CallerAccountId,
    Upsert {
        table: String,
        key: String,
        attributes: Vec<(String, String)>,
    },
    Delete {
        table: String,
        key: String,
    },
}

/// Stands in for SNS, STS and DynamoDB at once and records every call it receives.
pub struct FakeAws {
    pub calls: Mutex<Vec<Call>>,
    pub topic_arn: Option<String>,
    pub subscription_arn: Option<String>,
    pub status: u16,
    pub service_error: Option<String>,
    pub record_store_fails: bool,
}

impl Default for FakeAws {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            topic_arn: None,
            subscription_arn: None,
            status: 200,
            service_error: None,
            record_store_fails: false,
        }
    }
}

impl FakeAws {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn record_store_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Upsert { .. } | Call::Delete { .. }))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    fn service_result(&self) -> Result<(), GatewayError> {
        match &self.service_error {
            Some(message) => Err(GatewayError::NotificationService(message.clone())),
            None => Ok(()),
        }
    }

    fn metadata(&self) -> ResponseMetadata {
        ResponseMetadata::new(Some("fake-request-id"), self.status)
    }
}

#[async_trait]
impl NotificationService for FakeAws {
    async fn create_topic(&self, name: &str) -> Result<CreateTopicResponse, GatewayError> {
        self.record(Call::CreateTopic(name.to_string()));
        self.service_result()?;
        Ok(CreateTopicResponse {
            topic_arn: self.topic_arn.clone(),
            response_metadata: self.metadata(),
        })
    }

    async fn delete_topic(&self, topic_arn: &str) -> Result<DeleteTopicResponse, GatewayError> {
        self.record(Call::DeleteTopic(topic_arn.to_string()));
        self.service_result()?;
        Ok(DeleteTopicResponse {
            response_metadata: self.metadata(),
        })
    }

    async fn subscribe(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<SubscribeResponse, GatewayError> {
        self.record(Call::Subscribe {
            topic_arn: topic_arn.to_string(),
            protocol: protocol.to_string(),
            endpoint: endpoint.to_string(),
        });
        self.service_result()?;
        Ok(SubscribeResponse {
            subscription_arn: self.subscription_arn.clone(),
            response_metadata: self.metadata(),
        })
    }

    async fn unsubscribe(&self, subscription_arn: &str) -> Result<UnsubscribeResponse, GatewayError> {
        self.record(Call::Unsubscribe(subscription_arn.to_string()));
        self.service_result()?;
        Ok(UnsubscribeResponse {
            response_metadata: self.metadata(),
        })
    }

    fn region(&self) -> Option<String> {
        Some(REGION.to_string())
    }
}

#[async_trait]
impl IdentityService for FakeAws {
    async fn caller_account_id(&self) -> Result<String, GatewayError> {
        self.record(Call::CallerAccountId);
        Ok(ACCOUNT.to_string())
    }
}

#[async_trait]
impl RecordStore for FakeAws {
    async fn upsert(
        &self,
        table: &Table,
        key: &str,
        attributes: Vec<RecordAttribute>,
    ) -> Result<(), GatewayError> {
        self.record(Call::Upsert {
            table: table.name.clone(),
            key: key.to_string(),
            attributes: attributes
                .into_iter()
                .map(|a| (a.name.to_string(), a.value))
                .collect(),
        });
        self.record_store_result(table, key)
    }

    async fn delete(&self, table: &Table, key: &str) -> Result<(), GatewayError> {
        self.record(Call::Delete {
            table: table.name.clone(),
            key: key.to_string(),
        });
        self.record_store_result(table, key)
    }
}

impl FakeAws {
    fn record_store_result(&self, table: &Table, key: &str) -> Result<(), GatewayError> {
        if self.record_store_fails {
            return Err(GatewayError::RecordStore {
                table: table.name.clone(),
                key: key.to_string(),
                message: "An error occurred (ResourceNotFoundException) when calling the UpdateItem operation: Requested resource not found".to_string(),
            });
        }
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        topics_table_name: TOPICS_TABLE.to_string(),
        subscriptions_table_name: SUBSCRIPTIONS_TABLE.to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        aws_endpoint_url: None,
        aws_operation_timeout_ms: None,
        log_format: LogFormat::Text,
    }
}

pub fn app(fake: Arc<FakeAws>) -> Router {
    let state = AppState::with_services(&test_config(), fake.clone(), fake.clone(), fake);
    create_router(Arc::new(state))
}

pub async fn post_json(app: Router, path: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get_text(app: Router, path: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
