//! Service responses returned to the caller as-is, using the SNS wire field names.

use serde::{Deserialize, Serialize};

pub const HTTP_STATUS_OK: u16 = 200;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "HTTPStatusCode")]
    pub http_status_code: u16,
}

impl ResponseMetadata {
    pub fn new(request_id: Option<&str>, http_status_code: u16) -> Self {
        Self {
            request_id: request_id.map(str::to_owned),
            http_status_code,
        }
    }

    pub fn is_success(&self) -> bool {
        self.http_status_code == HTTP_STATUS_OK
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTopicResponse {
    #[serde(rename = "TopicArn", skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
    #[serde(rename = "ResponseMetadata")]
    pub response_metadata: ResponseMetadata,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTopicResponse {
    #[serde(rename = "ResponseMetadata")]
    pub response_metadata: ResponseMetadata,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    #[serde(rename = "SubscriptionArn", skip_serializing_if = "Option::is_none")]
    pub subscription_arn: Option<String>,
    #[serde(rename = "ResponseMetadata")]
    pub response_metadata: ResponseMetadata,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsubscribeResponse {
    #[serde(rename = "ResponseMetadata")]
    pub response_metadata: ResponseMetadata,
}
