use serde::Deserialize;

use crate::error::GatewayError;

/// Protocols whose subscriptions stay pending until the recipient confirms
/// by mail. SNS answers with a placeholder instead of a subscription ARN.
/// `email-json` is included on purpose even though earlier deployments only
/// skipped plain `email`: it returns the same placeholder.
const CONFIRMATION_PROTOCOLS: [&str; 2] = ["email", "email-json"];

pub fn requires_confirmation(protocol: &str) -> bool {
    CONFIRMATION_PROTOCOLS.contains(&protocol)
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTopicRequest {
    pub topic_name: Option<String>,
}

impl CreateTopicRequest {
    pub fn validate(self) -> Result<String, GatewayError> {
        self.topic_name
            .ok_or(GatewayError::Validation("Error creating topic"))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteTopicRequest {
    pub topic_name: Option<String>,
}

impl DeleteTopicRequest {
    pub fn validate(self) -> Result<String, GatewayError> {
        self.topic_name
            .ok_or(GatewayError::Validation("Error deleting topic"))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SubscribeRequest {
    pub topic_name: Option<String>,
    pub protocol: Option<String>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub topic_name: String,
    pub protocol: String,
    pub endpoint: String,
}

impl SubscribeRequest {
    pub fn validate(self) -> Result<Subscription, GatewayError> {
        match (self.topic_name, self.protocol, self.endpoint) {
            (Some(topic_name), Some(protocol), Some(endpoint)) => Ok(Subscription {
                topic_name,
                protocol,
                endpoint,
            }),
            _ => Err(GatewayError::Validation("Error subscribing")),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UnsubscribeRequest {
    pub subscription_arn: Option<String>,
}

impl UnsubscribeRequest {
    pub fn validate(self) -> Result<String, GatewayError> {
        self.subscription_arn
            .ok_or(GatewayError::Validation("Error unsubscribing"))
    }
}
