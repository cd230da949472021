use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::operation::RequestId;
use aws_sdk_sns::Client as SnsClient;

use super::aws::describe_sdk_error;
use crate::error::GatewayError;
use crate::models::responses::{
    CreateTopicResponse, DeleteTopicResponse, ResponseMetadata, SubscribeResponse,
    UnsubscribeResponse, HTTP_STATUS_OK,
};

/// Managed publish-subscribe service holding topics and subscriptions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Creates the topic, or returns the existing one's ARN if the name is taken.
    async fn create_topic(&self, name: &str) -> Result<CreateTopicResponse, GatewayError>;

    async fn delete_topic(&self, topic_arn: &str) -> Result<DeleteTopicResponse, GatewayError>;

    async fn subscribe(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<SubscribeResponse, GatewayError>;

    async fn unsubscribe(
        &self,
        subscription_arn: &str,
    ) -> Result<UnsubscribeResponse, GatewayError>;

    /// Region the client is bound to.
    fn region(&self) -> Option<String>;
}

pub struct SnsNotificationService {
    client: SnsClient,
}

impl SnsNotificationService {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self::from_client(SnsClient::new(sdk_config))
    }

    pub fn from_client(client: SnsClient) -> Self {
        Self { client }
    }
}

// The SDK only yields an output for 2xx replies, so a returned output is a 200.
#[async_trait]
impl NotificationService for SnsNotificationService {
    async fn create_topic(&self, name: &str) -> Result<CreateTopicResponse, GatewayError> {
        let output = self
            .client
            .create_topic()
            .name(name)
            .send()
            .await
            .map_err(|e| GatewayError::NotificationService(describe_sdk_error("CreateTopic", &e)))?;

        Ok(CreateTopicResponse {
            topic_arn: output.topic_arn().map(str::to_owned),
            response_metadata: ResponseMetadata::new(output.request_id(), HTTP_STATUS_OK),
        })
    }

    async fn delete_topic(&self, topic_arn: &str) -> Result<DeleteTopicResponse, GatewayError> {
        let output = self
            .client
            .delete_topic()
            .topic_arn(topic_arn)
            .send()
            .await
            .map_err(|e| GatewayError::NotificationService(describe_sdk_error("DeleteTopic", &e)))?;

        Ok(DeleteTopicResponse {
            response_metadata: ResponseMetadata::new(output.request_id(), HTTP_STATUS_OK),
        })
    }

    async fn subscribe(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<SubscribeResponse, GatewayError> {
        let output = self
            .client
            .subscribe()
            .topic_arn(topic_arn)
            .protocol(protocol)
            .endpoint(endpoint)
            .send()
            .await
            .map_err(|e| GatewayError::NotificationService(describe_sdk_error("Subscribe", &e)))?;

        Ok(SubscribeResponse {
            subscription_arn: output.subscription_arn().map(str::to_owned),
            response_metadata: ResponseMetadata::new(output.request_id(), HTTP_STATUS_OK),
        })
    }

    async fn unsubscribe(
        &self,
        subscription_arn: &str,
    ) -> Result<UnsubscribeResponse, GatewayError> {
        let output = self
            .client
            .unsubscribe()
            .subscription_arn(subscription_arn)
            .send()
            .await
            .map_err(|e| GatewayError::NotificationService(describe_sdk_error("Unsubscribe", &e)))?;

        Ok(UnsubscribeResponse {
            response_metadata: ResponseMetadata::new(output.request_id(), HTTP_STATUS_OK),
        })
    }

    fn region(&self) -> Option<String> {
        self.client.config().region().map(|region| region.to_string())
    }
}
