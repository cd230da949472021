use std::sync::Arc;

use super::identity::IdentityService;
use super::notification::NotificationService;
use super::record_store::{RecordAttribute, RecordStore, Table};
use crate::error::GatewayError;
use crate::models::arn;
use crate::models::requests::{requires_confirmation, Subscription};
use crate::models::responses::{
    CreateTopicResponse, DeleteTopicResponse, SubscribeResponse, UnsubscribeResponse,
};

/// Applies topic and subscription changes to the notification service and
/// mirrors the resulting identifiers into the record store.
///
/// The mirror is only touched after the service call has succeeded. A failed
/// mirror write is reported as [`GatewayError::RecordStore`]; the service
/// mutation is left in place.
pub struct TopicGateway {
    notification: Arc<dyn NotificationService>,
    identity: Arc<dyn IdentityService>,
    records: Arc<dyn RecordStore>,
    topics_table: Table,
    subscriptions_table: Table,
}

impl TopicGateway {
    pub fn new(
        notification: Arc<dyn NotificationService>,
        identity: Arc<dyn IdentityService>,
        records: Arc<dyn RecordStore>,
        topics_table: Table,
        subscriptions_table: Table,
    ) -> Self {
        Self {
            notification,
            identity,
            records,
            topics_table,
            subscriptions_table,
        }
    }

    pub async fn create_topic(&self, topic_name: &str) -> Result<CreateTopicResponse, GatewayError> {
        let response = self.notification.create_topic(topic_name).await?;

        if let Some(topic_arn) = response.topic_arn.as_deref() {
            self.records
                .upsert(&self.topics_table, topic_arn, Vec::new())
                .await
                .map_err(log_split_brain)?;
            tracing::info!(topic_arn = %topic_arn, "Topic created");
        }

        Ok(response)
    }

    pub async fn delete_topic(&self, topic_name: &str) -> Result<DeleteTopicResponse, GatewayError> {
        let topic_arn = self.topic_arn(topic_name).await?;
        let response = self.notification.delete_topic(&topic_arn).await?;

        if response.response_metadata.is_success() {
            self.records
                .delete(&self.topics_table, &topic_arn)
                .await
                .map_err(log_split_brain)?;
            tracing::info!(topic_arn = %topic_arn, "Topic deleted");
        } else {
            tracing::warn!(
                topic_arn = %topic_arn,
                status = response.response_metadata.http_status_code,
                "Topic deletion not confirmed, mirror left untouched"
            );
        }

        Ok(response)
    }

    pub async fn subscribe(&self, subscription: &Subscription) -> Result<SubscribeResponse, GatewayError> {
        let topic_arn = self.topic_arn(&subscription.topic_name).await?;
        let response = self
            .notification
            .subscribe(&topic_arn, &subscription.protocol, &subscription.endpoint)
            .await?;

        match response.subscription_arn.as_deref() {
            Some(_) if requires_confirmation(&subscription.protocol) => {
                tracing::info!(
                    topic_arn = %topic_arn,
                    protocol = %subscription.protocol,
                    "Subscription pending confirmation, not mirrored"
                );
            }
            Some(subscription_arn) => {
                let attributes = vec![
                    RecordAttribute::new("endpoint", subscription.endpoint.as_str()),
                    RecordAttribute::new("topic_name", subscription.topic_name.as_str()),
                    RecordAttribute::new("protocol", subscription.protocol.as_str()),
                ];
                self.records
                    .upsert(&self.subscriptions_table, subscription_arn, attributes)
                    .await
                    .map_err(log_split_brain)?;
                tracing::info!(
                    topic_arn = %topic_arn,
                    subscription_arn = %subscription_arn,
                    "Subscription created"
                );
            }
            None => {}
        }

        Ok(response)
    }

    pub async fn unsubscribe(&self, subscription_arn: &str) -> Result<UnsubscribeResponse, GatewayError> {
        let response = self.notification.unsubscribe(subscription_arn).await?;

        if response.response_metadata.is_success() {
            self.records
                .delete(&self.subscriptions_table, subscription_arn)
                .await
                .map_err(log_split_brain)?;
            tracing::info!(subscription_arn = %subscription_arn, "Subscription removed");
        }

        Ok(response)
    }

    async fn topic_arn(&self, topic_name: &str) -> Result<String, GatewayError> {
        let account_id = self.identity.caller_account_id().await?;
        let region = self.notification.region().ok_or_else(|| {
            GatewayError::NotificationService("notification service region is not configured".to_string())
        })?;

        Ok(arn::topic_arn(&region, &account_id, topic_name))
    }
}

fn log_split_brain(err: GatewayError) -> GatewayError {
    tracing::error!(error = %err, "Notification service changed but record store mirror was not updated");
    err
}
