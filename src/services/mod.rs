pub mod aws;
pub mod gateway;
pub mod identity;
pub mod notification;
pub mod record_store;

use std::sync::Arc;

use crate::config::Config;
use gateway::TopicGateway;
use identity::{IdentityService, StsIdentityService};
use notification::{NotificationService, SnsNotificationService};
use record_store::{DynamoRecordStore, RecordStore, Table};

pub struct AppState {
    pub gateway: TopicGateway,
}

impl AppState {
    /// Builds the AWS clients once; they are shared by every request.
    pub async fn new(config: &Config) -> Self {
        let sdk_config = aws::load_sdk_config(config).await;
        tracing::info!(
            region = sdk_config.region().map(|r| r.as_ref()).unwrap_or("unset"),
            topics_table = %config.topics_table_name,
            subscriptions_table = %config.subscriptions_table_name,
            "AWS clients configured"
        );

        let notification = Arc::new(SnsNotificationService::new(&sdk_config));
        let identity = Arc::new(StsIdentityService::new(&sdk_config));
        let records = Arc::new(DynamoRecordStore::new(&sdk_config));

        Self::with_services(config, notification, identity, records)
    }

    pub fn with_services(
        config: &Config,
        notification: Arc<dyn NotificationService>,
        identity: Arc<dyn IdentityService>,
        records: Arc<dyn RecordStore>,
    ) -> Self {
        let gateway = TopicGateway::new(
            notification,
            identity,
            records,
            Table::topics(config.topics_table_name.clone()),
            Table::subscriptions(config.subscriptions_table_name.clone()),
        );

        Self { gateway }
    }
}
