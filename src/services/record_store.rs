use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;

use super::aws::describe_sdk_error;
use crate::error::GatewayError;

pub const TOPIC_KEY_ATTRIBUTE: &str = "topic_arn";
pub const SUBSCRIPTION_KEY_ATTRIBUTE: &str = "subscription_arn";

/// A mirror table and the name of its string partition key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub key_attribute: &'static str,
}

impl Table {
    pub fn topics(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_attribute: TOPIC_KEY_ATTRIBUTE,
        }
    }

    pub fn subscriptions(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_attribute: SUBSCRIPTION_KEY_ATTRIBUTE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordAttribute {
    pub name: &'static str,
    pub value: String,
}

impl RecordAttribute {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Key-value table store used as a write-through mirror of service resources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates the entry if absent, then sets each attribute unconditionally.
    async fn upsert(
        &self,
        table: &Table,
        key: &str,
        attributes: Vec<RecordAttribute>,
    ) -> Result<(), GatewayError>;

    async fn delete(&self, table: &Table, key: &str) -> Result<(), GatewayError>;
}

#[derive(Clone)]
pub struct DynamoRecordStore {
    client: DynamoClient,
}

impl DynamoRecordStore {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: DynamoClient::new(sdk_config),
        }
    }

    fn store_error(table: &Table, key: &str, message: String) -> GatewayError {
        GatewayError::RecordStore {
            table: table.name.clone(),
            key: key.to_string(),
            message,
        }
    }
}

/// `SET #a0 = :v0, #a1 = :v1, ...` for the given attribute count.
fn set_expression(count: usize) -> String {
    let assignments: Vec<String> = (0..count).map(|i| format!("#a{i} = :v{i}")).collect();
    format!("SET {}", assignments.join(", "))
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    async fn upsert(
        &self,
        table: &Table,
        key: &str,
        attributes: Vec<RecordAttribute>,
    ) -> Result<(), GatewayError> {
        let mut request = self
            .client
            .update_item()
            .table_name(&table.name)
            .key(table.key_attribute, AttributeValue::S(key.to_string()));

        // An UpdateItem with only a key still creates the item
        if !attributes.is_empty() {
            request = request.update_expression(set_expression(attributes.len()));
            for (i, attribute) in attributes.into_iter().enumerate() {
                request = request
                    .expression_attribute_names(format!("#a{i}"), attribute.name)
                    .expression_attribute_values(format!(":v{i}"), AttributeValue::S(attribute.value));
            }
        }

        request
            .send()
            .await
            .map_err(|e| Self::store_error(table, key, describe_sdk_error("UpdateItem", &e)))?;

        Ok(())
    }

    async fn delete(&self, table: &Table, key: &str) -> Result<(), GatewayError> {
        self.client
            .delete_item()
            .table_name(&table.name)
            .key(table.key_attribute, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| Self::store_error(table, key, describe_sdk_error("DeleteItem", &e)))?;

        Ok(())
    }
}
