use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sts::Client as StsClient;

use super::aws::describe_sdk_error;
use crate::error::GatewayError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Account id of the credentials the gateway runs with.
    async fn caller_account_id(&self) -> Result<String, GatewayError>;
}

pub struct StsIdentityService {
    client: StsClient,
}

impl StsIdentityService {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: StsClient::new(sdk_config),
        }
    }
}

#[async_trait]
impl IdentityService for StsIdentityService {
    async fn caller_account_id(&self) -> Result<String, GatewayError> {
        let output = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| GatewayError::IdentityService(describe_sdk_error("GetCallerIdentity", &e)))?;

        output.account().map(str::to_owned).ok_or_else(|| {
            GatewayError::IdentityService("caller identity did not include an account id".to_string())
        })
    }
}
