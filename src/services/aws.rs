use std::time::Duration;

use aws_config::{timeout::TimeoutConfig, BehaviorVersion, SdkConfig};
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::config::Config;

/// Loads the shared SDK configuration used by every AWS client.
pub async fn load_sdk_config(config: &Config) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(endpoint) = &config.aws_endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    if let Some(timeout_ms) = config.aws_operation_timeout_ms {
        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_millis(timeout_ms))
            .build();
        loader = loader.timeout_config(timeout_config);
    }

    loader.load().await
}

/// Renders an SDK failure as a stable message. Service errors carrying a code
/// and message use the `An error occurred (Code) when calling the Op operation: msg`
/// form; anything else (dispatch, timeout, parse) falls back to the full error chain.
pub(crate) fn describe_sdk_error<E, R>(operation: &str, err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let metadata = err
        .as_service_error()
        .and_then(|service_err| Some((service_err.code()?, service_err.message()?)));

    match metadata {
        Some((code, message)) => format!(
            "An error occurred ({code}) when calling the {operation} operation: {message}"
        ),
        None => format!(
            "Error calling the {operation} operation: {}",
            DisplayErrorContext(err)
        ),
    }
}
