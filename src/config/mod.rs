use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub topics_table_name: String,
    pub subscriptions_table_name: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Endpoint override for every AWS client, e.g. a LocalStack URL.
    #[serde(default)]
    pub aws_endpoint_url: Option<String>,
    #[serde(default)]
    pub aws_operation_timeout_ms: Option<u64>,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Reads the gateway configuration from the process environment.
    ///
    /// `TOPICS_TABLE_NAME` and `SUBSCRIPTIONS_TABLE_NAME` are required; the
    /// process must not start without them.
    pub fn from_env() -> anyhow::Result<Self> {
        let config: Config = ::config::Config::builder()
            .add_source(::config::Environment::default().try_parsing(true))
            .build()
            .context("failed to read configuration from environment")?
            .try_deserialize()
            .context("invalid configuration: TOPICS_TABLE_NAME and SUBSCRIPTIONS_TABLE_NAME must be set, PORT must be a valid port")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.topics_table_name.trim().is_empty() {
            anyhow::bail!("TOPICS_TABLE_NAME must not be empty");
        }
        if self.subscriptions_table_name.trim().is_empty() {
            anyhow::bail!("SUBSCRIPTIONS_TABLE_NAME must not be empty");
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
