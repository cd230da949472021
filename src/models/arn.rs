/// Fixed prefix of every SNS resource address.
pub const TOPIC_ARN_SCHEME: &str = "arn:aws:sns";

/// Builds the address SNS assigns to a topic, so existing topics can be
/// addressed by name alone.
pub fn topic_arn(region: &str, account_id: &str, topic_name: &str) -> String {
    format!("{TOPIC_ARN_SCHEME}:{region}:{account_id}:{topic_name}")
}
