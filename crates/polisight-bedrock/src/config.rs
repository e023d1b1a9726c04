//! AWS SDK configuration loading.

pub const DEFAULT_REGION: &str = "us-east-1";

/// Load SDK config for the given region using the default credential chain.
pub async fn load_sdk_config(region: &str) -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await
}
