use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_CANVAS_MODEL: &str = "amazon.nova-canvas-v1:0";
pub const DEFAULT_REEL_MODEL: &str = "amazon.nova-reel-v1:0";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct BedrockConfig {
    pub region: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        BedrockConfig {
            region: None,
            access_key: None,
            secret_key: None,
        }
    }
}

impl BedrockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let region = env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .ok();
        let access_key = env::var("AWS_ACCESS_KEY_ID").ok();
        let secret_key = env::var("AWS_SECRET_ACCESS_KEY").ok();

        BedrockConfig {
            region,
            access_key,
            secret_key,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn region_or_default(&self) -> String {
        self.region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }
}

/// Settings shared by every workflow in a run.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub bedrock: BedrockConfig,
    pub output_dir: PathBuf,
    pub video_output_uri: Option<String>,
    pub poll_interval: Duration,
    pub poll_timeout: Option<Duration>,
    pub open_artifacts: bool,
    pub canvas_model_id: String,
    pub reel_model_id: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            bedrock: BedrockConfig::default(),
            output_dir: PathBuf::from("."),
            video_output_uri: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_timeout: None,
            open_artifacts: true,
            canvas_model_id: DEFAULT_CANVAS_MODEL.to_string(),
            reel_model_id: DEFAULT_REEL_MODEL.to_string(),
        }
    }
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();

        let output_dir = env::var("NOVA_OUTPUT_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let video_output_uri = env::var("NOVA_VIDEO_OUTPUT_URI")
            .ok()
            .filter(|uri| !uri.trim().is_empty());
        let poll_interval = env::var("NOVA_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.poll_interval);
        let poll_timeout = env::var("NOVA_POLL_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs);
        let open_artifacts = env::var("NOVA_OPEN_ARTIFACTS")
            .ok()
            .map_or(true, |val| val != "false" && val != "0");
        let canvas_model_id =
            env::var("NOVA_CANVAS_MODEL_ID").unwrap_or(defaults.canvas_model_id);
        let reel_model_id = env::var("NOVA_REEL_MODEL_ID").unwrap_or(defaults.reel_model_id);

        StudioConfig {
            bedrock: BedrockConfig::from_env(),
            output_dir,
            video_output_uri,
            poll_interval,
            poll_timeout,
            open_artifacts,
            canvas_model_id,
            reel_model_id,
        }
    }

    pub fn with_bedrock(mut self, config: BedrockConfig) -> Self {
        self.bedrock = config;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_video_output_uri(mut self, uri: impl Into<String>) -> Self {
        self.video_output_uri = Some(uri.into());
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = Some(timeout);
        self
    }

    pub fn with_open_artifacts(mut self, enabled: bool) -> Self {
        self.open_artifacts = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_script_behavior() {
        let config = StudioConfig::default();
        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert!(config.poll_timeout.is_none());
        assert!(config.open_artifacts);
        assert_eq!(config.canvas_model_id, "amazon.nova-canvas-v1:0");
        assert_eq!(config.reel_model_id, "amazon.nova-reel-v1:0");
        assert_eq!(config.bedrock.region_or_default(), "us-east-1");
    }

    #[test]
    fn test_builders() {
        let config = StudioConfig::new()
            .with_bedrock(BedrockConfig::new().with_region("eu-west-1"))
            .with_output_dir("/tmp/out")
            .with_poll_interval(Duration::from_secs(2))
            .with_poll_timeout(Duration::from_secs(60))
            .with_open_artifacts(false)
            .with_video_output_uri("s3://bucket/reels");

        assert_eq!(config.bedrock.region_or_default(), "eu-west-1");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.poll_timeout, Some(Duration::from_secs(60)));
        assert!(!config.open_artifacts);
        assert_eq!(config.video_output_uri.as_deref(), Some("s3://bucket/reels"));
    }
}
