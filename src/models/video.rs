use super::common::ImageFormat;
use serde::{Deserialize, Serialize};

pub const VIDEO_ARTIFACT_NAME: &str = "output.mp4";

/// Nova Reel text-to-video request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelRequest {
    task_type: &'static str,
    pub text_to_video_params: TextToVideoParams,
    pub video_generation_config: VideoGenerationConfig,
}

impl ReelRequest {
    pub fn new(params: TextToVideoParams, config: VideoGenerationConfig) -> Self {
        Self {
            task_type: "TEXT_VIDEO",
            text_to_video_params: params,
            video_generation_config: config,
        }
    }

    pub fn task_type(&self) -> &'static str {
        self.task_type
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextToVideoParams {
    pub text: String,
    /// Optional starting keyframe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ReelImage>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReelImage {
    pub format: ImageFormat,
    pub source: ReelImageSource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReelImageSource {
    pub bytes: String,
}

impl ReelImage {
    pub fn new(format: ImageFormat, encoded: String) -> Self {
        Self {
            format,
            source: ReelImageSource { bytes: encoded },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoGenerationConfig {
    pub duration_seconds: u32,
    pub fps: u32,
    pub dimension: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl Default for VideoGenerationConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 6,
            fps: 24,
            dimension: "1280x720".to_string(),
            seed: None,
        }
    }
}

impl VideoGenerationConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Opaque handle for an asynchronous generation job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    invocation_arn: String,
}

impl JobHandle {
    pub fn new(invocation_arn: impl Into<String>) -> Self {
        Self {
            invocation_arn: invocation_arn.into(),
        }
    }

    pub fn invocation_arn(&self) -> &str {
        &self.invocation_arn
    }

    /// Last path segment of the ARN; the service writes output under it.
    pub fn job_id(&self) -> &str {
        self.invocation_arn
            .rsplit('/')
            .next()
            .unwrap_or(&self.invocation_arn)
    }

    pub fn artifact_key(&self) -> String {
        format!("{}/{}", self.job_id(), VIDEO_ARTIFACT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_id_is_last_arn_segment() {
        let handle =
            JobHandle::new("arn:aws:bedrock:us-east-1:123456789012:async-invoke/abc123xyz");
        assert_eq!(handle.job_id(), "abc123xyz");
        assert_eq!(handle.artifact_key(), "abc123xyz/output.mp4");

        let bare = JobHandle::new("plain-id");
        assert_eq!(bare.job_id(), "plain-id");
    }

    #[test]
    fn test_reel_body() {
        let request = ReelRequest::new(
            TextToVideoParams {
                text: "waves at dusk".into(),
                images: Some(vec![ReelImage::new(ImageFormat::Png, "aW1n".into())]),
            },
            VideoGenerationConfig::default().with_seed(7),
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "taskType": "TEXT_VIDEO",
                "textToVideoParams": {
                    "text": "waves at dusk",
                    "images": [{"format": "png", "source": {"bytes": "aW1n"}}]
                },
                "videoGenerationConfig": {
                    "durationSeconds": 6,
                    "fps": 24,
                    "dimension": "1280x720",
                    "seed": 7
                }
            })
        );
    }
}
