use crate::{
    bedrock::runtime::ModelRuntime,
    error::{NovaError, Result},
    logger,
    models::{CanvasRequest, CanvasResponse},
};
use std::sync::Arc;

/// Synchronous Nova Canvas invocations; results come back inline.
#[derive(Clone)]
pub struct ImageClient {
    runtime: Arc<dyn ModelRuntime>,
    model_id: String,
}

impl ImageClient {
    pub fn new(runtime: Arc<dyn ModelRuntime>, model_id: impl Into<String>) -> Self {
        Self {
            runtime,
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// All images in the response. An empty vector means the service
    /// produced nothing, which callers report rather than fail on. A response
    /// carrying an `error` counts as nothing even if images came with it.
    pub async fn generate(&self, request: &CanvasRequest) -> Result<Vec<String>> {
        let request_json = serde_json::to_string_pretty(request)
            .map_err(|e| NovaError::SerializationError(e.to_string()))?;

        log::info!(
            "Invoking {} with task {} ({} image(s) requested)",
            self.model_id,
            request.task_type(),
            request.generation_config().number_of_images
        );

        let response_bytes = {
            let _timer = logger::timer(request.task_type());
            self.runtime
                .invoke_model(&self.model_id, request_json.into_bytes())
                .await?
        };

        let response_str = String::from_utf8(response_bytes)
            .map_err(|e| NovaError::ResponseError(e.to_string()))?;
        let response: CanvasResponse = serde_json::from_str(&response_str)
            .map_err(|e| NovaError::ResponseError(e.to_string()))?;

        if let Some(error) = &response.error {
            log::warn!("Service reported: {}", error);
            return Ok(Vec::new());
        }

        let images = response.images.unwrap_or_default();
        log::debug!("Response carried {} image(s)", images.len());
        Ok(images)
    }

    /// First image only, or `None` when the response had none.
    pub async fn generate_one(&self, request: &CanvasRequest) -> Result<Option<String>> {
        Ok(self.generate(request).await?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageGenerationConfig, TextToImageParams};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedRuntime {
        response: &'static str,
        seen: Mutex<Vec<(String, serde_json::Value)>>,
    }

    #[async_trait]
    impl ModelRuntime for CannedRuntime {
        async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>> {
            let value = serde_json::from_slice(&body).unwrap();
            self.seen.lock().unwrap().push((model_id.to_string(), value));
            Ok(self.response.as_bytes().to_vec())
        }

        async fn start_async_invoke(
            &self,
            _model_id: &str,
            _model_input: serde_json::Value,
            _output_s3_uri: &str,
            _client_token: &str,
        ) -> Result<String> {
            unreachable!("image client never submits async jobs")
        }
    }

    fn text_request() -> CanvasRequest {
        CanvasRequest::TextImage {
            text_to_image_params: TextToImageParams {
                text: "a red fox".into(),
                style: None,
            },
            image_generation_config: ImageGenerationConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_first_image_returned() {
        let runtime = Arc::new(CannedRuntime {
            response: r#"{"images": ["Zmlyc3Q=", "c2Vjb25k"]}"#,
            seen: Mutex::new(vec![]),
        });
        let client = ImageClient::new(runtime.clone(), "amazon.nova-canvas-v1:0");

        let image = client.generate_one(&text_request()).await.unwrap();
        assert_eq!(image.as_deref(), Some("Zmlyc3Q="));

        let seen = runtime.seen.lock().unwrap();
        assert_eq!(seen[0].0, "amazon.nova-canvas-v1:0");
        assert_eq!(seen[0].1["taskType"], "TEXT_IMAGE");
    }

    #[tokio::test]
    async fn test_missing_or_empty_images_is_no_result() {
        for body in [
            r#"{"images": []}"#,
            "{}",
            r#"{"error": "filtered"}"#,
            r#"{"images": ["aGk="], "error": "content filtered"}"#,
        ] {
            let runtime = Arc::new(CannedRuntime {
                response: body,
                seen: Mutex::new(vec![]),
            });
            let client = ImageClient::new(runtime, "amazon.nova-canvas-v1:0");
            assert!(client.generate_one(&text_request()).await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn test_malformed_response_is_an_error() {
        let runtime = Arc::new(CannedRuntime {
            response: "not json",
            seen: Mutex::new(vec![]),
        });
        let client = ImageClient::new(runtime, "amazon.nova-canvas-v1:0");
        let err = client.generate(&text_request()).await.unwrap_err();
        assert!(matches!(err, NovaError::ResponseError(_)));
    }
}
