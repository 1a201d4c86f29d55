use crate::{
    bedrock::runtime::ModelRuntime,
    error::{NovaError, Result},
    models::{JobHandle, ReelRequest},
};
use std::sync::Arc;
use uuid::Uuid;

/// Asynchronous Nova Reel submissions. Returns as soon as the job is accepted.
#[derive(Clone)]
pub struct VideoClient {
    runtime: Arc<dyn ModelRuntime>,
    model_id: String,
}

impl VideoClient {
    pub fn new(runtime: Arc<dyn ModelRuntime>, model_id: impl Into<String>) -> Self {
        Self {
            runtime,
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub async fn submit(&self, request: &ReelRequest, output_s3_uri: &str) -> Result<JobHandle> {
        let model_input = serde_json::to_value(request)
            .map_err(|e| NovaError::SerializationError(e.to_string()))?;
        let client_token = Uuid::new_v4().to_string();

        log::info!(
            "Submitting {} job to {} (output: {})",
            request.task_type(),
            self.model_id,
            output_s3_uri
        );
        log::debug!("Client request token: {}", client_token);

        let invocation_arn = self
            .runtime
            .start_async_invoke(&self.model_id, model_input, output_s3_uri, &client_token)
            .await?;

        let handle = JobHandle::new(invocation_arn);
        log::info!(
            "Job accepted: {} (job id {})",
            handle.invocation_arn(),
            handle.job_id()
        );
        Ok(handle)
    }
}
