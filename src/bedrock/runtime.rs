use crate::error::{NovaError, Result};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::{
    error::{ProvideErrorMetadata, SdkError},
    primitives::Blob,
    types::{AsyncInvokeOutputDataConfig, AsyncInvokeS3OutputDataConfig},
    Client,
};
use aws_smithy_types::{Document, Number};
use std::collections::HashMap;

/// The two Bedrock runtime calls the studio makes.
#[async_trait]
pub trait ModelRuntime: Send + Sync {
    /// Synchronous invocation: JSON body in, JSON body out.
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>>;

    /// Submit an asynchronous job writing under `output_s3_uri`; returns the invocation ARN.
    async fn start_async_invoke(
        &self,
        model_id: &str,
        model_input: serde_json::Value,
        output_s3_uri: &str,
        client_token: &str,
    ) -> Result<String>;
}

#[derive(Clone)]
pub struct BedrockRuntime {
    client: Client,
}

impl BedrockRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn map_sdk_error<E, R>(operation: &str, e: SdkError<E, R>) -> NovaError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    log::debug!("AWS SDK {} error details: {:?}", operation, e);

    if let Some(service_error) = e.as_service_error() {
        log::error!("Service error code: {:?}", service_error.code());
        log::error!("Service error message: {:?}", service_error.message());
        NovaError::AwsServiceError(format!(
            "Bedrock service error: {} - {}",
            service_error.code().unwrap_or("unknown"),
            service_error.message().unwrap_or("no message")
        ))
    } else {
        NovaError::AwsError(format!("AWS SDK error: {}", e))
    }
}

#[async_trait]
impl ModelRuntime for BedrockRuntime {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        let response = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| map_sdk_error("InvokeModel", e))?;

        Ok(response.body.into_inner())
    }

    async fn start_async_invoke(
        &self,
        model_id: &str,
        model_input: serde_json::Value,
        output_s3_uri: &str,
        client_token: &str,
    ) -> Result<String> {
        let s3_output = AsyncInvokeS3OutputDataConfig::builder()
            .s3_uri(output_s3_uri)
            .build()
            .map_err(|e| NovaError::RequestError(e.to_string()))?;

        let response = self
            .client
            .start_async_invoke()
            .model_id(model_id)
            .client_request_token(client_token)
            .model_input(json_to_document(model_input))
            .output_data_config(AsyncInvokeOutputDataConfig::S3OutputDataConfig(s3_output))
            .send()
            .await
            .map_err(|e| map_sdk_error("StartAsyncInvoke", e))?;

        Ok(response.invocation_arn().to_string())
    }
}

/// The SDK takes async model input as a smithy `Document`, not raw JSON.
pub fn json_to_document(value: serde_json::Value) -> Document {
    match value {
        serde_json::Value::Null => Document::Null,
        serde_json::Value::Bool(b) => Document::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Document::Number(Number::PosInt(u))
            } else if let Some(i) = n.as_i64() {
                Document::Number(Number::NegInt(i))
            } else {
                Document::Number(Number::Float(n.as_f64().unwrap_or_default()))
            }
        }
        serde_json::Value::String(s) => Document::String(s),
        serde_json::Value::Array(items) => {
            Document::Array(items.into_iter().map(json_to_document).collect())
        }
        serde_json::Value::Object(map) => Document::Object(
            map.into_iter()
                .map(|(k, v)| (k, json_to_document(v)))
                .collect::<HashMap<_, _>>(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_to_document() {
        let doc = json_to_document(json!({
            "text": "waves",
            "fps": 24,
            "offset": -3,
            "scale": 6.5,
            "images": [null, true]
        }));

        let Document::Object(map) = doc else {
            panic!("expected object");
        };
        assert_eq!(map["text"], Document::String("waves".into()));
        assert_eq!(map["fps"], Document::Number(Number::PosInt(24)));
        assert_eq!(map["offset"], Document::Number(Number::NegInt(-3)));
        assert_eq!(map["scale"], Document::Number(Number::Float(6.5)));
        assert_eq!(
            map["images"],
            Document::Array(vec![Document::Null, Document::Bool(true)])
        );
    }
}
