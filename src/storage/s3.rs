use super::traits::{ObjectStore, StoreLocation};
use crate::error::{NovaError, Result, StoreError};
use async_trait::async_trait;
use aws_sdk_s3::{error::ProvideErrorMetadata, Client};
use std::path::Path;

#[derive(Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn head(&self, location: &StoreLocation, key: &str) -> std::result::Result<(), StoreError> {
        match self
            .client
            .head_object()
            .bucket(&location.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(e) => match e.as_service_error() {
                Some(service_error) if service_error.is_not_found() => {
                    Err(StoreError::NotFound(format!("s3://{}/{}", location.bucket, key)))
                }
                Some(service_error) => Err(StoreError::Other(format!(
                    "{} - {}",
                    service_error.code().unwrap_or("unknown"),
                    service_error.message().unwrap_or("no message")
                ))),
                None => Err(StoreError::Other(format!("AWS SDK error: {}", e))),
            },
        }
    }

    async fn download(&self, location: &StoreLocation, key: &str, dest: &Path) -> Result<u64> {
        let response = self
            .client
            .get_object()
            .bucket(&location.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| match e.as_service_error() {
                Some(service_error) => NovaError::StorageError(format!(
                    "{} - {}",
                    service_error.code().unwrap_or("unknown"),
                    service_error.message().unwrap_or("no message")
                )),
                None => NovaError::AwsError(format!("AWS SDK error: {}", e)),
            })?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| NovaError::StorageError(e.to_string()))?
            .into_bytes();

        tokio::fs::write(dest, &bytes).await?;
        Ok(bytes.len() as u64)
    }
}
