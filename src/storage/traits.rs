use crate::error::{NovaError, Result, StoreError};
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// `Ok` when the object exists. `StoreError::NotFound` is the only retryable signal.
    async fn head(&self, location: &StoreLocation, key: &str) -> std::result::Result<(), StoreError>;

    async fn download(&self, location: &StoreLocation, key: &str, dest: &Path) -> Result<u64>;
}

/// A bucket plus optional key prefix, parsed from `s3://bucket[/prefix]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    pub bucket: String,
    pub prefix: String,
}

impl StoreLocation {
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri.trim().strip_prefix("s3://").ok_or_else(|| {
            NovaError::ConfigError(format!("expected an s3://bucket[/prefix] URI, got '{}'", uri))
        })?;

        let (bucket, prefix) = match rest.split_once('/') {
            Some((bucket, prefix)) => (bucket, prefix.trim_matches('/')),
            None => (rest, ""),
        };

        if bucket.is_empty() {
            return Err(NovaError::ConfigError(format!("missing bucket in '{}'", uri)));
        }

        Ok(Self {
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
        })
    }

    pub fn key_for(&self, relative: &str) -> String {
        if self.prefix.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{}", self.prefix, relative)
        }
    }

    pub fn uri(&self) -> String {
        if self.prefix.is_empty() {
            format!("s3://{}", self.bucket)
        } else {
            format!("s3://{}/{}", self.bucket, self.prefix)
        }
    }
}
