pub mod image_client;
pub mod runtime;
pub mod video_client;

use crate::{
    config::{BedrockConfig, StudioConfig},
    error::Result,
    storage::{ObjectStore, S3Store},
};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_bedrockruntime::Client;
use std::sync::Arc;

pub use image_client::ImageClient;
pub use runtime::{BedrockRuntime, ModelRuntime};
pub use video_client::VideoClient;

/// Every remote handle a run needs, built once and passed down.
#[derive(Clone)]
pub struct NovaClient {
    image_client: ImageClient,
    video_client: VideoClient,
    store: Arc<dyn ObjectStore>,
}

impl NovaClient {
    pub async fn new(config: &StudioConfig) -> Result<Self> {
        let sdk_config = load_sdk_config(&config.bedrock).await;

        let runtime: Arc<dyn ModelRuntime> =
            Arc::new(BedrockRuntime::new(Client::new(&sdk_config)));
        let store: Arc<dyn ObjectStore> =
            Arc::new(S3Store::new(aws_sdk_s3::Client::new(&sdk_config)));

        Ok(Self::from_parts(runtime, store, config))
    }

    /// Assemble from already-built handles.
    pub fn from_parts(
        runtime: Arc<dyn ModelRuntime>,
        store: Arc<dyn ObjectStore>,
        config: &StudioConfig,
    ) -> Self {
        Self {
            image_client: ImageClient::new(runtime.clone(), config.canvas_model_id.clone()),
            video_client: VideoClient::new(runtime, config.reel_model_id.clone()),
            store,
        }
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn video(&self) -> &VideoClient {
        &self.video_client
    }

    pub fn store(&self) -> Arc<dyn ObjectStore> {
        self.store.clone()
    }
}

async fn load_sdk_config(bedrock_config: &BedrockConfig) -> SdkConfig {
    let region = Region::new(bedrock_config.region_or_default());
    let loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

    if let (Some(access_key), Some(secret_key)) =
        (&bedrock_config.access_key, &bedrock_config.secret_key)
    {
        log::debug!("Using explicit AWS credentials");
        loader
            .credentials_provider(aws_sdk_bedrockruntime::config::Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                "nova-studio",
            ))
            .load()
            .await
    } else {
        log::debug!("Using the default AWS credential chain");
        loader.load().await
    }
}
