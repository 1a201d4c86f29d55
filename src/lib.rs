//! nova-studio: interactive Amazon Bedrock Nova Canvas and Nova Reel workflows.
//!
//! Images come back inline from `InvokeModel`. Videos are submitted with
//! `StartAsyncInvoke`, and the resulting `output.mp4` is polled for in S3.

pub mod bedrock;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod media;
pub mod models;
pub mod storage;

pub use bedrock::{ImageClient, ModelRuntime, NovaClient, VideoClient};
pub use cli::{Studio, Workflow, WorkflowOutcome};
pub use config::{BedrockConfig, StudioConfig};
pub use error::{NovaError, Result, StoreError};
pub use models::*;
pub use storage::{ArtifactPoller, ObjectStore, PollReport, StoreLocation};
