//! Orchestration: collect input, invoke the model, persist what comes back.

use super::{
    presenter::Presenter,
    prompt::{self, Prompter},
};
use crate::{
    bedrock::NovaClient,
    config::StudioConfig,
    error::{NovaError, Result},
    media::{encoding, ArtifactWriter, SystemViewer, Viewer},
    models::{
        CanvasRequest, GarmentClass, ImageFormat, ImageGenerationConfig, MaskShape, MenuChoice,
        ReelImage, ReelRequest, TextToImageParams, TextToVideoParams, VideoGenerationConfig,
        VirtualTryOnParams, VisualStyle,
    },
    storage::{ArtifactPoller, StoreLocation},
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub const ROOM_IMAGE_COUNT: u32 = 3;
pub const DEFAULT_ROOM_PROMPT: &str = "replace sofa";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    VirtualTryOn,
    RoomMakeover,
    StyledImage,
    TextToVideo,
}

impl MenuChoice for Workflow {
    const ALL: &'static [Self] = &[
        Workflow::VirtualTryOn,
        Workflow::RoomMakeover,
        Workflow::StyledImage,
        Workflow::TextToVideo,
    ];

    fn label(&self) -> &'static str {
        match self {
            Workflow::VirtualTryOn => "👗 Virtual try-on (person + garment)",
            Workflow::RoomMakeover => "🛋️  Room makeover (room + furniture)",
            Workflow::StyledImage => "🎨 Image from a prompt, in a visual style",
            Workflow::TextToVideo => "🎬 Video from a prompt (Nova Reel)",
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Workflow::VirtualTryOn => "virtual_tryon",
            Workflow::RoomMakeover => "room_makeover",
            Workflow::StyledImage => "styled_image",
            Workflow::TextToVideo => "text_to_video",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Artifacts written to disk.
    Saved(Vec<PathBuf>),
    /// The service answered without any result.
    NoResult,
    /// Stopped on something the user can fix or chose to stop.
    Aborted(String),
}

/// Everything a workflow needs, injected once per run.
pub struct Studio {
    client: NovaClient,
    writer: ArtifactWriter,
    config: StudioConfig,
    cancel: CancellationToken,
}

impl Studio {
    pub fn new(client: NovaClient, config: StudioConfig) -> Self {
        Self::with_viewer(client, config, Arc::new(SystemViewer))
    }

    /// The viewer is only used when `open_artifacts` is on.
    pub fn with_viewer(client: NovaClient, config: StudioConfig, viewer: Arc<dyn Viewer>) -> Self {
        let viewer = config.open_artifacts.then_some(viewer);
        Self {
            writer: ArtifactWriter::new(config.output_dir.clone(), viewer),
            client,
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Cancelling this token stops any video poll in progress.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Run one workflow. Expected-absent conditions become `Aborted`;
    /// anything unexpected is returned as an error.
    pub async fn run(
        &self,
        workflow: Workflow,
        prompter: &mut dyn Prompter,
        presenter: &Presenter,
    ) -> Result<WorkflowOutcome> {
        log::debug!("Running workflow {}", workflow.tag());

        let result = match workflow {
            Workflow::VirtualTryOn => self.virtual_try_on(prompter, presenter).await,
            Workflow::RoomMakeover => self.room_makeover(prompter, presenter).await,
            Workflow::StyledImage => self.styled_image(prompter, presenter).await,
            Workflow::TextToVideo => self.text_to_video(prompter, presenter).await,
        };

        match result {
            Ok(WorkflowOutcome::NoResult) => {
                presenter.failure("No result was generated");
                Ok(WorkflowOutcome::NoResult)
            }
            Ok(outcome) => Ok(outcome),
            Err(NovaError::InputError(msg)) => {
                presenter.failure(&msg);
                Ok(WorkflowOutcome::Aborted(msg))
            }
            Err(NovaError::Cancelled) => {
                presenter.failure("Cancelled while waiting for the video");
                Ok(WorkflowOutcome::Aborted(NovaError::Cancelled.to_string()))
            }
            Err(e @ NovaError::TimedOut(_)) => {
                presenter.failure(&e.to_string());
                Ok(WorkflowOutcome::Aborted(e.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    async fn virtual_try_on(
        &self,
        prompter: &mut dyn Prompter,
        presenter: &Presenter,
    ) -> Result<WorkflowOutcome> {
        let person = prompt::ask_existing_path(prompter, "Enter path to person image", "Person")?;
        let garment =
            prompt::ask_existing_path(prompter, "Enter path to garment image", "Garment")?;
        let class: GarmentClass = prompt::choose(prompter, "Select garment class")?;

        presenter.heading("Generating virtual try-on...");
        presenter.file_field("Person", &person);
        presenter.file_field("Garment", &garment);
        presenter.field("Class", class.tag());

        let request = CanvasRequest::VirtualTryOn {
            virtual_try_on_params: VirtualTryOnParams::garment(
                encoding::encode_file(&person)?,
                encoding::encode_file(&garment)?,
                class,
            ),
            image_generation_config: ImageGenerationConfig::default(),
        };

        self.generate_single(&request, "virtual_tryon", presenter)
            .await
    }

    async fn room_makeover(
        &self,
        prompter: &mut dyn Prompter,
        presenter: &Presenter,
    ) -> Result<WorkflowOutcome> {
        let room = prompt::ask_existing_path(prompter, "Enter path to room image", "Room")?;
        let furniture =
            prompt::ask_existing_path(prompter, "Enter path to furniture image", "Furniture")?;
        let instructions = prompt::ask_text_or(
            prompter,
            "Enter furniture change instructions (e.g. replace sofa)",
            DEFAULT_ROOM_PROMPT,
        )?;

        presenter.heading("Generating room makeover...");
        presenter.file_field("Room", &room);
        presenter.file_field("Furniture", &furniture);
        presenter.field("Instructions", &instructions);

        let request = CanvasRequest::VirtualTryOn {
            virtual_try_on_params: VirtualTryOnParams::prompt(
                encoding::encode_file(&room)?,
                encoding::encode_file(&furniture)?,
                instructions,
                MaskShape::Default,
            ),
            image_generation_config: ImageGenerationConfig::default()
                .with_images(ROOM_IMAGE_COUNT),
        };

        let spinner = presenter.spinner("Please wait...");
        let images = self.client.image().generate(&request).await;
        spinner.finish_and_clear();
        let images = images?;

        if images.is_empty() {
            return Ok(WorkflowOutcome::NoResult);
        }
        presenter.success(&format!("{} image(s) generated", images.len()));

        let mut paths = Vec::with_capacity(images.len());
        for (i, image) in images.iter().enumerate() {
            let path = self.writer.save_image("virtual_tryon", image, Some(i))?;
            let opened = self.writer.open(&path);
            presenter.saved(&path, opened);
            paths.push(path);
        }
        Ok(WorkflowOutcome::Saved(paths))
    }

    async fn styled_image(
        &self,
        prompter: &mut dyn Prompter,
        presenter: &Presenter,
    ) -> Result<WorkflowOutcome> {
        let text = prompt::ask_required_text(prompter, "Enter your image prompt")?;
        let style: VisualStyle = prompt::choose(prompter, "Select a visual style")?;

        presenter.heading(&format!("Generating image with prompt: '{}'", text));
        presenter.field("Visual style", style.tag());

        let request = CanvasRequest::TextImage {
            text_to_image_params: TextToImageParams {
                text,
                style: Some(style),
            },
            image_generation_config: ImageGenerationConfig::default()
                .with_size(1024, 1024)
                .with_cfg_scale(8.0)
                .with_seed(42),
        };

        self.generate_single(&request, "generated_image", presenter)
            .await
    }

    async fn generate_single(
        &self,
        request: &CanvasRequest,
        stem: &str,
        presenter: &Presenter,
    ) -> Result<WorkflowOutcome> {
        let spinner = presenter.spinner("Please wait...");
        let image = self.client.image().generate_one(request).await;
        spinner.finish_and_clear();

        let Some(image) = image? else {
            return Ok(WorkflowOutcome::NoResult);
        };
        presenter.success("Image generated successfully!");

        let path = self.writer.save_image(stem, &image, None)?;
        let opened = self.writer.open(&path);
        presenter.saved(&path, opened);
        Ok(WorkflowOutcome::Saved(vec![path]))
    }

    async fn text_to_video(
        &self,
        prompter: &mut dyn Prompter,
        presenter: &Presenter,
    ) -> Result<WorkflowOutcome> {
        let text = prompt::ask_required_text(prompter, "Enter your video prompt")?;
        let start_image = prompt::ask_optional_path(
            prompter,
            "Enter path to a starting image (leave empty for none)",
            "Starting",
        )?;
        let location = match &self.config.video_output_uri {
            Some(uri) => StoreLocation::parse(uri)?,
            None => {
                let uri = prompt::ask_required_text(
                    prompter,
                    "Enter S3 output location (s3://bucket/prefix)",
                )?;
                StoreLocation::parse(&uri).map_err(|e| NovaError::InputError(e.to_string()))?
            }
        };

        let images = match &start_image {
            Some(path) => {
                let format = ImageFormat::from_path(path).ok_or_else(|| {
                    NovaError::InputError("Starting image must be a PNG or JPEG file".to_string())
                })?;
                Some(vec![ReelImage::new(format, encoding::encode_file(path)?)])
            }
            None => None,
        };

        presenter.heading(&format!("Generating video with prompt: '{}'", text));
        if let Some(path) = &start_image {
            presenter.file_field("Starting image", path);
        }
        presenter.field("Output", &location.uri());

        let request = ReelRequest::new(
            TextToVideoParams { text, images },
            VideoGenerationConfig::default(),
        );
        let job = self.client.video().submit(&request, &location.uri()).await?;
        presenter.field("Job", job.job_id());

        std::fs::create_dir_all(self.writer.output_dir())?;
        let dest = self.writer.artifact_path("generated_video", None, "mp4");
        let poller = ArtifactPoller::new(self.client.store())
            .with_interval(self.config.poll_interval)
            .with_timeout(self.config.poll_timeout);

        let cancel = self.cancel.child_token();
        let interrupt = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    log::warn!("Interrupted, stopping the poll");
                    cancel.cancel();
                }
            })
        };
        let report = poller
            .wait_and_download(&location, &job, &dest, &cancel)
            .await;
        interrupt.abort();
        let report = report?;

        presenter.success(&format!(
            "Video ready after {} not-ready check(s)",
            report.not_found_checks
        ));
        let opened = self.writer.open(&report.path);
        presenter.saved(&report.path, opened);
        Ok(WorkflowOutcome::Saved(vec![report.path]))
    }
}
