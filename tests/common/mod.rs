//! Test doubles shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use nova_studio::{
    cli::{Prompter, Studio},
    media::{encoding, Viewer},
    ModelRuntime, NovaClient, NovaError, ObjectStore, StoreError, StoreLocation, StudioConfig,
    WorkflowOutcome,
};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_ARN: &str = "arn:aws:bedrock:us-east-1:000000000000:async-invoke/job77";

/// Bedrock runtime that answers from canned JSON and records every call.
pub struct FakeRuntime {
    pub image_response: String,
    pub invocations: Mutex<Vec<(String, serde_json::Value)>>,
    pub submissions: Mutex<Vec<(String, serde_json::Value, String)>>,
}

impl FakeRuntime {
    pub fn with_images(images: &[&str]) -> Self {
        let encoded: Vec<String> = images
            .iter()
            .map(|image| encoding::encode_bytes(image.as_bytes()))
            .collect();
        Self::with_response(serde_json::json!({ "images": encoded }).to_string())
    }

    pub fn with_response(body: impl Into<String>) -> Self {
        Self {
            image_response: body.into(),
            invocations: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn last_body(&self) -> serde_json::Value {
        self.invocations
            .lock()
            .unwrap()
            .last()
            .map(|(_, body)| body.clone())
            .expect("model was never invoked")
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelRuntime for FakeRuntime {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> nova_studio::Result<Vec<u8>> {
        let value = serde_json::from_slice(&body).expect("request body is JSON");
        self.invocations
            .lock()
            .unwrap()
            .push((model_id.to_string(), value));
        Ok(self.image_response.clone().into_bytes())
    }

    async fn start_async_invoke(
        &self,
        model_id: &str,
        model_input: serde_json::Value,
        output_s3_uri: &str,
        _client_token: &str,
    ) -> nova_studio::Result<String> {
        self.submissions.lock().unwrap().push((
            model_id.to_string(),
            model_input,
            output_s3_uri.to_string(),
        ));
        Ok(TEST_ARN.to_string())
    }
}

/// Object store that reports "not found" a fixed number of times, then the object.
pub struct FakeStore {
    pub ready_after: u32,
    pub fail_on_check: Option<u32>,
    pub payload: Vec<u8>,
    pub download_delay: Option<Duration>,
    pub heads: Mutex<Vec<String>>,
}

impl FakeStore {
    pub fn ready_after(not_found: u32) -> Self {
        Self {
            ready_after: not_found,
            fail_on_check: None,
            payload: b"fake mp4 bytes".to_vec(),
            download_delay: None,
            heads: Mutex::new(Vec::new()),
        }
    }

    pub fn never_ready() -> Self {
        Self::ready_after(u32::MAX)
    }

    pub fn failing_on(mut self, check: u32) -> Self {
        self.fail_on_check = Some(check);
        self
    }

    pub fn slow_download(mut self, delay: Duration) -> Self {
        self.download_delay = Some(delay);
        self
    }

    pub fn head_count(&self) -> usize {
        self.heads.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for FakeStore {
    async fn head(&self, location: &StoreLocation, key: &str) -> Result<(), StoreError> {
        let mut heads = self.heads.lock().unwrap();
        heads.push(format!("{}/{}", location.bucket, key));
        let check = heads.len() as u32;

        if self.fail_on_check == Some(check) {
            return Err(StoreError::Other("AccessDenied - Access Denied".to_string()));
        }
        if check <= self.ready_after {
            Err(StoreError::NotFound(key.to_string()))
        } else {
            Ok(())
        }
    }

    async fn download(
        &self,
        _location: &StoreLocation,
        _key: &str,
        dest: &Path,
    ) -> nova_studio::Result<u64> {
        if let Some(delay) = self.download_delay {
            tokio::time::sleep(delay).await;
        }
        std::fs::write(dest, &self.payload).map_err(NovaError::from)?;
        Ok(self.payload.len() as u64)
    }
}

/// Records every path it is asked to open; optionally fails each time.
#[derive(Default)]
pub struct RecordingViewer {
    pub opened: Mutex<Vec<PathBuf>>,
    pub broken: bool,
}

impl RecordingViewer {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }
}

impl Viewer for RecordingViewer {
    fn open(&self, path: &Path) -> nova_studio::Result<()> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        if self.broken {
            return Err(NovaError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "xdg-open: no such file or directory",
            )));
        }
        Ok(())
    }
}

pub enum Answer {
    Text(String),
    Pick(usize),
}

pub fn text(answer: impl Into<String>) -> Answer {
    Answer::Text(answer.into())
}

pub fn pick(index: usize) -> Answer {
    Answer::Pick(index)
}

pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            prompts: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, prompt: &str) -> nova_studio::Result<String> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Answer::Text(answer)) => Ok(answer),
            _ => panic!("unexpected text prompt: {}", prompt),
        }
    }

    fn select(&mut self, prompt: &str, _items: &[&str]) -> nova_studio::Result<usize> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Answer::Pick(index)) => Ok(index),
            _ => panic!("unexpected menu prompt: {}", prompt),
        }
    }
}

pub struct Harness {
    pub studio: Studio,
    pub runtime: Arc<FakeRuntime>,
    pub store: Arc<FakeStore>,
    pub viewer: Arc<RecordingViewer>,
    pub dir: tempfile::TempDir,
}

impl Harness {
    pub fn new(runtime: FakeRuntime, store: FakeStore) -> Self {
        Self::with_config(runtime, store, |config| config)
    }

    pub fn with_config(
        runtime: FakeRuntime,
        store: FakeStore,
        adjust: impl FnOnce(StudioConfig) -> StudioConfig,
    ) -> Self {
        Self::build(runtime, store, RecordingViewer::default(), adjust)
    }

    pub fn with_broken_viewer(runtime: FakeRuntime, store: FakeStore) -> Self {
        Self::build(runtime, store, RecordingViewer::broken(), |config| config)
    }

    fn build(
        runtime: FakeRuntime,
        store: FakeStore,
        viewer: RecordingViewer,
        adjust: impl FnOnce(StudioConfig) -> StudioConfig,
    ) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = adjust(StudioConfig::new().with_output_dir(dir.path().join("out")));

        let runtime = Arc::new(runtime);
        let store = Arc::new(store);
        let viewer = Arc::new(viewer);
        let client = NovaClient::from_parts(runtime.clone(), store.clone(), &config);
        let studio = Studio::with_viewer(client, config, viewer.clone());

        Self {
            studio,
            runtime,
            store,
            viewer,
            dir,
        }
    }

    /// Write an input file into the temp dir and return its path as text.
    pub fn input_file(&self, name: &str, contents: &[u8]) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path.display().to_string()
    }

    pub fn output_files(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(self.dir.path().join("out")) {
            Ok(entries) => {
                let mut files: Vec<PathBuf> = entries.map(|e| e.unwrap().path()).collect();
                files.sort();
                files
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.viewer.opened.lock().unwrap().clone()
    }
}

pub fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

pub fn saved(outcome: WorkflowOutcome) -> Vec<PathBuf> {
    match outcome {
        WorkflowOutcome::Saved(paths) => paths,
        other => panic!("expected saved artifacts, got {:?}", other),
    }
}
