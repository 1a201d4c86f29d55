use super::{encoding, viewer::Viewer};
use crate::error::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes generated artifacts under one directory and opens them.
/// Without a viewer nothing is ever opened.
#[derive(Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
    viewer: Option<Arc<dyn Viewer>>,
}

impl ArtifactWriter {
    pub fn new(output_dir: impl Into<PathBuf>, viewer: Option<Arc<dyn Viewer>>) -> Self {
        Self {
            output_dir: output_dir.into(),
            viewer,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<stem>_<timestamp>[_<index>].<ext>` under the output directory.
    pub fn artifact_path(&self, stem: &str, index: Option<usize>, extension: &str) -> PathBuf {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let filename = match index {
            Some(i) => format!("{}_{}_{}.{}", stem, timestamp, i, extension),
            None => format!("{}_{}.{}", stem, timestamp, extension),
        };
        self.output_dir.join(filename)
    }

    /// Decode a base64 image and write it. Nothing is written if decoding fails.
    pub fn save_image(&self, stem: &str, encoded: &str, index: Option<usize>) -> Result<PathBuf> {
        let bytes = encoding::decode(encoded)?;
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.artifact_path(stem, index, "png");
        std::fs::write(&path, bytes)?;
        log::info!("💾 Image saved to {}", path.display());
        Ok(path)
    }

    /// True only if a viewer actually opened the file. Failures are logged,
    /// never returned.
    pub fn open(&self, path: &Path) -> bool {
        let Some(viewer) = &self.viewer else {
            log::debug!("Not opening {}", path.display());
            return false;
        };
        match viewer.open(path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not open {}: {}", path.display(), e);
                false
            }
        }
    }
}
