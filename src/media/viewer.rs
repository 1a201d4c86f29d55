use crate::error::{NovaError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

pub trait Viewer: Send + Sync {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Hands the file to the platform's default application.
pub struct SystemViewer;

impl SystemViewer {
    fn command(path: &Path) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> Result<()> {
        let status = Self::command(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(NovaError::Io(std::io::Error::other(format!(
                "viewer exited with {}",
                status
            ))))
        }
    }
}
