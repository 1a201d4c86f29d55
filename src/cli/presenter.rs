//! User-facing terminal output.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy)]
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    pub fn banner(&self, title: &str) {
        println!("{}", title.bold());
        println!("{}", "=".repeat(40));
    }

    pub fn heading(&self, message: &str) {
        println!("\n{}", message.cyan().bold());
    }

    pub fn field(&self, label: &str, value: &str) {
        println!("{}: {}", label.bright_black(), value);
    }

    pub fn file_field(&self, label: &str, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.field(label, &name);
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✅".green(), message);
    }

    pub fn failure(&self, message: &str) {
        println!("{} {}", "❌".red(), message);
    }

    pub fn saved(&self, path: &Path, opened: bool) {
        println!("\nSaved as: {}", path.display().to_string().bold());
        if opened {
            println!("🖼️  Opened for viewing!");
        }
    }

    pub fn spinner(&self, message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                .template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }
}
