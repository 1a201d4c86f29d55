//! Input collection: prompts plus the validation applied to their answers.

use crate::{
    error::{NovaError, Result},
    models::MenuChoice,
};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::PathBuf;

/// Source of user answers. The terminal implementation uses `dialoguer`.
pub trait Prompter {
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }
}

/// A path that must name an existing file.
pub fn ask_existing_path(prompter: &mut dyn Prompter, prompt: &str, label: &str) -> Result<PathBuf> {
    let answer = prompter.text(prompt)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(NovaError::InputError(format!("{} image file not found!", label)));
    }

    let path = PathBuf::from(answer);
    if !path.exists() {
        return Err(NovaError::InputError(format!("{} image file not found!", label)));
    }
    Ok(path)
}

/// Like [`ask_existing_path`], but an empty answer means "none".
pub fn ask_optional_path(
    prompter: &mut dyn Prompter,
    prompt: &str,
    label: &str,
) -> Result<Option<PathBuf>> {
    let answer = prompter.text(prompt)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }

    let path = PathBuf::from(answer);
    if !path.exists() {
        return Err(NovaError::InputError(format!("{} image file not found!", label)));
    }
    Ok(Some(path))
}

pub fn ask_required_text(prompter: &mut dyn Prompter, prompt: &str) -> Result<String> {
    let answer = prompter.text(prompt)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(NovaError::InputError("Prompt cannot be empty!".to_string()));
    }
    Ok(answer.to_string())
}

pub fn ask_text_or(prompter: &mut dyn Prompter, prompt: &str, default: &str) -> Result<String> {
    let answer = prompter.text(prompt)?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Re-asks until the index falls inside the menu.
pub fn choose<T: MenuChoice>(prompter: &mut dyn Prompter, prompt: &str) -> Result<T> {
    let labels = T::labels();
    loop {
        let index = prompter.select(prompt, &labels)?;
        match T::from_index(index) {
            Some(choice) => return Ok(choice),
            None => log::warn!(
                "Invalid choice. Please enter a number between 1-{}.",
                labels.len()
            ),
        }
    }
}
