//! User interaction seam for confirmations and interactive field entry.

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use wsp_core::error::{Result, WspError};

/// Blocking prompts. Implementations other than the terminal one exist for
/// tests.
pub trait Prompter {
    /// Yes/no question. An empty answer counts as "no".
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Free text; an empty answer is returned as an empty string.
    fn input(&self, message: &str) -> Result<String>;
}

/// Terminal prompts through `dialoguer`.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| WspError::Prompt(e.to_string()))
    }

    fn input(&self, message: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map(|answer| answer.trim().to_string())
            .map_err(|e| WspError::Prompt(e.to_string()))
    }
}
