//! Prompt Loader
//!
//! Loads prompt templates from an override directory or falls back to
//! embedded defaults.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;
use crate::allocator::AllocationResult;

/// Variables for the `study-tips` template
#[derive(Debug, Clone, Serialize)]
pub struct TipsContext {
    pub subject: String,
    pub priority: String,
    pub hours: u64,
    pub minutes: u8,
    pub label: String,
}

impl From<&AllocationResult> for TipsContext {
    fn from(allocation: &AllocationResult) -> Self {
        Self {
            subject: allocation.subject.clone(),
            priority: allocation.priority.to_string(),
            hours: allocation.allocated_hours,
            minutes: allocation.allocated_minutes,
            label: allocation.formatted_label.clone(),
        }
    }
}

/// Variables for the `break` template
#[derive(Debug, Clone, Serialize)]
pub struct BreakContext {
    pub subject: String,
    pub minutes: u32,
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory
    override_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a loader, using `override_dir` only if it exists
    pub fn new(override_dir: Option<&Path>) -> Self {
        debug!(?override_dir, "PromptLoader::new: called");
        let override_dir = override_dir.filter(|dir| dir.is_dir()).map(Path::to_path_buf);
        if override_dir.is_none() {
            debug!("PromptLoader::new: no override directory, embedded prompts only");
        }

        Self {
            hbs: plain_text_engine(),
            override_dir,
        }
    }

    /// Create a loader that only uses embedded prompts
    pub fn embedded_only() -> Self {
        Self {
            hbs: plain_text_engine(),
            override_dir: None,
        }
    }

    /// Load a template by name
    ///
    /// Checks `{override_dir}/{name}.pmt` first, then the embedded prompts.
    pub fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "PromptLoader::load_template: called");
        if let Some(ref dir) = self.override_dir {
            let path = dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read prompt {}: {}", path.display(), e));
            }
        }

        embedded::get_embedded(name)
            .map(str::to_string)
            .ok_or_else(|| eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with any serializable context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        debug!(%template_name, "PromptLoader::render: called");
        let template = self.load_template(template_name)?;
        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }

    /// Study tips prompt for one allocation
    pub fn study_tips_prompt(&self, allocation: &AllocationResult) -> Result<String> {
        self.render("study-tips", &TipsContext::from(allocation))
    }

    /// Break suggestion prompt after a Pomodoro on `subject`
    pub fn break_prompt(&self, subject: &str, minutes: u32) -> Result<String> {
        self.render(
            "break",
            &BreakContext {
                subject: subject.to_string(),
                minutes,
            },
        )
    }
}

// Prompts are plain text, so no HTML escaping of subject names.
fn plain_text_engine() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(handlebars::no_escape);
    hbs
}
