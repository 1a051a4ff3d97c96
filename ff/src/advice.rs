//! Text-generation collaborator
//!
//! Study tips and break suggestions come from an external text generator.
//! This module only defines the seam and the fallback texts; no generator
//! backend ships with FocusFlow, so the default is [`OfflineAdvisor`].

use thiserror::Error;
use tracing::{debug, warn};

/// Shown in place of study tips when no generator is available
pub const TIPS_UNAVAILABLE: &str = "AI study tips unavailable. Please check your configuration.";

/// Shown after a Pomodoro when no break suggestion could be generated
pub const DEFAULT_BREAK: &str = "Take a quick 5-minute break before continuing.";

/// Errors from a text generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdviceError {
    #[error("advice unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Failed(String),
}

/// Produces free-text advice for a prompt
pub trait Advisor {
    fn name(&self) -> &str;

    fn advise(&self, prompt: &str) -> Result<String, AdviceError>;
}

/// Advisor used when no generator is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAdvisor;

impl Advisor for OfflineAdvisor {
    fn name(&self) -> &str {
        "offline"
    }

    fn advise(&self, _prompt: &str) -> Result<String, AdviceError> {
        Err(AdviceError::Unavailable("no text generator configured".to_string()))
    }
}

/// Ask for study tips, substituting the fallback text on any failure
pub fn study_tips(advisor: &dyn Advisor, prompt: &str) -> String {
    debug!(advisor = advisor.name(), "study_tips: called");
    match advisor.advise(prompt) {
        Ok(tips) => tips,
        Err(AdviceError::Unavailable(reason)) => {
            debug!(%reason, "study_tips: advisor unavailable");
            TIPS_UNAVAILABLE.to_string()
        }
        Err(e) => {
            warn!(advisor = advisor.name(), error = %e, "Study tip generation failed");
            format!("Could not generate AI tips: {}", e)
        }
    }
}

/// Ask for a break suggestion, falling back to the default break text
pub fn break_suggestion(advisor: &dyn Advisor, prompt: &str) -> String {
    debug!(advisor = advisor.name(), "break_suggestion: called");
    match advisor.advise(prompt) {
        Ok(suggestion) => suggestion,
        Err(e) => {
            debug!(error = %e, "break_suggestion: using default");
            DEFAULT_BREAK.to_string()
        }
    }
}
