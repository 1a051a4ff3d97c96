//! Study plan builder
//!
//! Runs the allocator, then decorates each allocation with a Pomodoro length
//! and study tips from the advisor.

use eyre::Result;
use tracing::{debug, info};

use crate::advice::{self, Advisor};
use crate::allocator::allocate;
use crate::domain::SubjectRequest;
use crate::plan::{PlanEntry, StudyPlan, validate_pomodoro};
use crate::prompts::PromptLoader;

pub struct StudyPlanner {
    prompts: PromptLoader,
    default_pomodoro_minutes: u32,
}

impl StudyPlanner {
    pub fn new(prompts: PromptLoader, default_pomodoro_minutes: u32) -> Result<Self> {
        validate_pomodoro(default_pomodoro_minutes)?;
        Ok(Self {
            prompts,
            default_pomodoro_minutes,
        })
    }

    pub fn prompts(&self) -> &PromptLoader {
        &self.prompts
    }

    /// Build a plan for `requests` sharing `total_hours`
    ///
    /// Validation failures surface as [`crate::ValidationError`] inside the
    /// returned report.
    pub fn build(&self, requests: &[SubjectRequest], total_hours: f64, advisor: &dyn Advisor) -> Result<StudyPlan> {
        debug!(count = requests.len(), total_hours, advisor = advisor.name(), "StudyPlanner::build: called");
        let allocations = allocate(requests, total_hours)?;

        let mut entries = Vec::with_capacity(allocations.len());
        for allocation in allocations {
            let prompt = self.prompts.study_tips_prompt(&allocation)?;
            let tips = advice::study_tips(advisor, &prompt);
            entries.push(PlanEntry::new(allocation, self.default_pomodoro_minutes, tips));
        }

        info!(subjects = entries.len(), total_hours, "Study plan generated");
        Ok(StudyPlan::new(total_hours, entries))
    }

    /// Break suggestion for after a Pomodoro on `subject`
    pub fn break_suggestion(&self, subject: &str, minutes: u32, advisor: &dyn Advisor) -> Result<String> {
        let prompt = self.prompts.break_prompt(subject, minutes)?;
        Ok(advice::break_suggestion(advisor, &prompt))
    }
}
