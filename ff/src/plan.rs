//! Study plan session state
//!
//! A `StudyPlan` is owned by whoever drives the UI. It holds the allocations
//! plus the per-subject settings a user changes while studying: Pomodoro
//! length and a completed flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::allocator::AllocationResult;
use crate::error::ValidationError;

/// Default Pomodoro length in minutes
pub const DEFAULT_POMODORO_MINUTES: u32 = 25;
pub const MIN_POMODORO_MINUTES: u32 = 5;
pub const MAX_POMODORO_MINUTES: u32 = 60;
pub const POMODORO_STEP_MINUTES: u32 = 5;

/// Check a Pomodoro length: 5 to 60 minutes in steps of 5
pub fn validate_pomodoro(minutes: u32) -> Result<(), ValidationError> {
    if (MIN_POMODORO_MINUTES..=MAX_POMODORO_MINUTES).contains(&minutes) && minutes % POMODORO_STEP_MINUTES == 0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidPomodoro(minutes))
    }
}

/// One subject row of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub allocation: AllocationResult,
    pub pomodoro_minutes: u32,
    pub completed: bool,
    pub study_tips: String,
}

impl PlanEntry {
    pub fn new(allocation: AllocationResult, pomodoro_minutes: u32, study_tips: String) -> Self {
        Self {
            allocation,
            pomodoro_minutes,
            completed: false,
            study_tips,
        }
    }

    pub fn subject(&self) -> &str {
        &self.allocation.subject
    }
}

/// A generated study plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub total_hours: f64,
    pub generated_at: DateTime<Utc>,
    entries: Vec<PlanEntry>,
}

impl StudyPlan {
    pub fn new(total_hours: f64, entries: Vec<PlanEntry>) -> Self {
        Self {
            total_hours,
            generated_at: Utc::now(),
            entries,
        }
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PlanEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut PlanEntry, ValidationError> {
        self.entries.get_mut(index).ok_or(ValidationError::NoSuchEntry(index))
    }

    pub fn set_pomodoro_minutes(&mut self, index: usize, minutes: u32) -> Result<(), ValidationError> {
        debug!(index, minutes, "StudyPlan::set_pomodoro_minutes: called");
        validate_pomodoro(minutes)?;
        self.entry_mut(index)?.pomodoro_minutes = minutes;
        Ok(())
    }

    pub fn set_completed(&mut self, index: usize, completed: bool) -> Result<(), ValidationError> {
        debug!(index, completed, "StudyPlan::set_completed: called");
        self.entry_mut(index)?.completed = completed;
        Ok(())
    }

    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.completed).count()
    }

    /// True once every subject is marked completed
    pub fn is_finished(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|e| e.completed)
    }

    /// Sum of displayed allocations, in minutes
    pub fn allocated_minutes_total(&self) -> u64 {
        self.entries.iter().map(|e| e.allocation.total_minutes()).sum()
    }

    /// Whole minutes of the budget lost to truncation
    pub fn unallocated_minutes(&self) -> u64 {
        let budget = (self.total_hours * 60.0).floor() as u64;
        budget.saturating_sub(self.allocated_minutes_total())
    }
}
