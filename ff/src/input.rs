//! Raw planner input
//!
//! Form data as a user enters it: every field is text until validated.
//! Validation turns it into typed [`SubjectRequest`]s and an hours budget.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::allocator::validate_hours;
use crate::domain::SubjectRequest;
use crate::error::ValidationError;

/// Default upper bound on subjects per plan
pub const DEFAULT_MAX_SUBJECTS: usize = 20;

/// One unvalidated subject row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub subject: String,
    #[serde(default = "default_priority_text")]
    pub priority: String,
}

fn default_priority_text() -> String {
    crate::domain::Priority::default().to_string()
}

impl SubjectEntry {
    pub fn new(subject: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            priority: priority.into(),
        }
    }
}

/// Plan file layout
///
/// ```yaml
/// total-hours: 8
/// subjects:
///   - subject: Math
///     priority: High
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(rename = "total-hours", default)]
    pub total_hours: Option<f64>,

    #[serde(default)]
    pub subjects: Vec<SubjectEntry>,
}

impl PlanFile {
    pub fn from_yaml(content: &str) -> eyre::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Unvalidated planner form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanInput {
    pub subjects: Vec<SubjectEntry>,
    pub total_hours: String,
}

impl PlanInput {
    pub fn new(subjects: Vec<SubjectEntry>, total_hours: impl Into<String>) -> Self {
        Self {
            subjects,
            total_hours: total_hours.into(),
        }
    }

    /// Validate every field, returning typed requests and the hours budget
    ///
    /// Checks run in form order: subject names, subject count, hours, then
    /// priorities. The first failure is returned.
    pub fn validate(&self, max_subjects: usize) -> Result<(Vec<SubjectRequest>, f64), ValidationError> {
        debug!(count = self.subjects.len(), total_hours = %self.total_hours, "PlanInput::validate: called");

        if self.subjects.is_empty() || self.subjects.iter().any(|e| e.subject.is_empty()) {
            return Err(ValidationError::MissingSubject);
        }
        if self.subjects.len() > max_subjects {
            return Err(ValidationError::TooManySubjects {
                count: self.subjects.len(),
                max: max_subjects,
            });
        }

        let total_hours = parse_hours(&self.total_hours)?;

        let requests = self
            .subjects
            .iter()
            .map(|e| SubjectRequest::parse(&e.subject, &e.priority))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = requests.len(), total_hours, "PlanInput::validate: ok");
        Ok((requests, total_hours))
    }
}

/// Parse a total-hours field; must be a finite number above zero
pub fn parse_hours(text: &str) -> Result<f64, ValidationError> {
    let hours: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidDuration(text.to_string()))?;
    validate_hours(hours).map_err(|_| ValidationError::InvalidDuration(text.to_string()))?;
    Ok(hours)
}
