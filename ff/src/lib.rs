//! FocusFlow - priority-weighted study planner
//!
//! Splits a daily study budget across subjects by priority weight
//! (High=3, Medium=2, Low=1), truncating each share to whole hours and
//! minutes, and wraps the result in a plan with Pomodoro timers and
//! study-tip prompts.
//!
//! # Example
//!
//! ```
//! use focusflow::{Priority, SubjectRequest, allocate};
//!
//! let plan = allocate(
//!     &[
//!         SubjectRequest::new("Math", Priority::High),
//!         SubjectRequest::new("Art", Priority::Medium),
//!         SubjectRequest::new("Music", Priority::Low),
//!     ],
//!     7.0,
//! )
//! .unwrap();
//!
//! let labels: Vec<_> = plan.iter().map(|a| a.formatted_label.as_str()).collect();
//! assert_eq!(labels, ["3hr 30min", "2hr 19min", "1hr 9min"]);
//! ```
//!
//! # Modules
//!
//! - [`allocator`] - Priority-weighted time allocation
//! - [`input`] - Raw form input and validation
//! - [`plan`] - Study plan session state
//! - [`planner`] - Plan builder tying allocation, prompts and advice together
//! - [`advice`] - Text-generation seam and fallback texts
//! - [`prompts`] - Handlebars prompt templates
//! - [`timer`] - Pomodoro countdown
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod advice;
pub mod allocator;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod plan;
pub mod planner;
pub mod prompts;
pub mod render;
pub mod timer;

// Re-export commonly used types
pub use advice::{AdviceError, Advisor, OfflineAdvisor};
pub use allocator::{AllocationResult, allocate, format_label};
pub use config::Config;
pub use domain::{PRIORITY_WEIGHTS, Priority, SubjectRequest};
pub use error::ValidationError;
pub use input::{PlanInput, SubjectEntry, parse_hours};
pub use plan::{PlanEntry, StudyPlan};
pub use planner::StudyPlanner;
pub use prompts::PromptLoader;
pub use timer::{Countdown, TimerEvent, format_clock, run_countdown};
