//! Domain types for FocusFlow
//!
//! A study request is a subject name paired with a priority tier. Tiers map to
//! fixed integer weights that drive the time allocation.

mod priority;
mod subject;

pub use priority::{PRIORITY_WEIGHTS, Priority};
pub use subject::SubjectRequest;
